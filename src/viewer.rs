//! Модуль состояния просмотра транскрипта
//!
//! Явный контейнер состояния поверх синхронизатора: хранилище сегментов,
//! бюджет группировки, курсор навигации и производный список групп.
//! Список групп пересчитывается при каждом изменении входных данных,
//! курсор при этом сбрасывается на первую группу.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::player::PlayerSurface;
use crate::sync::{PlaybackState, PlaybackSynchronizer, SurfaceMessage};
use crate::transcript::grouping::{Group, group};
use crate::transcript::{Segment, SegmentStore};

/// Контейнер состояния просмотра транскрипта
///
/// Связывает список групп с внешним плеером: выбор группы ведёт к
/// перемотке на её начало, а позиция воспроизведения подсвечивает
/// активные группы. Обратной связи позиция → курсор нет: курсор не
/// следит за тем, в какой группе сейчас находится воспроизведение.
pub struct TranscriptViewer {
    store: SegmentStore,
    max_group_duration: f64,
    selected_group_index: usize,
    groups: Vec<Group>,
    synchronizer: Arc<PlaybackSynchronizer>,
    listener_token: CancellationToken,
}

impl TranscriptViewer {
    /// Создать контейнер поверх поверхности воспроизведения
    pub fn new(config: SyncConfig, surface: Arc<dyn PlayerSurface>) -> Self {
        let max_group_duration = config.default_max_group_duration;
        let synchronizer = Arc::new(PlaybackSynchronizer::new(config, surface));
        Self {
            store: SegmentStore::new(),
            max_group_duration,
            selected_group_index: 0,
            groups: Vec::new(),
            synchronizer,
            listener_token: CancellationToken::new(),
        }
    }

    /// Загрузить транскрипт нового источника
    ///
    /// Хранилище заменяется целиком, группы пересчитываются, курсор
    /// сбрасывается на первую группу.
    pub fn load_transcript(&mut self, source_id: impl Into<String>, segments: Vec<Segment>) {
        let source_id = source_id.into();
        info!(
            "Loading transcript for {} ({} segments)",
            source_id,
            segments.len()
        );
        self.store.replace(source_id, segments);
        self.regroup();
    }

    /// Сбросить транскрипт (источник не загрузился)
    ///
    /// Группировка и синхронизация продолжают работать с пустыми данными.
    pub fn clear_transcript(&mut self) {
        self.store.clear();
        self.regroup();
    }

    /// Установить бюджет длительности группы
    ///
    /// Любое изменение бюджета обесценивает все группы: список
    /// пересчитывается, курсор сбрасывается на первую группу.
    pub fn set_max_group_duration(&mut self, max_group_duration: f64) {
        debug!("Grouping budget changed to {}", max_group_duration);
        self.max_group_duration = max_group_duration;
        self.regroup();
    }

    fn regroup(&mut self) {
        self.groups = group(self.store.segments(), self.max_group_duration);
        self.selected_group_index = 0;
    }

    /// Выбрать группу и перемотать плеер на её начало
    ///
    /// Для существующего индекса отправляется ровно одна абсолютная
    /// перемотка; индекс вне диапазона ничего не делает.
    pub async fn select_group(&mut self, index: usize) -> Result<()> {
        let Some(selected) = self.groups.get(index) else {
            warn!("Ignoring selection of missing group {}", index);
            return Ok(());
        };
        self.selected_group_index = index;
        self.synchronizer.seek_absolute(selected.start).await
    }

    /// Перейти к следующей группе
    pub async fn select_next(&mut self) -> Result<()> {
        self.select_group(self.selected_group_index + 1).await
    }

    /// Перейти к предыдущей группе
    pub async fn select_previous(&mut self) -> Result<()> {
        if self.selected_group_index == 0 {
            return Ok(());
        }
        self.select_group(self.selected_group_index - 1).await
    }

    /// Номера групп, активных относительно текущей позиции воспроизведения
    pub fn active_group_numbers(&self) -> Vec<usize> {
        self.groups
            .iter()
            .filter(|g| self.synchronizer.is_group_active(g))
            .map(|g| g.group_number)
            .collect()
    }

    /// Текущий список групп
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Индекс выбранной группы
    pub fn selected_group_index(&self) -> usize {
        self.selected_group_index
    }

    /// Текущий бюджет длительности группы
    pub fn max_group_duration(&self) -> f64 {
        self.max_group_duration
    }

    /// Хранилище сегментов текущего цикла загрузки
    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    /// Зеркало состояния воспроизведения
    pub fn playback_state(&self) -> PlaybackState {
        self.synchronizer.playback_state()
    }

    /// Синхронизатор воспроизведения
    pub fn synchronizer(&self) -> &Arc<PlaybackSynchronizer> {
        &self.synchronizer
    }

    /// Запустить слушатель входящих сообщений поверхности
    ///
    /// Слушатель живёт до [`Self::shutdown`] или закрытия канала.
    pub fn start_listener(&self, receiver: mpsc::Receiver<SurfaceMessage>) -> JoinHandle<()> {
        self.synchronizer
            .spawn_listener(receiver, self.listener_token.clone())
    }

    /// Остановить слушатель входящих сообщений
    pub fn shutdown(&self) {
        info!("Shutting down transcript viewer");
        self.listener_token.cancel();
    }
}

impl Drop for TranscriptViewer {
    fn drop(&mut self) {
        // Слушатель не должен переживать контейнер
        self.listener_token.cancel();
    }
}
