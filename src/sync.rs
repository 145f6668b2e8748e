//! Модуль синхронизации воспроизведения
//!
//! Этот модуль поддерживает локальное зеркало состояния внешнего плеера,
//! принимает его асинхронные уведомления и отправляет команды
//! воспроизведения. Команды уходят без подтверждения; отображаемое
//! состояние согласуется с реальным только через очередное уведомление.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::player::PlayerSurface;
use crate::player::protocol::{
    CommandMessage, ListeningMessage, PLAYER_STATE_PLAYING, PlayerCommand, parse_notification,
};
use crate::transcript::grouping::Group;

/// Локальное зеркало состояния внешнего плеера
///
/// Это наблюдаемое, а не принадлежащее состояние: истинное состояние живёт
/// внутри плеера, зеркало может отставать и обновляется по частям.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Текущая позиция воспроизведения в секундах
    pub current_time: f64,
    /// Общая длительность медиа в секундах (0, пока неизвестна)
    pub duration: f64,
    /// Воспроизводится ли медиа по последнему уведомлению
    pub is_playing: bool,
}

/// Входящее сообщение от поверхности воспроизведения
#[derive(Debug, Clone)]
pub struct SurfaceMessage {
    /// Origin отправителя
    pub origin: String,
    /// Сырое тело сообщения (JSON)
    pub payload: String,
}

impl SurfaceMessage {
    /// Создать входящее сообщение
    pub fn new(origin: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            payload: payload.into(),
        }
    }
}

/// Синхронизатор воспроизведения
///
/// Транслирует абстрактные команды в протокол плеера и сводит входящие
/// уведомления в [`PlaybackState`] для подсветки активной группы.
pub struct PlaybackSynchronizer {
    config: SyncConfig,
    surface: Arc<dyn PlayerSurface>,
    state: Mutex<PlaybackState>,
    handshake_sent: AtomicBool,
}

impl PlaybackSynchronizer {
    /// Создать синхронизатор поверх поверхности воспроизведения
    pub fn new(config: SyncConfig, surface: Arc<dyn PlayerSurface>) -> Self {
        Self {
            config,
            surface,
            state: Mutex::new(PlaybackState::default()),
            handshake_sent: AtomicBool::new(false),
        }
    }

    /// Текущее зеркало состояния воспроизведения
    pub fn playback_state(&self) -> PlaybackState {
        *self.state.lock().unwrap()
    }

    /// Переключить воспроизведение/паузу по последнему известному состоянию
    ///
    /// Уведомление может быть в пути, и переключение может на мгновение
    /// промахнуться; следующее уведомление выравнивает зеркало.
    pub async fn play_pause(&self) -> Result<()> {
        let command = if self.playback_state().is_playing {
            PlayerCommand::Pause
        } else {
            PlayerCommand::Play
        };
        self.send(command).await
    }

    /// Перемотать на `delta` секунд относительно текущей позиции
    ///
    /// Цель ограничивается отрезком [0, duration]. Пока длительность
    /// неизвестна (0), перемотка вперёд упирается в 0 — это известная
    /// гонка на старте, специально не обрабатывается.
    pub async fn seek_relative(&self, delta: f64) -> Result<()> {
        let state = self.playback_state();
        let target = (state.current_time + delta)
            .max(0.0)
            .min(state.duration.max(0.0));
        self.seek_absolute(target).await
    }

    /// Перемотать на абсолютную позицию без ограничения
    pub async fn seek_absolute(&self, seconds: f64) -> Result<()> {
        self.send(PlayerCommand::SeekTo {
            seconds,
            allow_seek_ahead: self.config.allow_seek_ahead,
        })
        .await
    }

    /// Установить скорость воспроизведения
    ///
    /// Множитель не проверяется: допустимые значения определяет плеер.
    pub async fn set_rate(&self, rate: f64) -> Result<()> {
        self.send(PlayerCommand::SetPlaybackRate { rate }).await
    }

    async fn send(&self, command: PlayerCommand) -> Result<()> {
        debug!("Sending player command: {}", command.func());
        self.surface.send_command(CommandMessage::from(command)).await
    }

    /// Отправить рукопожатие "listening" после загрузки поверхности
    ///
    /// Отправляется ровно один раз за загрузку поверхности; повторные
    /// вызовы до [`Self::reset_surface`] ничего не делают.
    pub async fn surface_loaded(&self) -> Result<()> {
        if self.handshake_sent.swap(true, Ordering::SeqCst) {
            debug!("Listening handshake already sent for this surface load");
            return Ok(());
        }
        info!("Player surface loaded, sending listening handshake");
        self.surface
            .send_listening(ListeningMessage::new(&self.config.player_id))
            .await
    }

    /// Подготовить синхронизатор к новой загрузке поверхности
    ///
    /// Перевзводит рукопожатие и сбрасывает зеркало состояния.
    pub fn reset_surface(&self) {
        self.handshake_sent.store(false, Ordering::SeqCst);
        *self.state.lock().unwrap() = PlaybackState::default();
        debug!("Playback synchronizer reset for a new surface load");
    }

    /// Обработать входящее сообщение от поверхности
    ///
    /// Сообщения с недоверенного origin отбрасываются до разбора.
    /// Неразборчивые и нераспознанные сообщения отбрасываются молча,
    /// без прерывания слушателя.
    pub fn handle_message(&self, message: &SurfaceMessage) {
        if message.origin != self.config.player_origin {
            warn!("Dropping message from untrusted origin: {}", message.origin);
            return;
        }
        match parse_notification(&message.payload) {
            Some(info) => {
                let mut state = self.state.lock().unwrap();
                // Сводим по полям: присутствующие перезаписываются,
                // отсутствующие не трогаются
                if let Some(current_time) = info.current_time {
                    state.current_time = current_time;
                }
                if let Some(duration) = info.duration {
                    state.duration = duration;
                }
                if let Some(code) = info.player_state {
                    state.is_playing = code == PLAYER_STATE_PLAYING;
                }
            }
            None => debug!("Ignoring unrecognized player message"),
        }
    }

    /// Активна ли группа: её начало в пределах окна от текущей позиции
    ///
    /// Эвристика близости, а не проверка вхождения в интервал: активных
    /// групп может не быть вовсе, а при плотном расположении — несколько.
    pub fn is_group_active(&self, group: &Group) -> bool {
        let current_time = self.playback_state().current_time;
        (current_time - group.start).abs() < self.config.active_window
    }

    /// Запустить задачу-слушатель входящих сообщений поверхности
    ///
    /// Сообщения обрабатываются строго в порядке прихода. Задача
    /// завершается при закрытии канала или отмене токена; выход
    /// логируется на каждом пути.
    pub fn spawn_listener(
        self: &Arc<Self>,
        mut receiver: mpsc::Receiver<SurfaceMessage>,
        token: CancellationToken,
    ) -> JoinHandle<()> {
        let synchronizer = Arc::clone(self);
        tokio::spawn(async move {
            info!("Player notification listener started");
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        info!("Player notification listener cancelled");
                        break;
                    }
                    message = receiver.recv() => {
                        match message {
                            Some(message) => synchronizer.handle_message(&message),
                            None => {
                                info!("Player surface channel closed, stopping listener");
                                break;
                            }
                        }
                    }
                }
            }
        })
    }
}
