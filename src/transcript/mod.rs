//! Модуль транскрипта
//!
//! Этот модуль содержит типы сегментов транскрипта и хранилище,
//! заполняемое целиком один раз за цикл загрузки.

pub mod grouping;
pub mod loader;

use serde::{Deserialize, Serialize};

/// Один сегмент транскрипта с временной меткой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Время начала сегмента в секундах от начала медиа
    pub start: f64,
    /// Длительность сегмента в секундах (0, если источник её не указал)
    #[serde(default)]
    pub duration: f64,
    /// Текст сегмента
    pub text: String,
}

impl Segment {
    /// Создать новый сегмент
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }
}

/// Хранилище сегментов одного цикла загрузки транскрипта
///
/// Заполняется целиком при смене источника и заменяется целиком при
/// следующей загрузке; инкрементальных изменений нет. Сегменты
/// упорядочены по позиции в источнике.
#[derive(Debug, Default, Clone)]
pub struct SegmentStore {
    source_id: Option<String>,
    segments: Vec<Segment>,
}

impl SegmentStore {
    /// Создать пустое хранилище
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменить содержимое хранилища целиком для нового источника
    pub fn replace(&mut self, source_id: impl Into<String>, segments: Vec<Segment>) {
        self.source_id = Some(source_id.into());
        self.segments = segments;
    }

    /// Сбросить хранилище (источник не загрузился, данных нет)
    pub fn clear(&mut self) {
        self.source_id = None;
        self.segments.clear();
    }

    /// Идентификатор источника текущего цикла загрузки
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Сегменты текущего цикла загрузки
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Количество сегментов
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Пусто ли хранилище
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
