//! Модуль обработки ошибок библиотеки transcript-sync
//!
//! Этот модуль содержит типы ошибок, которые могут возникнуть при работе библиотеки.

use thiserror::Error;

/// Ошибки библиотеки transcript-sync
#[derive(Debug, Error)]
pub enum SyncError {
    /// Не удалось извлечь идентификатор видео из источника
    #[error("Could not extract video id from: {0}")]
    UnresolvableSource(String),

    /// Ошибка загрузки транскрипта
    #[error("Transcript load error: {0}")]
    TranscriptLoad(String),

    /// Ошибка отправки сообщения поверхности воспроизведения
    #[error("Player surface send error: {0}")]
    SurfaceSend(String),

    /// Ошибка HTTP запроса
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ошибка ввода-вывода
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Прочая ошибка
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Результат операции библиотеки
pub type Result<T> = std::result::Result<T, SyncError>;
