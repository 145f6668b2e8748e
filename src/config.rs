//! Модуль конфигурации библиотеки transcript-sync
//!
//! Этот модуль содержит настройки взаимодействия со встроенным плеером
//! и параметры группировки транскрипта по умолчанию.

use serde::{Deserialize, Serialize};

/// Доверенный origin встроенного плеера по умолчанию
pub const DEFAULT_PLAYER_ORIGIN: &str = "https://www.youtube.com";

/// Идентификатор плеера в рукопожатии по умолчанию
pub const DEFAULT_PLAYER_ID: &str = "ytplayer";

/// Окно активности группы по умолчанию, в секундах
pub const DEFAULT_ACTIVE_WINDOW: f64 = 2.0;

/// Конфигурация библиотеки transcript-sync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Доверенный origin, с которого принимаются уведомления плеера.
    /// Сообщения с любого другого origin отбрасываются до разбора.
    pub player_origin: String,
    /// Идентификатор плеера, передаваемый в рукопожатии "listening"
    pub player_id: String,
    /// Окно (в секундах), внутри которого группа считается активной
    /// относительно текущей позиции воспроизведения
    pub active_window: f64,
    /// Передавать ли allowSeekAhead при перемотке
    pub allow_seek_ahead: bool,
    /// Бюджет длительности группы по умолчанию (0 — каждый сегмент отдельно)
    pub default_max_group_duration: f64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            player_origin: DEFAULT_PLAYER_ORIGIN.to_string(),
            player_id: DEFAULT_PLAYER_ID.to_string(),
            active_window: DEFAULT_ACTIVE_WINDOW,
            allow_seek_ahead: true,
            default_max_group_duration: 0.0,
        }
    }
}

impl SyncConfig {
    /// Создать конфигурацию с другим доверенным origin
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            player_origin: origin.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SyncConfig::default();
        assert_eq!(config.player_origin, DEFAULT_PLAYER_ORIGIN);
        assert_eq!(config.player_id, "ytplayer");
        assert_eq!(config.active_window, 2.0);
        assert!(config.allow_seek_ahead);
        assert_eq!(config.default_max_group_duration, 0.0);
    }

    #[test]
    fn test_with_origin() {
        let config = SyncConfig::with_origin("https://player.example");
        assert_eq!(config.player_origin, "https://player.example");
        assert_eq!(config.player_id, "ytplayer");
    }
}
