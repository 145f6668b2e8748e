//! Модуль протокола обмена сообщениями со встроенным плеером
//!
//! Описывает форматы исходящих команд, рукопожатия "listening" и входящих
//! уведомлений "infoDelivery" о состоянии воспроизведения.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Код состояния плеера, означающий воспроизведение
pub const PLAYER_STATE_PLAYING: i64 = 1;

/// Абстрактная команда плееру
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Начать воспроизведение
    Play,
    /// Поставить на паузу
    Pause,
    /// Перемотать на абсолютную позицию
    SeekTo {
        /// Позиция в секундах
        seconds: f64,
        /// Разрешить перемотку за пределы буферизованной области
        allow_seek_ahead: bool,
    },
    /// Установить скорость воспроизведения
    SetPlaybackRate {
        /// Множитель скорости; допустимые значения определяет плеер
        rate: f64,
    },
}

impl PlayerCommand {
    /// Имя функции плеера для этой команды
    pub fn func(&self) -> &'static str {
        match self {
            Self::Play => "playVideo",
            Self::Pause => "pauseVideo",
            Self::SeekTo { .. } => "seekTo",
            Self::SetPlaybackRate { .. } => "setPlaybackRate",
        }
    }

    /// Аргументы вызова в формате плеера
    pub fn args(&self) -> Vec<Value> {
        match self {
            Self::Play | Self::Pause => Vec::new(),
            Self::SeekTo {
                seconds,
                allow_seek_ahead,
            } => vec![json!(seconds), json!(allow_seek_ahead)],
            Self::SetPlaybackRate { rate } => vec![json!(rate)],
        }
    }
}

/// Исходящее сообщение-команда плееру
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandMessage {
    /// Тип сообщения, всегда "command"
    pub event: String,
    /// Имя вызываемой функции плеера
    pub func: String,
    /// Аргументы функции
    pub args: Vec<Value>,
}

impl From<PlayerCommand> for CommandMessage {
    fn from(command: PlayerCommand) -> Self {
        Self {
            event: "command".to_string(),
            func: command.func().to_string(),
            args: command.args(),
        }
    }
}

/// Сообщение-рукопожатие, после которого плеер начинает слать уведомления
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListeningMessage {
    /// Тип сообщения, всегда "listening"
    pub event: String,
    /// Идентификатор плеера
    pub id: String,
}

impl ListeningMessage {
    /// Создать рукопожатие для плеера с указанным идентификатором
    pub fn new(player_id: &str) -> Self {
        Self {
            event: "listening".to_string(),
            id: player_id.to_string(),
        }
    }
}

/// Распознанная часть входящего уведомления о состоянии
///
/// Любое непустое подмножество полей может присутствовать в одном
/// уведомлении; отсутствующие поля не несут информации.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InfoDelivery {
    /// Текущая позиция воспроизведения в секундах
    #[serde(rename = "currentTime")]
    pub current_time: Option<f64>,
    /// Общая длительность медиа в секундах
    pub duration: Option<f64>,
    /// Числовой код состояния плеера (1 — воспроизведение)
    #[serde(rename = "playerState")]
    pub player_state: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawNotification {
    event: Option<String>,
    info: Option<InfoDelivery>,
}

/// Разобрать входящее уведомление плеера
///
/// Возвращает `None` для неразборчивых сообщений, сообщений с другим
/// `event` и сообщений без блока `info` — такие сообщения игнорируются.
pub fn parse_notification(payload: &str) -> Option<InfoDelivery> {
    let raw: RawNotification = serde_json::from_str(payload).ok()?;
    if raw.event.as_deref() != Some("infoDelivery") {
        return None;
    }
    raw.info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_message_shapes() {
        let play: CommandMessage = PlayerCommand::Play.into();
        assert_eq!(play.event, "command");
        assert_eq!(play.func, "playVideo");
        assert!(play.args.is_empty());

        let pause: CommandMessage = PlayerCommand::Pause.into();
        assert_eq!(pause.func, "pauseVideo");

        let seek: CommandMessage = PlayerCommand::SeekTo {
            seconds: 12.5,
            allow_seek_ahead: true,
        }
        .into();
        assert_eq!(seek.func, "seekTo");
        assert_eq!(seek.args, vec![json!(12.5), json!(true)]);

        let rate: CommandMessage = PlayerCommand::SetPlaybackRate { rate: 1.5 }.into();
        assert_eq!(rate.func, "setPlaybackRate");
        assert_eq!(rate.args, vec![json!(1.5)]);
    }

    #[test]
    fn test_command_message_wire_format() {
        let seek: CommandMessage = PlayerCommand::SeekTo {
            seconds: 7.0,
            allow_seek_ahead: true,
        }
        .into();
        let wire = serde_json::to_value(&seek).unwrap();
        assert_eq!(
            wire,
            json!({"event": "command", "func": "seekTo", "args": [7.0, true]})
        );
    }

    #[test]
    fn test_listening_message_wire_format() {
        let handshake = ListeningMessage::new("ytplayer");
        let wire = serde_json::to_value(&handshake).unwrap();
        assert_eq!(wire, json!({"event": "listening", "id": "ytplayer"}));
    }

    #[test]
    fn test_parse_full_notification() {
        let info = parse_notification(
            r#"{"event": "infoDelivery", "info": {"currentTime": 12.5, "duration": 60.0, "playerState": 1}}"#,
        )
        .unwrap();
        assert_eq!(info.current_time, Some(12.5));
        assert_eq!(info.duration, Some(60.0));
        assert_eq!(info.player_state, Some(1));
    }

    #[test]
    fn test_parse_partial_notification() {
        let info =
            parse_notification(r#"{"event": "infoDelivery", "info": {"currentTime": 3.0}}"#)
                .unwrap();
        assert_eq!(info.current_time, Some(3.0));
        assert_eq!(info.duration, None);
        assert_eq!(info.player_state, None);
    }

    #[test]
    fn test_parse_rejects_other_events() {
        assert!(parse_notification(r#"{"event": "onReady", "info": {}}"#).is_none());
        assert!(parse_notification(r#"{"info": {"currentTime": 1.0}}"#).is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        assert!(parse_notification("not json at all").is_none());
        assert!(parse_notification(r#"{"event": "infoDelivery"}"#).is_none());
    }
}
