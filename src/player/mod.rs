//! Модуль взаимодействия со встроенным плеером
//!
//! Узкий интерфейс к внешней поверхности воспроизведения: отправка команд
//! и рукопожатия в одну сторону, без подтверждений. Входящие уведомления
//! доставляются отдельным каналом и обрабатываются синхронизатором
//! (см. [`crate::sync::PlaybackSynchronizer`]).

pub mod protocol;
pub mod youtube;

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{Result, SyncError};
use protocol::{CommandMessage, ListeningMessage};

/// Интерфейс внешней поверхности воспроизведения
///
/// Все сообщения отправляются без подтверждения и без повторов; сверка
/// отображаемого состояния с реальным происходит только через входящие
/// уведомления плеера.
#[async_trait]
pub trait PlayerSurface: Send + Sync {
    /// Отправить команду плееру
    async fn send_command(&self, message: CommandMessage) -> Result<()>;

    /// Отправить рукопожатие "listening"
    async fn send_listening(&self, message: ListeningMessage) -> Result<()>;
}

/// Поверхность, сериализующая сообщения в исходящий канал
///
/// Оболочка (webview) вычитывает канал и доставляет строки встроенному
/// плееру как postMessage.
pub struct ChannelPlayerSurface {
    sender: mpsc::Sender<String>,
}

impl ChannelPlayerSurface {
    /// Создать поверхность поверх исходящего канала
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self { sender }
    }

    async fn post(&self, payload: String) -> Result<()> {
        self.sender
            .send(payload)
            .await
            .map_err(|e| SyncError::SurfaceSend(e.to_string()))
    }
}

#[async_trait]
impl PlayerSurface for ChannelPlayerSurface {
    async fn send_command(&self, message: CommandMessage) -> Result<()> {
        self.post(serde_json::to_string(&message)?).await
    }

    async fn send_listening(&self, message: ListeningMessage) -> Result<()> {
        self.post(serde_json::to_string(&message)?).await
    }
}

/// Поверхность, сохраняющая отправленные сообщения в памяти
///
/// Используется в тестах и для отладки вместо реального встроенного плеера.
#[derive(Default)]
pub struct MemoryPlayerSurface {
    commands: Mutex<Vec<CommandMessage>>,
    handshakes: Mutex<Vec<ListeningMessage>>,
}

impl MemoryPlayerSurface {
    /// Создать пустую поверхность
    pub fn new() -> Self {
        Self::default()
    }

    /// Отправленные команды в порядке отправки
    pub fn commands(&self) -> Vec<CommandMessage> {
        self.commands.lock().unwrap().clone()
    }

    /// Отправленные рукопожатия в порядке отправки
    pub fn handshakes(&self) -> Vec<ListeningMessage> {
        self.handshakes.lock().unwrap().clone()
    }

    /// Очистить историю сообщений
    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
        self.handshakes.lock().unwrap().clear();
    }
}

#[async_trait]
impl PlayerSurface for MemoryPlayerSurface {
    async fn send_command(&self, message: CommandMessage) -> Result<()> {
        self.commands.lock().unwrap().push(message);
        Ok(())
    }

    async fn send_listening(&self, message: ListeningMessage) -> Result<()> {
        self.handshakes.lock().unwrap().push(message);
        Ok(())
    }
}
