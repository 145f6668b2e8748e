//! Библиотека transcript-sync: группировка транскрипта и синхронизация
//! воспроизведения со встроенным плеером
//!
//! Библиотека принимает упорядоченную последовательность сегментов
//! транскрипта с временными метками, разбивает её на группы под бюджет
//! длительности и связывает полученный список с внешним плеером:
//! выбор группы ведёт к перемотке, а уведомления плеера о позиции
//! подсвечивают активную группу.

pub mod config;
pub mod error;
pub mod player;
pub mod sync;
pub mod transcript;
pub mod utils;
pub mod viewer;

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use player::protocol::{CommandMessage, InfoDelivery, ListeningMessage, PlayerCommand};
pub use player::{ChannelPlayerSurface, MemoryPlayerSurface, PlayerSurface};
pub use sync::{PlaybackState, PlaybackSynchronizer, SurfaceMessage};
pub use transcript::grouping::{Group, group};
pub use transcript::{Segment, SegmentStore};
pub use viewer::TranscriptViewer;
