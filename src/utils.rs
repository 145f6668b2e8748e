//! Вспомогательные утилиты: настройка логгера и форматирование времени

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Инициализировать логгер с тонкой настройкой
///
/// Уровни переопределяются через RUST_LOG; шумные модули зависимостей
/// приглушены. Вызывается один раз при старте приложения-оболочки.
pub fn init_logger() {
    let env = Env::default().filter_or("RUST_LOG", "warn,transcript_sync=info");

    Builder::from_env(env)
        .filter_module("hyper", LevelFilter::Error)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("mio", LevelFilter::Error)
        .filter_module("tokio_util", LevelFilter::Error)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

/// Отформатировать позицию в секундах как "MM:SS" или "HH:MM:SS"
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
