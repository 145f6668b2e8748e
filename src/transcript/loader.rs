//! Модуль загрузки транскрипта
//!
//! Граница с источником данных: ядро библиотеки получает уже разобранную
//! последовательность сегментов и не зависит от того, пришла она из
//! встроенных данных, файла или по HTTP. Сырой формат — JSON-массив
//! объектов `{"text", "start", "duration"}`.

use std::path::Path;

use log::{debug, info};

use super::Segment;
use crate::error::{Result, SyncError};

/// Разобрать транскрипт из сырого JSON
///
/// Отсутствующее поле `duration` считается нулевым.
pub fn parse_transcript(json: &str) -> Result<Vec<Segment>> {
    let segments: Vec<Segment> = serde_json::from_str(json)
        .map_err(|e| SyncError::TranscriptLoad(format!("Invalid transcript JSON: {}", e)))?;
    debug!("Parsed {} transcript segments", segments.len());
    Ok(segments)
}

/// Загрузить транскрипт из файла
pub async fn load_transcript_file<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let path = path.as_ref();
    info!("Loading transcript from {}", path.display());
    let data = tokio::fs::read_to_string(path).await.map_err(|e| {
        SyncError::TranscriptLoad(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_transcript(&data)
}

/// Получить транскрипт по HTTP
pub async fn fetch_transcript(url: &str) -> Result<Vec<Segment>> {
    info!("Fetching transcript from {}", url);
    let response = reqwest::get(url).await?.error_for_status()?;
    let text = response.text().await?;
    parse_transcript(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_transcript() {
        let json = r#"[
            {"text": "hello", "start": 0.0, "duration": 2.5},
            {"text": "world", "start": 2.5, "duration": 1.5}
        ]"#;
        let segments = parse_transcript(json).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "hello");
        assert_eq!(segments[1].start, 2.5);
        assert_eq!(segments[1].duration, 1.5);
    }

    #[test]
    fn test_parse_missing_duration_defaults_to_zero() {
        let json = r#"[{"text": "hello", "start": 1.0}]"#;
        let segments = parse_transcript(json).unwrap();
        assert_eq!(segments[0].duration, 0.0);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_transcript("not json");
        assert!(matches!(result, Err(SyncError::TranscriptLoad(_))));
    }

    #[test]
    fn test_parse_empty_array() {
        let segments = parse_transcript("[]").unwrap();
        assert!(segments.is_empty());
    }

    #[tokio::test]
    async fn test_load_transcript_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"text": "from file", "start": 0.0, "duration": 3.0}}]"#
        )
        .unwrap();

        let segments = load_transcript_file(file.path()).await.unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "from file");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_transcript_file("/nonexistent/transcript.json").await;
        assert!(matches!(result, Err(SyncError::TranscriptLoad(_))));
    }
}
