//! YouTube embed target helpers: video id extraction and embed URL
//! construction.
//!
//! Extraction failure is terminal for the player component: without an id
//! there is nothing to embed and no commands may be emitted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SyncError};

// Pattern for youtube.com/watch?v=VIDEO_ID
static WATCH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})").unwrap());

// Pattern for youtu.be/VIDEO_ID
static SHORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})").unwrap());

// Pattern for youtube.com/embed/VIDEO_ID
static EMBED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})").unwrap());

// Bare 11-character video id
static BARE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap());

// Any watch or short link inside free text
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})").unwrap()
});

/// Extract a video id from a YouTube URL.
///
/// Supported shapes: long-form watch URLs, short-link form, embed form,
/// or a bare 11-character id.
pub fn extract_video_id(source: &str) -> Result<String> {
    for re in [&*WATCH_RE, &*SHORT_RE, &*EMBED_RE] {
        if let Some(captures) = re.captures(source) {
            return Ok(captures[1].to_string());
        }
    }

    if BARE_ID_RE.is_match(source) {
        return Ok(source.to_string());
    }

    Err(SyncError::UnresolvableSource(source.to_string()))
}

/// Build the embed URL for a video id with the JS API enabled.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?enablejsapi=1", video_id)
}

/// Scan free text for YouTube watch/short links and return the video ids
/// in encounter order.
pub fn extract_video_links(text: &str) -> Vec<String> {
    LINK_RE
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=5Bd_onCysfw").unwrap();
        assert_eq!(id, "5Bd_onCysfw");
    }

    #[test]
    fn test_extract_from_short_url() {
        let id = extract_video_id("https://youtu.be/5Bd_onCysfw").unwrap();
        assert_eq!(id, "5Bd_onCysfw");
    }

    #[test]
    fn test_extract_from_embed_url() {
        let id = extract_video_id("https://www.youtube.com/embed/5Bd_onCysfw").unwrap();
        assert_eq!(id, "5Bd_onCysfw");
    }

    #[test]
    fn test_extract_bare_id() {
        let id = extract_video_id("5Bd_onCysfw").unwrap();
        assert_eq!(id, "5Bd_onCysfw");
    }

    #[test]
    fn test_extract_failure() {
        let result = extract_video_id("https://example.com/video/123");
        assert!(matches!(result, Err(SyncError::UnresolvableSource(_))));

        // Too short to be a bare id
        assert!(extract_video_id("abc").is_err());
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("5Bd_onCysfw"),
            "https://www.youtube.com/embed/5Bd_onCysfw?enablejsapi=1"
        );
    }

    #[test]
    fn test_extract_video_links_in_order() {
        let text = "intro https://youtu.be/aaaaaaaaaaa then \
                    https://www.youtube.com/watch?v=bbbbbbbbbbb the end";
        assert_eq!(extract_video_links(text), vec!["aaaaaaaaaaa", "bbbbbbbbbbb"]);
    }

    #[test]
    fn test_extract_video_links_empty() {
        assert!(extract_video_links("no links here").is_empty());
    }
}
