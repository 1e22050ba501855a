//! Media source classification.
//!
//! A slide source is either still loading, or a URL that is rendered as an
//! image or a video. The decision is a file-extension sniff, not a MIME check:
//! extensionless or unusual URLs end up on the video path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extensions that render as a still image. Matched case-sensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "webp", "tiff", "png", "gif", "bmp"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MediaSource {
    /// Source not resolved yet. Rendered as the fixed placeholder image.
    #[default]
    Loading,
    Image(String),
    Video(String),
}

impl MediaSource {
    /// Resolve a slide source once. `None` is the "still loading" sentinel.
    pub fn classify(source: Option<&str>) -> Self {
        match source {
            None => MediaSource::Loading,
            Some(url) if is_image_url(url) => MediaSource::Image(url.to_string()),
            Some(url) => MediaSource::Video(url.to_string()),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            MediaSource::Loading => None,
            MediaSource::Image(url) | MediaSource::Video(url) => Some(url),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, MediaSource::Loading)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, MediaSource::Image(_))
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaSource::Video(_))
    }

    /// Last path segment of the URL, without the query string.
    pub fn file_name(&self) -> Option<&str> {
        self.url().map(|url| {
            let path = strip_query(url);
            path.rsplit('/').next().unwrap_or(path)
        })
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaSource::Loading => write!(f, "Loading"),
            MediaSource::Image(url) => write!(f, "Image: {}", url),
            MediaSource::Video(url) => write!(f, "Video: {}", url),
        }
    }
}

pub fn classify_source(source: Option<&str>) -> MediaSource {
    MediaSource::classify(source)
}

/// Everything after the last `.` of the query-less URL.
pub fn extension(url: &str) -> &str {
    strip_query(url).rsplit('.').next().unwrap_or_default()
}

pub fn is_image_url(url: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extension(url))
}

fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_with_query_string() {
        let source = classify_source(Some("https://x.test/img.png?v=2"));
        assert_eq!(source, MediaSource::Image("https://x.test/img.png?v=2".into()));
    }

    #[test]
    fn test_video_extension() {
        let source = classify_source(Some("https://x.test/clip.mov"));
        assert_eq!(source, MediaSource::Video("https://x.test/clip.mov".into()));
    }

    #[test]
    fn test_loading_sentinel() {
        let source = classify_source(None);
        assert!(source.is_loading());
        assert_eq!(source.url(), None);
    }

    #[test]
    fn test_every_listed_extension_is_an_image() {
        for ext in IMAGE_EXTENSIONS {
            let url = format!("/photos/sample.{ext}");
            assert!(classify_source(Some(&url)).is_image(), "{url}");
        }
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(classify_source(Some("/photos/IMG_0001.JPG")).is_video());
    }

    #[test]
    fn test_extensionless_url_is_video() {
        // Known limitation of the extension sniff
        assert!(classify_source(Some("https://cdn.test/media/12345")).is_video());
        assert!(classify_source(Some("")).is_video());
    }

    #[test]
    fn test_dot_in_query_is_ignored() {
        assert!(classify_source(Some("/a/photo.jpeg?name=x.mov")).is_image());
        assert!(classify_source(Some("/a/clip.webm?thumb=x.png")).is_video());
    }

    #[test]
    fn test_file_name() {
        let source = classify_source(Some("https://x.test/dir/img.png?v=2"));
        assert_eq!(source.file_name(), Some("img.png"));
        assert_eq!(MediaSource::Loading.file_name(), None);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(MediaSource::Loading.to_string(), "Loading");
        assert_eq!(
            MediaSource::Video("clip.mp4".into()).to_string(),
            "Video: clip.mp4"
        );
    }
}
