pub mod types;

pub use types::{Bounds, Point};

use shared::{MediaSource, PropsError, PropsResult};
use std::collections::HashSet;

/// One entry of a gallery. `id` is unique within its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub source: String,
    pub thumb: String,
}

impl MediaItem {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        thumb: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            thumb: thumb.into(),
        }
    }

    pub fn media_source(&self) -> MediaSource {
        MediaSource::classify(Some(&self.source))
    }
}

/// Check that every id is non-empty and unique.
pub fn validate_items(items: &[MediaItem]) -> PropsResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(PropsError::EmptyId(index));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(PropsError::DuplicateId(item.id.clone()));
        }
    }

    Ok(())
}

/// Caption text styling. Every field is optional passthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaptionStyle {
    pub color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
}

impl CaptionStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size<S: Into<String>>(mut self, size: S) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn with_font_weight<S: Into<String>>(mut self, weight: S) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn with_font_style<S: Into<String>>(mut self, style: S) -> Self {
        self.font_style = Some(style.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MediaItem {
        MediaItem::new(id, format!("/photos/{id}.jpg"), format!("/thumbs/{id}.jpg"))
    }

    #[test]
    fn test_validate_unique_ids() {
        assert_eq!(validate_items(&[item("a"), item("b")]), Ok(()));
        assert_eq!(validate_items(&[]), Ok(()));
    }

    #[test]
    fn test_validate_duplicate_id() {
        assert_eq!(
            validate_items(&[item("a"), item("b"), item("a")]),
            Err(PropsError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn test_validate_empty_id() {
        assert_eq!(
            validate_items(&[item("a"), item("")]),
            Err(PropsError::EmptyId(1))
        );
    }

    #[test]
    fn test_media_source_of_item() {
        assert!(item("a").media_source().is_image());
        assert!(
            MediaItem::new("v", "/videos/v.mp4", "/thumbs/v.jpg")
                .media_source()
                .is_video()
        );
    }

    #[test]
    fn test_caption_style_builder() {
        let style = CaptionStyle::new()
            .with_color("#ffffff")
            .with_font_size("18px")
            .with_font_style("italic");

        assert_eq!(style.color.as_deref(), Some("#ffffff"));
        assert_eq!(style.font_size.as_deref(), Some("18px"));
        assert_eq!(style.font_style.as_deref(), Some("italic"));
        assert_eq!(style.font_family, None);
        assert_eq!(style.font_weight, None);
    }
}
