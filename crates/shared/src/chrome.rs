//! Class markers carried by the gallery's own controls.
//!
//! The outside-click detector keys off these exact strings, so they must not
//! change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker for the swatch matching the current item. Not a chrome class.
pub const SELECTED_CLASS: &str = "selected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChromeClass {
    NextButton,
    PreviousButton,
    CloseButton,
    AutoplayButton,
    ThumbnailStrip,
    Thumbnail,
    Caption,
}

impl ChromeClass {
    pub const ALL: &'static [Self] = &[
        Self::NextButton,
        Self::PreviousButton,
        Self::CloseButton,
        Self::AutoplayButton,
        Self::ThumbnailStrip,
        Self::Thumbnail,
        Self::Caption,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChromeClass::NextButton => "next-button",
            ChromeClass::PreviousButton => "previous-button",
            ChromeClass::CloseButton => "close-button",
            ChromeClass::AutoplayButton => "autoplay-button",
            ChromeClass::ThumbnailStrip => "thumbnail-strip",
            ChromeClass::Thumbnail => "thumbnail",
            ChromeClass::Caption => "caption",
        }
    }
}

impl fmt::Display for ChromeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a chrome class: {0}")]
pub struct UnknownChromeClass(pub String);

impl FromStr for ChromeClass {
    type Err = UnknownChromeClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| UnknownChromeClass(s.to_string()))
    }
}

pub fn is_chrome_class(class: &str) -> bool {
    class.parse::<ChromeClass>().is_ok()
}

/// True when any class in the list exempts its element from outside-click
/// dismissal.
pub fn has_chrome_class<S: AsRef<str>>(classes: &[S]) -> bool {
    classes.iter().any(|class| is_chrome_class(class.as_ref()))
}

/// Per-position class of a thumbnail swatch, e.g. `thumbnail3`.
pub fn thumbnail_index_class(index: usize) -> String {
    format!("{}{}", ChromeClass::Thumbnail.as_str(), index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_strings_are_exact() {
        let strings: Vec<&str> = ChromeClass::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            strings,
            vec![
                "next-button",
                "previous-button",
                "close-button",
                "autoplay-button",
                "thumbnail-strip",
                "thumbnail",
                "caption",
            ]
        );
    }

    #[test]
    fn test_parse_round_trips_every_marker() {
        for class in ChromeClass::ALL {
            assert_eq!(class.as_str().parse::<ChromeClass>(), Ok(*class));
        }
    }

    #[test]
    fn test_unknown_classes() {
        assert!(!is_chrome_class("backdrop"));
        assert!(!is_chrome_class(SELECTED_CLASS));
        // Per-position classes are not markers on their own
        assert!(!is_chrome_class(&thumbnail_index_class(0)));
        assert!(!is_chrome_class("Caption"));
    }

    #[test]
    fn test_has_chrome_class() {
        assert!(has_chrome_class(&["thumbnail2", "thumbnail", "selected"]));
        assert!(!has_chrome_class(&["backdrop", "image-container"]));
        assert!(!has_chrome_class::<&str>(&[]));
    }
}
