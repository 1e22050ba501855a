use serde::{Deserialize, Serialize};

use crate::media::MediaSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AriaRole {
    #[default]
    Image,
    Listbox,
    Option,
    Button,
    Dialog,
    ProgressIndicator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityInfo {
    pub role: AriaRole,
    pub label: Option<String>,
    pub selected: bool,
    pub busy: bool,
    pub pos_in_set: Option<usize>,
    pub set_size: Option<usize>,
}

impl AccessibilityInfo {
    pub fn new(role: AriaRole) -> Self {
        Self {
            role,
            label: None,
            selected: false,
            busy: false,
            pos_in_set: None,
            set_size: None,
        }
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn make_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn make_busy(mut self) -> Self {
        self.busy = true;
        self
    }

    /// `index` is zero based; the announced position is one based.
    pub fn with_set_position(mut self, index: usize, set_size: usize) -> Self {
        self.pos_in_set = Some(index + 1);
        self.set_size = Some(set_size);
        self
    }

    /// Label read out for a thumbnail swatch, e.g. "Thumbnail 2 of 5, selected".
    pub fn swatch(index: usize, total: usize, selected: bool) -> Self {
        let mut label = format!("Thumbnail {} of {}", index + 1, total);
        if selected {
            label.push_str(", selected");
        }

        Self::new(AriaRole::Option)
            .with_label(label)
            .with_set_position(index, total)
            .make_selected(selected)
    }

    /// Label for the slide currently on stage.
    pub fn slide(source: &MediaSource, caption: &str) -> Self {
        match source {
            MediaSource::Loading => Self::new(AriaRole::ProgressIndicator)
                .with_label("Loading")
                .make_busy(),
            MediaSource::Image(_) | MediaSource::Video(_) => {
                let kind = if source.is_image() { "Image" } else { "Video" };
                let name = if caption.is_empty() {
                    source.file_name().unwrap_or_default()
                } else {
                    caption
                };
                Self::new(AriaRole::Image).with_label(format!("{kind}: {name}"))
            }
        }
    }

    pub fn aria_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.default_label())
    }

    fn default_label(&self) -> String {
        match self.role {
            AriaRole::Image => "Slide".to_string(),
            AriaRole::Listbox => "Thumbnails".to_string(),
            AriaRole::Option => "Thumbnail".to_string(),
            AriaRole::Button => "Gallery control".to_string(),
            AriaRole::Dialog => "Lightbox".to_string(),
            AriaRole::ProgressIndicator => "Loading".to_string(),
        }
    }
}
