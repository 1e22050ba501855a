use lightbox_types::MediaItem;
use std::{sync::Arc, time::Instant};

pub use crate::key_binds::KeyAction;

#[derive(Debug, Clone)]
pub enum Message {
    Nav(NavMessage),
    KeyBind(KeyAction),
    DirectoryScanned {
        items: Vec<MediaItem>,
        select: Option<String>,
    },
    ScanFailed(Arc<String>),
    ToggleAutoplay,
    AutoplayTick,
    Frame(Instant),
    Close,
}

/// Navigation intents. Ids are the ones the slide widgets report.
#[derive(Debug, Clone)]
pub enum NavMessage {
    Next(String),
    Previous(String),
    Select(String),
    NextCurrent,
    PreviousCurrent,
    First,
    Last,
}
