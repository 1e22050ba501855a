pub mod gallery;
pub mod outside_click;
pub mod scan;
pub mod swipe;
pub mod wheel;

pub use gallery::Gallery;
pub use outside_click::{
    CloseCallback, ContainerRef, EventHub, EventTarget, HostEventKind, HostEvents, Listener,
    ListenerId, OutsideClick, PointerButton, PointerEvent, should_close,
};
pub use scan::{ScanError, media_dir, scan_dir};
pub use swipe::{GestureSample, SwipeMeasurement, SwipeRecognizer};
pub use wheel::WheelNavigator;

/// A navigation intent. Applying it is up to whoever owns the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}
