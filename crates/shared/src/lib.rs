pub mod accessibility;
pub mod chrome;
pub mod error;
pub mod media;

pub use chrome::{ChromeClass, SELECTED_CLASS};
pub use error::{PropsError, PropsResult};
pub use media::{MediaSource, classify_source};
