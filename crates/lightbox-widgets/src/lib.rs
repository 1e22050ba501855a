pub mod caption;
pub mod fade;
pub mod localize;
pub mod slide_view;
pub mod surface;
pub mod thumbnail_strip;

pub use caption::{ResolvedCaption, caption};
pub use fade::{Fade, fade_opacity};
pub use slide_view::{SlideProps, SlideView, slide_view};
pub use surface::{HitRegions, Mark, Marker, Surface, marker};
pub use thumbnail_strip::{Swatch, ThumbnailStrip, swatches, thumbnail_strip};
