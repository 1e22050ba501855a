//! Row of clickable thumbnail swatches.

use cosmic::{
    Element,
    iced::{ContentFit, Length},
    iced_widget::scrollable::{Direction, Scrollbar},
    theme,
    widget::{button, container, icon, image, row, scrollable, tooltip},
};
use lightbox_types::MediaItem;
use shared::{ChromeClass, SELECTED_CLASS, accessibility::AccessibilityInfo, chrome};

use crate::slide_view::local_path;
use crate::surface::{HitRegions, Mark, marker};

/// Everything needed to draw one swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub id: String,
    pub thumb: String,
    pub index: usize,
    pub selected: bool,
    pub classes: Vec<String>,
}

impl Swatch {
    pub fn accessibility(&self, total: usize) -> AccessibilityInfo {
        AccessibilityInfo::swatch(self.index, total, self.selected)
    }

    /// Tooltip and screen-reader text.
    pub fn label(&self, total: usize) -> String {
        self.accessibility(total).aria_label()
    }

    /// Disk path of the thumbnail. Remote `http(s)` thumbnails are not fetched.
    pub fn thumb_path(&self) -> &str {
        local_path(&self.thumb)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// One swatch per item, in list order.
pub fn swatches(images: &[MediaItem], current_id: Option<&str>) -> Vec<Swatch> {
    images
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = current_id == Some(item.id.as_str());

            let mut classes = vec![
                ChromeClass::Thumbnail.as_str().to_string(),
                chrome::thumbnail_index_class(index),
            ];
            if selected {
                classes.push(SELECTED_CLASS.to_string());
            }

            Swatch {
                id: item.id.clone(),
                thumb: item.thumb.clone(),
                index,
                selected,
                classes,
            }
        })
        .collect()
}

pub struct ThumbnailStrip<'a, M> {
    images: &'a [MediaItem],
    current_id: Option<&'a str>,
    thumbnail_size: u16,
    on_select: Option<Box<dyn Fn(String) -> M + 'a>>,
    regions: Option<HitRegions>,
}

impl<'a, M: Clone + 'a> ThumbnailStrip<'a, M> {
    pub fn new(images: &'a [MediaItem], current_id: Option<&'a str>) -> Self {
        Self {
            images,
            current_id,
            thumbnail_size: 64,
            on_select: None,
            regions: None,
        }
    }

    pub fn thumbnail_size(mut self, size: u16) -> Self {
        self.thumbnail_size = size;
        self
    }

    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> M + 'a,
    {
        self.on_select = Some(Box::new(f));
        self
    }

    pub(crate) fn on_select_boxed(mut self, f: Option<Box<dyn Fn(String) -> M + 'a>>) -> Self {
        self.on_select = f;
        self
    }

    /// Report the strip's bounds to a surface.
    pub fn hit_regions(mut self, regions: &HitRegions) -> Self {
        self.regions = Some(regions.clone());
        self
    }

    pub fn swatches(&self) -> Vec<Swatch> {
        swatches(self.images, self.current_id)
    }

    /// Message a click on the swatch at `index` produces.
    pub fn press(&self, index: usize) -> Option<M> {
        let item = self.images.get(index)?;
        self.on_select.as_ref().map(|f| f(item.id.clone()))
    }

    pub fn into_element(self) -> Element<'a, M> {
        let spacing = theme::active().cosmic().spacing;
        let size = f32::from(self.thumbnail_size);
        let total = self.images.len();

        let mut strip = row().spacing(spacing.space_xxs).padding(spacing.space_xxs);

        for swatch in self.swatches() {
            let face: Element<'a, M> = if swatch.thumb.is_empty() {
                container(icon::from_name("video-x-generic-symbolic").size(self.thumbnail_size / 2))
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .center(Length::Fixed(size))
                    .into()
            } else {
                image(image::Handle::from_path(swatch.thumb_path()))
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .into()
            };

            let label = swatch.label(total);

            let swatch_button = button::custom(face)
                .class(theme::Button::Image)
                .selected(swatch.selected)
                .padding(spacing.space_xxxs)
                .on_press_maybe(self.press(swatch.index));

            strip = strip.push(tooltip(
                swatch_button,
                cosmic::widget::text(label),
                tooltip::Position::Top,
            ));
        }

        let scroller = scrollable(strip)
            .direction(Direction::Horizontal(Scrollbar::default()))
            .width(Length::Fill);

        match self.regions {
            Some(regions) => marker(
                scroller,
                Mark::Chrome(ChromeClass::ThumbnailStrip),
                &regions,
            )
            .into(),
            None => scroller.into(),
        }
    }
}

pub fn thumbnail_strip<'a, M: Clone + 'a>(
    images: &'a [MediaItem],
    current_id: Option<&'a str>,
) -> ThumbnailStrip<'a, M> {
    ThumbnailStrip::new(images, current_id)
}
