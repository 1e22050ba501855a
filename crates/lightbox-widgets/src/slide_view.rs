//! The slide viewer: current media, caption, chrome and thumbnail strip.
//!
//! `SlideView` holds no navigation state. It renders what the caller passes in
//! and turns clicks, swipes, wheel flicks and outside clicks into the
//! caller's messages.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{button, column, container, horizontal_space, icon, image, row, text, tooltip},
};
use lightbox_config::{SwipeConfig, WheelConfig};
use lightbox_types::{CaptionStyle, MediaItem, validate_items};
use once_cell::sync::Lazy;
use shared::{
    ChromeClass, MediaSource, PropsError, PropsResult, accessibility::AccessibilityInfo,
};

use crate::caption::caption;
use crate::fade::fade_opacity;
use crate::fl;
use crate::surface::{HitRegions, Mark, Surface, marker};
use crate::thumbnail_strip::ThumbnailStrip;

const PLACEHOLDER_SIZE: u32 = 16;

/// Flat gray square shown while the source is unresolved.
static PLACEHOLDER: Lazy<image::Handle> = Lazy::new(|| {
    let pixels = [0x80u8, 0x80, 0x80, 0xff].repeat((PLACEHOLDER_SIZE * PLACEHOLDER_SIZE) as usize);
    image::Handle::from_rgba(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, pixels)
});

/// The inputs whose shape can be wrong.
#[derive(Debug, Clone, Copy)]
pub struct SlideProps<'a> {
    pub images: &'a [MediaItem],
    pub id: &'a str,
}

impl SlideProps<'_> {
    pub fn validate(&self) -> PropsResult<()> {
        validate_items(self.images)?;

        if !self.images.is_empty() && !self.images.iter().any(|item| item.id == self.id) {
            return Err(PropsError::UnknownCurrentId(self.id.to_string()));
        }

        Ok(())
    }
}

thread_local! {
    static LAST_REPORTED: RefCell<Option<PropsError>> = const { RefCell::new(None) };
}

/// Log a props problem once per change instead of on every redraw. Returns
/// whether anything was logged.
fn report(result: PropsResult<()>) -> bool {
    LAST_REPORTED.with_borrow_mut(|last| match result {
        Ok(()) => {
            *last = None;
            false
        }
        Err(e) if last.as_ref() == Some(&e) => false,
        Err(e) => {
            if cfg!(debug_assertions) {
                tracing::error!("slide view props: {e}");
            } else {
                tracing::debug!("slide view props: {e}");
            }
            *last = Some(e);
            true
        }
    })
}

/// `file://` URLs load from disk like plain paths. Remote `http(s)` sources
/// are not fetched, so they render empty.
pub(crate) fn local_path(url: &str) -> &str {
    url.strip_prefix("file://").unwrap_or(url)
}

/// Tooltip text of a chrome button.
fn chrome_label(class: ChromeClass, autoplay_active: bool) -> String {
    match class {
        ChromeClass::PreviousButton => fl!("previous"),
        ChromeClass::NextButton => fl!("next"),
        ChromeClass::CloseButton => fl!("close"),
        ChromeClass::AutoplayButton if autoplay_active => fl!("autoplay-stop"),
        ChromeClass::AutoplayButton => fl!("autoplay-start"),
        ChromeClass::ThumbnailStrip | ChromeClass::Thumbnail | ChromeClass::Caption => {
            String::new()
        }
    }
}

pub struct SlideView<'a, M> {
    source: Option<&'a str>,
    images: &'a [MediaItem],
    id: &'a str,
    caption: &'a str,
    caption_style: CaptionStyle,
    show_thumbnails: bool,
    show_caption: bool,
    controls: bool,
    autoplay_active: bool,
    transition_speed: u32,
    shown_for: Duration,
    opacity: Option<f32>,
    swipe: SwipeConfig,
    wheel: WheelConfig,
    on_close: Option<M>,
    on_select: Option<Box<dyn Fn(String) -> M + 'a>>,
    on_next: Option<Rc<dyn Fn(String) -> M + 'a>>,
    on_previous: Option<Rc<dyn Fn(String) -> M + 'a>>,
    on_toggle_autoplay: Option<M>,
}

impl<'a, M: Clone + 'a> SlideView<'a, M> {
    pub fn new(source: Option<&'a str>, images: &'a [MediaItem], id: &'a str) -> Self {
        Self {
            source,
            images,
            id,
            caption: "",
            caption_style: CaptionStyle::default(),
            show_thumbnails: false,
            show_caption: false,
            controls: false,
            autoplay_active: false,
            transition_speed: 0,
            shown_for: Duration::MAX,
            opacity: None,
            swipe: SwipeConfig::default(),
            wheel: WheelConfig::default(),
            on_close: None,
            on_select: None,
            on_next: None,
            on_previous: None,
            on_toggle_autoplay: None,
        }
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = caption;
        self
    }

    pub fn caption_style(mut self, style: &CaptionStyle) -> Self {
        self.caption_style = style.clone();
        self
    }

    pub fn show_thumbnails(mut self, show: bool) -> Self {
        self.show_thumbnails = show;
        self
    }

    pub fn show_caption(mut self, show: bool) -> Self {
        self.show_caption = show;
        self
    }

    /// Previous/next/close/autoplay buttons.
    pub fn controls(mut self, controls: bool) -> Self {
        self.controls = controls;
        self
    }

    pub fn autoplay_active(mut self, active: bool) -> Self {
        self.autoplay_active = active;
        self
    }

    pub fn transition_speed(mut self, ms: u32) -> Self {
        self.transition_speed = ms;
        self
    }

    /// How long the current slide has been on stage. Drives the fade-in.
    pub fn shown_for(mut self, elapsed: Duration) -> Self {
        self.shown_for = elapsed;
        self
    }

    /// Fixed media opacity, overriding the fade-in.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn media_opacity(&self) -> f32 {
        self.opacity
            .unwrap_or_else(|| fade_opacity(self.shown_for, self.transition_speed))
    }

    pub fn swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    pub fn wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn on_close(mut self, message: M) -> Self {
        self.on_close = Some(message);
        self
    }

    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> M + 'a,
    {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> M + 'a,
    {
        self.on_next = Some(Rc::new(f));
        self
    }

    pub fn on_previous<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> M + 'a,
    {
        self.on_previous = Some(Rc::new(f));
        self
    }

    pub fn on_toggle_autoplay(mut self, message: M) -> Self {
        self.on_toggle_autoplay = Some(message);
        self
    }

    pub fn props(&self) -> SlideProps<'a> {
        SlideProps {
            images: self.images,
            id: self.id,
        }
    }

    pub fn media_source(&self) -> MediaSource {
        MediaSource::classify(self.source)
    }

    pub fn accessibility(&self) -> AccessibilityInfo {
        AccessibilityInfo::slide(&self.media_source(), self.caption)
    }

    /// Message the next button emits.
    pub fn next_message(&self) -> Option<M> {
        self.on_next.as_ref().map(|f| f(self.id.to_string()))
    }

    /// Message the previous button emits.
    pub fn previous_message(&self) -> Option<M> {
        self.on_previous.as_ref().map(|f| f(self.id.to_string()))
    }

    fn media(&self) -> Element<'a, M> {
        let spacing = theme::active().cosmic().spacing;

        let source = self.media_source();

        match &source {
            MediaSource::Loading => column()
                .push(
                    image(PLACEHOLDER.clone())
                        .width(Length::Fixed(96.0))
                        .height(Length::Fixed(96.0)),
                )
                .push(text(fl!("loading")).size(14))
                .spacing(spacing.space_s)
                .align_x(Alignment::Center)
                .into(),
            // Shrink lays the node out at the fitted picture, so the bars
            // around it stay outside the container region
            MediaSource::Image(url) => image(image::Handle::from_path(local_path(url)))
                .content_fit(ContentFit::Contain)
                .opacity(self.media_opacity())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
            MediaSource::Video(_) => {
                let name = source.file_name().unwrap_or_default().to_string();

                container(
                    column()
                        .push(icon::from_name("video-x-generic-symbolic").size(64))
                        .push(text(fl!("video-file", name = name)))
                        .push(text(fl!("video-unsupported")).size(12))
                        .spacing(spacing.space_xs)
                        .align_x(Alignment::Center),
                )
                .padding(spacing.space_m)
                .class(theme::Container::Card)
                .into()
            }
        }
    }

    fn chrome_button(
        &self,
        icon_name: &'static str,
        class: ChromeClass,
        message: Option<M>,
        regions: &HitRegions,
    ) -> Element<'a, M> {
        let spacing = theme::active().cosmic().spacing;

        let btn = button::icon(icon::from_name(icon_name))
            .on_press_maybe(message)
            .padding(spacing.space_xs);
        let label = text(chrome_label(class, self.autoplay_active));

        marker(
            tooltip(btn, label, tooltip::Position::Bottom),
            Mark::Chrome(class),
            regions,
        )
        .into()
    }

    fn header(&self, regions: &HitRegions) -> Element<'a, M> {
        let spacing = theme::active().cosmic().spacing;

        let position = self
            .images
            .iter()
            .position(|item| item.id == self.id)
            .map(|idx| format!("{} / {}", idx + 1, self.images.len()))
            .unwrap_or_default();

        let mut header = row()
            .push(text(self.accessibility().aria_label()).size(14))
            .push(horizontal_space())
            .push(text(position).size(14))
            .spacing(spacing.space_s)
            .align_y(Alignment::Center)
            .padding(spacing.space_xs)
            .width(Length::Fill);

        if let Some(toggle) = self.on_toggle_autoplay.clone() {
            let icon_name = if self.autoplay_active {
                "media-playback-pause-symbolic"
            } else {
                "media-playback-start-symbolic"
            };
            header = header.push(self.chrome_button(
                icon_name,
                ChromeClass::AutoplayButton,
                Some(toggle),
                regions,
            ));
        }

        if let Some(close) = self.on_close.clone() {
            let close_btn = button::icon(icon::from_name("window-close-symbolic"))
                .on_press(close)
                .padding(spacing.space_xs)
                .class(theme::Button::Destructive);
            let label = text(chrome_label(ChromeClass::CloseButton, self.autoplay_active));
            header = header.push(marker(
                tooltip(close_btn, label, tooltip::Position::Bottom),
                Mark::Chrome(ChromeClass::CloseButton),
                regions,
            ));
        }

        header.into()
    }

    pub fn into_element(self) -> Element<'a, M> {
        report(self.props().validate());

        let spacing = theme::active().cosmic().spacing;
        let regions = HitRegions::new();

        let media = marker(self.media(), Mark::Container, &regions);

        let mut stage = row().align_y(Alignment::Center).spacing(spacing.space_xs);

        if self.controls {
            stage = stage.push(self.chrome_button(
                "go-previous-symbolic",
                ChromeClass::PreviousButton,
                self.previous_message(),
                &regions,
            ));
        }

        stage = stage.push(
            container(media)
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill),
        );

        if self.controls {
            stage = stage.push(self.chrome_button(
                "go-next-symbolic",
                ChromeClass::NextButton,
                self.next_message(),
                &regions,
            ));
        }

        let mut content = column().width(Length::Fill).height(Length::Fill);

        if self.controls {
            content = content.push(self.header(&regions));
        }

        content = content.push(marker(
            container(stage).width(Length::Fill).height(Length::Fill),
            Mark::Stage,
            &regions,
        ));

        if self.show_caption && !self.caption.is_empty() {
            content = content.push(marker(
                caption(self.caption, &self.caption_style),
                Mark::Chrome(ChromeClass::Caption),
                &regions,
            ));
        }

        let Self {
            images,
            id,
            show_thumbnails,
            swipe,
            wheel,
            on_close,
            on_select,
            on_next,
            on_previous,
            ..
        } = self;

        if show_thumbnails && !images.is_empty() {
            content = content.push(
                ThumbnailStrip::new(images, Some(id))
                    .on_select_boxed(on_select)
                    .hit_regions(&regions)
                    .into_element(),
            );
        }

        let mut surface = Surface::new(
            container(content)
                .padding(spacing.space_s)
                .width(Length::Fill)
                .height(Length::Fill),
            &regions,
            id,
        )
        .swipe(swipe)
        .wheel(wheel);

        if let Some(f) = on_next {
            surface = surface.on_next(move |id| f(id));
        }
        if let Some(f) = on_previous {
            surface = surface.on_previous(move |id| f(id));
        }
        if let Some(message) = on_close {
            surface = surface.on_close(message);
        }

        surface.into()
    }
}

impl<'a, M: Clone + 'a> From<SlideView<'a, M>> for Element<'a, M> {
    fn from(view: SlideView<'a, M>) -> Self {
        view.into_element()
    }
}

pub fn slide_view<'a, M: Clone + 'a>(
    source: Option<&'a str>,
    images: &'a [MediaItem],
    id: &'a str,
) -> SlideView<'a, M> {
    SlideView::new(source, images, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic::iced::Size;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Next(String),
        Previous(String),
    }

    fn items() -> Vec<MediaItem> {
        vec![
            MediaItem::new("a", "a.jpg", "a_t.jpg"),
            MediaItem::new("b", "b.mov", ""),
        ]
    }

    #[test]
    fn test_valid_props() {
        let images = items();
        assert_eq!(SlideProps { images: &images, id: "b" }.validate(), Ok(()));
        assert_eq!(SlideProps { images: &[], id: "x" }.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_current_id() {
        let images = items();
        assert_eq!(
            SlideProps { images: &images, id: "zzz" }.validate(),
            Err(PropsError::UnknownCurrentId("zzz".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids() {
        let images = vec![
            MediaItem::new("a", "a.jpg", ""),
            MediaItem::new("a", "b.jpg", ""),
        ];
        assert_eq!(
            SlideProps { images: &images, id: "a" }.validate(),
            Err(PropsError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn test_media_source_follows_source() {
        let images = items();
        let loading: SlideView<'_, Msg> = SlideView::new(None, &images, "a");
        assert!(loading.media_source().is_loading());
        assert!(loading.accessibility().busy);

        let video: SlideView<'_, Msg> = SlideView::new(Some("b.mov"), &images, "b");
        assert!(video.media_source().is_video());
        assert_eq!(video.accessibility().aria_label(), "Video: b.mov");
    }

    #[test]
    fn test_navigation_messages_carry_current_id() {
        let images = items();
        let view = SlideView::new(Some("a.jpg"), &images, "a")
            .on_next(Msg::Next)
            .on_previous(Msg::Previous);

        assert_eq!(view.next_message(), Some(Msg::Next("a".to_string())));
        assert_eq!(view.previous_message(), Some(Msg::Previous("a".to_string())));
    }

    #[test]
    fn test_media_opacity() {
        let images = items();
        let view: SlideView<'_, Msg> = SlideView::new(None, &images, "a");
        assert_eq!(view.media_opacity(), 1.0);

        let fading: SlideView<'_, Msg> = SlideView::new(None, &images, "a")
            .transition_speed(400)
            .shown_for(Duration::from_millis(100));
        assert!((fading.media_opacity() - 0.25).abs() < 1e-6);

        let fixed: SlideView<'_, Msg> = fading.opacity(3.0);
        assert_eq!(fixed.media_opacity(), 1.0);
    }

    #[test]
    fn test_image_is_laid_out_at_its_fitted_size() {
        let images = items();
        let view: SlideView<'_, Msg> = SlideView::new(Some("a.jpg"), &images, "a");
        let media = view.media();

        assert_eq!(
            media.as_widget().size(),
            Size::new(Length::Shrink, Length::Shrink)
        );
    }

    #[test]
    fn test_report_logs_once_per_change() {
        let unknown = Err(PropsError::UnknownCurrentId("zzz".to_string()));

        assert!(report(unknown.clone()));
        assert!(!report(unknown.clone()));
        assert!(report(Err(PropsError::EmptyId(0))));
        assert!(!report(Ok(())));
        assert!(report(unknown));
    }

    #[test]
    fn test_chrome_labels() {
        let previous = chrome_label(ChromeClass::PreviousButton, false);
        let next = chrome_label(ChromeClass::NextButton, false);
        assert!(!previous.is_empty());
        assert_ne!(previous, next);
        assert_ne!(
            chrome_label(ChromeClass::AutoplayButton, false),
            chrome_label(ChromeClass::AutoplayButton, true)
        );
        assert!(chrome_label(ChromeClass::Caption, false).is_empty());
    }

    #[test]
    fn test_local_path() {
        assert_eq!(local_path("file:///tmp/a.jpg"), "/tmp/a.jpg");
        assert_eq!(local_path("/tmp/a.jpg"), "/tmp/a.jpg");
    }
}
