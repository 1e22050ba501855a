//! Demo gallery: a folder of media shown through the slide widgets.

use crate::{
    fl,
    key_binds::key_press_handler,
    message::{Message, NavMessage},
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{Length, Subscription, keyboard, time, window},
    widget::{container, text},
};
use lightbox_config::LightboxConfig;
use lightbox_nav::{self as nav, Gallery};
use lightbox_widgets::{Fade, slide_view};
use std::{path::PathBuf, sync::Arc, time::Instant};

pub struct Lightbox {
    core: Core,
    config: LightboxConfig,
    config_handler: Option<Config>,
    gallery: Gallery,
    is_loading: bool,
    scan_error: Option<Arc<String>>,
    autoplay: bool,
    fade: Fade,
}

impl Lightbox {
    pub const APP_ID: &'static str = lightbox_config::APP_ID;

    fn scan(&mut self, path: PathBuf) -> Task<Action<Message>> {
        let Some((dir, select)) = nav::media_dir(&path) else {
            tracing::warn!("nothing to open at {}", path.display());
            return Task::none();
        };

        self.is_loading = true;
        self.scan_error = None;

        cosmic::task::future(async move {
            match nav::scan_dir(&dir, false).await {
                Ok(items) => Message::DirectoryScanned { items, select },
                Err(e) => Message::ScanFailed(Arc::new(e.to_string())),
            }
        })
    }

    /// Restart the fade-in and retitle after the slide changed.
    fn slide_changed(&mut self) -> Task<Action<Message>> {
        self.fade.set_speed(self.config.transition_speed);
        self.fade.restart(Instant::now());

        let title = match self.gallery.current_id() {
            Some(id) => format!("{} - {}", id, fl!("app-title")),
            None => fl!("app-title"),
        };

        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }

    fn navigate(&mut self, nav_msg: NavMessage) -> Task<Action<Message>> {
        let moved = match nav_msg {
            NavMessage::Next(id) => self.gallery.next_after(&id).is_some(),
            NavMessage::Previous(id) => self.gallery.previous_before(&id).is_some(),
            NavMessage::Select(id) => {
                let found = self.gallery.select(&id).is_some();
                if !found {
                    tracing::debug!(%id, "selected id is not in the gallery");
                }
                found
            }
            NavMessage::NextCurrent => self.gallery.go_next().is_some(),
            NavMessage::PreviousCurrent => self.gallery.go_previous().is_some(),
            NavMessage::First => self.gallery.first().is_some(),
            NavMessage::Last => self.gallery.last().is_some(),
        };

        if moved {
            self.slide_changed()
        } else {
            Task::none()
        }
    }

    fn save_config(&self) {
        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            tracing::warn!("failed to save config: {e}");
        }
    }

    fn empty_view(&self) -> Element<'_, Message> {
        let label = match &self.scan_error {
            Some(error) => fl!("scan-failed", error = error.as_str()),
            None => fl!("no-media"),
        };

        container(text(label))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }
}

impl Application for Lightbox {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let (config, config_handler) = lightbox_config::load();

        let mut app = Self {
            core,
            fade: Fade::new(config.transition_speed),
            config,
            config_handler,
            gallery: Gallery::new(),
            is_loading: false,
            scan_error: None,
            autoplay: false,
        };

        let mut tasks = Vec::new();

        if let Some(id) = app.core.main_window_id() {
            tasks.push(app.set_window_title(fl!("app-title"), id));
        }

        match flags.or_else(dirs::picture_dir) {
            Some(path) => tasks.push(app.scan(path)),
            None => tracing::info!("no folder given and no pictures directory"),
        }

        (app, Task::batch(tasks))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let Some(current) = self.gallery.current() else {
            if self.is_loading {
                return slide_view(None, &[], "").into();
            }
            return self.empty_view();
        };

        slide_view(Some(current.source.as_str()), self.gallery.items(), &current.id)
            .caption(&current.id)
            .caption_style(&self.config.caption_style)
            .show_caption(self.config.show_caption)
            .show_thumbnails(self.config.show_thumbnails)
            .controls(self.config.show_controls)
            .transition_speed(self.config.transition_speed)
            .shown_for(self.fade.elapsed(Instant::now()))
            .swipe(self.config.swipe)
            .wheel(self.config.wheel)
            .autoplay_active(self.autoplay)
            .on_close(Message::Close)
            .on_select(|id| Message::Nav(NavMessage::Select(id)))
            .on_next(|id| Message::Nav(NavMessage::Next(id)))
            .on_previous(|id| Message::Nav(NavMessage::Previous(id)))
            .on_toggle_autoplay(Message::ToggleAutoplay)
            .into()
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::Nav(nav_msg) => self.navigate(nav_msg),
            Message::KeyBind(action) => self.update(action.message()),
            Message::DirectoryScanned { items, select } => {
                self.is_loading = false;
                self.gallery.set_items(items, select.as_deref());
                tracing::info!(count = self.gallery.total(), "gallery loaded");
                self.slide_changed()
            }
            Message::ScanFailed(error) => {
                tracing::warn!("directory scan failed: {error}");
                self.is_loading = false;
                self.scan_error = Some(error);
                Task::none()
            }
            Message::ToggleAutoplay => {
                self.autoplay = !self.autoplay;
                tracing::debug!(autoplay = self.autoplay, "slideshow toggled");
                Task::none()
            }
            Message::AutoplayTick => {
                if self.autoplay && self.gallery.go_next().is_some() {
                    self.slide_changed()
                } else {
                    Task::none()
                }
            }
            // Redraw only; the view reads the fade clock
            Message::Frame(_) => Task::none(),
            Message::Close => {
                self.save_config();
                match self.core.main_window_id() {
                    Some(id) => window::close(id),
                    None => Task::none(),
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let slideshow = if self.autoplay {
            time::every(self.config.autoplay_interval()).map(|_| Message::AutoplayTick)
        } else {
            Subscription::none()
        };

        let fade = if self.fade.is_running(Instant::now()) {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard::on_key_press(key_press_handler), slideshow, fade])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.save_config();
        None
    }
}
