// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the zoomable view to localization and settings, and
//! translates component effects into user-facing notifications.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, BackgroundTheme, Config};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::theming;
use crate::ui::zoom_view::{self, Effect};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// How long a notification stays on screen.
const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
struct Notification {
    key: String,
    shown_at: Instant,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    zoom_view: zoom_view::State,
    background_theme: BackgroundTheme,
    dark_mode: bool,
    /// File name shown in the window title.
    image_name: Option<String>,
    notification: Option<Notification>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("image_name", &self.image_name)
            .field("phase", &self.zoom_view.phase())
            .field("scale", &self.zoom_view.transform().effective_scale())
            .field("reset_duration", &self.zoom_view.reset_duration())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the settings file, then builds the app from it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::from_config(flags, &config, config_warning)
    }

    /// Initializes application state and kicks off asynchronous image loading
    /// when a path was given on the command line.
    fn from_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let mut app = App {
            i18n,
            zoom_view: zoom_view::State::new(&config.gesture),
            background_theme: config.display.background_theme.unwrap_or_default(),
            dark_mode: config.general.theme_mode.is_dark(),
            image_name: None,
            notification: config_warning.map(Notification::new),
        };

        let task = match flags.file_path.map(PathBuf::from) {
            Some(path) => {
                app.image_name = file_name(&path);
                Task::perform(async move { media::load_image(path) }, |result| {
                    Message::ZoomView(zoom_view::Message::ImageLoaded(result))
                })
            }
            None => {
                app.zoom_view.set_image(media::sample_image());
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let image_name = match &self.image_name {
            Some(name) => name.clone(),
            None => self.i18n.tr("sample-image-label"),
        };
        format!("{image_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.dark_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_animation_subscription(self.zoom_view.is_animating()),
            subscription::create_tick_subscription(self.notification.is_some()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ZoomView(message) => match self.zoom_view.update(message) {
                Effect::None => {}
                Effect::ShowError { key } => {
                    self.notification = Some(Notification::new(key.to_string()));
                    if self.zoom_view.image().is_none() {
                        self.image_name = None;
                        self.zoom_view.set_image(media::sample_image());
                    }
                }
            },
            Message::Tick(now) => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|notification| notification.is_expired(now))
                {
                    self.notification = None;
                }
            }
            Message::DismissNotification => self.notification = None,
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            zoom_view: &self.zoom_view,
            background_theme: self.background_theme,
            dark_mode: self.dark_mode,
            notification: self.notification.as_ref().map(|n| n.key.as_str()),
        })
    }
}

impl Notification {
    fn new(key: String) -> Self {
        Self {
            key,
            shown_at: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_TIMEOUT
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
}
