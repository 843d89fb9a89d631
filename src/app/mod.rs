// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the order
//! dialog and the toast overlay.
//!
//! The `App` struct wires together the domains (browser, localization,
//! settings) and translates messages into side effects like catalog loading,
//! clipboard writes or file copies.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::browser::Browser;
use crate::forms::order::OrderData;
use crate::forms::submission::FormState;
use crate::i18n::I18n;
use crate::ui::notifications;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: Theme,
    /// `None` until a catalog has been loaded.
    browser: Option<Browser>,
    /// Order dialog, when open.
    order: Option<FormState<OrderData>>,
    window_width: f32,
    is_loading: bool,
    /// Catalog requested most recently.
    catalog_path: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_catalog", &self.browser.is_some())
            .field("order_open", &self.order.is_some())
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            theme: Theme::Dark,
            browser: None,
            order: None,
            window_width: config::DEFAULT_WINDOW_WIDTH,
            is_loading: false,
            catalog_path: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous catalog
    /// loading when a path was given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme = config.general.theme_mode.iced_theme();

        let mut app = App {
            i18n,
            config,
            theme,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match flags.catalog_path {
            Some(path) => update::load_catalog(&mut app.update_context(), path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.catalog_path {
            Some(path) if self.browser.is_some() => {
                let file_name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_default();
                format!("{file_name} - {app_name}")
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Heading shown above the gallery.
    fn gallery_title(&self) -> String {
        self.config
            .browser
            .title
            .clone()
            .unwrap_or_else(|| self.i18n.tr("gallery-title-default"))
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            browser_config: &self.config.browser,
            browser: &mut self.browser,
            order: &mut self.order,
            is_loading: &mut self.is_loading,
            catalog_path: &mut self.catalog_path,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.update_context(), gallery_message)
            }
            Message::OrderForm(form_message) => {
                update::handle_order_message(&mut self.update_context(), form_message)
            }
            Message::KeyPressed(key) => update::handle_key(&mut self.update_context(), key),
            Message::CatalogLoaded { path, result } => {
                update::handle_catalog_loaded(&mut self.update_context(), &path, result)
            }
            Message::CatalogDialogResult(path) => {
                update::handle_catalog_dialog_result(&mut self.update_context(), path)
            }
            Message::DownloadDialogResult { source, target } => {
                update::handle_download_dialog_result(source, target)
            }
            Message::DownloadCompleted(result) => {
                update::handle_download_completed(&mut self.update_context(), result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            browser: self.browser.as_ref(),
            order: self.order.as_ref(),
            notifications: &self.notifications,
            title: self.gallery_title(),
            window_width: self.window_width,
            is_loading: self.is_loading,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::browser::ModalKey;
    use crate::domain::catalog::{Catalog, Item, ItemId};
    use crate::error::{CatalogError, Error};
    use crate::forms::order::{
        ADDRESS, CITY, COUNTRY, EMAIL, FIRST_NAME, LAST_NAME, PHONE, POSTAL_CODE,
    };
    use crate::forms::submission::{self, SubmissionState};
    use crate::ui::gallery;
    use crate::ui::notifications::Severity;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("1", "Red Hammer", "tools")
                .with_price("12 €")
                .with_image_url("https://example.com/hammer.jpg"),
            Item::new("2", "Blue Chair", "furniture"),
            Item::new("3", "Green Lamp", "furniture"),
        ])
        .unwrap()
    }

    fn loaded_app() -> App {
        let mut app = App::default();
        let path = PathBuf::from("catalog.toml");
        app.catalog_path = Some(path.clone());
        let _ = app.update(Message::CatalogLoaded {
            path,
            result: Ok(catalog()),
        });
        app
    }

    fn gallery(app: &mut App, message: gallery::Message) {
        let _ = app.update(Message::Gallery(message));
    }

    fn last_toast_key(app: &App) -> Option<String> {
        app.notifications
            .visible()
            .next()
            .map(|notification| notification.message_key().to_string())
    }

    #[test]
    fn default_app_has_no_catalog() {
        let app = App::default();
        assert!(app.browser.is_none());
        assert!(!app.is_loading);
        assert_eq!(app.window_width, config::DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn loaded_catalog_creates_browser() {
        let app = loaded_app();
        let browser = app.browser.as_ref().expect("browser");
        assert_eq!(browser.summary().total, 3);
        assert!(!app.is_loading);
        assert_eq!(
            app.title(),
            format!("catalog.toml - {}", app.i18n.tr("window-title"))
        );
    }

    #[test]
    fn stale_catalog_results_are_ignored() {
        let mut app = App::default();
        app.catalog_path = Some(PathBuf::from("newer.toml"));
        app.is_loading = true;
        let _ = app.update(Message::CatalogLoaded {
            path: PathBuf::from("older.toml"),
            result: Ok(catalog()),
        });
        assert!(app.browser.is_none());
        assert!(app.is_loading);
    }

    #[test]
    fn catalog_errors_raise_error_toast() {
        let mut app = App::default();
        let path = PathBuf::from("broken.toml");
        app.catalog_path = Some(path.clone());
        let _ = app.update(Message::CatalogLoaded {
            path,
            result: Err(Error::Catalog(CatalogError::DuplicateId("7".into()))),
        });

        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "error-catalog-duplicate-id");
        assert_eq!(toast.borrowed_args(), vec![("id", "7")]);
        assert!(app.browser.is_none());
    }

    #[test]
    fn io_errors_use_generic_key() {
        let mut app = App::default();
        let path = PathBuf::from("missing.toml");
        app.catalog_path = Some(path.clone());
        let _ = app.update(Message::CatalogLoaded {
            path,
            result: Err(Error::Io("not found".into())),
        });
        assert_eq!(
            last_toast_key(&app).as_deref(),
            Some("notification-catalog-load-error")
        );
    }

    #[test]
    fn successful_reload_clears_catalog_errors() {
        let mut app = App::default();
        let path = PathBuf::from("catalog.toml");
        app.catalog_path = Some(path.clone());
        let _ = app.update(Message::CatalogLoaded {
            path: path.clone(),
            result: Err(Error::Io("busy".into())),
        });
        assert!(app.notifications.has_notifications());

        let _ = app.update(Message::CatalogLoaded {
            path,
            result: Ok(catalog()),
        });
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn window_resize_updates_width() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(700.0, 500.0)));
        assert_eq!(app.window_width, 700.0);
    }

    #[test]
    fn like_toggle_shows_toast() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::ToggleLike(ItemId::new("2")));
        assert!(app.browser.as_ref().unwrap().is_liked(&ItemId::new("2")));
        assert_eq!(last_toast_key(&app).as_deref(), Some("notification-liked"));

        gallery(&mut app, gallery::Message::ToggleLike(ItemId::new("2")));
        assert_eq!(last_toast_key(&app).as_deref(), Some("notification-unliked"));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn share_shows_link_copied_toast() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::Share(ItemId::new("1")));
        assert_eq!(
            last_toast_key(&app).as_deref(),
            Some("notification-link-copied")
        );
    }

    #[test]
    fn downloading_remote_image_warns() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::Download(ItemId::new("1")));
        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(toast.message_key(), "notification-download-remote");
    }

    #[test]
    fn download_result_reports_outcome() {
        let mut app = App::default();
        let _ = app.update(Message::DownloadCompleted(Ok(PathBuf::from("/tmp/a.jpg"))));
        let toast = app.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-download-saved");
        assert_eq!(toast.borrowed_args(), vec![("file", "a.jpg")]);

        let _ = app.update(Message::DownloadCompleted(Err(Error::Io("denied".into()))));
        assert_eq!(
            last_toast_key(&app).as_deref(),
            Some("notification-download-failed")
        );
    }

    #[test]
    fn escape_closes_viewer() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::OpenItem(ItemId::new("2")));
        assert!(app.browser.as_ref().unwrap().navigator().is_open());

        let _ = app.update(Message::KeyPressed(ModalKey::ArrowRight));
        assert_eq!(
            app.browser.as_ref().unwrap().selected_item().map(|item| item.id.as_str()),
            Some("3")
        );

        let _ = app.update(Message::KeyPressed(ModalKey::Escape));
        assert!(!app.browser.as_ref().unwrap().navigator().is_open());
    }

    #[test]
    fn order_opens_prefilled_dialog() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::Order(ItemId::new("1")));
        let form = app.order.as_ref().expect("order dialog");
        assert_eq!(form.data.product_title, "Red Hammer");
        assert_eq!(form.data.product_price, "12 €");
    }

    #[test]
    fn order_without_price_is_ignored() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::Order(ItemId::new("2")));
        assert!(app.order.is_none());
    }

    #[test]
    fn escape_closes_order_dialog_before_viewer() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::OpenItem(ItemId::new("1")));
        gallery(&mut app, gallery::Message::Order(ItemId::new("1")));
        assert!(app.order.is_some());

        let _ = app.update(Message::KeyPressed(ModalKey::ArrowRight));
        assert_eq!(
            app.browser.as_ref().unwrap().selected_item().map(|item| item.id.as_str()),
            Some("1")
        );

        let _ = app.update(Message::KeyPressed(ModalKey::Escape));
        assert!(app.order.is_none());
        assert!(app.browser.as_ref().unwrap().navigator().is_open());
    }

    #[test]
    fn invalid_order_stays_open_with_errors() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::Order(ItemId::new("1")));
        let _ = app.update(Message::OrderForm(submission::Message::Submit));

        let form = app.order.as_ref().expect("order dialog");
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.errors().is_empty());
    }

    #[test]
    fn order_submission_lifecycle() {
        let mut app = loaded_app();
        gallery(&mut app, gallery::Message::Order(ItemId::new("1")));
        for (field, value) in [
            (FIRST_NAME, "Jane"),
            (LAST_NAME, "Doe"),
            (EMAIL, "jane@example.com"),
            (PHONE, "+15551234567"),
            (ADDRESS, "1 Main Street"),
            (CITY, "Springfield"),
            (POSTAL_CODE, "12345"),
            (COUNTRY, "USA"),
        ] {
            let _ = app.update(Message::OrderForm(submission::Message::FieldChanged(
                field,
                value.to_string(),
            )));
        }

        let _ = app.update(Message::OrderForm(submission::Message::Submit));
        assert!(app.order.as_ref().unwrap().is_submitting());

        // Closing is refused while the submission is in flight.
        let _ = app.update(Message::KeyPressed(ModalKey::Escape));
        assert!(app.order.is_some());

        let _ = app.update(Message::OrderForm(submission::Message::Finished));
        assert_eq!(
            app.order.as_ref().unwrap().state(),
            SubmissionState::Submitted
        );
        assert_eq!(
            last_toast_key(&app).as_deref(),
            Some("notification-order-submitted")
        );

        let _ = app.update(Message::OrderForm(submission::Message::Close));
        assert!(app.order.is_none());
    }

    #[test]
    fn gallery_title_prefers_config() {
        let mut app = App::default();
        assert_eq!(app.gallery_title(), app.i18n.tr("gallery-title-default"));
        app.config.browser.title = Some("Shop".into());
        assert_eq!(app.gallery_title(), "Shop");
    }

    #[test]
    fn tick_without_toasts_is_harmless() {
        let mut app = App::default();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(!app.notifications.has_notifications());
    }
}
