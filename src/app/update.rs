// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery messages are applied to the [`Browser`]; the notices it reports
//! are turned into side effects here (toasts, clipboard, dialogs, file
//! copies, the order dialog).

use super::Message;
use crate::app::config::BrowserConfig;
use crate::application::browser::{Browser, ModalKey, Notice};
use crate::domain::catalog::{Catalog, ItemId};
use crate::error::{CatalogError, Error};
use crate::forms::order::OrderData;
use crate::forms::submission::{self, Effect, FormState, SUBMIT_DELAY};
use crate::i18n::I18n;
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::{Path, PathBuf};

/// File extensions offered by the open catalog dialog.
const CATALOG_EXTENSIONS: &[&str] = &["toml"];

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub browser_config: &'a BrowserConfig,
    pub browser: &'a mut Option<Browser>,
    pub order: &'a mut Option<FormState<OrderData>>,
    pub is_loading: &'a mut bool,
    pub catalog_path: &'a mut Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
}

/// Starts reading the catalog at `path`.
pub fn load_catalog(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.is_loading = true;
    *ctx.catalog_path = Some(path.clone());
    tracing::info!(path = %path.display(), "Loading catalog");

    Task::perform(
        crate::infrastructure::catalog_file::load(path.clone()),
        move |result| Message::CatalogLoaded {
            path: path.clone(),
            result,
        },
    )
}

/// Replaces the browser with a fresh one on success. On failure the
/// previous catalog, if any, stays on screen.
pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    path: &Path,
    result: Result<Catalog, Error>,
) -> Task<Message> {
    // A newer request superseded this one.
    if ctx.catalog_path.as_deref() != Some(path) {
        return Task::none();
    }
    *ctx.is_loading = false;

    match result {
        Ok(catalog) => {
            ctx.notifications.clear_with_prefix("notification-catalog-");
            ctx.notifications.clear_with_prefix("error-catalog-");
            *ctx.order = None;
            *ctx.browser = Some(Browser::new(catalog, ctx.browser_config.browser_options()));
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Catalog load failed");
            ctx.notifications.push(catalog_error_notification(&err));
        }
    }
    Task::none()
}

fn catalog_error_notification(err: &Error) -> Notification {
    match err {
        Error::Catalog(catalog_err) => {
            let notification = Notification::error(catalog_err.i18n_key());
            match catalog_err {
                CatalogError::DuplicateId(id) => notification.with_arg("id", id.as_str()),
                CatalogError::Parse(reason) => notification.with_arg("reason", reason.as_str()),
                CatalogError::EmptyId => notification,
            }
        }
        _ => Notification::error("notification-catalog-load-error"),
    }
}

/// Opens the file dialog used to pick a catalog.
pub fn handle_open_catalog_dialog(ctx: &UpdateContext<'_>) -> Task<Message> {
    let filter_name = ctx.i18n.tr("dialog-catalog-filter");
    let last_directory = ctx
        .catalog_path
        .as_ref()
        .and_then(|path| path.parent())
        .map(Path::to_path_buf);

    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter(filter_name, CATALOG_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::CatalogDialogResult,
    )
}

/// Handles the result of the open catalog dialog.
pub fn handle_catalog_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_catalog(ctx, path)
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    if matches!(message, gallery::Message::OpenCatalogDialog) {
        return handle_open_catalog_dialog(ctx);
    }
    let Some(browser) = ctx.browser.as_mut() else {
        return Task::none();
    };

    match gallery::update(browser, message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::OpenCatalogDialog => handle_open_catalog_dialog(ctx),
        GalleryEvent::Notice(notice) => handle_notice(ctx, notice),
    }
}

/// Routes a viewer key: the order dialog takes precedence over the viewer.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: ModalKey) -> Task<Message> {
    if ctx.order.is_some() {
        return match key {
            ModalKey::Escape => handle_order_message(ctx, submission::Message::Close),
            ModalKey::ArrowLeft | ModalKey::ArrowRight => Task::none(),
        };
    }
    handle_gallery_message(ctx, gallery::Message::Key(key))
}

fn handle_notice(ctx: &mut UpdateContext<'_>, notice: Notice) -> Task<Message> {
    match notice {
        // Logged by the browser; nothing else to do.
        Notice::ItemViewed(_) | Notice::Navigated(_) | Notice::ViewerClosed => Task::none(),
        Notice::LikeToggled { id, liked } => {
            let title = item_title(ctx, &id);
            let key = if liked {
                "notification-liked"
            } else {
                "notification-unliked"
            };
            ctx.notifications.push(
                Notification::info(key)
                    .with_arg("title", title)
                    .about(&id),
            );
            Task::none()
        }
        Notice::ShareRequested(id) => handle_share(ctx, &id),
        Notice::DownloadRequested(id) => handle_download_request(ctx, &id),
        Notice::OrderRequested(id) => {
            let item = ctx
                .browser
                .as_ref()
                .and_then(|browser| browser.catalog().get(&id));
            if let Some(item) = item {
                *ctx.order = Some(FormState::new(OrderData::for_item(item)));
            }
            Task::none()
        }
    }
}

fn item_title(ctx: &UpdateContext<'_>, id: &ItemId) -> String {
    ctx.browser
        .as_ref()
        .and_then(|browser| browser.catalog().get(id))
        .map_or_else(|| id.as_str().to_string(), |item| item.title.clone())
}

/// Copies the item's image URL to the clipboard.
fn handle_share(ctx: &mut UpdateContext<'_>, id: &ItemId) -> Task<Message> {
    let Some(item) = ctx
        .browser
        .as_ref()
        .and_then(|browser| browser.catalog().get(id))
    else {
        return Task::none();
    };

    let link = item.image_url.clone();
    ctx.notifications.push(
        Notification::success("notification-link-copied")
            .with_arg("title", item.title.as_str())
            .about(id),
    );
    iced::clipboard::write(link)
}

/// Asks where to save a copy of a local image. Remote images only get a hint.
fn handle_download_request(ctx: &mut UpdateContext<'_>, id: &ItemId) -> Task<Message> {
    let Some(item) = ctx
        .browser
        .as_ref()
        .and_then(|browser| browser.catalog().get(id))
    else {
        return Task::none();
    };

    let Some(source) = gallery::local_image_path(&item.image_url).map(Path::to_path_buf) else {
        ctx.notifications.push(
            Notification::warning("notification-download-remote")
                .with_arg("title", item.title.as_str()),
        );
        return Task::none();
    };

    let filename = source
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    Task::perform(
        async move {
            let target = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .save_file()
                .await
                .map(|h| h.path().to_path_buf());
            (source, target)
        },
        |(source, target)| Message::DownloadDialogResult { source, target },
    )
}

/// Copies the image once a target was chosen.
pub fn handle_download_dialog_result(source: PathBuf, target: Option<PathBuf>) -> Task<Message> {
    let Some(target) = target else {
        return Task::none();
    };

    Task::perform(
        async move {
            tokio::fs::copy(&source, &target)
                .await
                .map(|_| target)
                .map_err(Error::from)
        },
        Message::DownloadCompleted,
    )
}

pub fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Image saved");
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            ctx.notifications.push(
                Notification::success("notification-download-saved").with_arg("file", name),
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "Image copy failed");
            ctx.notifications
                .push(Notification::error("notification-download-failed"));
        }
    }
    Task::none()
}

/// Feeds a form message to the open order dialog.
pub fn handle_order_message(
    ctx: &mut UpdateContext<'_>,
    message: submission::Message,
) -> Task<Message> {
    let Some(form) = ctx.order.as_mut() else {
        return Task::none();
    };

    match form.handle(message) {
        Effect::None | Effect::Invalid => Task::none(),
        Effect::StartSubmission => {
            tracing::info!(product = form.data.product_title.as_str(), "Order submitted");
            Task::perform(submission::simulate((), SUBMIT_DELAY), |()| {
                Message::OrderForm(submission::Message::Finished)
            })
        }
        Effect::Submitted => {
            ctx.notifications.push(
                Notification::success("notification-order-submitted")
                    .with_arg("title", form.data.product_title.as_str()),
            );
            Task::none()
        }
        Effect::Close => {
            *ctx.order = None;
            Task::none()
        }
    }
}
