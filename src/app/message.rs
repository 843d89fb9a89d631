// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::browser::ModalKey;
use crate::domain::catalog::Catalog;
use crate::error::Error;
use crate::forms::submission;
use crate::ui::gallery;
use crate::ui::notifications;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    OrderForm(submission::Message),
    Notification(notifications::NotificationMessage),
    /// Result of reading a catalog file.
    CatalogLoaded {
        path: PathBuf,
        result: Result<Catalog, Error>,
    },
    /// Result from the open catalog dialog.
    CatalogDialogResult(Option<PathBuf>),
    /// Result from the download save dialog.
    DownloadDialogResult {
        source: PathBuf,
        target: Option<PathBuf>,
    },
    /// The image copy finished.
    DownloadCompleted(Result<PathBuf, Error>),
    WindowResized(Size),
    /// A key the viewer or the order dialog reacts to.
    KeyPressed(ModalKey),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file to load on startup.
    pub catalog_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
