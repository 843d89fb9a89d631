// SPDX-License-Identifier: MPL-2.0
//! Toast data: identity, severity and a localizable message.

use crate::app::config::{TOAST_LONG, TOAST_SHORT};
use crate::domain::catalog::ItemId;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity drives the accent color, the glyph and how long a toast stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Leading glyph rendered in the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✕",
        }
    }

    /// `None` means the toast must be dismissed by hand.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(TOAST_SHORT),
            Severity::Warning => Some(TOAST_LONG),
            Severity::Error => None,
        }
    }
}

/// A toast waiting to be shown or currently on screen.
///
/// The message is an i18n key resolved at render time, so a language
/// switch also updates toasts that are already visible. A toast may be
/// about one catalog item; a newer toast about the same item replaces it.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    subject: Option<ItemId>,
    created_at: Instant,
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            subject: None,
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a named Fluent argument, e.g. `with_arg("title", item.title)`.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Ties the toast to `item`.
    #[must_use]
    pub fn about(mut self, item: &ItemId) -> Self {
        self.subject = Some(item.clone());
        self
    }

    /// Overrides the severity's auto-dismiss delay.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn subject(&self) -> Option<&ItemId> {
        self.subject.as_ref()
    }

    /// Whether both toasts are about the same item.
    #[must_use]
    pub fn supersedes(&self, older: &Notification) -> bool {
        self.subject.is_some() && self.subject == older.subject
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Arguments borrowed in the shape `I18n::tr_with_args` expects.
    #[must_use]
    pub fn borrowed_args(&self) -> Vec<(&str, &str)> {
        self.message_args
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }

    fn dismiss_after(&self) -> Option<Duration> {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
    }

    /// Whether the toast has outlived its delay at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.dismiss_after()
            .is_some_and(|delay| now.saturating_duration_since(self.created_at) >= delay)
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_outlasts_success() {
        assert_eq!(Severity::Success.auto_dismiss_duration(), Some(TOAST_SHORT));
        assert_eq!(Severity::Info.auto_dismiss_duration(), Some(TOAST_SHORT));
        assert_eq!(Severity::Warning.auto_dismiss_duration(), Some(TOAST_LONG));
    }

    #[test]
    fn expiry_follows_severity_delay() {
        let toast = Notification::success("copied");
        let created = toast.created_at;
        assert!(!toast.is_expired_at(created));
        assert!(toast.is_expired_at(created + TOAST_SHORT));
    }

    #[test]
    fn custom_delay_overrides_severity() {
        let toast = Notification::error("stuck").auto_dismiss(Duration::from_millis(10));
        let created = toast.created_at;
        assert!(toast.is_expired_at(created + Duration::from_millis(10)));
    }

    #[test]
    fn errors_never_expire() {
        let toast = Notification::error("catalog-broken");
        assert!(!toast.is_expired_at(toast.created_at + Duration::from_secs(3600)));
    }

    #[test]
    fn arguments_are_kept_in_order() {
        let toast = Notification::info("notification-link-copied")
            .with_arg("title", "Sunset")
            .with_arg("count", "2");
        assert_eq!(toast.message_key(), "notification-link-copied");
        assert_eq!(toast.borrowed_args(), vec![("title", "Sunset"), ("count", "2")]);
    }

    #[test]
    fn only_toasts_about_the_same_item_supersede() {
        let liked = Notification::info("notification-liked").about(&ItemId::new("7"));
        let unliked = Notification::info("notification-unliked").about(&ItemId::new("7"));
        let other = Notification::info("notification-liked").about(&ItemId::new("8"));
        let general = Notification::info("notification-liked");

        assert!(unliked.supersedes(&liked));
        assert!(!other.supersedes(&liked));
        assert!(!general.supersedes(&liked));
        assert!(!general.supersedes(&Notification::info("notification-liked")));
        assert_eq!(unliked.subject().map(ItemId::as_str), Some("7"));
    }
}
