//! Confirmation and notification boundary.
//!
//! The controller asks for yes/no confirmations and emits notifications
//! through [`Dialogs`]; how they are presented is up to the front end.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// How long transient success notifications stay visible.
pub const AUTO_DISMISS: Duration = Duration::from_millis(2000);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A fire-and-forget message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    /// `None` means the user has to dismiss it.
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    /// Transient success message.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            body: body.into(),
            auto_dismiss: Some(AUTO_DISMISS),
        }
    }

    /// Blocking error message.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            body: body.into(),
            auto_dismiss: None,
        }
    }

    /// Informational message.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            body: body.into(),
            auto_dismiss: Some(AUTO_DISMISS),
        }
    }

    /// Check if the user must dismiss this notification.
    pub fn is_blocking(&self) -> bool {
        self.auto_dismiss.is_none()
    }
}

/// A yes/no question for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmRequest {
    /// Confirmation shown before deleting a product.
    pub fn delete(product_title: &str) -> Self {
        Self {
            title: "Are you sure?".to_string(),
            body: format!(
                "You are about to delete: {}\nThis action cannot be undone.",
                product_title
            ),
            confirm_label: "Yes, delete it!".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// Presents confirmations and notifications.
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Ask the user; `true` means confirmed.
    async fn confirm(&self, request: ConfirmRequest) -> bool;

    /// Show a notification. Must not block on user input.
    fn notify(&self, notification: Notification);
}

#[async_trait]
impl<D: Dialogs + ?Sized> Dialogs for Arc<D> {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        (**self).confirm(request).await
    }

    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
