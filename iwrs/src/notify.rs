//! The notification gate.
//!
//! Every user-visible notification this crate emits passes through a
//! [`Notifier`], the single choke point honoring the "notifications
//! disabled" setting. The setting lives in an explicit [`NotifyConfig`]
//! handed over at construction and read-only thereafter; there is no
//! process-wide flag. Delivery is behind the [`NotificationSink`] trait so
//! a GUI can plug in a desktop backend while tests record what was sent.

use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::app;

/// Notification urgency, as understood by desktop notification services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPriority {
    Low,
    Normal,
    Urgent,
}

/// A notification ready for dispatch, tagged with the application identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub app_id: String,
    pub body: String,
    pub priority: NotificationPriority,
}

/// Delivery backend for notifications.
pub trait NotificationSink {
    fn dispatch(&self, notification: Notification);
}

/// Sink that writes notifications to the log instead of the desktop.
///
/// The default backend for headless use; a panel frontend substitutes its
/// own sink.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn dispatch(&self, notification: Notification) {
        info!("notification: {}", notification.body);
    }
}

/// Notification settings, fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Suppresses all notifications when set.
    pub disabled: bool,
    /// Application identity stamped on every notification.
    pub app_id: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            app_id: app::ID.to_owned(),
        }
    }
}

/// The gate itself: configuration plus a delivery backend.
pub struct Notifier {
    config: NotifyConfig,
    sink: Box<dyn NotificationSink>,
}

impl Notifier {
    pub fn new(config: NotifyConfig, sink: Box<dyn NotificationSink>) -> Self {
        Self { config, sink }
    }

    /// Sends a notification unless notifications are disabled.
    ///
    /// When disabled, nothing is constructed and the sink is never touched.
    pub fn send(&self, text: &str, priority: NotificationPriority) {
        if self.config.disabled {
            return;
        }

        self.sink.dispatch(Notification {
            app_id: self.config.app_id.clone(),
            body: text.to_owned(),
            priority,
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NotifyConfig::default(), Box::new(LogSink))
    }
}
