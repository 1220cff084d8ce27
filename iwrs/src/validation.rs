//! Failure reporting for asynchronous daemon calls.
//!
//! Call sites that want user feedback supply a [`CallbackMessages`]: a
//! success template, a failure template, and an error table translating
//! daemon error codes into human-readable detail. [`report_outcome`] turns
//! a resolved call into a notification through the gate; [`log_outcome`] is
//! the reduced variant for failures that are rare and non-actionable, which
//! only produces a diagnostic line. In both cases the raw daemon error text
//! is always logged.

use log::error;

use crate::models::RemoteError;
use crate::notify::{NotificationPriority, Notifier};

/// Maps one daemon error code to human-readable detail text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTableEntry {
    pub code: u32,
    pub detail: String,
}

impl ErrorTableEntry {
    pub fn new(code: u32, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }
}

/// Per-call-site notification templates.
///
/// Any part may be absent: with no success text a successful call is
/// silent, with no failure text a failed call is only logged, and an empty
/// error table means the failure text is always used verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallbackMessages {
    pub success: Option<String>,
    pub failure: Option<String>,
    pub error_table: Vec<ErrorTableEntry>,
}

impl CallbackMessages {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: Some(success.into()),
            failure: Some(failure.into()),
            error_table: Vec::new(),
        }
    }

    pub fn with_error_table(mut self, table: Vec<ErrorTableEntry>) -> Self {
        self.error_table = table;
        self
    }

    /// Looks up detail text for a daemon error. First match wins.
    ///
    /// Errors outside the daemon domain never match, whatever their code.
    fn lookup_detail(&self, err: &RemoteError) -> Option<&str> {
        if !err.is_daemon() {
            return None;
        }
        self.error_table
            .iter()
            .find(|entry| entry.code == err.code)
            .map(|entry| entry.detail.as_str())
    }
}

/// Reports the outcome of a resolved daemon call.
///
/// Success emits `messages.success` (when set) at normal priority. Failure
/// emits `"<failure>: <detail>"` when the error table yields detail for the
/// error's code, or the failure text verbatim otherwise. The raw error text
/// is always written to the log, whether or not a notification was shown
/// or `messages` was supplied at all.
pub fn report_outcome(
    result: &Result<(), RemoteError>,
    messages: Option<&CallbackMessages>,
    notifier: &Notifier,
) {
    match result {
        Ok(()) => {
            if let Some(text) = messages.and_then(|m| m.success.as_deref()) {
                notifier.send(text, NotificationPriority::Normal);
            }
        }
        Err(err) => {
            if let Some(messages) = messages {
                if let Some(failure) = messages.failure.as_deref() {
                    match messages.lookup_detail(err) {
                        Some(detail) => notifier.send(
                            &format!("{failure}: {detail}"),
                            NotificationPriority::Normal,
                        ),
                        None => notifier.send(failure, NotificationPriority::Normal),
                    }
                }
            }
            error!("{err}");
        }
    }
}

/// Logs the outcome of a resolved daemon call, with no notification.
///
/// `context` names the operation so the diagnostic line stands on its own.
pub fn log_outcome(result: &Result<(), RemoteError>, context: &str) {
    if let Err(err) = result {
        error!("{context}: {err}");
    }
}
