//! End-to-end tests for failure reporting: from a raw D-Bus error name,
//! through the error table, to the notification gate and the log.

use std::sync::{Arc, Mutex, Once};

use iwrs::constants::{error_code, iwd};
use iwrs::{
    CallbackMessages, ErrorTableEntry, Notification, NotificationPriority, NotificationSink,
    Notifier, NotifyConfig, RemoteError, report_outcome,
};

// ---------------------------------------------------------------------------
// Log capture (same shape as in property_sync_test; each test binary
// installs its own process-global logger)
// ---------------------------------------------------------------------------

struct CaptureLogger;

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        LINES
            .lock()
            .unwrap()
            .push(format!("{}", record.args()));
    }

    fn flush(&self) {}
}

fn init_capture() {
    INIT.call_once(|| {
        log::set_logger(&CaptureLogger).unwrap();
        log::set_max_level(log::LevelFilter::Debug);
    });
}

fn logged_lines_containing(marker: &str) -> Vec<String> {
    LINES
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(marker))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Recording sink
// ---------------------------------------------------------------------------

struct MemSink(Arc<Mutex<Vec<Notification>>>);

impl NotificationSink for MemSink {
    fn dispatch(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

fn recording_notifier(disabled: bool) -> (Notifier, Arc<Mutex<Vec<Notification>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let notifier = Notifier::new(
        NotifyConfig {
            disabled,
            ..NotifyConfig::default()
        },
        Box::new(MemSink(sent.clone())),
    );
    (notifier, sent)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn daemon_error_name_maps_into_the_table() {
    let (notifier, sent) = recording_notifier(false);

    // What the bus hands back when a connection attempt is rejected.
    let err = RemoteError::from_dbus_error_name(
        &format!("{}InvalidFormat", iwd::ERROR_PREFIX),
        Some("passphrase must be 8..63 characters"),
    );
    assert_eq!(err.code, error_code::INVALID_FORMAT);

    let messages = CallbackMessages::new("Connected", "Could not connect")
        .with_error_table(vec![ErrorTableEntry::new(
            error_code::INVALID_FORMAT,
            "bad passphrase",
        )]);
    report_outcome(&Err(err), Some(&messages), &notifier);

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, "Could not connect: bad passphrase");
    assert_eq!(sent[0].priority, NotificationPriority::Normal);
}

#[test]
fn unknown_error_name_falls_back_to_the_template() {
    let (notifier, sent) = recording_notifier(false);

    let err = RemoteError::from_dbus_error_name(
        "org.freedesktop.DBus.Error.NoReply",
        Some("timeout waiting for reply"),
    );

    let messages = CallbackMessages::new("Connected", "Could not connect")
        .with_error_table(vec![ErrorTableEntry::new(
            error_code::INVALID_FORMAT,
            "bad passphrase",
        )]);
    report_outcome(&Err(err), Some(&messages), &notifier);

    assert_eq!(sent.lock().unwrap()[0].body, "Could not connect");
}

#[test]
fn disabled_gate_keeps_the_log_line() {
    init_capture();
    let (notifier, sent) = recording_notifier(true);

    let marker = "gated-failure-5b19";
    let err = RemoteError::from_dbus_error_name(
        &format!("{}Busy", iwd::ERROR_PREFIX),
        Some(marker),
    );

    let messages = CallbackMessages::new("Connected", "Could not connect")
        .with_error_table(vec![ErrorTableEntry::new(err.code, "device is busy")]);
    report_outcome(&Err(err), Some(&messages), &notifier);

    // No notification, but the raw error text still reaches the log.
    assert!(sent.lock().unwrap().is_empty());
    assert_eq!(logged_lines_containing(marker).len(), 1);
}

#[test]
fn disabled_gate_also_suppresses_success_text() {
    let (notifier, sent) = recording_notifier(true);
    let messages = CallbackMessages::new("Connected", "Could not connect");

    report_outcome(&Ok(()), Some(&messages), &notifier);

    assert!(sent.lock().unwrap().is_empty());
}

#[test]
fn failure_is_logged_even_when_notified() {
    init_capture();
    let (notifier, sent) = recording_notifier(false);

    let marker = "logged-and-notified-c3d8";
    let err = RemoteError::from_dbus_error_name(
        &format!("{}Failed", iwd::ERROR_PREFIX),
        Some(marker),
    );

    let messages = CallbackMessages::new("Connected", "Could not connect");
    report_outcome(&Err(err), Some(&messages), &notifier);

    assert_eq!(sent.lock().unwrap().len(), 1);
    assert_eq!(logged_lines_containing(marker).len(), 1);
}
