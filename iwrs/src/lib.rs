//! A Rust library for controlling the iwd wireless daemon over D-Bus.
//!
//! This crate provides the plumbing a control panel needs to keep local
//! state and iwd's D-Bus objects in agreement:
//!
//! - Pushing locally-driven property changes to the daemon, with echo
//!   suppression so that daemon-originated updates are never written back
//! - Rolling local state back when an asynchronous write fails
//! - Translating call failures into user notifications with per-call-site
//!   message templates and an error-code table
//! - Starting and stopping access-point mode on a device
//!
//! # Example
//!
//! ```no_run
//! use iwrs::Device;
//! use zvariant::OwnedObjectPath;
//!
//! # async fn example() -> iwrs::Result<()> {
//! let conn = zbus::Connection::system().await?;
//! let path = OwnedObjectPath::try_from("/net/connman/iwd/0/4").unwrap();
//! let device = Device::new(&conn, path).await?;
//!
//! // Toggle the device off; if the daemon rejects the write, the closure
//! // runs so the caller can restore its widget to the previous state.
//! device.set_powered(false, || println!("write rejected, reverting")).await;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Setup operations (building proxies) return `Result<T, RemoteError>`.
//! Failures of in-flight writes and calls are never propagated to the
//! caller: they are logged, optionally surfaced as a notification through
//! the [`Notifier`] gate, and resolved by running the caller's rollback
//! closure. There is no retry; re-attempting is the user's action.
//!
//! # Concurrency
//!
//! The library is single-threaded in spirit: every operation is a future
//! the caller drives on its own event loop (for a GTK panel, via
//! `glib::MainContext::spawn_local`). A write resolves exactly once and is
//! never cancelled or timed out. Concurrent writes to the same property are
//! not coalesced or sequenced; their completions may land in either order.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. Every failed
//! remote call produces one diagnostic line with the property or call name
//! and the daemon's error text, whether or not a notification was shown.

// Internal implementation modules
mod monitor;
mod proxies;
mod utils;

// Public API modules
pub mod access_point;
pub mod constants;
pub mod device;
pub mod models;
pub mod notify;
pub mod property_sync;
pub mod remote;
pub mod validation;

// Re-exported public API
pub use access_point::AccessPoint;
pub use device::{Device, DeviceMode};
pub use models::{ErrorDomain, PropertyValue, RemoteError};
pub use monitor::watch_properties;
pub use notify::{
    Notification, NotificationPriority, NotificationSink, Notifier, NotifyConfig,
};
pub use property_sync::{PendingWrite, set_remote_property};
pub use remote::RemoteObject;
pub use validation::{CallbackMessages, ErrorTableEntry, log_outcome, report_outcome};

/// A specialized `Result` type for daemon operations.
pub type Result<T> = std::result::Result<T, RemoteError>;
