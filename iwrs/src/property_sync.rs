//! Remote property synchronization.
//!
//! When the daemon changes a property, the update handler pushes the new
//! value into whatever local state mirrors it (typically a widget), and the
//! local change handler calls back into [`set_remote_property`]. The
//! equality check against the proxy's cached value keeps such an update
//! from being volleyed back to the daemon as an outgoing write; only
//! genuinely local changes go out.
//!
//! A write, once issued, always resolves exactly once: there is no
//! cancellation, no timeout, and no retry. Concurrent writes to the same
//! property are not coalesced or sequenced; if two are in flight their
//! completions may land in either order.

use log::{debug, error};

use crate::models::{PropertyValue, RemoteError};
use crate::remote::RemoteObject;

/// One in-flight property write and the rollback to run if it fails.
///
/// Constructed immediately before the write is issued and consumed by
/// [`PendingWrite::resolve`] when it completes, success or failure.
pub struct PendingWrite<F: FnOnce()> {
    interface: String,
    property: String,
    on_failure: F,
}

impl<F: FnOnce()> PendingWrite<F> {
    pub fn new(interface: &str, property: &str, on_failure: F) -> Self {
        Self {
            interface: interface.to_owned(),
            property: property.to_owned(),
            on_failure,
        }
    }

    /// Resolves the write with the outcome of the set call.
    ///
    /// On success nothing further happens here; the daemon's
    /// `PropertiesChanged` signal is what confirms the new value to the
    /// rest of the application. On failure, one diagnostic line naming the
    /// property (with its interface) and the daemon's error text is logged
    /// and the rollback callback runs, exactly once.
    pub fn resolve(self, result: Result<(), RemoteError>) {
        if let Err(err) = result {
            error!(
                "Error setting remote property '{}' on {}: {err}",
                self.property, self.interface
            );
            (self.on_failure)();
        }
    }
}

/// Pushes a locally-changed property value to the remote object.
///
/// If `value` equals the proxy's cached value for `property`, the call is a
/// no-op: the change was daemon-originated and must not be echoed back.
/// Otherwise the value is written asynchronously; the caller gets no result
/// back. On failure the error is logged and `on_failure` runs so the caller
/// can restore its local state to the last confirmed value.
pub async fn set_remote_property<R, F>(
    remote: &R,
    property: &str,
    value: PropertyValue,
    on_failure: F,
) where
    R: RemoteObject + ?Sized,
    F: FnOnce(),
{
    let interface = remote.interface_name();
    if let Some(cached) = remote.cached_property(property) {
        if cached == value {
            debug!("'{property}' on {interface} already holds the requested value, suppressing write");
            return;
        }
    }

    let pending = PendingWrite::new(interface, property, on_failure);
    let result = remote.set_property(property, value).await;
    pending.resolve(result);
}
