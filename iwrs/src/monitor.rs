//! Property change monitoring.
//!
//! The synchronizer deliberately does nothing on a successful write; the
//! daemon's `PropertiesChanged` signal is the one channel that confirms
//! new values to the application. This module subscribes to that signal
//! for a single iwd object and hands each change to a callback.

use futures::StreamExt;
use log::{debug, warn};
use zbus::Connection;
use zbus::fdo::PropertiesProxy;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::constants::iwd;
use crate::models::{PropertyValue, RemoteError};

/// Watches property changes on the iwd object at `path`.
///
/// The callback receives each changed property name with its new value,
/// or `None` when the daemon invalidated the property without supplying
/// one. Runs until the signal stream ends (daemon gone or connection
/// closed), which is reported as an error. Run it in a background task.
///
/// # Example
///
/// ```ignore
/// glib::MainContext::default().spawn_local(async move {
///     iwrs::watch_properties(&conn, path, |name, value| {
///         println!("{name} changed, refresh the panel");
///     })
///     .await
/// });
/// ```
pub async fn watch_properties<F>(
    conn: &Connection,
    path: OwnedObjectPath,
    callback: F,
) -> Result<()>
where
    F: Fn(&str, Option<PropertyValue>),
{
    let props = PropertiesProxy::builder(conn)
        .destination(iwd::SERVICE)?
        .path(path.clone())?
        .build()
        .await?;

    let mut stream = props.receive_properties_changed().await?;
    debug!("Subscribed to PropertiesChanged on {path}");

    while let Some(signal) = stream.next().await {
        let args = match signal.args() {
            Ok(args) => args,
            Err(e) => {
                warn!("Failed to parse PropertiesChanged args: {e}");
                continue;
            }
        };

        for (name, value) in &args.changed_properties {
            callback(name, PropertyValue::from_value(value));
        }
        for name in args.invalidated_properties.iter() {
            callback(name, None);
        }
    }

    warn!("Property change stream for {path} ended unexpectedly");
    Err(RemoteError::transport("property change stream ended"))
}
