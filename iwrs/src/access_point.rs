//! Access-point mode control.
//!
//! Wraps the `net.connman.iwd.AccessPoint` interface that appears on a
//! device once it is switched into "ap" mode. Start and stop are
//! fire-and-forget from the caller's point of view: the outcome is
//! reported through the notification gate with AP-specific error detail,
//! and the `Started` property (via `PropertiesChanged`) is what drives any
//! state the caller keeps.

use log::warn;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::constants::error_code;
use crate::notify::{NotificationPriority, Notifier};
use crate::proxies::IwdAccessPointProxy;
use crate::utils::validate_ap_credentials;
use crate::validation::{CallbackMessages, ErrorTableEntry, report_outcome};

const START_FAILURE: &str = "Access point could not be started";

fn start_messages() -> CallbackMessages {
    CallbackMessages::new("Access point started", START_FAILURE).with_error_table(vec![
        ErrorTableEntry::new(error_code::INVALID_FORMAT, "invalid passphrase"),
        ErrorTableEntry::new(error_code::INVALID_ARGUMENTS, "invalid SSID or passphrase"),
        ErrorTableEntry::new(error_code::ALREADY_EXISTS, "an access point is already running"),
        ErrorTableEntry::new(error_code::BUSY, "device is busy"),
        ErrorTableEntry::new(error_code::NOT_SUPPORTED, "AP mode not supported by this device"),
    ])
}

fn stop_messages() -> CallbackMessages {
    CallbackMessages::new("Access point stopped", "Access point could not be stopped")
        .with_error_table(vec![ErrorTableEntry::new(
            error_code::NOT_FOUND,
            "no access point is running",
        )])
}

/// The access-point interface of one device.
pub struct AccessPoint {
    proxy: IwdAccessPointProxy<'static>,
}

impl AccessPoint {
    /// Builds an access-point handle for the device object at `path`.
    pub async fn new(conn: &Connection, path: OwnedObjectPath) -> Result<Self> {
        let proxy = IwdAccessPointProxy::builder(conn).path(path)?.build().await?;
        Ok(Self { proxy })
    }

    /// Whether an access point is currently running, if cached.
    pub fn started(&self) -> Option<bool> {
        self.proxy.cached_started().ok().flatten()
    }

    /// Starts an access point with the given SSID and passphrase.
    ///
    /// Credentials are validated locally first; an invalid pair never
    /// reaches the bus and is reported with the precise reason. The call
    /// outcome is notified through `notifier` and logged on failure.
    pub async fn start(&self, ssid: &str, psk: &str, notifier: &Notifier) {
        if let Err(reason) = validate_ap_credentials(ssid, psk) {
            warn!("refusing to start access point: {reason}");
            notifier.send(
                &format!("{START_FAILURE}: {reason}"),
                NotificationPriority::Normal,
            );
            return;
        }

        let result: Result<()> = self.proxy.start(ssid, psk).await.map_err(Into::into);
        report_outcome(&result, Some(&start_messages()), notifier);
    }

    /// Stops the running access point, reporting the outcome through
    /// `notifier`.
    pub async fn stop(&self, notifier: &Notifier) {
        let result: Result<()> = self.proxy.stop().await.map_err(Into::into);
        report_outcome(&result, Some(&stop_messages()), notifier);
    }
}
