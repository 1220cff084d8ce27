//! Device control: cached reads plus synchronized writes.
//!
//! A [`Device`] wraps one iwd device object. Reads come from the proxy's
//! property cache (the panel redraws from `PropertiesChanged`, so cached
//! values are current by construction). The two writable properties go
//! through the property synchronizer, which gives every toggle echo
//! suppression and a rollback path.

use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::constants::property;
use crate::models::PropertyValue;
use crate::property_sync::set_remote_property;
use crate::proxies::IwdDeviceProxy;

/// Operating mode of an iwd device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    Station,
    AccessPoint,
    AdHoc,
}

impl DeviceMode {
    /// The wire string iwd uses for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Station => "station",
            Self::AccessPoint => "ap",
            Self::AdHoc => "ad-hoc",
        }
    }

    /// Parses iwd's mode string. Returns `None` for unknown modes.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "station" => Some(Self::Station),
            "ap" => Some(Self::AccessPoint),
            "ad-hoc" => Some(Self::AdHoc),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One iwd device object.
pub struct Device {
    proxy: IwdDeviceProxy<'static>,
}

impl Device {
    /// Builds a device handle for the object at `path`.
    pub async fn new(conn: &Connection, path: OwnedObjectPath) -> Result<Self> {
        let proxy = IwdDeviceProxy::builder(conn).path(path)?.build().await?;
        Ok(Self { proxy })
    }

    /// The interface name (e.g., "wlan0"), if cached.
    pub fn name(&self) -> Option<String> {
        self.proxy.cached_name().ok().flatten()
    }

    /// Whether the radio is powered, if cached.
    pub fn powered(&self) -> Option<bool> {
        self.proxy.cached_powered().ok().flatten()
    }

    /// Current operating mode, if cached and recognized.
    pub fn mode(&self) -> Option<DeviceMode> {
        self.proxy
            .cached_mode()
            .ok()
            .flatten()
            .and_then(|m| DeviceMode::parse(&m))
    }

    /// Pushes a powered-state change to the daemon.
    ///
    /// A no-op when the daemon already reports this state (the toggle was
    /// driven by an incoming update). `revert` runs only if the daemon
    /// rejects the write, so the caller can flip its switch back.
    pub async fn set_powered<F: FnOnce()>(&self, powered: bool, revert: F) {
        set_remote_property(
            self.proxy.inner(),
            property::POWERED,
            PropertyValue::from(powered),
            revert,
        )
        .await;
    }

    /// Pushes a mode change to the daemon, with the same contract as
    /// [`Device::set_powered`].
    pub async fn set_mode<F: FnOnce()>(&self, mode: DeviceMode, revert: F) {
        set_remote_property(
            self.proxy.inner(),
            property::MODE,
            PropertyValue::from(mode.as_str()),
            revert,
        )
        .await;
    }
}
