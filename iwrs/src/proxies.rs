//! D-Bus proxy traits for iwd interfaces.
//!
//! These traits define the slice of iwd's D-Bus API this crate touches.
//! The `zbus::proxy` macro generates the proxy implementations.
//!
//! # iwd D-Bus structure
//!
//! - `/net/connman/iwd/{phy}/{dev}` - Device objects
//! - `/net/connman/iwd/{phy}/{dev}/ap` - Access-point mode objects
//!
//! Writable properties (`Powered`, `Mode`) deliberately have no setters
//! here: writes go through the property synchronizer so that rollback and
//! echo suppression apply uniformly.

use zbus::{Result, proxy};
use zvariant::OwnedObjectPath;

/// Proxy for the iwd device interface.
#[proxy(
    interface = "net.connman.iwd.Device",
    default_service = "net.connman.iwd",
    gen_blocking = false
)]
pub trait IwdDevice {
    /// The network interface name (e.g., "wlan0").
    #[zbus(property)]
    fn name(&self) -> Result<String>;

    /// MAC address of the device.
    #[zbus(property)]
    fn address(&self) -> Result<String>;

    /// Whether the device radio is powered on.
    #[zbus(property)]
    fn powered(&self) -> Result<bool>;

    /// Current operating mode: "station", "ap", or "ad-hoc".
    #[zbus(property)]
    fn mode(&self) -> Result<String>;

    /// Path to the parent adapter object.
    #[zbus(property)]
    fn adapter(&self) -> Result<OwnedObjectPath>;
}

/// Proxy for the iwd access-point interface.
///
/// Present on a device object while the device is in "ap" mode.
#[proxy(
    interface = "net.connman.iwd.AccessPoint",
    default_service = "net.connman.iwd",
    gen_blocking = false
)]
pub trait IwdAccessPoint {
    /// Starts an access point with the given SSID and passphrase.
    fn start(&self, ssid: &str, psk: &str) -> Result<()>;

    /// Stops the running access point.
    fn stop(&self) -> Result<()>;

    /// Whether an access point is currently running.
    #[zbus(property)]
    fn started(&self) -> Result<bool>;

    /// SSID of the running access point.
    #[zbus(property)]
    fn name(&self) -> Result<String>;
}
