//! Constants for the iwd D-Bus interface.
//!
//! Covers the bus names and interfaces this crate talks to, the property
//! names it synchronizes, and the table mapping iwd's D-Bus error names to
//! the numeric codes used for error-table lookups.

/// iwd bus and interface names.
pub mod iwd {
    pub const SERVICE: &str = "net.connman.iwd";
    pub const DEVICE_INTERFACE: &str = "net.connman.iwd.Device";
    pub const ACCESS_POINT_INTERFACE: &str = "net.connman.iwd.AccessPoint";

    /// Prefix shared by every error name in iwd's error domain.
    pub const ERROR_PREFIX: &str = "net.connman.iwd.";
}

/// Property names this crate reads and writes.
pub mod property {
    pub const NAME: &str = "Name";
    pub const POWERED: &str = "Powered";
    pub const MODE: &str = "Mode";
    pub const STARTED: &str = "Started";
}

/// Application identity used to tag outgoing notifications.
pub mod app {
    pub const ID: &str = "org.iwrs.panel";
}

/// Numeric codes for iwd's D-Bus errors.
///
/// iwd reports failures by error name; these codes are this crate's stable
/// handles for them, used by [`crate::ErrorTableEntry`] lookups. Code 0 is
/// reserved for errors outside the daemon's domain.
pub mod error_code {
    pub const FAILED: u32 = 1;
    pub const ABORTED: u32 = 2;
    pub const UNAVAILABLE: u32 = 3;
    pub const BUSY: u32 = 4;
    pub const INVALID_ARGUMENTS: u32 = 5;
    pub const ALREADY_EXISTS: u32 = 6;
    pub const NOT_FOUND: u32 = 7;
    pub const NOT_SUPPORTED: u32 = 8;
    pub const NO_AGENT: u32 = 9;
    pub const NOT_AVAILABLE: u32 = 10;
    pub const NOT_CONNECTED: u32 = 11;
    pub const NOT_CONFIGURED: u32 = 12;
    pub const NOT_IMPLEMENTED: u32 = 13;
    pub const SERVICE_SET_OVERLAP: u32 = 14;
    pub const ALREADY_PROVISIONED: u32 = 15;
    pub const NOT_HIDDEN: u32 = 16;
    pub const INVALID_FORMAT: u32 = 17;

    /// Maps a D-Bus error name to its daemon error code.
    ///
    /// Returns `None` for names outside iwd's error domain.
    pub fn from_error_name(name: &str) -> Option<u32> {
        let code = match name {
            "net.connman.iwd.Failed" => FAILED,
            "net.connman.iwd.Aborted" => ABORTED,
            "net.connman.iwd.Unavailable" => UNAVAILABLE,
            "net.connman.iwd.Busy" => BUSY,
            "net.connman.iwd.InvalidArguments" => INVALID_ARGUMENTS,
            "net.connman.iwd.AlreadyExists" => ALREADY_EXISTS,
            "net.connman.iwd.NotFound" => NOT_FOUND,
            "net.connman.iwd.NotSupported" => NOT_SUPPORTED,
            "net.connman.iwd.NoAgent" => NO_AGENT,
            "net.connman.iwd.NotAvailable" => NOT_AVAILABLE,
            "net.connman.iwd.NotConnected" => NOT_CONNECTED,
            "net.connman.iwd.NotConfigured" => NOT_CONFIGURED,
            "net.connman.iwd.NotImplemented" => NOT_IMPLEMENTED,
            "net.connman.iwd.ServiceSetOverlap" => SERVICE_SET_OVERLAP,
            "net.connman.iwd.AlreadyProvisioned" => ALREADY_PROVISIONED,
            "net.connman.iwd.NotHidden" => NOT_HIDDEN,
            "net.connman.iwd.InvalidFormat" => INVALID_FORMAT,
            _ => return None,
        };
        Some(code)
    }
}

/// Limits on access-point credentials, per IEEE 802.11.
pub mod ap_limits {
    pub const SSID_MAX_BYTES: usize = 32;
    pub const PSK_MIN_BYTES: usize = 8;
    pub const PSK_MAX_BYTES: usize = 63;
}
