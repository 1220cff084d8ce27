//! Validation helpers for access-point credentials.
//!
//! Checking locally before the D-Bus round trip gives the user a precise
//! message instead of the daemon's generic InvalidArguments reply.

use crate::constants::ap_limits;

/// Checks an SSID for access-point use: non-empty, at most 32 bytes.
pub(crate) fn validate_ssid(ssid: &str) -> Result<(), &'static str> {
    if ssid.is_empty() {
        return Err("SSID must not be empty");
    }
    if ssid.len() > ap_limits::SSID_MAX_BYTES {
        return Err("SSID exceeds 32 bytes");
    }
    Ok(())
}

/// Checks a WPA-PSK passphrase: 8 to 63 bytes.
pub(crate) fn validate_psk(psk: &str) -> Result<(), &'static str> {
    if psk.len() < ap_limits::PSK_MIN_BYTES {
        return Err("passphrase must be at least 8 characters");
    }
    if psk.len() > ap_limits::PSK_MAX_BYTES {
        return Err("passphrase exceeds 63 characters");
    }
    Ok(())
}

/// Validates the full credential pair for starting an access point.
pub(crate) fn validate_ap_credentials(ssid: &str, psk: &str) -> Result<(), &'static str> {
    validate_ssid(ssid)?;
    validate_psk(psk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ssid() {
        assert!(validate_ssid("MyNetwork").is_ok());
        assert!(validate_ssid("A").is_ok());
        assert!(validate_ssid(&"a".repeat(32)).is_ok());

        assert!(validate_ssid("").is_err());
        assert!(validate_ssid(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_ssid_counts_bytes_not_chars() {
        // 11 chars, 22 bytes: fine. 17 chars, 34 bytes: too long.
        assert!(validate_ssid(&"é".repeat(11)).is_ok());
        assert!(validate_ssid(&"é".repeat(17)).is_err());
    }

    #[test]
    fn test_validate_psk() {
        assert!(validate_psk("password").is_ok());
        assert!(validate_psk(&"a".repeat(63)).is_ok());

        assert!(validate_psk("").is_err());
        assert!(validate_psk("short").is_err());
        assert!(validate_psk(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_validate_ap_credentials() {
        assert!(validate_ap_credentials("MyHotspot", "password123").is_ok());
        assert_eq!(
            validate_ap_credentials("", "password123"),
            Err("SSID must not be empty")
        );
        assert_eq!(
            validate_ap_credentials("MyHotspot", "short"),
            Err("passphrase must be at least 8 characters")
        );
    }
}
