use std::fmt::{Display, Formatter};
use thiserror::Error;
use zvariant::{OwnedValue, Value};

use crate::constants::error_code;

/// A property value as exchanged with the daemon.
///
/// Boolean and string properties are the ones a control panel actually
/// toggles; anything else rides along as a raw variant. Equality on this
/// type is the sole gate that keeps a daemon-originated update from being
/// written back to the daemon as an outgoing set (echo suppression), so
/// construction normalizes: a boolean or string arriving inside a variant
/// is always unwrapped into the typed form.
#[derive(Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Str(String),
    Variant(OwnedValue),
}

impl PropertyValue {
    /// Builds a normalized value from a borrowed `zvariant` value.
    ///
    /// Returns `None` only when the value cannot be taken to an owned form
    /// (file-descriptor payloads, which iwd properties never carry).
    pub fn from_value(value: &Value<'_>) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Str(s) => Some(Self::Str(s.as_str().to_owned())),
            Value::Value(inner) => Self::from_value(inner),
            other => other.try_to_owned().ok().map(Self::Variant),
        }
    }

    /// Converts into the wire value consumed by a property-set call.
    pub fn into_value(self) -> Value<'static> {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::Str(s) => Value::Str(s.into()),
            Self::Variant(v) => v.into(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Where a remote failure originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDomain {
    /// The daemon rejected the call with one of its own error names.
    Daemon,
    /// Anything else: bus disconnects, serialization problems, unknown
    /// error names.
    Transport,
}

impl Display for ErrorDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daemon => write!(f, "daemon"),
            Self::Transport => write!(f, "transport"),
        }
    }
}

/// A failed remote call.
///
/// Carries the originating domain and a numeric code for error-table
/// lookups, plus the display message that is always logged verbatim.
/// `code` is 0 for anything outside the daemon's error domain.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub domain: ErrorDomain,
    pub code: u32,
    pub message: String,
}

impl RemoteError {
    /// Builds an error from a raw D-Bus error name and optional detail.
    ///
    /// Names inside iwd's error domain resolve to a daemon code; everything
    /// else is treated as a transport failure with code 0.
    pub fn from_dbus_error_name(name: &str, detail: Option<&str>) -> Self {
        let message = detail
            .filter(|d| !d.is_empty())
            .unwrap_or(name)
            .to_owned();
        match error_code::from_error_name(name) {
            Some(code) => Self {
                domain: ErrorDomain::Daemon,
                code,
                message,
            },
            None => Self {
                domain: ErrorDomain::Transport,
                code: 0,
                message,
            },
        }
    }

    /// A transport-domain error with no daemon code.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            domain: ErrorDomain::Transport,
            code: 0,
            message: message.into(),
        }
    }

    pub fn is_daemon(&self) -> bool {
        self.domain == ErrorDomain::Daemon
    }
}

impl From<zbus::Error> for RemoteError {
    fn from(err: zbus::Error) -> Self {
        match &err {
            zbus::Error::MethodError(name, detail, _) => {
                Self::from_dbus_error_name(name.as_str(), detail.as_deref())
            }
            _ => Self::transport(err.to_string()),
        }
    }
}

impl From<zbus::fdo::Error> for RemoteError {
    fn from(err: zbus::fdo::Error) -> Self {
        Self::from(zbus::Error::from(err))
    }
}
