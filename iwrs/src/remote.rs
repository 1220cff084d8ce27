//! The seam between the synchronizer and a remote property container.
//!
//! [`RemoteObject`] is what the property synchronizer needs from a D-Bus
//! proxy: a cached read and an asynchronous write. Object discovery and
//! proxy lifetime stay with the caller; the synchronizer only borrows the
//! handle for the duration of a call. The trait exists so the write path
//! can be exercised against an in-memory container in tests.

use async_trait::async_trait;

use crate::models::{PropertyValue, RemoteError};

/// A remote container of named properties.
#[async_trait]
pub trait RemoteObject {
    /// Interface the properties are defined on.
    fn interface_name(&self) -> &str;

    /// Last locally-known value of a property.
    ///
    /// Returns `None` when the cache holds no value yet; an unset cache
    /// never suppresses a write.
    fn cached_property(&self, name: &str) -> Option<PropertyValue>;

    /// Writes a property on the remote object.
    ///
    /// Resolves exactly once, with either success or the daemon's error.
    async fn set_property(&self, name: &str, value: PropertyValue)
    -> Result<(), RemoteError>;
}

#[async_trait]
impl RemoteObject for zbus::Proxy<'static> {
    fn interface_name(&self) -> &str {
        self.interface().as_str()
    }

    fn cached_property(&self, name: &str) -> Option<PropertyValue> {
        let raw = self.cached_property_raw(name)?;
        PropertyValue::from_value(&raw)
    }

    async fn set_property(&self, name: &str, value: PropertyValue)
    -> Result<(), RemoteError> {
        zbus::Proxy::set_property(self, name, value.into_value())
            .await
            .map_err(|err| RemoteError::from(zbus::Error::from(err)))
    }
}
