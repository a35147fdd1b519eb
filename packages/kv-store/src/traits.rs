//! Core traits for the host key-value contract.

use crate::KvError;

/// Read a string value by string key.
///
/// This is the read half of the host contract. Keys and values are opaque
/// strings; no interpretation happens here.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn KvGet>`.
pub trait KvGet: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The key has never been set (not an error condition).
    /// * `Ok(Some(value))` - The stored value.
    /// * `Err(KvError)` - A transport or system error occurred.
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError>;
}

/// Write a string value by string key.
///
/// This is the write half of the host contract. A set fully replaces any
/// previous value under the key; durability on return is whatever the host
/// store guarantees.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn KvSet>`.
pub trait KvSet: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), KvError>;
}

/// Combined read/write host contract.
///
/// Automatically implemented for any type that implements both [`KvGet`]
/// and [`KvSet`].
pub trait KvStore: KvGet + KvSet {}
impl<T: KvGet + KvSet> KvStore for T {}

// Blanket implementations for references and boxes

impl<T: KvGet + ?Sized> KvGet for &mut T {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        (*self).get(key)
    }
}

impl<T: KvSet + ?Sized> KvSet for &mut T {
    fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
        (*self).set(key, value)
    }
}

impl<T: KvGet + ?Sized> KvGet for Box<T> {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        self.as_mut().get(key)
    }
}

impl<T: KvSet + ?Sized> KvSet for Box<T> {
    fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
        self.as_mut().set(key, value)
    }
}
