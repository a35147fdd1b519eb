//! Error types for the host key-value contract.
//!
//! Errors at this level are transport-focused. No semantic errors like
//! "record corrupt" or "no active session" - those belong to the bridge.

use thiserror::Error;

/// Errors a host key-value store can report.
///
/// An absent key is `Ok(None)` from [`KvGet::get`](crate::KvGet::get), never
/// an error.
#[derive(Debug, Error)]
pub enum KvError {
    /// Generic I/O or transport failure.
    ///
    /// File I/O errors, IPC failures, a storage shim that went away, etc.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The operation is not supported by this store.
    ///
    /// For example, writing to a read-only store.
    #[error("operation not supported")]
    NotSupported,

    /// The key is not usable by this store.
    ///
    /// Stores that map keys onto a narrower namespace (file names, say)
    /// reject keys that do not fit rather than mangling them.
    #[error("invalid key: {key}")]
    InvalidKey {
        /// The offending key.
        key: String,
    },
}

impl From<std::io::Error> for KvError {
    fn from(e: std::io::Error) -> Self {
        KvError::Transport(Box::new(e))
    }
}
