//! Error types for the persistence bridge.

use thiserror::Error;

/// Errors the bridge can report.
///
/// The taxonomy is deliberately small. An absent save record is not an
/// error: `open_reader` reports it as `Ok(false)`. Reading without a session
/// is not an error either, it yields [`ReadByte::NoSession`](crate::ReadByte)
/// - only writing without a session is upgraded to an explicit failure.
#[derive(Debug, Error)]
pub enum Error {
    /// A byte was written with no write session open.
    #[error("no active write session")]
    NoActiveSession,

    /// The stored record violates the one-code-unit-per-byte invariant.
    ///
    /// Something outside this bridge put a code unit above U+00FF in the
    /// slot; the record cannot be interpreted as saved bytes.
    #[error("corrupt save record: code unit {code_unit:#x} at index {index} is not a byte")]
    CorruptRecord {
        /// The offending code unit.
        code_unit: u32,
        /// Its position in the stored string.
        index: usize,
    },

    /// The host key-value store failed.
    ///
    /// Fatal to the current operation only; the bridge does not retry.
    #[error("store error: {0}")]
    Kv(#[from] saveslot_kv_store::KvError),
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;
