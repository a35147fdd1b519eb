//! The persistent slot: one fixed key, plus the byte/code-unit codec.

use bytes::Bytes;
use saveslot_kv_store::KvStore;

use crate::error::{Error, Result};

/// The fixed key addressing the one save record.
///
/// Only one record exists per store; there is no multi-slot addressing,
/// namespacing, or versioning.
pub const SLOT_KEY: &str = "save";

/// Encode saved bytes as the stored string, one code unit per byte.
///
/// Byte `b` becomes the char `U+00bb`. The mapping is total, so encoding
/// never fails.
pub(crate) fn encode_record(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Decode a stored string back into saved bytes.
///
/// Rejects any code unit above `U+00FF`: such a record was not produced by
/// this codec and has no byte interpretation.
pub(crate) fn decode_record(stored: &str) -> Result<Bytes> {
    let mut bytes = Vec::with_capacity(stored.len());
    for (index, c) in stored.chars().enumerate() {
        let code_unit = u32::from(c);
        if code_unit > 0xff {
            return Err(Error::CorruptRecord { code_unit, index });
        }
        bytes.push(code_unit as u8);
    }
    Ok(Bytes::from(bytes))
}

/// Adapter between the byte-stream abstraction and a host key-value store.
///
/// Translates between saved bytes and the host's string-valued get/set
/// contract, always under [`SLOT_KEY`]. Performs no caching: every `load`
/// and `store` goes straight to the host store, whose durability guarantees
/// are the only ones this adapter offers.
pub struct PersistentSlot<S> {
    store: S,
}

impl<S> PersistentSlot<S> {
    /// Wrap a host store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the inner host store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Get a mutable reference to the inner host store.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap, returning the inner host store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KvStore> PersistentSlot<S> {
    /// Fetch the save record.
    ///
    /// `Ok(None)` means no record has ever been stored.
    pub fn load(&mut self) -> Result<Option<Bytes>> {
        match self.store.get(SLOT_KEY)? {
            Some(stored) => Ok(Some(decode_record(&stored)?)),
            None => Ok(None),
        }
    }

    /// Replace the save record with `bytes`.
    ///
    /// Synchronous full overwrite; durable on return to whatever extent the
    /// host store is.
    pub fn store(&mut self, bytes: &[u8]) -> Result<()> {
        self.store.set(SLOT_KEY, encode_record(bytes))?;
        Ok(())
    }
}
