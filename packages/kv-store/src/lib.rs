//! Host key-value contract for saveslot.
//!
//! This is the narrow waist between the persistence bridge and whatever the
//! host actually uses for durable storage. Everything at this level is a
//! string-valued get/set by string key - no byte interpretation, no slot
//! semantics, no lifecycle rules. Those belong to `saveslot-bridge`.
//!
//! Use this layer for:
//! - Plugging a host store (browser local storage shim, file directory,
//!   test double) under the bridge without touching bridge code
//! - Keeping transport errors separate from bridge semantics
//!
//! # Example
//!
//! ```rust
//! use saveslot_kv_store::{KvGet, KvSet, KvError};
//! use std::collections::BTreeMap;
//!
//! struct MapKv {
//!     data: BTreeMap<String, String>,
//! }
//!
//! impl KvGet for MapKv {
//!     fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
//!         Ok(self.data.get(key).cloned())
//!     }
//! }
//!
//! impl KvSet for MapKv {
//!     fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
//!         self.data.insert(key.to_string(), value);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! Two ready-made stores ship with the crate: [`InMemoryKv`] (shared-view,
//! for tests and hosts without durable storage) and [`DiskKv`] (one file per
//! key under a root directory).

mod error;
mod in_memory;
mod local_disk;
mod traits;

pub use error::KvError;
pub use in_memory::InMemoryKv;
pub use local_disk::DiskKv;
pub use traits::{KvGet, KvSet, KvStore};
