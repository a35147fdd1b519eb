//! saveslot-bridge: save and restore an opaque byte stream through one
//! host key-value slot.
//!
//! An embedded computation unit with no direct access to durable storage
//! persists its state by streaming bytes through a [`SaveBridge`]. The
//! bridge maps that sequential stream onto a single fixed key in a host
//! store implementing the [`saveslot_kv_store`] contract, and enforces the
//! session lifecycle: at most one read or write session open at a time,
//! opened and closed explicitly.
//!
//! The layering mirrors the components:
//!
//! - [`PersistentSlot`] - the storage adapter; byte/code-unit translation
//!   and the fixed [`SLOT_KEY`], nothing else.
//! - `Session` (internal) - the in-memory cursor state machine; no I/O.
//! - [`SaveBridge`] - the caller-owned handle combining the two, plus the
//!   [`FlushPolicy`] governing when written bytes become durable.
//!
//! # Example
//!
//! ```rust
//! use saveslot_bridge::{ReadByte, SaveBridge};
//! use saveslot_kv_store::InMemoryKv;
//!
//! let mut bridge = SaveBridge::new(InMemoryKv::new());
//! bridge.init();
//!
//! // Nothing saved yet.
//! assert!(!bridge.open_reader()?);
//!
//! // Save two bytes.
//! bridge.open_writer();
//! bridge.write_byte(72)?;
//! bridge.write_byte(105)?;
//! bridge.close()?;
//!
//! // Restore them.
//! assert!(bridge.open_reader()?);
//! assert_eq!(bridge.read_byte(), ReadByte::Byte(72));
//! assert_eq!(bridge.read_byte(), ReadByte::Byte(105));
//! assert_eq!(bridge.read_byte(), ReadByte::EndOfStream);
//! bridge.close()?;
//! # Ok::<(), saveslot_bridge::Error>(())
//! ```

mod bridge;
mod error;
mod session;
mod slot;

pub use bridge::{FlushPolicy, SaveBridge};
pub use error::{Error, Result};
pub use session::ReadByte;
pub use slot::{PersistentSlot, SLOT_KEY};
