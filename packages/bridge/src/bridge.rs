//! The caller-owned bridge handle tying slot and session together.

use saveslot_kv_store::KvStore;

use crate::error::{Error, Result};
use crate::session::{ReadByte, Session};
use crate::slot::PersistentSlot;

/// When accumulated write bytes reach the persistent slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushPolicy {
    /// Rewrite the full buffer to the slot on every written byte.
    ///
    /// O(n) per byte, O(n^2) per save, but every byte is durable the moment
    /// `write_byte` returns, which a second view of the store can observe
    /// mid-write.
    #[default]
    PerByte,

    /// Buffer in memory and flush once at `close`.
    ///
    /// Opt-in. Changes observable durability: a crash or a concurrent store
    /// view before close sees the previous record, not the partial write.
    OnClose,
}

/// A byte-stream save/restore bridge over one host key-value slot.
///
/// The bridge is an ordinary owned value, not ambient process state; whoever
/// holds it sequences the calls. It holds at most one session at a time -
/// opening a reader or writer replaces whatever session was active, of
/// either kind. That replacement is deliberate: the embedded unit's save and
/// restore phases never overlap, so the bridge favors the fresh session over
/// rejecting the open.
///
/// # Example
///
/// ```rust
/// use saveslot_bridge::SaveBridge;
/// use saveslot_kv_store::InMemoryKv;
///
/// let mut bridge = SaveBridge::new(InMemoryKv::new());
///
/// bridge.open_writer();
/// bridge.write_byte(72).unwrap();
/// bridge.write_byte(105).unwrap();
/// bridge.close().unwrap();
///
/// assert!(bridge.open_reader().unwrap());
/// assert_eq!(bridge.read_byte().value(), 72);
/// assert_eq!(bridge.read_byte().value(), 105);
/// bridge.close().unwrap();
/// ```
pub struct SaveBridge<S> {
    slot: PersistentSlot<S>,
    session: Option<Session>,
    flush: FlushPolicy,
}

impl<S: KvStore> SaveBridge<S> {
    /// Create a bridge over `store` with the default per-byte flush policy.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, FlushPolicy::default())
    }

    /// Create a bridge over `store` with an explicit flush policy.
    pub fn with_policy(store: S, flush: FlushPolicy) -> Self {
        Self {
            slot: PersistentSlot::new(store),
            session: None,
            flush,
        }
    }

    /// Initialization hook.
    ///
    /// Reserved extension point for hosts that need setup before the first
    /// open; currently a no-op.
    pub fn init(&mut self) {}

    /// Open a read session over the stored record.
    ///
    /// Returns `Ok(false)` and stays idle when no record has ever been
    /// saved. Any active session of either kind is discarded first, so a
    /// failed open still leaves the bridge idle. Storage failure surfaces
    /// here, never mid-stream.
    pub fn open_reader(&mut self) -> Result<bool> {
        self.session = None;

        match self.slot.load()? {
            Some(content) => {
                tracing::debug!(len = content.len(), "opened read session");
                self.session = Some(Session::reader(content));
                Ok(true)
            }
            None => {
                tracing::debug!("no save record; staying idle");
                Ok(false)
            }
        }
    }

    /// Read the next byte of the record and advance the cursor.
    ///
    /// Never fails. Past the end of the record this yields
    /// [`ReadByte::EndOfStream`] and the cursor keeps advancing; with no
    /// read session open it yields [`ReadByte::NoSession`]. Both coerce to
    /// `0` via [`ReadByte::value`]; callers track expected length
    /// themselves.
    pub fn read_byte(&mut self) -> ReadByte {
        match self.session.as_mut() {
            Some(session) => session.read_byte(),
            None => ReadByte::NoSession,
        }
    }

    /// Open a write session with an empty buffer.
    ///
    /// Always succeeds; the `true` return mirrors the boundary contract.
    /// Any active session of either kind is discarded. The stored record is
    /// untouched until the first byte is flushed.
    pub fn open_writer(&mut self) -> bool {
        tracing::debug!("opened write session");
        self.session = Some(Session::writer());
        true
    }

    /// Append a byte to the write session.
    ///
    /// Under [`FlushPolicy::PerByte`] the entire accumulated buffer is
    /// rewritten to the slot before returning. Writing with no write
    /// session open is a precondition failure,
    /// [`Error::NoActiveSession`].
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        let buffer = self
            .session
            .as_mut()
            .and_then(|session| session.write_byte(value))
            .ok_or(Error::NoActiveSession)?;

        if self.flush == FlushPolicy::PerByte {
            self.slot.store(buffer)?;
        }
        Ok(())
    }

    /// Close the active session, if any, returning the bridge to idle.
    ///
    /// Idempotent: closing with nothing open is a no-op. Under
    /// [`FlushPolicy::OnClose`] this performs the single deferred flush of
    /// a write session; that flush is the only way `close` can fail, and
    /// the session is discarded either way.
    pub fn close(&mut self) -> Result<()> {
        match self.session.take() {
            Some(Session::Writing { buffer }) if self.flush == FlushPolicy::OnClose => {
                tracing::debug!(len = buffer.len(), "flushing write session on close");
                self.slot.store(&buffer)?;
            }
            Some(_) => tracing::debug!("closed session"),
            None => {}
        }
        Ok(())
    }

    /// Get a reference to the host store.
    pub fn store(&self) -> &S {
        self.slot.inner()
    }

    /// Get a mutable reference to the host store.
    pub fn store_mut(&mut self) -> &mut S {
        self.slot.inner_mut()
    }

    /// Unwrap, returning the host store. Discards any active session.
    pub fn into_store(self) -> S {
        self.slot.into_inner()
    }
}
