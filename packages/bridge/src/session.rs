//! In-memory session state: the read/write cursor machine.
//!
//! A session does no I/O. Reading walks a snapshot fetched by the caller;
//! writing accumulates bytes for the caller to flush. The bridge owns the
//! session and decides when bytes actually hit storage.

use bytes::{Bytes, BytesMut};

/// Outcome of a single read.
///
/// Reading never fails; exhaustion and the no-session case are values, not
/// errors, because the byte stream has no explicit end-of-stream signal and
/// callers track expected length themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadByte {
    /// The next byte of the record.
    Byte(u8),
    /// The cursor is past the end of the record.
    EndOfStream,
    /// No read session is open.
    NoSession,
}

impl ReadByte {
    /// Coerce to the legacy numeric contract: the byte itself, or `0` for
    /// both [`EndOfStream`](ReadByte::EndOfStream) and
    /// [`NoSession`](ReadByte::NoSession).
    pub fn value(self) -> u8 {
        match self {
            ReadByte::Byte(b) => b,
            ReadByte::EndOfStream | ReadByte::NoSession => 0,
        }
    }
}

/// The active session, if any: a read cursor or a write buffer.
///
/// At most one exists per bridge. There is no transition between the two
/// kinds; the bridge replaces one with the other on open.
#[derive(Debug)]
pub(crate) enum Session {
    Reading {
        content: Bytes,
        /// Monotonically non-decreasing; advances even past the end.
        index: usize,
    },
    Writing {
        buffer: BytesMut,
    },
}

impl Session {
    pub(crate) fn reader(content: Bytes) -> Self {
        Session::Reading { content, index: 0 }
    }

    pub(crate) fn writer() -> Self {
        Session::Writing {
            buffer: BytesMut::new(),
        }
    }

    /// Read the byte at the cursor and advance it.
    ///
    /// Past-the-end reads keep advancing the cursor and yield
    /// [`ReadByte::EndOfStream`]. On a write session this is
    /// [`ReadByte::NoSession`] with no side effect.
    pub(crate) fn read_byte(&mut self) -> ReadByte {
        match self {
            Session::Reading { content, index } => {
                let result = match content.get(*index) {
                    Some(&b) => ReadByte::Byte(b),
                    None => ReadByte::EndOfStream,
                };
                *index += 1;
                result
            }
            Session::Writing { .. } => ReadByte::NoSession,
        }
    }

    /// Append a byte to the write buffer.
    ///
    /// Returns the accumulated buffer on success, `None` on a read session.
    pub(crate) fn write_byte(&mut self, value: u8) -> Option<&[u8]> {
        match self {
            Session::Writing { buffer } => {
                buffer.extend_from_slice(&[value]);
                Some(&buffer[..])
            }
            Session::Reading { .. } => None,
        }
    }
}
