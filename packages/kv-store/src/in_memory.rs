//! In-memory host store with shared views.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::{KvError, KvGet, KvSet};

/// An in-memory host store backed by a shared map.
///
/// Cloning does not copy the data: every clone is a view over the same
/// backing map, the way two pages share one browser local storage. Tests use
/// this to check what a fresh process would observe mid-write.
///
/// # Example
///
/// ```rust
/// use saveslot_kv_store::{InMemoryKv, KvGet, KvSet};
///
/// let mut store = InMemoryKv::new();
/// let mut other_view = store.clone();
///
/// store.set("save", "Hi".to_string()).unwrap();
/// assert_eq!(other_view.get("save").unwrap(), Some("Hi".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryKv {
    data: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryKv {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial data.
    pub fn with_data(data: BTreeMap<String, String>) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }
}

impl KvGet for InMemoryKv {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        // A poisoned lock means a panic elsewhere already tore the map's
        // invariants down with it; surface that as a transport failure.
        let data = self
            .data
            .lock()
            .map_err(|_: PoisonError<_>| KvError::Transport("lock poisoned".into()))?;
        Ok(data.get(key).cloned())
    }
}

impl KvSet for InMemoryKv {
    fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
        let mut data = self
            .data
            .lock()
            .map_err(|_: PoisonError<_>| KvError::Transport("lock poisoned".into()))?;
        data.insert(key.to_string(), value);
        Ok(())
    }
}
