//! File-backed host store: one file per key under a root directory.

use std::{fs, io, path};

use crate::{KvError, KvGet, KvSet};

/// A host store that keeps each key in its own file under a root directory.
///
/// The root must already exist, be a directory, and be writable; it is
/// canonicalized on construction. Keys map directly onto file names, so only
/// keys that are safe as a single path component are accepted - anything
/// else is rejected as [`KvError::InvalidKey`] rather than mangled.
pub struct DiskKv {
    root: path::PathBuf,
}

impl DiskKv {
    /// Open a store rooted at `root`.
    pub fn new(root: path::PathBuf) -> Result<DiskKv, KvError> {
        let attr = fs::metadata(&root)?;

        if !attr.is_dir() {
            return Err(KvError::Transport(
                io::Error::other("root path must be a directory").into(),
            ));
        }

        if attr.permissions().readonly() {
            return Err(KvError::Transport(
                io::Error::other("root directory must be writable").into(),
            ));
        }

        let root = root.canonicalize()?;
        Ok(DiskKv { root })
    }

    /// The canonicalized root directory.
    pub fn root(&self) -> &path::Path {
        &self.root
    }

    fn key_to_file_path(&self, key: &str) -> Result<path::PathBuf, KvError> {
        let safe = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !safe {
            return Err(KvError::InvalidKey {
                key: key.to_string(),
            });
        }

        Ok(self.root.join(key))
    }
}

impl KvGet for DiskKv {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        let file_path = self.key_to_file_path(key)?;

        match fs::read_to_string(&file_path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl KvSet for DiskKv {
    fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
        let file_path = self.key_to_file_path(key)?;

        tracing::debug!(path = %file_path.display(), len = value.len(), "writing key file");
        fs::write(&file_path, value.as_bytes())?;
        Ok(())
    }
}
