//! File-backed state store.
//!
//! # Storage layout
//!
//! ```text
//! <home>/.landtitle/
//!   ledger/                      (mode 0700)
//!     <sha256(key)>.json         (one file per key, mode 0600)
//! ```
//!
//! File names are the hex SHA-256 digest of the key, so keys of any length
//! or content map to a fixed-size name. Each file holds an [`Entry`] with the
//! key itself and the hex-encoded value. Writes go to a `.json.tmp` sibling
//! and are renamed into place; scans ignore `.tmp` files.
//!
//! As with the other `_at` APIs, tests always use [`FileStore::open_at`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{io_err, StoreError};
use crate::store::{key_in_range, ScanItem, StateScan, StateStore};

/// Length of a hex SHA-256 digest.
const DIGEST_HEX_LEN: usize = 64;

/// One JSON file per key under `<home>/.landtitle/ledger/`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

/// On-disk payload of a single key.
#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    key: String,
    /// Hex-encoded value bytes.
    value: String,
}

impl FileStore {
    /// Opens (creating if needed) the ledger directory under `home`.
    pub fn open_at(home: &Path) -> Result<Self, StoreError> {
        let dir = ledger_dir_at(home);
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
            set_dir_permissions(&dir)?;
        }
        Ok(Self { dir })
    }

    /// `open_at` convenience wrapper using the user's home directory.
    pub fn open() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::HomeNotFound)?;
        Self::open_at(&home)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`. Pure, no I/O.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key_digest(key)))
    }

    /// Committed entries as `(key, path)`, sorted by key.
    fn entries(&self) -> Result<Vec<(String, PathBuf)>, StoreError> {
        let mut entries = Vec::new();
        for dir_entry in std::fs::read_dir(&self.dir).map_err(|e| io_err(&self.dir, e))? {
            let dir_entry = dir_entry.map_err(|e| io_err(&self.dir, e))?;
            let fname = dir_entry.file_name();
            let name = fname.to_string_lossy();
            let Some(stem) = name.strip_suffix(".json") else {
                continue;
            };
            if stem.len() != DIGEST_HEX_LEN || !stem.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(StoreError::InvalidKey {
                    name: name.into_owned(),
                });
            }
            let path = dir_entry.path();
            let entry = read_entry(&path)?;
            if key_digest(&entry.key) != stem {
                return Err(StoreError::CorruptEntry {
                    path,
                    reason: format!("key '{}' does not match file name", entry.key),
                });
            }
            entries.push((entry.key, path));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

/// `<home>/.landtitle/ledger/`
pub fn ledger_dir_at(home: &Path) -> PathBuf {
    home.join(".landtitle").join("ledger")
}

fn key_digest(key: &str) -> String {
    let mut h = Sha256::new();
    h.update(key.as_bytes());
    hex::encode(h.finalize())
}

fn read_entry(path: &Path) -> Result<Entry, StoreError> {
    let raw = std::fs::read(path).map_err(|e| io_err(path, e))?;
    serde_json::from_slice(&raw).map_err(|e| StoreError::CorruptEntry {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn entry_value(path: &Path, entry: &Entry) -> Result<Vec<u8>, StoreError> {
    hex::decode(&entry.value).map_err(|e| StoreError::CorruptEntry {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl StateStore for FileStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let entry = read_entry(&path)?;
        if entry.key != key {
            return Err(StoreError::CorruptEntry {
                path,
                reason: format!("holds key '{}', expected '{key}'", entry.key),
            });
        }
        entry_value(&path, &entry).map(Some)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let path = self.entry_path(key);
        let tmp = path.with_extension("json.tmp");
        let entry = Entry {
            key: key.to_owned(),
            value: hex::encode(value),
        };
        let json = serde_json::to_vec(&entry).map_err(|e| StoreError::CorruptEntry {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
        let committed = set_file_permissions(&tmp)
            .and_then(|()| std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e)));
        if committed.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        committed
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<StateScan<'_>, StoreError> {
        let mut entries = self.entries()?;
        entries.retain(|(k, _)| key_in_range(k, start, end));
        Ok(StateScan::new(entries.into_iter().map(|(key, path)| -> ScanItem {
            let entry = read_entry(&path)?;
            let bytes = entry_value(&path, &entry)?;
            Ok((key, bytes))
        })))
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
