//! State store seam and the in-memory store.
//!
//! # Range semantics
//!
//! `scan_range(start, end)` yields entries with `start <= key < end` in
//! ascending key order. An empty bound is unbounded on that side, so
//! `scan_range("", "")` covers the whole key space.
//!
//! A scan holds an iteration resource for as long as the [`StateScan`] is
//! alive. Dropping it releases the resource, whichever way the consumer
//! stops iterating.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::StoreError;

/// One `(key, value)` pair produced by a scan.
pub type ScanItem = Result<(String, Vec<u8>), StoreError>;

/// Key-value store the registry persists titles in.
pub trait StateStore {
    /// Returns `None` when nothing is stored under `key`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    fn scan_range(&self, start: &str, end: &str) -> Result<StateScan<'_>, StoreError>;
}

/// An open range scan. Released on drop.
pub struct StateScan<'a> {
    inner: Box<dyn Iterator<Item = ScanItem> + 'a>,
}

impl<'a> StateScan<'a> {
    pub fn new(iter: impl Iterator<Item = ScanItem> + 'a) -> Self {
        Self {
            inner: Box::new(iter),
        }
    }
}

impl Iterator for StateScan<'_> {
    type Item = ScanItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// `true` if `key` falls within `[start, end)`, empty bounds being open.
pub(crate) fn key_in_range(key: &str, start: &str, end: &str) -> bool {
    (start.is_empty() || key >= start) && (end.is_empty() || key < end)
}

fn range_bounds<'k>(start: &'k str, end: &'k str) -> Option<(Bound<&'k str>, Bound<&'k str>)> {
    if !start.is_empty() && !end.is_empty() && start > end {
        return None;
    }
    let lo = if start.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start)
    };
    let hi = if end.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end)
    };
    Some((lo, hi))
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// `BTreeMap`-backed store. Keys iterate in lexicographic order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
    open_scans: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scans currently holding an iteration resource.
    pub fn open_scans(&self) -> usize {
        self.open_scans.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct ScanLease(Arc<AtomicUsize>);

impl ScanLease {
    fn acquire(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for ScanLease {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl StateStore for MemoryStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn scan_range(&self, start: &str, end: &str) -> Result<StateScan<'_>, StoreError> {
        let lease = ScanLease::acquire(&self.open_scans);
        let items: Box<dyn Iterator<Item = (&String, &Vec<u8>)> + '_> =
            match range_bounds(start, end) {
                Some(bounds) => Box::new(self.entries.range::<str, _>(bounds)),
                None => Box::new(std::iter::empty()),
            };
        Ok(StateScan::new(items.map(move |(k, v)| -> ScanItem {
            let _held = &lease;
            Ok((k.clone(), v.clone()))
        })))
    }
}
