//! Hash table with a fixed bucket count and per-bucket chains.

use std::fmt;

use serde::Serialize;

use crate::oplog::{EventSink, OperationObserver};
use crate::types::{OpEvent, StructureKind, VizError, VizResult, DEFAULT_BUCKET_COUNT};

/// Bucket for `key` in a table of `size` buckets: `((key mod size) + size) mod size`,
/// so negative keys land in `[0, size)` as well.
pub fn bucket_for(key: i64, size: usize) -> usize {
    key.rem_euclid(size as i64) as usize
}

/// One non-empty bucket in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketView<'a, V> {
    pub index: usize,
    pub entries: &'a [(i64, V)],
}

/// Hash table keyed by `i64`. The bucket count never changes after construction.
pub struct BucketHashTable<V = String> {
    buckets: Vec<Vec<(i64, V)>>,
    len: usize,
    sink: EventSink,
}

impl<V: fmt::Debug> BucketHashTable<V> {
    /// Create a table with the default 13 buckets.
    pub fn new() -> Self {
        Self::build(DEFAULT_BUCKET_COUNT)
    }

    /// Create a table with `bucket_count` buckets.
    pub fn with_buckets(bucket_count: usize) -> VizResult<Self> {
        if bucket_count == 0 {
            return Err(VizError::ZeroBuckets);
        }
        Ok(Self::build(bucket_count))
    }

    fn build(bucket_count: usize) -> Self {
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
            sink: EventSink::default(),
        }
    }

    /// Attach an observer notified on every change.
    pub fn set_observer(&mut self, observer: Box<dyn OperationObserver>) {
        self.sink.set(observer);
    }

    /// Detach and return the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn OperationObserver>> {
        self.sink.take()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket_index(&self, key: i64) -> usize {
        bucket_for(key, self.buckets.len())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Insert or overwrite. An existing key keeps its position in the bucket.
    /// Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        if let Some(slot) = bucket.iter_mut().find(|(k, _)| *k == key) {
            let message = format!("Updated key {} in bucket {} to {:?}", key, index, value);
            let old = std::mem::replace(&mut slot.1, value);
            self.sink
                .emit(OpEvent::info(StructureKind::HashTable, message));
            return Some(old);
        }
        let message = if bucket.is_empty() {
            format!("Inserted key {} => {:?} into bucket {}", key, value, index)
        } else {
            format!(
                "Collision in bucket {}: chained key {} => {:?} after {} entries",
                index,
                key,
                value,
                bucket.len()
            )
        };
        bucket.push((key, value));
        self.len += 1;
        self.sink
            .emit(OpEvent::info(StructureKind::HashTable, message));
        None
    }

    /// Look up `key`, scanning only its bucket.
    pub fn search(&self, key: i64) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.search(key).is_some()
    }

    /// Drop the pair with `key` from its bucket, returning its value.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let Some(pos) = bucket.iter().position(|(k, _)| *k == key) else {
            log::debug!("hash remove: key {} not in bucket {}", key, index);
            return None;
        };
        // `remove` rather than `swap_remove`: bucket order is observable.
        let (_, value) = bucket.remove(pos);
        self.len -= 1;
        self.sink.emit(OpEvent::info(
            StructureKind::HashTable,
            format!("Removed key {} from bucket {}", key, index),
        ));
        Some(value)
    }

    /// Non-empty buckets in index order, each with its entries in chain order.
    pub fn snapshot(&self) -> Vec<BucketView<'_, V>> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(index, bucket)| BucketView {
                index,
                entries: bucket.as_slice(),
            })
            .collect()
    }

    /// Entries of one bucket; empty for an out-of-range index.
    pub fn bucket(&self, index: usize) -> &[(i64, V)] {
        self.buckets
            .get(index)
            .map(|b| b.as_slice())
            .unwrap_or(&[])
    }

    /// Remove every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
        self.sink
            .emit(OpEvent::warning(StructureKind::HashTable, "Table cleared"));
    }
}

impl<V: fmt::Debug> Default for BucketHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for BucketHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketHashTable")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .finish()
    }
}
