//! Fixed-size hash table with chained buckets.

pub mod bucket_table;

pub use bucket_table::{bucket_for, BucketHashTable, BucketView};
