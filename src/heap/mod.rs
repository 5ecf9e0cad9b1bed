//! Array-backed binary heap with configurable ordering.

pub mod min_max_heap;

pub use min_max_heap::{parent_index, HeapOrder, MinMaxHeap};
