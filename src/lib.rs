//! Min Priority Queue - a generic priority queue ADT backed by a binary min-heap.
//!
//! Elements of an arbitrary type are tagged with a plain `i32` priority; lower
//! priority values precede higher values in the extraction order. Insertion,
//! front removal and priority changes all run in logarithmic time over a
//! vector-backed implicit binary tree.
//!
//! The structure is single-threaded by design: every operation runs to
//! completion on the calling thread and mutation requires `&mut self`. Wrap
//! the queue in an external lock if concurrent access is needed.

pub mod data_structures;

/// Re-export main types for convenient use
pub use data_structures::MinPriorityQueue;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative priority: {0}")]
    NegativePriority(i32),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
