//! Exact-match lookup structures over the same key batch the filters are built
//! from. They return the position of a key rather than a probabilistic answer
//! and serve as the ground truth filters are checked against.

pub mod hash_index;
pub mod linear;
pub mod sorted;

pub use hash_index::HashIndex;
pub use linear::LinearScan;
pub use sorted::SortedArray;
