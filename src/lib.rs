//! Approximate membership filters over string keys, plus the exact-match
//! structures they are measured against.
//!
//! Both filters answer "possibly present" or "definitely absent" and never
//! return a false negative for a stored key.
//!
//! ```
//! use lookup_filters::{BloomFilter, CuckooFilter};
//!
//! let bloom = BloomFilter::new(&["ann", "bob", "cam"]);
//! assert!(bloom.contains("bob"));
//!
//! let mut cuckoo = CuckooFilter::new(3).unwrap();
//! cuckoo.insert("bob").unwrap();
//! assert!(cuckoo.contains("bob"));
//! assert!(cuckoo.delete("bob"));
//! assert!(!cuckoo.contains("bob"));
//! ```

mod bit_vec;
pub mod error;
pub mod exact;
pub mod hash;
pub mod set_membership;

pub use error::{ConfigError, NotEnoughSpace};
pub use hash::{SeededHash, SipHash13, Xxh3Hash};
pub use set_membership::bloom::BloomFilter;
pub use set_membership::cuckoo::{CuckooFilter, CuckooFilterBuilder};
pub use set_membership::{Membership, SetMembership};
