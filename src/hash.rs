use siphasher::sip::SipHasher13;
use std::hash::Hasher;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// A 64-bit hash over raw bytes, parameterized by a seed.
///
/// Implementations must be deterministic across runs and processes: filters
/// rely on recomputing the same positions for a key long after it was stored.
pub trait SeededHash {
    fn hash(&self, bytes: &[u8], seed: u64) -> u64;
}

/// XXH3-64. The default hash for every filter in this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Xxh3Hash;

impl SeededHash for Xxh3Hash {
    fn hash(&self, bytes: &[u8], seed: u64) -> u64 {
        xxh3_64_with_seed(bytes, seed)
    }
}

/// SipHash-1-3 keyed by the seed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SipHash13;

impl SeededHash for SipHash13 {
    fn hash(&self, bytes: &[u8], seed: u64) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(seed, !seed);
        hasher.write(bytes);
        hasher.finish()
    }
}

/// Derives an unbounded sequence of hash values from a single 64-bit hash of
/// `bytes`, using enhanced double hashing.
pub(crate) fn iter_hashes<H>(hasher: &H, bytes: &[u8]) -> impl Iterator<Item = u64>
where
    H: SeededHash + ?Sized,
{
    let hash = hasher.hash(bytes, 0);
    let h1 = hash >> 32;
    let h2 = hash & 0xffff_ffff;

    (1..u64::MAX).map(move |i| {
        h1.wrapping_add(h2.wrapping_mul(i))
            .wrapping_add(i.wrapping_mul(i).wrapping_mul(i))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_across_instances() {
        assert_eq!(Xxh3Hash.hash(b"ann", 7), Xxh3Hash.hash(b"ann", 7));
        assert_eq!(SipHash13.hash(b"ann", 7), SipHash13.hash(b"ann", 7));
    }

    #[test]
    fn test_seed_changes_hash() {
        assert_ne!(Xxh3Hash.hash(b"ann", 0), Xxh3Hash.hash(b"ann", 1));
        assert_ne!(SipHash13.hash(b"ann", 0), SipHash13.hash(b"ann", 1));
    }

    #[test]
    fn test_iter_hashes_distinct() {
        let hashes = iter_hashes(&Xxh3Hash, b"bob").take(3).collect::<Vec<_>>();

        assert_eq!(hashes.len(), 3);
        assert_ne!(hashes[0], hashes[1]);
        assert_ne!(hashes[1], hashes[2]);
        assert_ne!(hashes[0], hashes[2]);
    }

    #[test]
    fn test_iter_hashes_deterministic() {
        let first = iter_hashes(&SipHash13, b"cam").take(5).collect::<Vec<_>>();
        let second = iter_hashes(&SipHash13, b"cam").take(5).collect::<Vec<_>>();

        assert_eq!(first, second);
    }
}
