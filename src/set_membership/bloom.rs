use crate::error::ConfigError;
use crate::hash::{iter_hashes, SeededHash, Xxh3Hash};
use crate::set_membership::SetMembership;
use fixedbitset::FixedBitSet;
use log::trace;
use std::fmt::{Debug, Formatter};

pub const DEFAULT_BITS_PER_KEY: usize = 10;
pub const DEFAULT_NUM_HASHES: usize = 3;

/// Bloom filter built once over a batch of keys.
///
/// The bit array holds `bits_per_key * keys.len()` bits (10 per key by default)
/// and every key sets `num_hashes` of them (3 by default). There is no insert
/// after construction and no deletion: a set bit is never cleared.
///
/// A filter built from no keys has no bits and rejects every query.
#[derive(Clone)]
pub struct BloomFilter<H = Xxh3Hash> {
    bits: FixedBitSet,
    num_hashes: usize,
    hasher: H,
}

impl BloomFilter {
    pub fn new<K: AsRef<[u8]>>(keys: &[K]) -> Self {
        Self::with_hasher(keys, Xxh3Hash)
    }
}

impl<H: SeededHash> BloomFilter<H> {
    pub fn with_hasher<K: AsRef<[u8]>>(keys: &[K], hasher: H) -> Self {
        Self::build(
            keys,
            keys.len() * DEFAULT_BITS_PER_KEY,
            DEFAULT_NUM_HASHES,
            hasher,
        )
    }

    pub fn with_params<K: AsRef<[u8]>>(
        keys: &[K],
        bits_per_key: usize,
        num_hashes: usize,
        hasher: H,
    ) -> Result<Self, ConfigError> {
        if bits_per_key == 0 {
            return Err(ConfigError::ZeroBitsPerKey);
        }
        if num_hashes == 0 {
            return Err(ConfigError::ZeroHashes);
        }
        let num_bits = keys
            .len()
            .checked_mul(bits_per_key)
            .ok_or(ConfigError::SizeOverflow)?;
        Ok(Self::build(keys, num_bits, num_hashes, hasher))
    }

    fn build<K: AsRef<[u8]>>(keys: &[K], num_bits: usize, num_hashes: usize, hasher: H) -> Self {
        let mut filter = Self {
            bits: FixedBitSet::with_capacity(num_bits),
            num_hashes,
            hasher,
        };
        for key in keys {
            filter.insert(key.as_ref());
        }
        trace!(
            "built bloom filter: keys={}, num_bits={}, num_hashes={}, ones={}",
            keys.len(),
            num_bits,
            num_hashes,
            filter.count_ones()
        );
        filter
    }

    fn insert(&mut self, bytes: &[u8]) {
        let m = self.bits.len() as u64;
        for h in iter_hashes(&self.hasher, bytes).take(self.num_hashes) {
            self.bits.insert((h % m) as usize);
        }
    }

    pub fn contains<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        let m = self.bits.len() as u64;
        if m == 0 {
            return false;
        }
        iter_hashes(&self.hasher, item.as_ref())
            .take(self.num_hashes)
            .all(|h| self.bits.contains((h % m) as usize))
    }
}

impl<H> BloomFilter<H> {
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// True when the filter has no bits, i.e. it was built from no keys.
    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    /// Estimates the number of distinct keys from the fill ratio.
    pub fn estimated_len(&self) -> f64 {
        if self.is_empty() {
            return 0.;
        }
        let m = self.bits.len() as f64;
        let k = self.num_hashes as f64;
        let ones = self.count_ones() as f64;
        -m / k * (1. - ones / m).ln()
    }

    /// Probability that an absent key hits only set bits, given the current fill.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        if self.is_empty() {
            return 0.;
        }
        let fill = self.count_ones() as f64 / self.bits.len() as f64;
        fill.powi(self.num_hashes as i32)
    }
}

impl<T, H> SetMembership<T> for BloomFilter<H>
where
    T: AsRef<[u8]> + ?Sized,
    H: SeededHash,
{
    fn contains(&self, item: &T) -> bool {
        BloomFilter::contains(self, item)
    }
}

impl<H> Debug for BloomFilter<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ num_bits: {}, num_hashes: {} }}",
            self.bits.len(),
            self.num_hashes
        )
    }
}
