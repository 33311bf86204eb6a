use crate::bit_vec::BitVec;
use crate::error::{ConfigError, NotEnoughSpace};
use crate::hash::{SeededHash, Xxh3Hash};
use crate::set_membership::SetMembership;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

pub const DEFAULT_BUCKET_SIZE: usize = 4;
pub const DEFAULT_FINGERPRINT_BITS: usize = 8;
pub const DEFAULT_MAX_KICKS: usize = 500;

const MAX_FINGERPRINT_BITS: usize = 32;
const DEFAULT_RNG_SEED: u64 = 0x5eed_cafe_f00d_beef;

const INDEX_SEED: u64 = 0;
const FINGERPRINT_SEED: u64 = 1;
const ALT_INDEX_SEED: u64 = 2;

/// Cuckoo filter over `2 * capacity` buckets of `bucket_size` fingerprint slots.
///
/// Every item has two candidate buckets. The second is derived from the first
/// and the item's fingerprint alone, so a fingerprint kicked out of one bucket
/// can always be moved to its other legal bucket without knowing the key.
///
/// Deleting removes one slot matching the item's fingerprint. Two keys sharing
/// a fingerprint and a bucket are indistinguishable, so deleting one of them
/// may remove the other's presence instead.
pub struct CuckooFilter<H = Xxh3Hash, R = StdRng> {
    // Each slot is `fingerprint_bits` of fingerprint plus an occupied tag bit above them.
    table: BitVec<u64>,
    capacity: usize,
    num_buckets: usize,
    bucket_size: usize,
    fingerprint_bits: usize,
    max_kicks: usize,
    len: usize,
    hasher: H,
    rng: R,
}

impl CuckooFilter {
    /// Creates a filter with the default bucket size, fingerprint width and kick limit.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        CuckooFilterBuilder::new(capacity).build()
    }

    pub fn with_params(
        capacity: usize,
        bucket_size: usize,
        max_kicks: usize,
    ) -> Result<Self, ConfigError> {
        CuckooFilterBuilder::new(capacity)
            .bucket_size(bucket_size)
            .max_kicks(max_kicks)
            .build()
    }
}

impl<H, R> CuckooFilter<H, R> {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    pub fn fingerprint_bits(&self) -> usize {
        self.fingerprint_bits
    }

    pub fn max_kicks(&self) -> usize {
        self.max_kicks
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots across all buckets.
    pub fn slots(&self) -> usize {
        self.table.size()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots() as f64
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.len = 0;
    }

    fn occupied_tag(&self) -> u64 {
        1 << self.fingerprint_bits
    }

    fn fingerprint_mask(&self) -> u64 {
        self.occupied_tag() - 1
    }

    fn addresses(&self, index: usize) -> Range<usize> {
        index * self.bucket_size..(index + 1) * self.bucket_size
    }

    fn slot(&self, address: usize) -> Option<u32> {
        let raw = self.table.get(address);
        (raw & self.occupied_tag() != 0).then(|| (raw & self.fingerprint_mask()) as u32)
    }

    /// Stores `fingerprint` at `address` and returns what was there before.
    fn replace(&mut self, address: usize, fingerprint: u32) -> Option<u32> {
        let previous = self.slot(address);
        let raw = self.occupied_tag() | fingerprint as u64;
        self.table.set(address, raw);
        previous
    }

    fn bucket_contains(&self, index: usize, fingerprint: u32) -> bool {
        self.addresses(index)
            .any(|address| self.slot(address) == Some(fingerprint))
    }

    fn try_insert(&mut self, index: usize, fingerprint: u32) -> bool {
        match self
            .addresses(index)
            .find(|&address| self.slot(address).is_none())
        {
            Some(address) => {
                self.replace(address, fingerprint);
                true
            }
            None => false,
        }
    }
}

impl<H, R> CuckooFilter<H, R>
where
    H: SeededHash,
    R: Rng,
{
    fn index_and_fingerprint(&self, bytes: &[u8]) -> (usize, u32) {
        let index = self.hasher.hash(bytes, INDEX_SEED) % self.num_buckets as u64;
        let fingerprint = self.hasher.hash(bytes, FINGERPRINT_SEED) & self.fingerprint_mask();
        (index as usize, fingerprint as u32)
    }

    /// The other legal bucket of `fingerprint` when it sits in bucket `index`.
    ///
    /// `(h - index) mod n` is its own inverse for any `n`, so the bucket count
    /// need not be a power of two.
    fn alt_index(&self, index: usize, fingerprint: u32) -> usize {
        let n = self.num_buckets;
        let h = self.hasher.hash(&fingerprint.to_le_bytes(), ALT_INDEX_SEED) % n as u64;
        (h as usize + n - index) % n
    }

    fn candidates(&self, bytes: &[u8]) -> (usize, usize, u32) {
        let (i1, fingerprint) = self.index_and_fingerprint(bytes);
        let i2 = self.alt_index(i1, fingerprint);
        debug_assert_eq!(i1, self.alt_index(i2, fingerprint));
        (i1, i2, fingerprint)
    }

    pub fn contains<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        let (i1, i2, fingerprint) = self.candidates(item.as_ref());
        self.bucket_contains(i1, fingerprint) || self.bucket_contains(i2, fingerprint)
    }

    /// Stores the item's fingerprint, displacing existing fingerprints if both
    /// candidate buckets are full.
    ///
    /// Inserting the same item twice stores two fingerprints. On failure the
    /// table is left exactly as it was before the call.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> Result<(), NotEnoughSpace> {
        let (i1, i2, fingerprint) = self.candidates(item.as_ref());

        if self.try_insert(i1, fingerprint) || self.try_insert(i2, fingerprint) {
            self.len += 1;
            return Ok(());
        }

        let mut path = Vec::new();
        let mut index = i1;
        let mut current = fingerprint;

        for _ in 0..self.max_kicks {
            let address = index * self.bucket_size + self.rng.gen_range(0..self.bucket_size);
            path.push(address);
            match self.replace(address, current) {
                Some(evicted) => current = evicted,
                None => {
                    self.len += 1;
                    return Ok(());
                }
            }

            index = self.alt_index(index, current);
            if self.try_insert(index, current) {
                self.len += 1;
                return Ok(());
            }
        }

        // Undo the displacements so that every previously stored fingerprint
        // is back in place and only the new one is left out.
        for address in path.into_iter().rev() {
            if let Some(previous) = self.replace(address, current) {
                current = previous;
            }
        }
        debug_assert_eq!(current, fingerprint);

        debug!(
            "cuckoo insert failed after {} kicks: len={}, load_factor={:.3}",
            self.max_kicks,
            self.len,
            self.load_factor()
        );
        Err(NotEnoughSpace)
    }

    /// Clears one slot holding the item's fingerprint. Returns false if
    /// neither candidate bucket holds it.
    pub fn delete<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> bool {
        let (i1, i2, fingerprint) = self.candidates(item.as_ref());

        let found = [i1, i2]
            .into_iter()
            .flat_map(|index| self.addresses(index))
            .find(|&address| self.slot(address) == Some(fingerprint));

        match found {
            Some(address) => {
                self.table.set(address, 0);
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}

impl<T, H, R> SetMembership<T> for CuckooFilter<H, R>
where
    T: AsRef<[u8]> + ?Sized,
    H: SeededHash,
    R: Rng,
{
    fn contains(&self, item: &T) -> bool {
        CuckooFilter::contains(self, item)
    }
}

impl<H, R> std::fmt::Debug for CuckooFilter<H, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CuckooFilter {{ fingerprint_bits: {}, num_buckets: {}, bucket_size: {}, len: {} }}",
            self.fingerprint_bits, self.num_buckets, self.bucket_size, self.len
        )
    }
}

/// Configures and validates a [`CuckooFilter`].
#[derive(Debug)]
pub struct CuckooFilterBuilder<H = Xxh3Hash, R = StdRng> {
    capacity: usize,
    bucket_size: usize,
    fingerprint_bits: usize,
    max_kicks: usize,
    hasher: H,
    rng: R,
}

impl CuckooFilterBuilder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bucket_size: DEFAULT_BUCKET_SIZE,
            fingerprint_bits: DEFAULT_FINGERPRINT_BITS,
            max_kicks: DEFAULT_MAX_KICKS,
            hasher: Xxh3Hash,
            rng: StdRng::seed_from_u64(DEFAULT_RNG_SEED),
        }
    }
}

impl<H, R> CuckooFilterBuilder<H, R> {
    pub fn bucket_size(mut self, bucket_size: usize) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    pub fn fingerprint_bits(mut self, fingerprint_bits: usize) -> Self {
        self.fingerprint_bits = fingerprint_bits;
        self
    }

    pub fn max_kicks(mut self, max_kicks: usize) -> Self {
        self.max_kicks = max_kicks;
        self
    }

    pub fn hasher<H2>(self, hasher: H2) -> CuckooFilterBuilder<H2, R> {
        CuckooFilterBuilder {
            capacity: self.capacity,
            bucket_size: self.bucket_size,
            fingerprint_bits: self.fingerprint_bits,
            max_kicks: self.max_kicks,
            hasher,
            rng: self.rng,
        }
    }

    /// Source of randomness for picking which slot to evict.
    pub fn rng<R2>(self, rng: R2) -> CuckooFilterBuilder<H, R2> {
        CuckooFilterBuilder {
            capacity: self.capacity,
            bucket_size: self.bucket_size,
            fingerprint_bits: self.fingerprint_bits,
            max_kicks: self.max_kicks,
            hasher: self.hasher,
            rng,
        }
    }

    pub fn build(self) -> Result<CuckooFilter<H, R>, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        if !(1..=MAX_FINGERPRINT_BITS).contains(&self.fingerprint_bits) {
            return Err(ConfigError::FingerprintBits {
                bits: self.fingerprint_bits,
            });
        }
        if self.max_kicks == 0 {
            return Err(ConfigError::ZeroMaxKicks);
        }

        let slot_width = self.fingerprint_bits + 1;
        let num_buckets = self
            .capacity
            .checked_mul(2)
            .ok_or(ConfigError::SizeOverflow)?;
        let num_slots = num_buckets
            .checked_mul(self.bucket_size)
            .ok_or(ConfigError::SizeOverflow)?;
        num_slots
            .checked_mul(slot_width)
            .ok_or(ConfigError::SizeOverflow)?;

        trace!(
            "building cuckoo filter: num_buckets={}, bucket_size={}, fingerprint_bits={}, max_kicks={}",
            num_buckets,
            self.bucket_size,
            self.fingerprint_bits,
            self.max_kicks
        );

        Ok(CuckooFilter {
            table: BitVec::new(slot_width, num_slots),
            capacity: self.capacity,
            num_buckets,
            bucket_size: self.bucket_size,
            fingerprint_bits: self.fingerprint_bits,
            max_kicks: self.max_kicks,
            len: 0,
            hasher: self.hasher,
            rng: self.rng,
        })
    }
}
