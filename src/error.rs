use thiserror::Error;

/// Rejected filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("capacity must be > 0")]
    ZeroCapacity,
    #[error("bucket_size must be > 0")]
    ZeroBucketSize,
    #[error("fingerprint_bits must be in the range [1, 32], got {bits}")]
    FingerprintBits { bits: usize },
    #[error("max_kicks must be > 0")]
    ZeroMaxKicks,
    #[error("bits_per_key must be > 0")]
    ZeroBitsPerKey,
    #[error("num_hashes must be > 0")]
    ZeroHashes,
    #[error("filter size overflows usize")]
    SizeOverflow,
}

/// Insertion gave up after the configured number of displacements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not enough space")]
pub struct NotEnoughSpace;
