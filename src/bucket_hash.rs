// src/bucket_hash.rs
use xxhash_rust::xxh3::{xxh3_64_with_seed, Xxh3};

/// Identifier-to-bucket addressing strategy.
///
/// `NumericId` reproduces the historical behavior of this table: the
/// identifier's leading ASCII digits are read as an integer and reduced
/// modulo the bucket count, so numeric ids keep their range locality and
/// non-numeric ids all land in bucket 0. Whether that clustering is a
/// feature or an accident of the original data set is unresolved, so it
/// stays the default; `Bytes` is the well-distributed alternative for
/// callers whose ids are not numeric text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Leading-digit integer parse, modulo bucket count.
    NumericId,
    /// Seeded xxh3 over the raw identifier bytes, modulo bucket count.
    Bytes,
}

impl Default for KeyMode {
    fn default() -> Self {
        KeyMode::NumericId
    }
}

/// Stateless bucket hasher. Domain is configured once at construction,
/// identifiers are passed to methods.
#[derive(Debug, Clone)]
pub struct BucketHasher {
    mode: KeyMode,
    domain_seed: u64,
}

impl Default for BucketHasher {
    fn default() -> Self {
        Self::new(KeyMode::NumericId)
    }
}

impl BucketHasher {
    pub fn new(mode: KeyMode) -> Self {
        Self::with_domain(mode, b"BidTable.v1")
    }

    pub fn with_domain(mode: KeyMode, domain: &[u8]) -> Self {
        // domain_seed = xxh3_64("BIDv1" || domain) unseeded
        let mut st = Xxh3::new();
        st.update(b"BIDv1");
        st.update(domain);
        let domain_seed = st.digest();

        Self { mode, domain_seed }
    }

    #[inline]
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Map an identifier to a bucket index in `0..bucket_count`.
    /// Deterministic and pure: the same id always maps to the same bucket.
    #[inline]
    pub fn bucket_of(&self, id: &str, bucket_count: usize) -> usize {
        debug_assert!(bucket_count > 0, "bucket_count must be positive");
        let raw = match self.mode {
            KeyMode::NumericId => leading_digits(id),
            KeyMode::Bytes => xxh3_64_with_seed(id.as_bytes(), self.domain_seed),
        };
        (raw % bucket_count as u64) as usize
    }
}

/// atoi semantics: read the leading ASCII digit run, stop at the first
/// non-digit, empty prefix yields 0. Accumulation wraps so pathological
/// inputs stay deterministic instead of panicking.
#[inline]
fn leading_digits(id: &str) -> u64 {
    let mut value = 0u64;
    for b in id.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(u64::from(b - b'0'));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_numeric_mode_is_modulo() {
        let hasher = BucketHasher::default();
        assert_eq!(hasher.bucket_of("98223", 179), 98223 % 179);
        assert_eq!(hasher.bucket_of("184", 179), 5);
        assert_eq!(hasher.bucket_of("5", 179), 5);
    }

    #[test]
    fn test_numeric_mode_collides_on_bucket_count_stride() {
        let hasher = BucketHasher::default();
        let a = hasher.bucket_of("98223", 179);
        let b = hasher.bucket_of("98402", 179); // 98223 + 179
        assert_eq!(a, b);
    }

    #[test]
    fn test_numeric_fallback_for_non_numeric_ids() {
        let hasher = BucketHasher::default();
        assert_eq!(hasher.bucket_of("", 179), 0);
        assert_eq!(hasher.bucket_of("abc", 179), 0);
        assert_eq!(hasher.bucket_of("12abc", 179), 12);
    }

    #[test]
    fn test_numeric_overflow_is_deterministic() {
        let hasher = BucketHasher::default();
        let id = "99999999999999999999999999";
        let first = hasher.bucket_of(id, 179);
        assert_eq!(first, hasher.bucket_of(id, 179));
        assert!(first < 179);
    }

    #[test]
    fn test_bytes_mode_deterministic() {
        let hasher = BucketHasher::new(KeyMode::Bytes);
        let first = hasher.bucket_of("some-key", 179);
        assert_eq!(first, hasher.bucket_of("some-key", 179));
        assert!(first < 179);
    }

    #[test]
    fn test_bytes_mode_spreads_keys() {
        let hasher = BucketHasher::new(KeyMode::Bytes);
        let buckets: HashSet<usize> = (0..100)
            .map(|i| hasher.bucket_of(&format!("key-{}", i), 1 << 16))
            .collect();
        assert!(buckets.len() > 90);
    }

    #[test]
    fn test_domains_are_separated() {
        let a = BucketHasher::with_domain(KeyMode::Bytes, b"domain-a");
        let b = BucketHasher::with_domain(KeyMode::Bytes, b"domain-b");
        let n = 1 << 20;
        let moved = (0..64)
            .filter(|i| {
                let id = format!("id-{}", i);
                a.bucket_of(&id, n) != b.bucket_of(&id, n)
            })
            .count();
        assert!(moved > 32);
    }
}
