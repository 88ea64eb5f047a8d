//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - Sizing (m, k) is fixed from capacity and target error probability and
//!   only recomputed by `clear()`.
//! - No false negatives: if `add(key)` ran, `contains(key)` returns true
//!   until the next `clear()`.

use bitvec::prelude::*;

use super::config::FilterConfig;
use super::hash_functions::bit_indexes;
use super::parameters::{calculate_parameters, estimate_false_positive_rate, FilterParams};
use crate::error::FilterError;

/// Bloom filter over strings, sized from capacity and error probability
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// The filter is a plain owned value with no internal locking. Wrap it in a
/// lock to share it between threads.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Expected number of elements (n)
    capacity: usize,
    /// Desired false positive rate (p)
    target_error_probability: f64,
    /// Number of hash functions (k)
    hash_count: usize,
    /// Number of `add` calls since construction or the last `clear`
    inserted: usize,
}

impl BloomFilter {
    /// Create a new Bloom filter with optimal parameters for the target rate
    ///
    /// # Arguments
    /// * `capacity` - Expected number of elements (n), must be > 0
    /// * `target_error_probability` - Target false positive rate, in (0, 1)
    ///
    /// # Errors
    /// Returns a configuration error and allocates nothing if either input is
    /// out of range or the bit array would be too large to allocate.
    pub fn new(capacity: usize, target_error_probability: f64) -> Result<Self, FilterError> {
        let params = calculate_parameters(capacity, target_error_probability)?;

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; params.bit_length],
            capacity,
            target_error_probability,
            hash_count: params.hash_count,
            inserted: 0,
        })
    }

    /// Create a filter from a configuration, re-validating it
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::new(config.capacity, config.target_error_probability)
    }

    /// Insert a key into the filter
    ///
    /// After insertion, `contains(key)` is guaranteed to return true.
    /// The insert counter grows on every call, duplicates included.
    pub fn add(&mut self, key: &str) -> bool {
        let m = self.bits.len();
        for index in bit_indexes(key, self.hash_count, m) {
            self.bits.set(index, true);
        }
        self.inserted += 1;
        true
    }

    /// Insert every key, in iteration order
    pub fn add_all<I, S>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref());
        }
        true
    }

    /// Test if a key might be in the filter
    ///
    /// Returns:
    /// - `true` if the key might be in the set (could be false positive)
    /// - `false` if the key is definitely NOT in the set (never false negative)
    pub fn contains(&self, key: &str) -> bool {
        let m = self.bits.len();
        bit_indexes(key, self.hash_count, m).all(|index| self.bits[index])
    }

    /// True iff every key might be in the filter; stops at the first miss
    pub fn contains_all<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().all(|key| self.contains(key.as_ref()))
    }

    /// Reset to the state of a freshly constructed filter
    ///
    /// Sizing is recomputed from the stored capacity and error probability;
    /// all bits and the insert counter go back to zero.
    pub fn clear(&mut self) {
        let params = calculate_parameters(self.capacity, self.target_error_probability)
            // Inputs were validated when the filter was built.
            .unwrap_or(FilterParams {
                bit_length: self.bits.len(),
                hash_count: self.hash_count,
            });

        self.bits = bitvec![u8, Lsb0; 0; params.bit_length];
        self.hash_count = params.hash_count;
        self.inserted = 0;
    }

    /// Expected number of elements the filter was sized for
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Target false positive rate the filter was sized for
    pub fn target_error_probability(&self) -> f64 {
        self.target_error_probability
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Get the filter size in bits
    pub fn bit_length(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of `add` calls (not deduplicated)
    pub fn inserted_count(&self) -> usize {
        self.inserted
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Theoretical false positive rate for the current insert count
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn expected_false_positive_rate(&self) -> f64 {
        estimate_false_positive_rate(self.bits.len(), self.inserted, self.hash_count)
    }
}

impl<S: AsRef<str>> Extend<S> for BloomFilter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
