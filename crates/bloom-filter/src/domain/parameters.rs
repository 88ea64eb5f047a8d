//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n*ln(p) / (ln(2)^2))  -- optimal bits
//! - k = ceil((m/n) * ln(2))         -- optimal hash functions
//!
//! Both are rounded up, so a valid input never yields a zero-sized filter.

use std::f64::consts::LN_2;

use bitvec::prelude::*;

use crate::error::FilterError;

/// Bloom filter parameters derived from capacity and target error probability
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub bit_length: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
}

/// Check construction input before any sizing happens
pub fn validate_inputs(capacity: usize, target_error_probability: f64) -> Result<(), FilterError> {
    if capacity == 0 {
        return Err(FilterError::InvalidCapacity { capacity });
    }

    // Written as a negated range check so NaN is rejected too.
    if !(target_error_probability > 0.0 && target_error_probability < 1.0) {
        return Err(FilterError::InvalidErrorProbability {
            probability: target_error_probability,
        });
    }

    Ok(())
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `capacity` - Expected number of elements to insert (n), must be > 0
/// * `target_error_probability` - Target false positive rate, in (0, 1)
///
/// # Errors
/// `InvalidCapacity` / `InvalidErrorProbability` for out-of-range input,
/// `CapacityTooLarge` when the bit array could not be allocated.
pub fn calculate_parameters(
    capacity: usize,
    target_error_probability: f64,
) -> Result<FilterParams, FilterError> {
    validate_inputs(capacity, target_error_probability)?;

    let n = capacity as f64;
    let ln2_squared = LN_2 * LN_2;

    let m = (-n * target_error_probability.ln() / ln2_squared).ceil();
    if !m.is_finite() || m > BitSlice::<u8, Lsb0>::MAX_BITS as f64 {
        return Err(FilterError::CapacityTooLarge {
            capacity,
            required_bits: m,
        });
    }
    let bit_length = (m as usize).max(1);

    // Float division: integer m/n would truncate and undercount k.
    let k = ((bit_length as f64 / n) * LN_2).ceil() as usize;
    let hash_count = k.max(1);

    Ok(FilterParams {
        bit_length,
        hash_count,
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn estimate_false_positive_rate(bit_length: usize, inserted: usize, hash_count: usize) -> f64 {
    if bit_length == 0 {
        return 1.0;
    }
    let exponent = -(hash_count as f64) * (inserted as f64) / (bit_length as f64);
    (1.0 - exponent.exp()).powi(hash_count as i32)
}
