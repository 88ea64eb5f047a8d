//! Error types for the Bloom filter crate

use thiserror::Error;

/// Errors that can occur when building or using a Bloom filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid capacity: {capacity} (must be greater than 0)")]
    InvalidCapacity { capacity: usize },

    #[error("Invalid error probability: {probability} (must be strictly between 0 and 1)")]
    InvalidErrorProbability { probability: f64 },

    #[error("Capacity too large: {capacity} elements need {required_bits} bits, more than a bit array can hold")]
    CapacityTooLarge { capacity: usize, required_bits: f64 },

    /// Returned by the collection adapter for operations a Bloom filter
    /// cannot support (removal, iteration, export).
    #[error("Unsupported operation: bloom filter cannot {operation}")]
    UnsupportedOperation { operation: &'static str },
}

impl FilterError {
    /// True for errors raised by invalid construction input
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            FilterError::InvalidCapacity { .. }
                | FilterError::InvalidErrorProbability { .. }
                | FilterError::CapacityTooLarge { .. }
        )
    }

    /// True for errors raised by the collection adapter's rejected operations
    pub fn is_unsupported(&self) -> bool {
        matches!(self, FilterError::UnsupportedOperation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(FilterError::InvalidCapacity { capacity: 0 }.is_configuration_error());
        assert!(FilterError::InvalidErrorProbability { probability: 1.5 }.is_configuration_error());
        assert!(FilterError::CapacityTooLarge { capacity: usize::MAX, required_bits: 2.7e19 }
            .is_configuration_error());

        let unsupported = FilterError::UnsupportedOperation { operation: "iterate over elements" };
        assert!(unsupported.is_unsupported());
        assert!(!unsupported.is_configuration_error());
    }

    #[test]
    fn test_unsupported_message_names_operation() {
        let err = FilterError::UnsupportedOperation { operation: "remove element" };
        assert_eq!(err.to_string(), "Unsupported operation: bloom filter cannot remove element");
    }
}
