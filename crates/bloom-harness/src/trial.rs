//! A single validation trial
//!
//! Builds one filter sized to the present-word count, inserts every present
//! word, confirms none of them is reported absent, then counts how many
//! absent words the filter wrongly accepts.

use bloom_filter::BloomFilter;
use serde::Serialize;
use tracing::info;

use crate::error::HarnessError;

/// Calibration and outcome of one trial
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialReport {
    /// Number of words the filter was sized for
    pub capacity: usize,
    /// Requested false positive rate
    pub target_error_probability: f64,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Filter size in bits (m)
    pub bit_length: usize,
    /// Number of `add` calls made
    pub inserted_count: usize,
    /// Number of absent words queried
    pub absent_sample: usize,
    /// Absent words the filter reported present
    pub false_positives: usize,
    /// `false_positives / absent_sample`
    pub observed_error_probability: f64,
    /// `(1 - e^(-kn/m))^k` after all inserts
    pub expected_error_probability: f64,
}

impl TrialReport {
    /// Observed rate divided by target rate
    pub fn ratio_to_target(&self) -> f64 {
        self.observed_error_probability / self.target_error_probability
    }
}

/// Run a trial with the given present and absent samples
///
/// # Errors
/// - `NoPresentWords` if `present` is empty (a filter needs capacity > 0)
/// - `Filter` if the error probability is outside (0, 1)
/// - `FalseNegative` if any present word is reported absent
pub fn run_trial(
    present: &[String],
    absent: &[String],
    target_error_probability: f64,
) -> Result<TrialReport, HarnessError> {
    if present.is_empty() {
        return Err(HarnessError::NoPresentWords);
    }

    let mut filter = BloomFilter::new(present.len(), target_error_probability)?;
    info!(
        capacity = filter.capacity(),
        target_error_probability,
        hash_count = filter.hash_count(),
        bit_length = filter.bit_length(),
        "Calibrated filter"
    );

    filter.add_all(present);

    if let Some(missing) = present.iter().find(|word| !filter.contains(word)) {
        return Err(HarnessError::FalseNegative {
            word: missing.clone(),
        });
    }

    let false_positives = absent.iter().filter(|word| filter.contains(word)).count();
    let observed_error_probability = if absent.is_empty() {
        0.0
    } else {
        false_positives as f64 / absent.len() as f64
    };

    info!(
        false_positives,
        absent_sample = absent.len(),
        observed_error_probability,
        "Trial complete"
    );

    Ok(TrialReport {
        capacity: filter.capacity(),
        target_error_probability: filter.target_error_probability(),
        hash_count: filter.hash_count(),
        bit_length: filter.bit_length(),
        inserted_count: filter.inserted_count(),
        absent_sample: absent.len(),
        false_positives,
        observed_error_probability,
        expected_error_probability: filter.expected_false_positive_rate(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_filter::FilterError;

    fn words(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn test_trial_reports_calibration() {
        let present = words("present", 1000);
        let absent = words("absent", 5000);

        let report = run_trial(&present, &absent, 0.01).unwrap();

        assert_eq!(report.capacity, 1000);
        assert_eq!(report.inserted_count, 1000);
        assert_eq!(report.hash_count, 7);
        assert_eq!(report.bit_length, 9586);
        assert_eq!(report.absent_sample, 5000);
        assert!(report.observed_error_probability <= 0.02);
        assert!(report.expected_error_probability < 0.015);
    }

    #[test]
    fn test_empty_present_rejected() {
        let result = run_trial(&[], &words("absent", 10), 0.01);

        assert!(matches!(result, Err(HarnessError::NoPresentWords)));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let result = run_trial(&words("p", 10), &[], 1.5);

        assert!(matches!(
            result,
            Err(HarnessError::Filter(FilterError::InvalidErrorProbability { .. }))
        ));
    }

    #[test]
    fn test_empty_absent_sample_has_zero_rate() {
        let report = run_trial(&words("p", 10), &[], 0.1).unwrap();

        assert_eq!(report.false_positives, 0);
        assert_eq!(report.observed_error_probability, 0.0);
        assert_eq!(report.ratio_to_target(), 0.0);
    }
}
