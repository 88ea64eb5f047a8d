//! Rendering trial reports

use crate::error::HarnessError;
use crate::trial::TrialReport;

/// Render the report as two aligned text blocks (parameters, results)
pub fn render_text(report: &TrialReport) -> String {
    format!(
        "----------------- PARAMETERS ------------------\n\
         Number of elements in filter:              {capacity}\n\
         Calibrated probability of false positives: {target:.6}\n\
         Amount of hash functions:                  {hash_count}\n\
         Filter size:                               {bit_length}\n\
         -----------------------------------------------\n\
         \n\
         ------------------ RESULTS --------------------\n\
         Number of absent words queried:            {absent}\n\
         Number of false positives:                 {false_positives}\n\
         Actual probability of false positives:     {observed:.6}\n\
         Expected probability of false positives:   {expected:.6}\n\
         Actual / calibrated probability:           {ratio:.3}\n",
        capacity = report.capacity,
        target = report.target_error_probability,
        hash_count = report.hash_count,
        bit_length = report.bit_length,
        absent = report.absent_sample,
        false_positives = report.false_positives,
        observed = report.observed_error_probability,
        expected = report.expected_error_probability,
        ratio = report.ratio_to_target(),
    )
}

/// Render the report as pretty-printed JSON
pub fn render_json(report: &TrialReport) -> Result<String, HarnessError> {
    Ok(serde_json::to_string_pretty(report)?)
}
