//! Per-column quality sub-scores.

use crate::config::ColumnWeights;
use crate::inference::{is_boolean, is_date, is_numeric};
use crate::profile::DetectedType;

/// Share of `values` valid for `detected_type`, or 0 when there are none.
///
/// Categorical and text columns accept any value.
pub fn validity(detected_type: DetectedType, values: &[&str]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let predicate: fn(&str) -> bool = match detected_type {
        DetectedType::NumericInteger | DetectedType::NumericFloat => is_numeric,
        DetectedType::Boolean => is_boolean,
        DetectedType::Date => is_date,
        DetectedType::Categorical | DetectedType::Text => return 1.0,
    };

    values.iter().filter(|v| predicate(v)).count() as f64 / values.len() as f64
}

/// Non-empty cells over total cells.
pub fn completeness(non_empty: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        non_empty as f64 / total as f64
    }
}

/// Distinct values over non-empty values.
pub fn uniqueness(distinct: usize, non_empty: usize) -> f64 {
    if non_empty == 0 {
        0.0
    } else {
        distinct as f64 / non_empty as f64
    }
}

/// Weighted column score, clamped to [0, 1].
pub fn quality_score(
    weights: &ColumnWeights,
    completeness: f64,
    validity: f64,
    uniqueness: f64,
) -> f64 {
    let score = weights.completeness * completeness
        + weights.validity * validity
        + weights.uniqueness * uniqueness;
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_by_type() {
        assert_eq!(validity(DetectedType::NumericInteger, &["1", "2", "x", "4"]), 0.75);
        assert_eq!(validity(DetectedType::Boolean, &["yes", "no", "maybe", "y"]), 0.75);
        assert_eq!(validity(DetectedType::Date, &["2024-01-01", "soon"]), 0.5);
        assert_eq!(validity(DetectedType::Text, &["anything"]), 1.0);
        assert_eq!(validity(DetectedType::Categorical, &["a", "b"]), 1.0);
    }

    #[test]
    fn test_integer_validity_accepts_floats() {
        assert_eq!(validity(DetectedType::NumericInteger, &["1", "2.5"]), 1.0);
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(validity(DetectedType::Text, &[]), 0.0);
        assert_eq!(completeness(0, 0), 0.0);
        assert_eq!(uniqueness(0, 0), 0.0);
    }

    #[test]
    fn test_quality_score() {
        let weights = ColumnWeights::STANDARD;
        assert!((quality_score(&weights, 1.0, 1.0, 1.0) - 1.0).abs() < 1e-9);
        assert!((quality_score(&weights, 0.5, 1.0, 0.0) - 0.5).abs() < 1e-9);
        assert_eq!(quality_score(&weights, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_quality_score_clamped() {
        let weights = ColumnWeights {
            completeness: 2.0,
            validity: 0.0,
            uniqueness: 0.0,
        };
        assert_eq!(quality_score(&weights, 1.0, 1.0, 1.0), 1.0);
    }
}
