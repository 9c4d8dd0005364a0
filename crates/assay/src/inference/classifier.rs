//! Column type inference.

use indexmap::IndexSet;

use super::values::{is_boolean, is_date, is_whole, parse_number};
use crate::config::InferenceThresholds;
use crate::input::ParsedTable;
use crate::profile::{ColumnTypeInfo, DetectedType};

/// Classifies a column's values into a [`DetectedType`].
///
/// Rules run in a fixed priority order (boolean, numeric, date, categorical,
/// text) and the first one whose match ratio clears its threshold wins.
#[derive(Debug, Clone, Default)]
pub struct TypeInferencer {
    thresholds: InferenceThresholds,
}

impl TypeInferencer {
    /// Create an inferencer with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferencer with custom thresholds.
    pub fn with_thresholds(thresholds: InferenceThresholds) -> Self {
        Self { thresholds }
    }

    /// Infer the type of column `index` of `table`.
    pub fn infer_column(&self, table: &ParsedTable, index: usize) -> ColumnTypeInfo {
        let name = table.headers.get(index).cloned().unwrap_or_default();
        let total = table.row_count();
        let values = table.non_missing_values(index);
        self.infer(name, &values, total - values.len())
    }

    /// Infer a type from non-empty `values`.
    pub fn infer(&self, name: String, values: &[&str], null_count: usize) -> ColumnTypeInfo {
        let distinct: IndexSet<&str> = values.iter().copied().collect();
        let sample_values = distinct
            .iter()
            .take(self.thresholds.sample_values)
            .map(|v| v.to_string())
            .collect();

        let (detected_type, confidence) = self.classify(values, distinct.len());
        tracing::trace!(column = %name, %detected_type, confidence, "column type inferred");

        ColumnTypeInfo {
            name,
            detected_type,
            confidence,
            null_count,
            unique_count: distinct.len(),
            sample_values,
        }
    }

    fn classify(&self, values: &[&str], unique_count: usize) -> (DetectedType, f64) {
        if values.is_empty() {
            return (DetectedType::Text, 0.0);
        }
        let total = values.len() as f64;
        let t = &self.thresholds;

        let boolean_ratio = values.iter().filter(|v| is_boolean(v)).count() as f64 / total;
        if boolean_ratio >= t.boolean_ratio {
            return (DetectedType::Boolean, boolean_ratio);
        }

        let numbers: Vec<f64> = values.iter().filter_map(|v| parse_number(v)).collect();
        let numeric_ratio = numbers.len() as f64 / total;
        if numeric_ratio >= t.numeric_ratio {
            let whole = numbers.iter().filter(|n| is_whole(**n)).count();
            let integer_ratio = whole as f64 / numbers.len() as f64;
            let detected = if integer_ratio >= t.integer_ratio {
                DetectedType::NumericInteger
            } else {
                DetectedType::NumericFloat
            };
            return (detected, numeric_ratio);
        }

        let date_ratio = values.iter().filter(|v| is_date(v)).count() as f64 / total;
        if date_ratio >= t.date_ratio {
            return (DetectedType::Date, date_ratio);
        }

        let unique_ratio = unique_count as f64 / total;
        let repeats_in_small_sample =
            values.len() < t.categorical_small_sample && unique_count < values.len();
        if (unique_ratio < t.categorical_unique_ratio || repeats_in_small_sample)
            && unique_count < t.categorical_max_unique
        {
            return (DetectedType::Categorical, (1.0 - unique_ratio).max(0.0));
        }

        (DetectedType::Text, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(values: &[&str]) -> ColumnTypeInfo {
        TypeInferencer::new().infer("col".to_string(), values, 0)
    }

    #[test]
    fn test_infer_integer_type() {
        let info = infer(&["1", "2", "3", "4", "5"]);
        assert_eq!(info.detected_type, DetectedType::NumericInteger);
        assert_eq!(info.confidence, 1.0);
    }

    #[test]
    fn test_infer_float_type() {
        let info = infer(&["1.5", "2", "3"]);
        assert_eq!(info.detected_type, DetectedType::NumericFloat);
        assert_eq!(info.confidence, 1.0);
    }

    #[test]
    fn test_zero_one_is_boolean() {
        let info = infer(&["1", "0", "1", "1", "0"]);
        assert_eq!(info.detected_type, DetectedType::Boolean);
    }

    #[test]
    fn test_numeric_with_noise() {
        let mut values = vec!["10"; 9];
        values.push("n/a");
        let info = infer(&values);
        assert_eq!(info.detected_type, DetectedType::NumericInteger);
        assert!((info.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_infer_date_type() {
        let info = infer(&["2024-01-01", "2024-02-15", "2024-03-31", "2024-04-30"]);
        assert_eq!(info.detected_type, DetectedType::Date);
        assert_eq!(info.confidence, 1.0);
    }

    #[test]
    fn test_detect_categorical() {
        let values: Vec<&str> = (0..30).map(|i| ["red", "green"][i % 2]).collect();
        let info = infer(&values);
        assert_eq!(info.detected_type, DetectedType::Categorical);
        assert!((info.confidence - (1.0 - 2.0 / 30.0)).abs() < 1e-9);
        assert_eq!(info.sample_values, vec!["red", "green"]);
    }

    #[test]
    fn test_small_sample_with_repeats_is_categorical() {
        let info = infer(&["A", "B", "A"]);
        assert_eq!(info.detected_type, DetectedType::Categorical);
        assert!((info.confidence - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_sample_all_distinct_is_text() {
        let info = infer(&["ann", "bob", "cid"]);
        assert_eq!(info.detected_type, DetectedType::Text);
        assert_eq!(info.confidence, 1.0);
    }

    #[test]
    fn test_large_sample_uses_unique_ratio() {
        // 25 values with 5 distinct: ratio 0.2 and past the small-sample cutoff.
        let values: Vec<&str> = (0..25).map(|i| ["a", "b", "c", "d", "e"][i % 5]).collect();
        let info = infer(&values);
        assert_eq!(info.detected_type, DetectedType::Text);

        let thresholds = InferenceThresholds {
            categorical_small_sample: 30,
            ..InferenceThresholds::default()
        };
        let info = TypeInferencer::with_thresholds(thresholds).infer("col".to_string(), &values, 0);
        assert_eq!(info.detected_type, DetectedType::Categorical);
    }

    #[test]
    fn test_empty_column() {
        let info = TypeInferencer::new().infer("empty".to_string(), &[], 4);
        assert_eq!(info.detected_type, DetectedType::Text);
        assert_eq!(info.confidence, 0.0);
        assert_eq!(info.null_count, 4);
        assert_eq!(info.unique_count, 0);
        assert!(info.sample_values.is_empty());
    }

    #[test]
    fn test_sample_values_are_distinct_and_capped() {
        let info = infer(&["a", "b", "a", "c", "d", "e", "f", "g"]);
        assert_eq!(info.sample_values, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(info.unique_count, 7);
    }

    #[test]
    fn test_infer_column_counts_nulls() {
        let table = ParsedTable::new(
            vec!["value".to_string()],
            vec![
                vec![Some("1".to_string())],
                vec![Some("   ".to_string())],
                vec![None],
                vec![Some("3".to_string())],
            ],
            ',',
        );
        let info = TypeInferencer::new().infer_column(&table, 0);
        assert_eq!(info.name, "value");
        assert_eq!(info.null_count, 2);
        assert_eq!(info.detected_type, DetectedType::NumericInteger);
    }
}
