//! Descriptive statistics for a single column.

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::inference::{is_whole, parse_boolean, parse_date, parse_number};
use crate::input::ParsedTable;
use crate::profile::{
    BooleanStatistics, ColumnStatistics, DateStatistics, DetectedType, FrequencyStatistics,
    NumericStatistics, QuantileMethod, StringStatistics,
};

// =============================================================================
// STREAMING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Streaming statistics accumulator using Welford's algorithm.
#[derive(Debug, Clone)]
pub struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl StreamingStats {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value using Welford's online algorithm.
    pub fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the population variance (divides by N).
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Get the population standard deviation.
    pub fn std(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Default for StreamingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<f64> for StreamingStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        for value in iter {
            stats.add(value);
        }
        stats
    }
}

/// Sort numbers ascending. Inputs are finite, so the order is total.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Read the `p`-th quantile (0.0-1.0) from ascending `sorted` values.
///
/// Returns 0.0 for an empty slice.
pub fn percentile(sorted: &[f64], p: f64, method: QuantileMethod) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }

    match method {
        QuantileMethod::Linear => {
            let index = p * (n - 1) as f64;
            let lower = index.floor() as usize;
            let upper = index.ceil() as usize;
            let weight = index - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
        QuantileMethod::Truncated => {
            let index = ((n as f64 * p).floor() as usize).min(n - 1);
            sorted[index]
        }
    }
}

/// Numeric cells of a column paired with their zero-based row index.
pub fn numeric_cells(table: &ParsedTable, index: usize) -> Vec<(usize, f64)> {
    table
        .column_values(index)
        .enumerate()
        .filter_map(|(row, cell)| cell.and_then(parse_number).map(|n| (row, n)))
        .collect()
}

/// Computes type-appropriate statistics for column values.
#[derive(Debug, Clone)]
pub struct StatisticsGenerator {
    top_values: usize,
}

impl StatisticsGenerator {
    /// Create a generator keeping `top_values` entries in frequency tables.
    pub fn new(top_values: usize) -> Self {
        Self { top_values }
    }

    /// Compute statistics for the non-empty `values` of a column of
    /// `total_cells` cells classified as `detected_type`.
    pub fn compute(
        &self,
        detected_type: DetectedType,
        values: &[&str],
        total_cells: usize,
    ) -> ColumnStatistics {
        let mut statistics = ColumnStatistics {
            count: values.len(),
            ..Default::default()
        };
        if values.is_empty() {
            return statistics;
        }

        match detected_type {
            DetectedType::NumericInteger | DetectedType::NumericFloat => {
                let numbers: Vec<f64> = values.iter().filter_map(|v| parse_number(v)).collect();
                statistics.numeric = numeric_statistics(&numbers);
            }
            DetectedType::Boolean => {
                statistics.boolean = Some(boolean_statistics(values));
            }
            DetectedType::Date => {
                statistics.date = date_statistics(values);
            }
            DetectedType::Categorical => {
                statistics.frequency = self.frequency_statistics(values, total_cells);
            }
            DetectedType::Text => {
                statistics.frequency = self.frequency_statistics(values, total_cells);
                statistics.string = Some(string_statistics(values));
            }
        }

        statistics
    }

    /// Frequency table, most frequent first. Ties keep first-seen order.
    fn frequency_statistics(
        &self,
        values: &[&str],
        total_cells: usize,
    ) -> Option<FrequencyStatistics> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for value in values {
            *counts.entry(*value).or_insert(0) += 1;
        }

        let category_count = counts.len();
        let entropy = (category_count >= 2).then(|| shannon_entropy(&counts, values.len()));

        counts.sort_by(|_, a, _, b| b.cmp(a));
        let (most_frequent, most_frequent_count) =
            counts.first().map(|(v, c)| (v.to_string(), *c))?;

        let top_values = counts
            .iter()
            .take(self.top_values)
            .map(|(v, c)| (v.to_string(), *c))
            .collect();

        Some(FrequencyStatistics {
            top_values,
            category_count,
            most_frequent,
            most_frequent_count,
            most_frequent_percentage: percentage(most_frequent_count, total_cells),
            entropy,
        })
    }
}

impl Default for StatisticsGenerator {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Numeric summary. Quartiles use linear interpolation.
pub fn numeric_statistics(numbers: &[f64]) -> Option<NumericStatistics> {
    if numbers.is_empty() {
        return None;
    }

    let stats: StreamingStats = numbers.iter().copied().collect();
    let sorted = sorted(numbers);

    Some(NumericStatistics {
        min: stats.min(),
        max: stats.max(),
        mean: stats.mean(),
        std: stats.std(),
        median: percentile(&sorted, 0.5, QuantileMethod::Linear),
        q1: percentile(&sorted, 0.25, QuantileMethod::Linear),
        q3: percentile(&sorted, 0.75, QuantileMethod::Linear),
        appears_integer: numbers.iter().all(|n| is_whole(*n)),
    })
}

fn boolean_statistics(values: &[&str]) -> BooleanStatistics {
    let parsed: Vec<bool> = values.iter().filter_map(|v| parse_boolean(v)).collect();
    let true_count = parsed.iter().filter(|b| **b).count();
    let false_count = parsed.len() - true_count;

    BooleanStatistics {
        true_count,
        false_count,
        true_percentage: percentage(true_count, values.len()),
        false_percentage: percentage(false_count, values.len()),
    }
}

fn date_statistics(values: &[&str]) -> Option<DateStatistics> {
    let dates: Vec<NaiveDateTime> = values.iter().filter_map(|v| parse_date(v)).collect();
    let min = dates.iter().min()?;
    let max = dates.iter().max()?;

    Some(DateStatistics {
        min_date: format_date(min),
        max_date: format_date(max),
        date_range_days: (*max - *min).num_days(),
    })
}

fn format_date(date: &NaiveDateTime) -> String {
    if date.time() == chrono::NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

fn string_statistics(values: &[&str]) -> StringStatistics {
    let lengths: Vec<usize> = values.iter().map(|v| v.chars().count()).collect();
    StringStatistics {
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
        avg_length: lengths.iter().sum::<usize>() as f64 / lengths.len().max(1) as f64,
    }
}

fn shannon_entropy(counts: &IndexMap<&str, usize>, total: usize) -> f64 {
    let total = total as f64;
    counts
        .values()
        .map(|c| {
            let p = *c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// `part / whole × 100`, or 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // =========================================================================
    // Streaming accumulator
    // =========================================================================

    #[test]
    fn test_welford_matches_two_pass() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats: StreamingStats = values.iter().copied().collect();
        assert_eq!(stats.count(), 8);
        assert!(approx(stats.mean(), 5.0));
        assert!(approx(stats.std(), 2.0));
        assert_eq!(stats.min(), 2.0);
        assert_eq!(stats.max(), 9.0);
    }

    #[test]
    fn test_single_value_has_zero_variance() {
        let stats: StreamingStats = [3.0].into_iter().collect();
        assert_eq!(stats.variance(), 0.0);
    }

    // =========================================================================
    // Quantiles
    // =========================================================================

    #[test]
    fn test_linear_percentile() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(percentile(&sorted, 0.25, QuantileMethod::Linear), 1.75));
        assert!(approx(percentile(&sorted, 0.5, QuantileMethod::Linear), 2.5));
        assert!(approx(percentile(&sorted, 0.75, QuantileMethod::Linear), 3.25));
        assert_eq!(percentile(&sorted, 1.0, QuantileMethod::Linear), 4.0);
    }

    #[test]
    fn test_truncated_percentile() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        assert_eq!(percentile(&sorted, 0.25, QuantileMethod::Truncated), 2.0);
        assert_eq!(percentile(&sorted, 0.75, QuantileMethod::Truncated), 5.0);
        assert_eq!(percentile(&sorted, 1.0, QuantileMethod::Truncated), 100.0);
    }

    #[test]
    fn test_percentile_empty() {
        assert_eq!(percentile(&[], 0.5, QuantileMethod::Linear), 0.0);
    }

    // =========================================================================
    // Per-type statistics
    // =========================================================================

    #[test]
    fn test_numeric_statistics() {
        let generator = StatisticsGenerator::default();
        let stats = generator.compute(DetectedType::NumericInteger, &["1", "2", "3", "4", "5"], 5);
        let numeric = stats.numeric.unwrap();

        assert_eq!(stats.count, 5);
        assert_eq!(numeric.min, 1.0);
        assert_eq!(numeric.max, 5.0);
        assert!(approx(numeric.mean, 3.0));
        assert!(approx(numeric.std, 2.0_f64.sqrt()));
        assert_eq!(numeric.median, 3.0);
        assert_eq!(numeric.q1, 2.0);
        assert_eq!(numeric.q3, 4.0);
        assert!(numeric.appears_integer);
        assert!(stats.frequency.is_none());
    }

    #[test]
    fn test_float_column_not_integer() {
        let stats = numeric_statistics(&[1.5, 2.0, 3.0]).unwrap();
        assert!(!stats.appears_integer);
    }

    #[test]
    fn test_numeric_ignores_unparseable() {
        let generator = StatisticsGenerator::default();
        let stats = generator.compute(DetectedType::NumericFloat, &["1.0", "x", "3.0"], 3);
        assert_eq!(stats.count, 3);
        assert!(approx(stats.numeric.unwrap().mean, 2.0));
    }

    #[test]
    fn test_frequency_statistics() {
        let generator = StatisticsGenerator::default();
        let stats = generator.compute(DetectedType::Categorical, &["A", "B", "A", "C"], 5);
        let freq = stats.frequency.unwrap();

        assert_eq!(freq.most_frequent, "A");
        assert_eq!(freq.most_frequent_count, 2);
        assert!(approx(freq.most_frequent_percentage, 40.0));
        assert_eq!(freq.category_count, 3);
        let keys: Vec<&String> = freq.top_values.keys().collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert!(approx(freq.entropy.unwrap(), 1.5));
        assert!(stats.string.is_none());
    }

    #[test]
    fn test_frequency_table_capped() {
        let generator = StatisticsGenerator::new(3);
        let values = ["a", "b", "c", "d", "e"];
        let freq = generator
            .compute(DetectedType::Text, &values, 5)
            .frequency
            .unwrap();
        assert_eq!(freq.top_values.len(), 3);
        assert_eq!(freq.category_count, 5);
    }

    #[test]
    fn test_single_category_has_no_entropy() {
        let generator = StatisticsGenerator::default();
        let freq = generator
            .compute(DetectedType::Categorical, &["x", "x"], 2)
            .frequency
            .unwrap();
        assert!(freq.entropy.is_none());
    }

    #[test]
    fn test_string_lengths() {
        let generator = StatisticsGenerator::default();
        let stats = generator.compute(DetectedType::Text, &["ab", "abcd", "é"], 3);
        let string = stats.string.unwrap();
        assert_eq!(string.min_length, 1);
        assert_eq!(string.max_length, 4);
        assert!(approx(string.avg_length, 7.0 / 3.0));
    }

    #[test]
    fn test_boolean_statistics() {
        let generator = StatisticsGenerator::default();
        let stats = generator.compute(DetectedType::Boolean, &["yes", "no", "YES", "1"], 4);
        let boolean = stats.boolean.unwrap();
        assert_eq!(boolean.true_count, 3);
        assert_eq!(boolean.false_count, 1);
        assert!(approx(boolean.true_percentage, 75.0));
    }

    #[test]
    fn test_date_statistics() {
        let generator = StatisticsGenerator::default();
        let stats = generator.compute(
            DetectedType::Date,
            &["2024-03-01", "2024-01-01", "2024-01-31"],
            3,
        );
        let date = stats.date.unwrap();
        assert_eq!(date.min_date, "2024-01-01");
        assert_eq!(date.max_date, "2024-03-01");
        assert_eq!(date.date_range_days, 60);
    }

    #[test]
    fn test_empty_column_only_count() {
        let generator = StatisticsGenerator::default();
        let stats = generator.compute(DetectedType::Text, &[], 3);
        assert_eq!(stats, ColumnStatistics::default());
    }

    #[test]
    fn test_numeric_cells_keep_row_index() {
        let table = ParsedTable::new(
            vec!["n".to_string()],
            vec![
                vec![Some("1".to_string())],
                vec![None],
                vec![Some("x".to_string())],
                vec![Some("4".to_string())],
            ],
            ',',
        );
        assert_eq!(numeric_cells(&table, 0), vec![(0, 1.0), (3, 4.0)]);
    }
}
