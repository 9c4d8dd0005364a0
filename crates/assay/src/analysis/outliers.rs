//! IQR-based outlier detection.

use serde::{Deserialize, Serialize};

use super::statistics::{percentage, percentile, sorted};
use crate::config::OutlierConfig;
use crate::profile::OutlierBounds;

/// Maximum number of outlier row indices kept as samples.
const MAX_SAMPLE_ROWS: usize = 5;

/// Outliers found in one numeric column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierAnalysis {
    pub count: usize,
    /// Percentage (0-100) of numeric values outside the bounds.
    pub percentage: f64,
    /// Absent when there were too few values to compute fences.
    pub bounds: Option<OutlierBounds>,
    /// Zero-based row indices of the first outliers.
    pub sample_rows: Vec<usize>,
}

/// Flags values outside `[Q1 − k·IQR, Q3 + k·IQR]`.
#[derive(Debug, Clone, Default)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    /// Create a detector with the default 1.5 × IQR fences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom settings.
    pub fn with_config(config: OutlierConfig) -> Self {
        Self { config }
    }

    /// Compute the fences for `values`, or None if there are too few.
    pub fn bounds(&self, values: &[f64]) -> Option<OutlierBounds> {
        if values.len() < self.config.min_values {
            return None;
        }

        let sorted = sorted(values);
        let q1 = percentile(&sorted, 0.25, self.config.quantile_method);
        let q3 = percentile(&sorted, 0.75, self.config.quantile_method);
        let iqr = q3 - q1;

        Some(OutlierBounds {
            lower: q1 - self.config.iqr_multiplier * iqr,
            upper: q3 + self.config.iqr_multiplier * iqr,
        })
    }

    /// Detect outliers among `(row, value)` pairs.
    pub fn detect(&self, cells: &[(usize, f64)]) -> OutlierAnalysis {
        let values: Vec<f64> = cells.iter().map(|(_, v)| *v).collect();
        let Some(bounds) = self.bounds(&values) else {
            return OutlierAnalysis::default();
        };

        let outlier_rows: Vec<usize> = cells
            .iter()
            .filter(|(_, v)| *v < bounds.lower || *v > bounds.upper)
            .map(|(row, _)| *row)
            .collect();

        OutlierAnalysis {
            count: outlier_rows.len(),
            percentage: percentage(outlier_rows.len(), cells.len()),
            bounds: Some(bounds),
            sample_rows: outlier_rows.into_iter().take(MAX_SAMPLE_ROWS).collect(),
        }
    }

    /// Count outliers in bare values.
    pub fn count(&self, values: &[f64]) -> usize {
        let cells: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
        self.detect(&cells).count
    }
}
