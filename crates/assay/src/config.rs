//! Profiler configuration.
//!
//! Every threshold and weight used by the pipeline lives here with its
//! default value, so callers can tune scoring without touching the
//! algorithms. All structs deserialize with `#[serde(default)]`, which lets a
//! partial JSON document override only the fields it names.

use serde::{Deserialize, Serialize};

use crate::error::{AssayError, Result};
use crate::input::ParserConfig;
use crate::profile::QuantileMethod;

/// Tolerance when checking that a set of weights sums to one.
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Ratios used by the column type inferencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceThresholds {
    /// Minimum share of boolean-like values to classify as boolean.
    pub boolean_ratio: f64,
    /// Minimum share of numeric values to classify as numeric.
    pub numeric_ratio: f64,
    /// Minimum share of whole numbers (within the numeric subset) for integer.
    pub integer_ratio: f64,
    /// Minimum share of parseable dates to classify as date.
    pub date_ratio: f64,
    /// Categorical requires `unique / non-empty` below this.
    pub categorical_unique_ratio: f64,
    /// Categorical requires fewer distinct values than this.
    pub categorical_max_unique: usize,
    /// Below this many non-empty values the unique ratio is not meaningful;
    /// such a column is categorical whenever some value repeats.
    pub categorical_small_sample: usize,
    /// Size of the frequency table for categorical/text columns.
    pub top_values: usize,
    /// Number of distinct sample values kept per column.
    pub sample_values: usize,
}

impl Default for InferenceThresholds {
    fn default() -> Self {
        Self {
            boolean_ratio: 0.8,
            numeric_ratio: 0.8,
            integer_ratio: 0.9,
            date_ratio: 0.8,
            categorical_unique_ratio: 0.10,
            categorical_max_unique: 50,
            categorical_small_sample: 20,
            top_values: 10,
            sample_values: 5,
        }
    }
}

/// IQR outlier detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// Multiplier applied to the IQR to get the fences.
    pub iqr_multiplier: f64,
    /// Columns with fewer numeric values report no outliers.
    pub min_values: usize,
    /// How Q1 and Q3 are read for the fences.
    pub quantile_method: QuantileMethod,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
            min_values: 4,
            quantile_method: QuantileMethod::Truncated,
        }
    }
}

/// Distribution shape settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Columns with fewer numeric values get no distribution analysis.
    pub min_values: usize,
    /// Normal requires `|skewness|` below this.
    pub max_normal_skewness: f64,
    /// Normal requires `|excess kurtosis|` below this.
    pub max_normal_kurtosis: f64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            min_values: 3,
            max_normal_skewness: 2.0,
            max_normal_kurtosis: 7.0,
        }
    }
}

/// Weights for the per-column quality score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnWeights {
    pub completeness: f64,
    pub validity: f64,
    pub uniqueness: f64,
}

impl ColumnWeights {
    /// `0.4 × completeness + 0.3 × validity + 0.3 × uniqueness`.
    pub const STANDARD: ColumnWeights = ColumnWeights {
        completeness: 0.4,
        validity: 0.3,
        uniqueness: 0.3,
    };

    fn parts(&self) -> [(&'static str, f64); 3] {
        [
            ("completeness", self.completeness),
            ("validity", self.validity),
            ("uniqueness", self.uniqueness),
        ]
    }
}

impl Default for ColumnWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Weights for the dataset-level overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallWeights {
    pub completeness: f64,
    pub validity: f64,
    pub uniqueness: f64,
    pub consistency: f64,
}

impl OverallWeights {
    /// `0.3 × completeness + 0.3 × validity + 0.2 × uniqueness + 0.2 × consistency`.
    pub const STANDARD: OverallWeights = OverallWeights {
        completeness: 0.3,
        validity: 0.3,
        uniqueness: 0.2,
        consistency: 0.2,
    };

    fn parts(&self) -> [(&'static str, f64); 4] {
        [
            ("completeness", self.completeness),
            ("validity", self.validity),
            ("uniqueness", self.uniqueness),
            ("consistency", self.consistency),
        ]
    }
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Thresholds that turn measurements into issues and warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportThresholds {
    /// Columns below this completeness get a `missing_data` issue.
    pub min_completeness: f64,
    /// Completeness below this is high severity.
    pub high_completeness: f64,
    /// Completeness below this is critical.
    pub critical_completeness: f64,
    /// Outlier percentage (0-100) above this gets an `outliers` issue.
    pub max_outlier_percentage: f64,
    /// Outlier percentage above this is high severity.
    pub high_outlier_percentage: f64,
    /// Format consistency below this gets an `inconsistent_format` issue.
    pub min_format_consistency: f64,
    /// Format consistency below this is high severity.
    pub high_format_consistency: f64,
    /// Datasets with fewer rows are flagged as small.
    pub small_dataset_rows: usize,
    /// Dataset missing percentage (0-100) above this is flagged.
    pub max_missing_percentage: f64,
    /// Duplicate percentage (0-100) above this is flagged.
    pub max_duplicate_percentage: f64,
    /// Columns scoring below this are listed for review.
    pub min_quality_score: f64,
    /// Non-numeric columns with more distinct values are high cardinality.
    pub high_cardinality: usize,
    /// Datasets with more columns are flagged as very wide.
    pub wide_dataset_columns: usize,
}

impl Default for ReportThresholds {
    fn default() -> Self {
        Self {
            min_completeness: 0.9,
            high_completeness: 0.8,
            critical_completeness: 0.5,
            max_outlier_percentage: 10.0,
            high_outlier_percentage: 20.0,
            min_format_consistency: 0.7,
            high_format_consistency: 0.5,
            small_dataset_rows: 100,
            max_missing_percentage: 20.0,
            max_duplicate_percentage: 10.0,
            min_quality_score: 0.7,
            high_cardinality: 100,
            wide_dataset_columns: 1000,
        }
    }
}

/// Configuration for a profiling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    pub parser: ParserConfig,
    pub inference: InferenceThresholds,
    pub outliers: OutlierConfig,
    pub distribution: DistributionConfig,
    pub column_weights: ColumnWeights,
    pub overall_weights: OverallWeights,
    pub report: ReportThresholds,
}

impl ProfilerConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ProfilerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method to force a delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.parser.delimiter = Some(delimiter);
        self
    }

    /// Builder method to set the column score weights.
    pub fn with_column_weights(mut self, weights: ColumnWeights) -> Self {
        self.column_weights = weights;
        self
    }

    /// Builder method to set the overall score weights.
    pub fn with_overall_weights(mut self, weights: OverallWeights) -> Self {
        self.overall_weights = weights;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error if a ratio is outside [0, 1], a weight is negative,
    /// or a weight set does not sum to one.
    pub fn validate(&self) -> Result<()> {
        check_weights("column_weights", &self.column_weights.parts())?;
        check_weights("overall_weights", &self.overall_weights.parts())?;

        let inference = &self.inference;
        let report = &self.report;
        let ratios = [
            ("inference.boolean_ratio", inference.boolean_ratio),
            ("inference.numeric_ratio", inference.numeric_ratio),
            ("inference.integer_ratio", inference.integer_ratio),
            ("inference.date_ratio", inference.date_ratio),
            (
                "inference.categorical_unique_ratio",
                inference.categorical_unique_ratio,
            ),
            ("report.min_completeness", report.min_completeness),
            ("report.high_completeness", report.high_completeness),
            ("report.critical_completeness", report.critical_completeness),
            ("report.min_format_consistency", report.min_format_consistency),
            (
                "report.high_format_consistency",
                report.high_format_consistency,
            ),
            ("report.min_quality_score", report.min_quality_score),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(AssayError::config(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }

        if self.outliers.iqr_multiplier <= 0.0 {
            return Err(AssayError::config(format!(
                "outliers.iqr_multiplier must be positive, got {}",
                self.outliers.iqr_multiplier
            )));
        }

        if report.critical_completeness > report.high_completeness
            || report.high_completeness > report.min_completeness
        {
            tracing::warn!(
                "completeness thresholds are not ordered (critical {} <= high {} <= min {}); severities may be surprising",
                report.critical_completeness,
                report.high_completeness,
                report.min_completeness
            );
        }

        if self.parser.delimiter == Some(self.parser.quote) {
            return Err(AssayError::config(format!(
                "parser.quote and parser.delimiter are both {:?}",
                self.parser.quote
            )));
        }

        Ok(())
    }
}

fn check_weights(group: &str, parts: &[(&'static str, f64)]) -> Result<()> {
    for (name, weight) in parts {
        if *weight < 0.0 {
            return Err(AssayError::config(format!(
                "{}.{} must not be negative, got {}",
                group, name, weight
            )));
        }
    }

    let sum: f64 = parts.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(AssayError::config(format!(
            "{} must sum to 1.0, got {}",
            group, sum
        )));
    }

    Ok(())
}
