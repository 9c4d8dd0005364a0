//! Per-column profile and statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::{DetectedType, DistributionType, StorageType};

/// Result of classifying a column's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnTypeInfo {
    /// Column name.
    pub name: String,
    /// Detected semantic type.
    pub detected_type: DetectedType,
    /// Share of non-empty values supporting the detected type (0.0-1.0).
    pub confidence: f64,
    /// Number of missing cells.
    pub null_count: usize,
    /// Number of distinct non-empty values.
    pub unique_count: usize,
    /// Up to five distinct values, in first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_values: Vec<String>,
}

/// Statistics for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    pub median: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Every value is a whole number.
    pub appears_integer: bool,
}

/// Frequency table for categorical and text columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyStatistics {
    /// Most frequent values with their counts, most frequent first.
    pub top_values: IndexMap<String, usize>,
    /// Number of distinct values.
    pub category_count: usize,
    pub most_frequent: String,
    pub most_frequent_count: usize,
    /// Share of all cells (including missing) holding the most frequent value.
    pub most_frequent_percentage: f64,
    /// Shannon entropy in bits (two or more categories only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy: Option<f64>,
}

/// Statistics for string columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringStatistics {
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
}

/// Statistics for boolean columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanStatistics {
    pub true_count: usize,
    pub false_count: usize,
    pub true_percentage: f64,
    pub false_percentage: f64,
}

/// Statistics for date columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateStatistics {
    /// Earliest date (ISO 8601).
    pub min_date: String,
    /// Latest date (ISO 8601).
    pub max_date: String,
    pub date_range_days: i64,
}

/// Statistics computed for a column.
///
/// Only the block matching the column's type is present; a column with no
/// non-empty values carries `count: 0` and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    /// Number of non-empty values.
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<FrequencyStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<StringStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean: Option<BooleanStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateStatistics>,
}

/// One structural signature and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternFrequency {
    pub pattern: String,
    pub count: usize,
    pub percentage: f64,
}

/// Format-shape analysis of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Up to five most common signatures.
    pub common_patterns: Vec<PatternFrequency>,
    /// Share of values matching the most common signature (0.0-1.0).
    pub format_consistency: f64,
}

impl Default for PatternAnalysis {
    fn default() -> Self {
        Self {
            common_patterns: Vec::new(),
            format_consistency: 1.0,
        }
    }
}

/// Shape of a numeric column's distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewness: Option<f64>,
    /// Excess kurtosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kurtosis: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_normal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_type: Option<DistributionType>,
}

/// Inclusive range outside of which a value is an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierBounds {
    pub lower: f64,
    pub upper: f64,
}

/// Complete quality profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    #[serde(flatten)]
    pub info: ColumnTypeInfo,
    /// Zero-based position in the table.
    pub position: usize,
    pub statistics: ColumnStatistics,
    /// Share of cells that are not missing (0.0-1.0).
    pub completeness: f64,
    /// Share of non-empty values valid for the detected type (0.0-1.0).
    pub validity: f64,
    /// Distinct values over non-empty values (0.0-1.0).
    pub uniqueness_ratio: f64,
    /// Numeric columns only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlier_count: Option<usize>,
    /// Percentage (0-100) of numeric values that are outliers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlier_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlier_bounds: Option<OutlierBounds>,
    pub pattern_analysis: PatternAnalysis,
    pub distribution_analysis: DistributionAnalysis,
    /// Weighted quality score (0.0-1.0).
    pub quality_score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl ColumnProfile {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Detected semantic type.
    pub fn detected_type(&self) -> DetectedType {
        self.info.detected_type
    }

    /// Coarse storage bucket.
    pub fn storage_type(&self) -> StorageType {
        self.info.detected_type.storage_type()
    }

    /// Total cells, missing included.
    pub fn total_count(&self) -> usize {
        self.statistics.count + self.info.null_count
    }

    /// Get the missing percentage (0-100).
    pub fn missing_percentage(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            0.0
        } else {
            (self.info.null_count as f64 / total as f64) * 100.0
        }
    }

    /// Every non-empty value is distinct and nothing is missing.
    pub fn is_likely_identifier(&self) -> bool {
        self.info.null_count == 0
            && self.statistics.count > 1
            && self.info.unique_count == self.statistics.count
    }

    /// Two or more values, all identical.
    pub fn is_constant(&self) -> bool {
        self.statistics.count > 1 && self.info.unique_count == 1
    }
}
