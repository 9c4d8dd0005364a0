//! Core type definitions for column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type detected for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectedType {
    /// Whole numbers.
    NumericInteger,
    /// Numbers with a fractional part.
    NumericFloat,
    /// true/false, yes/no, 1/0, y/n.
    Boolean,
    /// Calendar dates or timestamps.
    Date,
    /// Low-cardinality discrete values.
    Categorical,
    /// Anything else.
    Text,
}

impl DetectedType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DetectedType::NumericInteger | DetectedType::NumericFloat)
    }

    /// Returns true for types whose values are free-form strings.
    pub fn is_textual(&self) -> bool {
        matches!(self, DetectedType::Categorical | DetectedType::Text)
    }

    /// The coarse storage bucket this type belongs to.
    pub fn storage_type(&self) -> StorageType {
        match self {
            DetectedType::NumericInteger | DetectedType::NumericFloat => StorageType::Numeric,
            DetectedType::Boolean => StorageType::Boolean,
            DetectedType::Date => StorageType::Datetime,
            DetectedType::Categorical => StorageType::Categorical,
            DetectedType::Text => StorageType::Text,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DetectedType::NumericInteger => "numeric-integer",
            DetectedType::NumericFloat => "numeric-float",
            DetectedType::Boolean => "boolean",
            DetectedType::Date => "date",
            DetectedType::Categorical => "categorical",
            DetectedType::Text => "text",
        }
    }
}

impl fmt::Display for DetectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse storage type used in dataset-level histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Numeric,
    Categorical,
    Datetime,
    Boolean,
    Text,
}

impl StorageType {
    /// All storage types in histogram order.
    pub const ALL: [StorageType; 5] = [
        StorageType::Numeric,
        StorageType::Categorical,
        StorageType::Datetime,
        StorageType::Boolean,
        StorageType::Text,
    ];

    /// Get the lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            StorageType::Numeric => "numeric",
            StorageType::Categorical => "categorical",
            StorageType::Datetime => "datetime",
            StorageType::Boolean => "boolean",
            StorageType::Text => "text",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse shape of a numeric distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    Normal,
    RightSkewed,
    LeftSkewed,
    /// Zero standard deviation.
    Constant,
    Unknown,
}

/// How a percentile is read from sorted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Blend the two neighbors of `p × (n − 1)` by its fractional part.
    Linear,
    /// Take the value at index `floor(n × p)`.
    #[default]
    Truncated,
}
