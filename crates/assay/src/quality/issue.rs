//! Issue, warning, and report types.

use serde::{Deserialize, Serialize};

/// Kind of data-quality issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Column completeness below threshold.
    MissingData,
    /// Repeated rows.
    Duplicates,
    /// Numeric values outside the IQR fences.
    Outliers,
    /// Values with many different shapes.
    InconsistentFormat,
    /// A single repeated value.
    LowCardinality,
    /// Very many distinct values in a non-numeric column.
    HighCardinality,
}

impl IssueType {
    /// Get a human-readable label for the issue type.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::MissingData => "Missing Data",
            IssueType::Duplicates => "Duplicates",
            IssueType::Outliers => "Outliers",
            IssueType::InconsistentFormat => "Inconsistent Format",
            IssueType::LowCardinality => "Low Cardinality",
            IssueType::HighCardinality => "High Cardinality",
        }
    }
}

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// A typed data-quality issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    /// Affected column; absent for dataset-level issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub message: String,
    /// Number of affected cells or rows.
    pub count: usize,
    /// Percentage (0-100) of affected cells or rows.
    pub percentage: f64,
    pub suggestion: String,
}

impl DataQualityIssue {
    /// Create a dataset-level issue.
    pub fn new(issue_type: IssueType, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            issue_type,
            severity,
            column: None,
            message: message.into(),
            count: 0,
            percentage: 0.0,
            suggestion: String::new(),
        }
    }

    /// Attach the affected column.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Set the affected count and percentage.
    pub fn with_extent(mut self, count: usize, percentage: f64) -> Self {
        self.count = count;
        self.percentage = percentage;
        self
    }

    /// Set the suggested remediation.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }
}

/// Warning level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Error,
    Warning,
    Info,
}

/// A free-form warning about the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataWarning {
    #[serde(rename = "type")]
    pub level: WarningLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl DataWarning {
    pub fn new(level: WarningLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            column: None,
            suggestion: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(WarningLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(WarningLevel::Info, message)
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Aggregate quality assessment of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityReport {
    /// Weighted composite of the four sub-scores (0.0-1.0).
    pub overall_score: f64,
    /// Column-averaged completeness.
    pub completeness: f64,
    /// Column-averaged validity.
    pub validity: f64,
    /// Column-averaged uniqueness ratio.
    pub uniqueness: f64,
    /// Column-averaged format consistency.
    pub consistency: f64,
    /// Issues, most severe first.
    pub issues: Vec<DataQualityIssue>,
    pub recommendations: Vec<String>,
}

impl DataQualityReport {
    /// Issues of a given type.
    pub fn issues_of_type(&self, issue_type: IssueType) -> impl Iterator<Item = &DataQualityIssue> {
        self.issues.iter().filter(move |i| i.issue_type == issue_type)
    }
}
