//! Quality report and warning generation.

use crate::config::{OverallWeights, ReportThresholds};
use crate::input::ParseWarning;
use crate::profile::{ColumnProfile, DetectedType, DistributionType, StatisticalSummary};

use super::issue::{DataQualityIssue, DataQualityReport, DataWarning, IssueType, Severity};

/// Categorical columns with more categories than this get target encoding.
pub(crate) const ONE_HOT_MAX_CATEGORIES: usize = 50;

/// Turns column profiles and the dataset summary into issues, warnings, and
/// recommendations.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    thresholds: ReportThresholds,
    weights: OverallWeights,
}

impl ReportGenerator {
    /// Create a generator with default thresholds and weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the thresholds.
    pub fn with_thresholds(mut self, thresholds: ReportThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Builder method to set the overall score weights.
    pub fn with_weights(mut self, weights: OverallWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Build the report and the warning list.
    pub fn generate(
        &self,
        columns: &[ColumnProfile],
        summary: &StatisticalSummary,
        parse_warnings: &[ParseWarning],
    ) -> (DataQualityReport, Vec<DataWarning>) {
        let completeness = average(columns, |c| c.completeness);
        let validity = average(columns, |c| c.validity);
        let uniqueness = average(columns, |c| c.uniqueness_ratio);
        let consistency = average(columns, |c| c.pattern_analysis.format_consistency);

        let overall_score = (self.weights.completeness * completeness
            + self.weights.validity * validity
            + self.weights.uniqueness * uniqueness
            + self.weights.consistency * consistency)
            .clamp(0.0, 1.0);

        let mut issues = Vec::new();
        for column in columns {
            self.column_issues(column, &mut issues);
        }
        self.dataset_issues(summary, &mut issues);
        issues.sort_by(|a, b| b.severity.cmp(&a.severity));

        let warnings = self.warnings(columns, summary, parse_warnings);
        let recommendations = self.recommendations(columns, summary, &issues);

        tracing::debug!(
            overall_score,
            issues = issues.len(),
            warnings = warnings.len(),
            "quality report generated"
        );

        let report = DataQualityReport {
            overall_score,
            completeness,
            validity,
            uniqueness,
            consistency,
            issues,
            recommendations,
        };
        (report, warnings)
    }

    fn column_issues(&self, column: &ColumnProfile, issues: &mut Vec<DataQualityIssue>) {
        let t = &self.thresholds;
        let name = column.name();

        if column.completeness < t.min_completeness {
            let severity = if column.completeness < t.critical_completeness {
                Severity::Critical
            } else if column.completeness < t.high_completeness {
                Severity::High
            } else {
                Severity::Medium
            };
            let pct = column.missing_percentage();
            issues.push(
                DataQualityIssue::new(
                    IssueType::MissingData,
                    severity,
                    format!("Column '{}' is missing {:.1}% of its values", name, pct),
                )
                .with_column(name)
                .with_extent(column.info.null_count, pct)
                .with_suggestion(missing_value_advice(column)),
            );
        }

        if let (Some(count), Some(pct)) = (column.outlier_count, column.outlier_percentage) {
            if pct > t.max_outlier_percentage {
                let severity = if pct > t.high_outlier_percentage {
                    Severity::High
                } else {
                    Severity::Medium
                };
                issues.push(
                    DataQualityIssue::new(
                        IssueType::Outliers,
                        severity,
                        format!("Column '{}' has {} outliers ({:.1}%)", name, count, pct),
                    )
                    .with_column(name)
                    .with_extent(count, pct)
                    .with_suggestion(
                        "Verify the extreme values; cap, transform, or remove them if they are errors",
                    ),
                );
            }
        }

        let consistency = column.pattern_analysis.format_consistency;
        if consistency < t.min_format_consistency {
            let severity = if consistency < t.high_format_consistency {
                Severity::High
            } else {
                Severity::Medium
            };
            let top = column
                .pattern_analysis
                .common_patterns
                .first()
                .map(|p| p.count)
                .unwrap_or(0);
            issues.push(
                DataQualityIssue::new(
                    IssueType::InconsistentFormat,
                    severity,
                    format!(
                        "Column '{}' has inconsistent formats ({:.0}% match the most common pattern)",
                        name,
                        consistency * 100.0
                    ),
                )
                .with_column(name)
                .with_extent(
                    column.statistics.count.saturating_sub(top),
                    (1.0 - consistency) * 100.0,
                )
                .with_suggestion("Standardize the value format across rows"),
            );
        }

        if !column.detected_type().is_numeric()
            && column.info.unique_count > t.high_cardinality
            && column.info.unique_count < column.statistics.count
        {
            issues.push(
                DataQualityIssue::new(
                    IssueType::HighCardinality,
                    Severity::Low,
                    format!(
                        "Column '{}' has {} distinct values",
                        name, column.info.unique_count
                    ),
                )
                .with_column(name)
                .with_extent(column.info.unique_count, column.uniqueness_ratio * 100.0)
                .with_suggestion("Group rare values or use a target or hash encoding"),
            );
        }

        if column.is_constant() {
            issues.push(
                DataQualityIssue::new(
                    IssueType::LowCardinality,
                    Severity::Low,
                    format!("Column '{}' has only one distinct value", name),
                )
                .with_column(name)
                .with_extent(column.statistics.count, 100.0)
                .with_suggestion("Drop the column; it carries no information"),
            );
        }
    }

    fn dataset_issues(&self, summary: &StatisticalSummary, issues: &mut Vec<DataQualityIssue>) {
        let duplicates = summary.dataset_info.duplicate_rows;
        if duplicates == 0 {
            return;
        }

        let pct = summary.duplicate_percentage();
        let severity = if pct > self.thresholds.max_duplicate_percentage {
            Severity::Medium
        } else {
            Severity::Low
        };
        issues.push(
            DataQualityIssue::new(
                IssueType::Duplicates,
                severity,
                format!("{} duplicate rows ({:.1}%)", duplicates, pct),
            )
            .with_extent(duplicates, pct)
            .with_suggestion("Remove duplicate rows unless repeated records are expected"),
        );
    }

    fn warnings(
        &self,
        columns: &[ColumnProfile],
        summary: &StatisticalSummary,
        parse_warnings: &[ParseWarning],
    ) -> Vec<DataWarning> {
        let t = &self.thresholds;
        let info = &summary.dataset_info;
        let mut warnings: Vec<DataWarning> = parse_warnings.iter().map(parse_warning).collect();

        if info.rows < t.small_dataset_rows {
            warnings.push(
                DataWarning::warning(format!(
                    "Small dataset: only {} rows; statistics may be unreliable",
                    info.rows
                ))
                .with_suggestion(format!(
                    "Collect at least {} rows for more reliable results",
                    t.small_dataset_rows
                )),
            );
        }

        if summary.missing_data.missing_percentage > t.max_missing_percentage {
            warnings.push(
                DataWarning::warning(format!(
                    "High missing data: {:.1}% of all cells are empty",
                    summary.missing_data.missing_percentage
                ))
                .with_suggestion("Review data collection or impute missing values"),
            );
        }

        let duplicate_pct = summary.duplicate_percentage();
        if duplicate_pct > t.max_duplicate_percentage {
            warnings.push(
                DataWarning::warning(format!(
                    "{} duplicate rows ({:.1}% of the dataset)",
                    info.duplicate_rows, duplicate_pct
                ))
                .with_suggestion("Remove duplicate rows"),
            );
        }

        let low_quality = low_quality_columns(columns, t.min_quality_score);
        if !low_quality.is_empty() {
            warnings.push(
                DataWarning::warning(format!(
                    "Low quality score in {} column(s): {}",
                    low_quality.len(),
                    low_quality.join(", ")
                ))
                .with_suggestion("Review these columns before using them"),
            );
        }

        for column in columns {
            if column.is_constant() {
                warnings.push(
                    DataWarning::info(format!("Column '{}' is a constant column", column.name()))
                        .with_column(column.name())
                        .with_suggestion("Drop the column"),
                );
            } else if !column.detected_type().is_numeric() && column.is_likely_identifier() {
                warnings.push(
                    DataWarning::info(format!(
                        "Column '{}' has all unique values and may be an identifier",
                        column.name()
                    ))
                    .with_column(column.name())
                    .with_suggestion("Exclude identifier columns from modeling"),
                );
            }
        }

        if info.columns > t.wide_dataset_columns {
            warnings.push(
                DataWarning::info(format!("Very wide dataset: {} columns", info.columns))
                    .with_suggestion("Consider feature selection or dimensionality reduction"),
            );
        }

        warnings
    }

    fn recommendations(
        &self,
        columns: &[ColumnProfile],
        summary: &StatisticalSummary,
        issues: &[DataQualityIssue],
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        let missing = affected_columns(issues, IssueType::MissingData);
        if !missing.is_empty() {
            recommendations.push(format!(
                "Handle missing values in {} column(s): {}",
                missing.len(),
                missing.join(", ")
            ));
        }

        let duplicates = summary.dataset_info.duplicate_rows;
        if duplicates > 0 {
            recommendations.push(format!("Remove {} duplicate row(s)", duplicates));
        }

        let outliers = affected_columns(issues, IssueType::Outliers);
        if !outliers.is_empty() {
            recommendations.push(format!("Investigate outliers in: {}", outliers.join(", ")));
        }

        let formats = affected_columns(issues, IssueType::InconsistentFormat);
        if !formats.is_empty() {
            recommendations.push(format!("Standardize formats in: {}", formats.join(", ")));
        }

        let constant = affected_columns(issues, IssueType::LowCardinality);
        if !constant.is_empty() {
            recommendations.push(format!("Drop constant column(s): {}", constant.join(", ")));
        }

        let high_cardinality = affected_columns(issues, IssueType::HighCardinality);
        if !high_cardinality.is_empty() {
            recommendations.push(format!(
                "Reduce cardinality before encoding: {}",
                high_cardinality.join(", ")
            ));
        }

        if summary.dataset_info.rows < self.thresholds.small_dataset_rows {
            recommendations.push(
                "Collect more rows; small samples make the statistics unreliable".to_string(),
            );
        }

        let low_quality = low_quality_columns(columns, self.thresholds.min_quality_score);
        if !low_quality.is_empty() {
            recommendations.push(format!(
                "Review low-quality column(s): {}",
                low_quality.join(", ")
            ));
        }

        if recommendations.is_empty() {
            recommendations
                .push("Data quality looks good; no major issues were detected".to_string());
        }

        recommendations
    }

    /// Recommendations built from a single column's own signals.
    pub fn column_recommendations(&self, column: &ColumnProfile) -> Vec<String> {
        let t = &self.thresholds;
        let mut recommendations = Vec::new();

        if column.info.null_count > 0 {
            recommendations.push(missing_value_advice(column));
        }

        if let (Some(count), Some(bounds)) = (column.outlier_count, column.outlier_bounds) {
            if count > 0 {
                recommendations.push(format!(
                    "Review {} outlier(s) outside [{:.2}, {:.2}]",
                    count, bounds.lower, bounds.upper
                ));
            }
        }

        let consistency = column.pattern_analysis.format_consistency;
        if consistency < t.min_format_consistency {
            recommendations.push(format!(
                "Standardize value formats ({:.0}% match the most common pattern)",
                consistency * 100.0
            ));
        }

        if column.is_constant() {
            recommendations.push("Drop this constant column".to_string());
        } else if column.is_likely_identifier() {
            recommendations.push("Likely an identifier; exclude it from modeling".to_string());
        }

        match column.distribution_analysis.distribution_type {
            Some(DistributionType::RightSkewed) | Some(DistributionType::LeftSkewed) => {
                recommendations
                    .push("Apply a log or power transform to reduce skew".to_string());
            }
            _ => {}
        }

        if column.detected_type() == DetectedType::Categorical && !column.is_constant() {
            let categories = column.info.unique_count;
            if categories <= ONE_HOT_MAX_CATEGORIES {
                recommendations.push(format!("One-hot encode ({} categories)", categories));
            } else {
                recommendations.push(format!("Use target encoding ({} categories)", categories));
            }
        }

        recommendations
    }
}

fn parse_warning(warning: &ParseWarning) -> DataWarning {
    let base = DataWarning::warning(warning.to_string());
    match warning {
        ParseWarning::ColumnCountMismatch { .. } => {
            base.with_suggestion("Check the delimiter and quoting of the affected lines")
        }
        ParseWarning::DuplicateHeader { name, .. } => base
            .with_column(name.clone())
            .with_suggestion("Give every column a unique name"),
        ParseWarning::EmptyHeader { assigned, .. } => base
            .with_column(assigned.clone())
            .with_suggestion("Name every column in the header row"),
    }
}

fn missing_value_advice(column: &ColumnProfile) -> String {
    let pct = column.missing_percentage();
    if pct > 50.0 {
        return format!("Consider dropping this column ({:.1}% missing)", pct);
    }
    let strategy = match column.detected_type() {
        DetectedType::NumericInteger | DetectedType::NumericFloat => "the median",
        DetectedType::Categorical | DetectedType::Boolean => "the most frequent value",
        DetectedType::Date => "interpolation or a sentinel date",
        DetectedType::Text => "a placeholder value",
    };
    format!("Impute missing values with {} ({:.1}% missing)", strategy, pct)
}

fn affected_columns(issues: &[DataQualityIssue], issue_type: IssueType) -> Vec<&str> {
    issues
        .iter()
        .filter(|i| i.issue_type == issue_type)
        .filter_map(|i| i.column.as_deref())
        .collect()
}

fn low_quality_columns(columns: &[ColumnProfile], min_score: f64) -> Vec<&str> {
    columns
        .iter()
        .filter(|c| c.quality_score < min_score)
        .map(|c| c.name())
        .collect()
}

fn average(columns: &[ColumnProfile], f: impl Fn(&ColumnProfile) -> f64) -> f64 {
    if columns.is_empty() {
        0.0
    } else {
        columns.iter().map(f).sum::<f64>() / columns.len() as f64
    }
}
