//! Main profiler and public API.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    DistributionAnalyzer, OutlierDetector, StatisticsGenerator, analyze_patterns, numeric_cells,
};
use crate::config::ProfilerConfig;
use crate::error::ParseError;
use crate::inference::TypeInferencer;
use crate::input::{ParsedTable, Parser};
use crate::profile::{ColumnProfile, PatternAnalysis, StatisticalSummary};
use crate::quality::{
    DataQualityReport, DataWarning, ReportGenerator, completeness, quality_score, summarize,
    uniqueness, validity,
};

/// Result of profiling one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Delimiter used to split fields.
    pub delimiter: char,
    /// Parsed table (empty when parsing failed).
    pub table: ParsedTable,
    /// One profile per column, in header order.
    pub columns: Vec<ColumnProfile>,
    /// Absent when parsing failed.
    pub statistical_summary: Option<StatisticalSummary>,
    /// Absent when parsing failed.
    pub quality_report: Option<DataQualityReport>,
    pub warnings: Vec<DataWarning>,
    /// Fatal parse errors; when non-empty nothing was analyzed.
    pub errors: Vec<ParseError>,
}

impl ProfileResult {
    /// True when parsing succeeded and the table was analyzed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Look up a column profile by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Overall quality score, or 0 when nothing was analyzed.
    pub fn overall_score(&self) -> f64 {
        self.quality_report
            .as_ref()
            .map(|r| r.overall_score)
            .unwrap_or(0.0)
    }
}

/// The profiling engine.
///
/// Holds configuration only; every call to [`Profiler::profile`] is
/// independent and deterministic.
pub struct Profiler {
    config: ProfilerConfig,
    inferencer: TypeInferencer,
    statistics: StatisticsGenerator,
    outliers: OutlierDetector,
    distribution: DistributionAnalyzer,
    report: ReportGenerator,
}

impl Profiler {
    /// Create a new profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let inferencer = TypeInferencer::with_thresholds(config.inference.clone());
        let statistics = StatisticsGenerator::new(config.inference.top_values);
        let outliers = OutlierDetector::with_config(config.outliers.clone());
        let distribution = DistributionAnalyzer::with_config(config.distribution.clone());
        let report = ReportGenerator::new()
            .with_thresholds(config.report.clone())
            .with_weights(config.overall_weights);

        Self {
            config,
            inferencer,
            statistics,
            outliers,
            distribution,
            report,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profile raw delimited text.
    ///
    /// `delimiter` overrides both the configured delimiter and detection.
    pub fn profile(&self, raw: &str, delimiter: Option<char>) -> ProfileResult {
        let mut parser_config = self.config.parser.clone();
        if delimiter.is_some() {
            parser_config.delimiter = delimiter;
        }

        let outcome = Parser::with_config(parser_config).parse(raw);
        let delimiter = outcome.table.delimiter;

        if !outcome.is_ok() {
            return ProfileResult {
                delimiter,
                table: outcome.table,
                columns: Vec::new(),
                statistical_summary: None,
                quality_report: None,
                warnings: Vec::new(),
                errors: outcome.errors,
            };
        }

        let table = outcome.table;
        tracing::debug!(
            delimiter = %delimiter.escape_default(),
            rows = table.row_count(),
            columns = table.column_count(),
            "table parsed"
        );

        let columns: Vec<ColumnProfile> = (0..table.column_count())
            .map(|index| self.profile_column(&table, index))
            .collect();

        let summary = summarize(&table, &columns);
        let (report, warnings) = self.report.generate(&columns, &summary, &outcome.warnings);

        tracing::debug!(
            overall_score = report.overall_score,
            issues = report.issues.len(),
            "profile complete"
        );

        ProfileResult {
            delimiter,
            table,
            columns,
            statistical_summary: Some(summary),
            quality_report: Some(report),
            warnings,
            errors: Vec::new(),
        }
    }

    /// Profile a single column of a parsed table.
    pub fn profile_column(&self, table: &ParsedTable, index: usize) -> ColumnProfile {
        let name = table.headers.get(index).cloned().unwrap_or_default();
        let total = table.row_count();
        let values = table.non_missing_values(index);

        let info = self.inferencer.infer(name, &values, total - values.len());
        let detected_type = info.detected_type;
        let statistics = self.statistics.compute(detected_type, &values, total);

        let completeness = completeness(values.len(), total);
        let validity = validity(detected_type, &values);
        let uniqueness_ratio = uniqueness(info.unique_count, values.len());

        let (outliers, distribution_analysis) = if detected_type.is_numeric() {
            let cells = numeric_cells(table, index);
            let numbers: Vec<f64> = cells.iter().map(|(_, n)| *n).collect();
            (
                Some(self.outliers.detect(&cells)),
                self.distribution.analyze(&numbers),
            )
        } else {
            (None, Default::default())
        };

        let pattern_analysis = if detected_type.is_textual() {
            analyze_patterns(&values)
        } else {
            PatternAnalysis::default()
        };

        let quality_score = quality_score(
            &self.config.column_weights,
            completeness,
            validity,
            uniqueness_ratio,
        );

        let mut profile = ColumnProfile {
            info,
            position: index,
            statistics,
            completeness,
            validity,
            uniqueness_ratio,
            outlier_count: outliers.as_ref().map(|o| o.count),
            outlier_percentage: outliers.as_ref().map(|o| o.percentage),
            outlier_bounds: outliers.as_ref().and_then(|o| o.bounds),
            pattern_analysis,
            distribution_analysis,
            quality_score,
            recommendations: Vec::new(),
        };
        profile.recommendations = self.report.column_recommendations(&profile);

        tracing::trace!(
            column = profile.name(),
            detected_type = %detected_type,
            quality_score,
            "column profiled"
        );

        profile
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile raw delimited text with the default configuration.
pub fn profile(raw: &str, delimiter: Option<char>) -> ProfileResult {
    Profiler::new().profile(raw, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DetectedType, DistributionType};
    use crate::quality::IssueType;

    #[test]
    fn test_end_to_end() {
        let result = profile("id,cat\n1,A\n2,B\n3,A\n", None);
        assert!(result.is_ok());
        assert_eq!(result.delimiter, ',');

        let id = result.column("id").unwrap();
        assert_eq!(id.detected_type(), DetectedType::NumericInteger);
        assert_eq!(id.info.unique_count, 3);
        assert_eq!(id.completeness, 1.0);
        assert_eq!(id.outlier_count, Some(0));

        let cat = result.column("cat").unwrap();
        assert_eq!(cat.detected_type(), DetectedType::Categorical);
        assert_eq!(cat.info.unique_count, 2);
        let freq = cat.statistics.frequency.as_ref().unwrap();
        assert_eq!(freq.most_frequent, "A");
        assert_eq!(freq.most_frequent_count, 2);
        assert!(cat.outlier_count.is_none());

        let summary = result.statistical_summary.as_ref().unwrap();
        assert_eq!(summary.dataset_info.duplicate_rows, 0);
        let report = result.quality_report.as_ref().unwrap();
        assert_eq!(report.issues_of_type(IssueType::MissingData).count(), 0);
    }

    #[test]
    fn test_fatal_error_short_circuits() {
        let result = profile("", None);
        assert!(!result.is_ok());
        assert_eq!(result.errors, vec![ParseError::EmptyInput]);
        assert!(result.columns.is_empty());
        assert!(result.statistical_summary.is_none());
        assert!(result.quality_report.is_none());
        assert_eq!(result.overall_score(), 0.0);
    }

    #[test]
    fn test_header_only_is_fatal() {
        let result = profile("a,b,c\n", None);
        assert_eq!(result.errors, vec![ParseError::NoDataRows]);
    }

    #[test]
    fn test_delimiter_override() {
        let result = profile("a;b\n1;2\n", Some(','));
        assert_eq!(result.delimiter, ',');
        assert_eq!(result.table.headers, vec!["a;b"]);
    }

    #[test]
    fn test_all_null_column() {
        let result = profile("a,b\n1,\n2,\n3,\n", None);
        let b = result.column("b").unwrap();
        assert_eq!(b.completeness, 0.0);
        assert_eq!(b.detected_type(), DetectedType::Text);
        assert_eq!(b.quality_score, 0.0);
        assert_eq!(b.statistics.count, 0);
    }

    #[test]
    fn test_numeric_column_analyses() {
        let result = profile("v\n1\n2\n3\n4\n5\n100\n", None);
        let v = result.column("v").unwrap();
        assert_eq!(v.outlier_count, Some(1));
        assert_eq!(
            v.distribution_analysis.distribution_type,
            Some(DistributionType::Normal)
        );
        assert!(v.pattern_analysis.common_patterns.is_empty());
        assert_eq!(v.pattern_analysis.format_consistency, 1.0);
    }

    #[test]
    fn test_parse_warnings_surface() {
        let result = profile("a,a\n1,2\n3\n", None);
        assert!(result.is_ok());
        assert!(result.warnings.iter().any(|w| w.message.contains("appears 2 times")));
        assert!(result.warnings.iter().any(|w| w.message.contains("do not have 2 columns")));
    }
}
