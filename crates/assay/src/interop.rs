//! Conversion into the column-info vocabulary shared with the backend
//! profiling service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::percentage;
use crate::profile::ColumnProfile;
use crate::profiler::ProfileResult;

/// Columns with more missing values than this percentage get a warning.
const HIGH_MISSING_PERCENTAGE: f64 = 50.0;
/// Share of outliers above which a numeric column gets a warning.
const OUTLIER_WARNING_RATIO: f64 = 0.05;
/// Non-numeric columns with more distinct values get a warning.
const HIGH_CARDINALITY: usize = 100;
/// Dataset-level missing threshold for listing columns.
const COLUMN_MISSING_WARNING: f64 = 30.0;
/// Dataset-level distinct-value threshold for textual columns.
const HIGH_CARDINALITY_CATEGORICAL: usize = 50;
const WIDE_DATASET_COLUMNS: usize = 1000;
const LARGE_MEMORY_MB: f64 = 1000.0;

/// Per-column summary in the backend vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Storage type label.
    pub dtype: String,
    pub missing_count: usize,
    /// Percentage (0-100).
    pub missing_percentage: f64,
    pub unique_count: usize,
    /// Distinct values over total cells, as a percentage (0-100).
    pub unique_percentage: f64,
    /// Bytes held by the column's cells.
    pub memory_usage: usize,
    pub stats: Value,
    pub warnings: Vec<String>,
}

impl ColumnInfo {
    fn is_id_column(&self) -> bool {
        self.warnings.iter().any(|w| w.contains("ID column"))
    }
}

/// Dataset missing-value totals in the backend vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummary {
    pub total_missing: usize,
    pub total_cells: usize,
    pub missing_percentage: f64,
    pub columns_with_missing: usize,
    pub columns_with_missing_list: Vec<String>,
}

/// Whole-dataset profile in the backend vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataProfile {
    pub file_path: String,
    /// `(rows, columns)`.
    pub shape: (usize, usize),
    pub columns: Vec<ColumnInfo>,
    pub missing_summary: MissingSummary,
    pub warnings: Vec<String>,
    pub memory_usage_mb: f64,
    /// Column count per storage type, omitting types with no columns.
    pub dtypes_summary: IndexMap<String, usize>,
}

impl ProfileResult {
    /// Convert to a [`DataProfile`] labelled with `file_path`.
    pub fn to_data_profile(&self, file_path: impl Into<String>) -> DataProfile {
        let columns: Vec<ColumnInfo> = self
            .columns
            .iter()
            .map(|column| self.column_info(column))
            .collect();

        let rows = self.table.row_count();
        let width = self.table.column_count();
        let total_cells = rows * width;
        let total_missing: usize = columns.iter().map(|c| c.missing_count).sum();
        let columns_with_missing_list: Vec<String> = columns
            .iter()
            .filter(|c| c.missing_count > 0)
            .map(|c| c.name.clone())
            .collect();
        let missing_summary = MissingSummary {
            total_missing,
            total_cells,
            missing_percentage: percentage(total_missing, total_cells),
            columns_with_missing: columns_with_missing_list.len(),
            columns_with_missing_list,
        };

        let mut dtypes_summary: IndexMap<String, usize> = IndexMap::new();
        for column in &self.columns {
            *dtypes_summary
                .entry(column.storage_type().label().to_string())
                .or_insert(0) += 1;
        }

        let memory_usage_mb = self
            .statistical_summary
            .as_ref()
            .map(|s| s.dataset_info.memory_usage_mb)
            .unwrap_or(0.0);
        let duplicate_rows = self
            .statistical_summary
            .as_ref()
            .map(|s| s.dataset_info.duplicate_rows)
            .unwrap_or(0);
        let warnings = global_warnings(&columns, width, duplicate_rows, memory_usage_mb);

        DataProfile {
            file_path: file_path.into(),
            shape: (rows, width),
            columns,
            missing_summary,
            warnings,
            memory_usage_mb,
            dtypes_summary,
        }
    }

    fn column_info(&self, column: &ColumnProfile) -> ColumnInfo {
        let total = column.total_count();
        let memory_usage = self
            .table
            .column_values(column.position)
            .map(|cell| cell.map(str::len).unwrap_or(0))
            .sum();

        ColumnInfo {
            name: column.name().to_string(),
            dtype: column.storage_type().label().to_string(),
            missing_count: column.info.null_count,
            missing_percentage: column.missing_percentage(),
            unique_count: column.info.unique_count,
            unique_percentage: percentage(column.info.unique_count, total),
            memory_usage,
            stats: serde_json::to_value(&column.statistics).unwrap_or(Value::Null),
            warnings: column_warnings(column),
        }
    }
}

fn column_warnings(column: &ColumnProfile) -> Vec<String> {
    let mut warnings = Vec::new();
    let unique = column.info.unique_count;
    let total = column.total_count();

    if column.detected_type().is_numeric() {
        if column.missing_percentage() > HIGH_MISSING_PERCENTAGE {
            warnings.push("High missing value rate (>50%)".to_string());
        }
        let outliers = column.outlier_count.unwrap_or(0);
        if outliers as f64 > total as f64 * OUTLIER_WARNING_RATIO {
            warnings.push(format!("Potential outliers detected ({} values)", outliers));
        }
    } else if column.detected_type().is_textual() {
        if unique == total && column.info.null_count == 0 {
            warnings.push("All values are unique (possible ID column)".to_string());
        } else if unique > HIGH_CARDINALITY {
            warnings.push(format!("High cardinality ({} categories)", unique));
        } else if unique == 1 {
            warnings.push("Only one unique value (constant column)".to_string());
        }
    }

    warnings
}

fn column_names(columns: &[ColumnInfo], keep: impl Fn(&ColumnInfo) -> bool) -> String {
    columns
        .iter()
        .filter(|c| keep(c))
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn global_warnings(
    columns: &[ColumnInfo],
    width: usize,
    duplicate_rows: usize,
    memory_usage_mb: f64,
) -> Vec<String> {
    let mut warnings = Vec::new();

    let id_columns = column_names(columns, |c| c.is_id_column());
    if !id_columns.is_empty() {
        warnings.push(format!("Potential ID columns detected: {}", id_columns));
    }

    let high_missing =
        column_names(columns, |c| c.missing_percentage > COLUMN_MISSING_WARNING);
    if !high_missing.is_empty() {
        warnings.push(format!("Columns with >30% missing values: {}", high_missing));
    }

    let constant = column_names(columns, |c| c.unique_count <= 1);
    if !constant.is_empty() {
        warnings.push(format!("Constant columns (≤1 unique value): {}", constant));
    }

    let high_cardinality = column_names(columns, |c| {
        (c.dtype == "categorical" || c.dtype == "text")
            && c.unique_count > HIGH_CARDINALITY_CATEGORICAL
    });
    if !high_cardinality.is_empty() {
        warnings.push(format!(
            "High cardinality categorical columns: {}",
            high_cardinality
        ));
    }

    if duplicate_rows > 0 {
        warnings.push(format!("Duplicate rows detected: {}", duplicate_rows));
    }

    if width > WIDE_DATASET_COLUMNS {
        warnings.push(format!(
            "Very wide dataset ({} columns) - consider feature selection",
            width
        ));
    }

    if memory_usage_mb > LARGE_MEMORY_MB {
        warnings.push(format!("Large memory usage: {:.1} MB", memory_usage_mb));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use crate::profile;

    #[test]
    fn test_data_profile_shape_and_dtypes() {
        let result = profile("id,name,score\n1,ann,3.5\n2,bob,\n3,cid,4.0\n", None);
        let data = result.to_data_profile("people.csv");

        assert_eq!(data.file_path, "people.csv");
        assert_eq!(data.shape, (3, 3));
        assert_eq!(data.dtypes_summary["numeric"], 2);
        assert_eq!(data.dtypes_summary["text"], 1);
        assert!(!data.dtypes_summary.contains_key("boolean"));
        assert_eq!(data.missing_summary.total_missing, 1);
        assert_eq!(data.missing_summary.columns_with_missing_list, vec!["score"]);
    }

    #[test]
    fn test_column_info() {
        let result = profile("name\nann\nbob\ncid\n", None);
        let data = result.to_data_profile("x.csv");
        let name = &data.columns[0];

        assert_eq!(name.dtype, "text");
        assert_eq!(name.memory_usage, 9);
        assert_eq!(name.unique_percentage, 100.0);
        assert_eq!(name.stats["count"], 3);
        assert_eq!(name.warnings, vec!["All values are unique (possible ID column)"]);
        assert!(data.warnings[0].starts_with("Potential ID columns detected: name"));
    }

    #[test]
    fn test_global_warnings() {
        let result = profile("a,b\nx,1\nx,\nx,\n", None);
        let data = result.to_data_profile("x.csv");

        assert!(data.warnings.iter().any(|w| w == "Columns with >30% missing values: b"));
        assert!(data.warnings.iter().any(|w| w.starts_with("Constant columns")));
        assert!(data.warnings.iter().any(|w| w == "Duplicate rows detected: 1"));
    }

    #[test]
    fn test_failed_profile_converts() {
        let result = profile("", None);
        let data = result.to_data_profile("empty.csv");
        assert_eq!(data.shape, (0, 0));
        assert!(data.columns.is_empty());
        assert!(data.warnings.is_empty());
    }
}
