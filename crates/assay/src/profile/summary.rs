//! Dataset-level rollup of column profiles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::StorageType;

/// Shape and size of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub rows: usize,
    pub columns: usize,
    /// Rough size estimate from the serialized rows.
    pub memory_usage_bytes: usize,
    pub memory_usage_mb: f64,
    pub duplicate_rows: usize,
    /// Rows where every cell is non-empty.
    pub complete_rows: usize,
}

/// Missing-value totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingDataSummary {
    pub total_missing: usize,
    pub total_cells: usize,
    /// Percentage (0-100) of all cells that are missing.
    pub missing_percentage: f64,
    /// Number of columns with at least one missing cell.
    pub columns_with_missing: usize,
    /// Missing count per column, in column order.
    pub by_column: IndexMap<String, usize>,
}

/// Outlier totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub total_outliers: usize,
    /// Outlier count per numeric column, in column order.
    pub by_column: IndexMap<String, usize>,
}

/// Dataset-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    pub dataset_info: DatasetInfo,
    /// Number of columns per storage type.
    pub type_distribution: IndexMap<StorageType, usize>,
    pub missing_data: MissingDataSummary,
    pub outliers: OutlierSummary,
}

impl StatisticalSummary {
    /// Number of columns of a storage type.
    pub fn columns_of_type(&self, storage: StorageType) -> usize {
        self.type_distribution.get(&storage).copied().unwrap_or(0)
    }

    /// Duplicate rows as a percentage (0-100) of all rows.
    pub fn duplicate_percentage(&self) -> f64 {
        let rows = self.dataset_info.rows;
        if rows == 0 {
            0.0
        } else {
            self.dataset_info.duplicate_rows as f64 / rows as f64 * 100.0
        }
    }
}
