//! Dataset-level summary statistics.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::analysis::percentage;
use crate::input::ParsedTable;
use crate::profile::{
    ColumnProfile, DatasetInfo, MissingDataSummary, OutlierSummary, StatisticalSummary,
    StorageType,
};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Roll column profiles up into a [`StatisticalSummary`].
pub fn summarize(table: &ParsedTable, columns: &[ColumnProfile]) -> StatisticalSummary {
    let memory_usage_bytes = estimate_memory(table);

    let dataset_info = DatasetInfo {
        rows: table.row_count(),
        columns: table.column_count(),
        memory_usage_bytes,
        memory_usage_mb: memory_usage_bytes as f64 / BYTES_PER_MB,
        duplicate_rows: count_duplicate_rows(table),
        complete_rows: count_complete_rows(table),
    };

    let mut type_distribution: IndexMap<StorageType, usize> =
        StorageType::ALL.iter().map(|t| (*t, 0)).collect();
    for column in columns {
        *type_distribution.entry(column.storage_type()).or_insert(0) += 1;
    }

    let by_column: IndexMap<String, usize> = columns
        .iter()
        .map(|c| (c.name().to_string(), c.info.null_count))
        .collect();
    let total_missing: usize = by_column.values().sum();
    let total_cells = table.row_count() * table.column_count();
    let missing_data = MissingDataSummary {
        total_missing,
        total_cells,
        missing_percentage: percentage(total_missing, total_cells),
        columns_with_missing: by_column.values().filter(|n| **n > 0).count(),
        by_column,
    };

    let outlier_counts: IndexMap<String, usize> = columns
        .iter()
        .filter_map(|c| c.outlier_count.map(|n| (c.name().to_string(), n)))
        .collect();
    let outliers = OutlierSummary {
        total_outliers: outlier_counts.values().sum(),
        by_column: outlier_counts,
    };

    StatisticalSummary {
        dataset_info,
        type_distribution,
        missing_data,
        outliers,
    }
}

/// Rows minus distinct rows, comparing cells joined with `|`.
pub fn count_duplicate_rows(table: &ParsedTable) -> usize {
    let distinct: HashSet<String> = table.rows.iter().map(|row| row_key(row)).collect();
    table.row_count() - distinct.len()
}

/// Rows where every cell is non-empty.
pub fn count_complete_rows(table: &ParsedTable) -> usize {
    table
        .rows
        .iter()
        .filter(|row| row.iter().all(|cell| !ParsedTable::is_missing(cell.as_deref())))
        .count()
}

/// Length of the JSON serialization of the rows.
pub fn estimate_memory(table: &ParsedTable) -> usize {
    serde_json::to_string(&table.rows)
        .map(|json| json.len())
        .unwrap_or(0)
}

fn row_key(row: &[Option<String>]) -> String {
    row.iter()
        .map(|cell| cell.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("|")
}
