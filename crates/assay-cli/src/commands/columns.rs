//! Columns command - export one summary row per column.

use std::io::Write;
use std::path::PathBuf;

use assay::{ColumnProfile, Profiler};
use serde::Serialize;

use crate::cli::ExportFormat;
use crate::source;

/// One exported row.
#[derive(Debug, Serialize)]
struct ColumnRow {
    name: String,
    detected_type: String,
    confidence: f64,
    completeness: f64,
    validity: f64,
    uniqueness: f64,
    outliers: Option<usize>,
    format_consistency: f64,
    quality_score: f64,
}

impl From<&ColumnProfile> for ColumnRow {
    fn from(column: &ColumnProfile) -> Self {
        Self {
            name: column.name().to_string(),
            detected_type: column.detected_type().label().to_string(),
            confidence: round4(column.info.confidence),
            completeness: round4(column.completeness),
            validity: round4(column.validity),
            uniqueness: round4(column.uniqueness_ratio),
            outliers: column.outlier_count,
            format_consistency: round4(column.pattern_analysis.format_consistency),
            quality_score: round4(column.quality_score),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

pub fn run(
    file: PathBuf,
    delimiter: Option<char>,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = source::read_text(&file)?;
    let result = Profiler::new().profile(&text, delimiter);

    if !result.is_ok() {
        let reasons: Vec<String> = result.errors.iter().map(|e| e.to_string()).collect();
        return Err(format!("Could not profile {}: {}", file.display(), reasons.join("; ")).into());
    }

    let rows: Vec<ColumnRow> = result.columns.iter().map(ColumnRow::from).collect();
    let mut out = source::open_output(output.as_ref())?;

    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
            out.flush()?;
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let separator = if format == ExportFormat::Tsv { b'\t' } else { b',' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(separator)
                .from_writer(out);
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }

    tracing::info!(columns = rows.len(), format = %format, "Exported column summary");
    Ok(())
}
