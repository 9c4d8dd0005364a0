//! Profile command - profile a data file and report its quality.

use std::io::Write;
use std::path::PathBuf;

use assay::{
    PreprocessingRecommendations, ProfileResult, Profiler, Severity, SourceMetadata,
    recommend_preprocessing,
};
use colored::Colorize;
use serde_json::json;

use super::score_label;
use crate::source;

pub fn run(
    file: PathBuf,
    delimiter: Option<char>,
    config: Option<PathBuf>,
    json_output: bool,
    output: Option<PathBuf>,
    target: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = source::read_text(&file)?;

    let mut config = source::load_config(config.as_deref())?;
    if let Some(d) = delimiter {
        config = config.with_delimiter(d);
        config.validate()?;
    }

    let result = Profiler::with_config(config).profile(&text, None);
    let metadata = source::describe(&file, &text, result.delimiter);

    if let Some(target) = &target {
        if result.is_ok() && result.column(target).is_none() {
            return Err(format!("Target column '{}' not found in {}", target, file.display()).into());
        }
    }

    if output.is_some() {
        colored::control::set_override(false);
    }
    let mut out = source::open_output(output.as_ref())?;

    if json_output {
        let envelope = if result.is_ok() {
            json!({
                "success": true,
                "source": metadata,
                "profile": result,
                "data_profile": result.to_data_profile(file.display().to_string()),
                "preprocessing": recommend_preprocessing(&result, target.as_deref()),
            })
        } else {
            json!({
                "success": false,
                "source": metadata,
                "errors": result.errors,
            })
        };
        serde_json::to_writer_pretty(&mut out, &envelope)?;
        writeln!(out)?;
    } else if result.is_ok() {
        let recs = recommend_preprocessing(&result, target.as_deref());
        print_summary(&mut out, &metadata, &result, &recs)?;
    }
    out.flush()?;

    if !result.is_ok() {
        let reasons: Vec<String> = result.errors.iter().map(|e| e.to_string()).collect();
        return Err(format!("Could not profile {}: {}", file.display(), reasons.join("; ")).into());
    }

    tracing::info!(
        file = %file.display(),
        rows = result.table.row_count(),
        columns = result.columns.len(),
        score = result.overall_score(),
        "Profiled file"
    );
    Ok(())
}

fn print_summary(
    out: &mut dyn Write,
    metadata: &SourceMetadata,
    result: &ProfileResult,
    recs: &PreprocessingRecommendations,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {} ({}, {} bytes)",
        "Profiled".cyan().bold(),
        metadata.name.white(),
        metadata.format,
        metadata.size_bytes
    )?;

    if let Some(summary) = &result.statistical_summary {
        writeln!(
            out,
            "{} rows x {} columns, {} duplicate rows, {:.1}% missing",
            summary.dataset_info.rows.to_string().white().bold(),
            summary.dataset_info.columns.to_string().white().bold(),
            summary.dataset_info.duplicate_rows,
            summary.missing_data.missing_percentage
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "Columns:".yellow().bold())?;
    writeln!(
        out,
        "  {:20} {:16} {:>6} {:>9} {:>6}",
        "name", "type", "conf", "complete", "score"
    )?;
    for column in &result.columns {
        writeln!(
            out,
            "  {:20} {:16} {:>6.2} {:>8.0}% {:>6}",
            truncate(column.name(), 20),
            column.detected_type().label(),
            column.info.confidence,
            column.completeness * 100.0,
            score_label(column.quality_score)
        )?;
    }

    if let Some(report) = &result.quality_report {
        if !report.issues.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "{} ({})",
                "Issues".yellow().bold(),
                report.issues.len()
            )?;
            for issue in &report.issues {
                let severity = format!("[{}]", issue.severity.label());
                let severity = match issue.severity {
                    Severity::Critical => severity.red().bold(),
                    Severity::High => severity.red(),
                    Severity::Medium => severity.yellow(),
                    Severity::Low => severity.blue(),
                };
                writeln!(out, "  {:10} {}", severity, issue.message)?;
            }
        }
    }

    if !result.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Warnings:".yellow().bold())?;
        for warning in &result.warnings {
            writeln!(out, "  {} {}", "!".yellow(), warning.message)?;
        }
    }

    if let Some(report) = &result.quality_report {
        writeln!(out)?;
        writeln!(out, "{}", "Recommendations:".yellow().bold())?;
        for recommendation in &report.recommendations {
            writeln!(out, "  - {}", recommendation)?;
        }
    }

    if !recs.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Preprocessing:".yellow().bold())?;
        let groups = [
            ("drop", &recs.drop_columns),
            ("missing", &recs.handle_missing),
            ("encode", &recs.encode_categorical),
            ("scale", &recs.scale_features),
            ("general", &recs.general),
        ];
        for (label, entries) in groups {
            for entry in entries {
                writeln!(out, "  {:8} {}", label.cyan(), entry)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Data quality score: {}",
        score_label(result.overall_score()).bold()
    )?;
    Ok(())
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let kept: String = name.chars().take(width - 1).collect();
        format!("{}~", kept)
    }
}
