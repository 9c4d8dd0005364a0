//! Field separator detection.

use std::collections::HashMap;

/// Delimiters to try when auto-detecting, in tie-break order.
pub const DELIMITERS: &[char] = &[',', '\t', ';', '|'];

/// Number of non-empty lines sampled for detection.
const SAMPLE_LINES: usize = 5;

/// Detect the delimiter by analyzing the first few non-empty lines.
///
/// Each candidate is scored as `average count × consistency`, where
/// consistency is the share of sampled lines that have the modal count.
/// Falls back to a comma when no candidate scores above zero.
pub fn detect_delimiter(text: &str) -> char {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return ',';
    }

    let mut best_delimiter = ',';
    let mut best_score = 0.0;

    for &delim in DELIMITERS {
        let score = score_delimiter(&lines, delim);
        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    tracing::debug!(delimiter = ?best_delimiter, score = best_score, "detected delimiter");
    best_delimiter
}

/// Score a candidate delimiter over the sampled lines.
fn score_delimiter(lines: &[&str], delimiter: char) -> f64 {
    let counts: Vec<usize> = lines
        .iter()
        .map(|line| count_delimiter_in_line(line, delimiter))
        .collect();

    let average = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
    if average == 0.0 {
        return 0.0;
    }

    let mut frequency: HashMap<usize, usize> = HashMap::new();
    for &count in &counts {
        *frequency.entry(count).or_insert(0) += 1;
    }
    let modal = frequency.values().copied().max().unwrap_or(0);
    let consistency = modal as f64 / counts.len() as f64;

    average * consistency
}

/// Count delimiter occurrences in a line, respecting quotes.
pub(crate) fn count_delimiter_in_line(line: &str, delimiter: char) -> usize {
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

/// Short format label for a delimiter.
pub fn format_label(delimiter: char) -> &'static str {
    match delimiter {
        '\t' => "tsv",
        ',' => "csv",
        ';' => "csv-semicolon",
        '|' => "psv",
        _ => "delimited",
    }
}
