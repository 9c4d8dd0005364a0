//! Quote-aware line tokenizer and table parser.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::delimiter::detect_delimiter;
use super::table::ParsedTable;
use crate::error::ParseError;

/// Maximum number of offending row numbers kept in a ragged-row warning.
const MAX_SAMPLE_ROWS: usize = 5;

/// Parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<char>,
    /// Quote character.
    pub quote: char,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: '"',
            max_rows: None,
        }
    }
}

/// Non-fatal structural problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParseWarning {
    /// Rows whose cell count differs from the header.
    ColumnCountMismatch {
        expected: usize,
        count: usize,
        /// 1-based line numbers of the first offending rows.
        sample_lines: Vec<usize>,
    },
    /// A header name appears more than once.
    DuplicateHeader { name: String, occurrences: usize },
    /// A header cell was empty and a positional name was substituted.
    EmptyHeader { position: usize, assigned: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::ColumnCountMismatch {
                expected,
                count,
                sample_lines,
            } => {
                let lines: Vec<String> = sample_lines.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "{} row(s) do not have {} columns (lines {})",
                    count,
                    expected,
                    lines.join(", ")
                )
            }
            ParseWarning::DuplicateHeader { name, occurrences } => {
                write!(f, "Header '{}' appears {} times", name, occurrences)
            }
            ParseWarning::EmptyHeader { position, assigned } => {
                write!(
                    f,
                    "Column {} has an empty header and was named '{}'",
                    position + 1,
                    assigned
                )
            }
        }
    }
}

/// Everything the parser produced for one input.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The parsed table (empty when `errors` is non-empty).
    pub table: ParsedTable,
    /// Non-fatal problems.
    pub warnings: Vec<ParseWarning>,
    /// Fatal problems.
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    fn fatal(error: ParseError, delimiter: char) -> Self {
        tracing::warn!(%error, "parse aborted");
        Self {
            table: ParsedTable::empty(delimiter),
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    /// True when parsing succeeded and downstream analysis may proceed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses delimited text into a [`ParsedTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Resolve the delimiter for `text`, detecting it when not configured.
    pub fn resolve_delimiter(&self, text: &str) -> char {
        self.config
            .delimiter
            .unwrap_or_else(|| detect_delimiter(text))
    }

    /// Parse raw text.
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let delimiter = self.resolve_delimiter(text);
        self.parse_with_delimiter(text, delimiter)
    }

    /// Parse raw text with an explicit delimiter.
    pub fn parse_with_delimiter(&self, text: &str, delimiter: char) -> ParseOutcome {
        let mut lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((_, header_line)) = lines.next() else {
            return ParseOutcome::fatal(ParseError::EmptyInput, delimiter);
        };

        let mut headers = tokenize_line(header_line, delimiter, self.config.quote);
        if headers.iter().all(|h| h.is_empty()) {
            return ParseOutcome::fatal(ParseError::NoHeaders, delimiter);
        }

        let mut warnings = Vec::new();
        name_empty_headers(&mut headers, &mut warnings);
        warnings.extend(duplicate_header_warnings(&headers));

        let expected = headers.len();
        let mut rows = Vec::new();
        let mut mismatched = 0usize;
        let mut sample_lines = Vec::new();

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        for (line_idx, line) in lines.take(limit) {
            let fields = tokenize_line(line, delimiter, self.config.quote);

            if fields.len() != expected {
                mismatched += 1;
                if sample_lines.len() < MAX_SAMPLE_ROWS {
                    sample_lines.push(line_idx + 1);
                }
            }

            let mut row: Vec<Option<String>> = fields.into_iter().map(Some).collect();
            // Pad short rows with absent cells, drop overflow.
            row.resize(expected, None);
            rows.push(row);
        }

        if rows.is_empty() {
            return ParseOutcome::fatal(ParseError::NoDataRows, delimiter);
        }

        if mismatched > 0 {
            warnings.push(ParseWarning::ColumnCountMismatch {
                expected,
                count: mismatched,
                sample_lines,
            });
        }

        tracing::debug!(
            rows = rows.len(),
            columns = expected,
            warnings = warnings.len(),
            "parsed table"
        );

        ParseOutcome {
            table: ParsedTable::new(headers, rows, delimiter),
            warnings,
            errors: Vec::new(),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split one line into trimmed fields.
///
/// A quote toggles the quoted state; inside quotes, a doubled quote is a
/// literal quote character. The delimiter only separates fields outside quotes.
pub fn tokenize_line(line: &str, delimiter: char, quote: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == quote {
            if in_quotes && chars.peek() == Some(&quote) {
                current.push(quote);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

fn name_empty_headers(headers: &mut [String], warnings: &mut Vec<ParseWarning>) {
    for (position, header) in headers.iter_mut().enumerate() {
        if header.is_empty() {
            let assigned = format!("column_{}", position + 1);
            warnings.push(ParseWarning::EmptyHeader {
                position,
                assigned: assigned.clone(),
            });
            *header = assigned;
        }
    }
}

fn duplicate_header_warnings(headers: &[String]) -> Vec<ParseWarning> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for header in headers {
        let count = seen.entry(header.as_str()).or_insert(0);
        if *count == 1 {
            order.push(header.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .map(|name| ParseWarning::DuplicateHeader {
            name: name.to_string(),
            occurrences: seen[name],
        })
        .collect()
}
