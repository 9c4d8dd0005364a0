//! Structural shape signatures for text values.

use indexmap::IndexMap;

use super::statistics::percentage;
use crate::profile::{PatternAnalysis, PatternFrequency};

/// Number of signatures reported per column.
const TOP_PATTERNS: usize = 5;

/// Reduce a value to its shape: digit → `N`, uppercase → `L`,
/// lowercase → `l`, anything else → `S`.
pub fn pattern_signature(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                'N'
            } else if c.is_ascii_uppercase() {
                'L'
            } else if c.is_ascii_lowercase() {
                'l'
            } else {
                'S'
            }
        })
        .collect()
}

/// Count signatures across `values`.
///
/// Returns the vacuous `{[], 1.0}` analysis for an empty slice.
pub fn analyze_patterns(values: &[&str]) -> PatternAnalysis {
    if values.is_empty() {
        return PatternAnalysis::default();
    }

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        *counts.entry(pattern_signature(value)).or_insert(0) += 1;
    }
    counts.sort_by(|_, a, _, b| b.cmp(a));

    let total = values.len();
    let top = counts.first().map(|(_, c)| *c).unwrap_or(0);
    let common_patterns = counts
        .into_iter()
        .take(TOP_PATTERNS)
        .map(|(pattern, count)| PatternFrequency {
            pattern,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    PatternAnalysis {
        common_patterns,
        format_consistency: top as f64 / total as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature() {
        assert_eq!(pattern_signature("AB-12"), "LLSNN");
        assert_eq!(pattern_signature("Hello world"), "LllllSlllll");
        assert_eq!(pattern_signature(""), "");
        assert_eq!(pattern_signature("é"), "S");
    }

    #[test]
    fn test_consistent_codes() {
        let analysis = analyze_patterns(&["AB-12", "CD-34", "EF-56", "x"]);
        assert_eq!(analysis.common_patterns[0].pattern, "LLSNN");
        assert_eq!(analysis.common_patterns[0].count, 3);
        assert_eq!(analysis.common_patterns[0].percentage, 75.0);
        assert_eq!(analysis.format_consistency, 0.75);
    }

    #[test]
    fn test_top_five_only() {
        let values = ["a", "aa", "aaa", "aaaa", "aaaaa", "aaaaaa", "aaaaaaa"];
        let analysis = analyze_patterns(&values);
        assert_eq!(analysis.common_patterns.len(), 5);
        // All tied, so first-seen order wins.
        assert_eq!(analysis.common_patterns[0].pattern, "l");
        assert!((analysis.format_consistency - 1.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_is_vacuous() {
        let analysis = analyze_patterns(&[]);
        assert!(analysis.common_patterns.is_empty());
        assert_eq!(analysis.format_consistency, 1.0);
    }
}
