//! Quality scoring, dataset summary, and report generation.

mod issue;
mod report;
mod scoring;
mod summary;

pub use issue::{DataQualityIssue, DataQualityReport, DataWarning, IssueType, Severity, WarningLevel};
pub use report::ReportGenerator;
pub use scoring::{completeness, quality_score, uniqueness, validity};
pub use summary::{count_complete_rows, count_duplicate_rows, estimate_memory, summarize};

pub(crate) use report::ONE_HOT_MAX_CATEGORIES;
