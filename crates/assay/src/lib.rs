//! Assay: statistical data-quality profiling for delimited text tables.
//!
//! Assay parses raw CSV-like text, infers a semantic type for every column,
//! and derives a quality profile: descriptive statistics, IQR outliers,
//! format-shape patterns, distribution shape, per-column quality scores, and
//! a dataset-level report with typed issues and warnings.
//!
//! # Core Principles
//!
//! - **Pure**: the engine never touches the filesystem or network
//! - **Deterministic**: identical input always yields an identical profile
//! - **Errors as data**: bad input produces parse errors in the result, not a panic
//!
//! # Example
//!
//! ```
//! use assay::profile;
//!
//! let result = profile("id,cat\n1,A\n2,B\n3,A\n", None);
//! assert!(result.is_ok());
//!
//! for column in &result.columns {
//!     println!("{}: {} ({:.2})", column.name(), column.detected_type(), column.quality_score);
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod inference;
pub mod input;
pub mod profile;
pub mod quality;

mod interop;
mod profiler;
mod recommend;

pub use config::{
    ColumnWeights, DistributionConfig, InferenceThresholds, OutlierConfig, OverallWeights,
    ProfilerConfig, ReportThresholds,
};
pub use error::{AssayError, ParseError, Result};
pub use input::{ParseWarning, ParsedTable, ParserConfig, SourceMetadata};
pub use interop::{ColumnInfo, DataProfile, MissingSummary};
pub use profile::{ColumnProfile, DetectedType, StatisticalSummary, StorageType};
pub use profiler::{ProfileResult, Profiler, profile};
pub use quality::{DataQualityIssue, DataQualityReport, DataWarning, IssueType, Severity};
pub use recommend::{PreprocessingRecommendations, recommend_preprocessing};
