//! Per-column analyses: statistics, outliers, patterns, and distribution shape.

mod distribution;
mod outliers;
mod patterns;
mod statistics;

pub use distribution::DistributionAnalyzer;
pub use outliers::{OutlierAnalysis, OutlierDetector};
pub use patterns::{analyze_patterns, pattern_signature};
pub use statistics::{
    StatisticsGenerator, StreamingStats, numeric_cells, numeric_statistics, percentile, sorted,
};

pub(crate) use statistics::percentage;
