//! Result types describing a profiled table.

mod column;
mod summary;
mod types;

pub use column::{
    BooleanStatistics, ColumnProfile, ColumnStatistics, ColumnTypeInfo, DateStatistics,
    DistributionAnalysis, FrequencyStatistics, NumericStatistics, OutlierBounds, PatternAnalysis,
    PatternFrequency, StringStatistics,
};
pub use summary::{DatasetInfo, MissingDataSummary, OutlierSummary, StatisticalSummary};
pub use types::{DetectedType, DistributionType, QuantileMethod, StorageType};
