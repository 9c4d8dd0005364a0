//! Grouped preprocessing advice for modeling.

use serde::{Deserialize, Serialize};

use crate::profile::{DistributionType, StorageType};
use crate::profiler::ProfileResult;
use crate::quality::ONE_HOT_MAX_CATEGORIES;

const HIGH_MISSING: f64 = 50.0;
const MODERATE_MISSING: f64 = 10.0;
const DATASET_MISSING: f64 = 20.0;
const MANY_FEATURES: usize = 100;

/// Preprocessing recommendations, grouped by action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreprocessingRecommendations {
    pub drop_columns: Vec<String>,
    pub handle_missing: Vec<String>,
    pub encode_categorical: Vec<String>,
    pub scale_features: Vec<String>,
    pub general: Vec<String>,
}

impl PreprocessingRecommendations {
    /// True when no group has any entry.
    pub fn is_empty(&self) -> bool {
        self.drop_columns.is_empty()
            && self.handle_missing.is_empty()
            && self.encode_categorical.is_empty()
            && self.scale_features.is_empty()
            && self.general.is_empty()
    }
}

/// Recommend preprocessing steps, skipping `target_column`.
pub fn recommend_preprocessing(
    result: &ProfileResult,
    target_column: Option<&str>,
) -> PreprocessingRecommendations {
    let mut recs = PreprocessingRecommendations::default();

    for column in &result.columns {
        let name = column.name();
        if target_column == Some(name) {
            continue;
        }
        let textual = column.detected_type().is_textual();
        let unique = column.info.unique_count;

        if textual && column.is_likely_identifier() {
            recs.drop_columns
                .push(format!("{}: Appears to be an ID column (all unique values)", name));
        }
        if unique <= 1 {
            recs.drop_columns.push(format!(
                "{}: Constant column (only {} unique value)",
                name, unique
            ));
        }

        let missing = column.missing_percentage();
        if missing > HIGH_MISSING {
            recs.handle_missing
                .push(format!("{}: High missing rate ({:.1}%)", name, missing));
        } else if missing > MODERATE_MISSING {
            recs.handle_missing
                .push(format!("{}: Moderate missing rate ({:.1}%)", name, missing));
        }

        if textual && unique > 1 && !column.is_likely_identifier() {
            if unique > ONE_HOT_MAX_CATEGORIES {
                recs.encode_categorical.push(format!(
                    "{}: High cardinality ({} categories) - consider target encoding",
                    name, unique
                ));
            } else {
                recs.encode_categorical.push(format!(
                    "{}: Moderate cardinality ({} categories) - one-hot encoding suitable",
                    name, unique
                ));
            }
        }

        if column.storage_type() == StorageType::Numeric {
            let distribution = &column.distribution_analysis;
            if let (Some(DistributionType::RightSkewed | DistributionType::LeftSkewed), Some(skew)) =
                (distribution.distribution_type, distribution.skewness)
            {
                recs.scale_features.push(format!(
                    "{}: Skewed distribution (skewness {:.2}) - consider a log or power transform",
                    name, skew
                ));
            }
        }
    }

    if let Some(summary) = &result.statistical_summary {
        let missing = summary.missing_data.missing_percentage;
        if missing > DATASET_MISSING {
            recs.general.push(format!(
                "High overall missing rate ({:.1}%) - consider data quality investigation",
                missing
            ));
        }
        let features = summary.dataset_info.columns;
        if features > MANY_FEATURES {
            recs.general.push(format!(
                "Many features ({}) - consider feature selection or dimensionality reduction",
                features
            ));
        }
    }

    recs
}
