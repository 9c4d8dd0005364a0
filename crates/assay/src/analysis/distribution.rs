//! Distribution shape of numeric columns.

use super::statistics::StreamingStats;
use crate::config::DistributionConfig;
use crate::profile::{DistributionAnalysis, DistributionType};

/// Classifies numeric columns by skewness and excess kurtosis.
#[derive(Debug, Clone, Default)]
pub struct DistributionAnalyzer {
    config: DistributionConfig,
}

impl DistributionAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DistributionConfig) -> Self {
        Self { config }
    }

    /// Analyze `values`. Too few values yield an all-empty analysis.
    pub fn analyze(&self, values: &[f64]) -> DistributionAnalysis {
        if values.len() < self.config.min_values {
            return DistributionAnalysis::default();
        }

        let stats: StreamingStats = values.iter().copied().collect();
        let std = stats.std();
        if std == 0.0 {
            return DistributionAnalysis {
                distribution_type: Some(DistributionType::Constant),
                ..Default::default()
            };
        }

        let n = values.len() as f64;
        let (sum3, sum4) = values.iter().fold((0.0, 0.0), |(s3, s4), v| {
            let z = (v - stats.mean()) / std;
            (s3 + z.powi(3), s4 + z.powi(4))
        });
        let skewness = sum3 / n;
        let kurtosis = sum4 / n - 3.0;

        let is_normal = skewness.abs() < self.config.max_normal_skewness
            && kurtosis.abs() < self.config.max_normal_kurtosis;
        let distribution_type = if is_normal {
            DistributionType::Normal
        } else if skewness > 0.0 {
            DistributionType::RightSkewed
        } else if skewness < 0.0 {
            DistributionType::LeftSkewed
        } else {
            DistributionType::Unknown
        };

        DistributionAnalysis {
            skewness: Some(skewness),
            kurtosis: Some(kurtosis),
            is_normal: Some(is_normal),
            distribution_type: Some(distribution_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_is_normal() {
        let analysis = DistributionAnalyzer::new().analyze(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(analysis.skewness.unwrap().abs() < 1e-9);
        // Uniform excess kurtosis over 5 points is -1.3.
        assert!((analysis.kurtosis.unwrap() + 1.3).abs() < 1e-9);
        assert_eq!(analysis.is_normal, Some(true));
        assert_eq!(analysis.distribution_type, Some(DistributionType::Normal));
    }

    #[test]
    fn test_right_skewed() {
        let mut values = vec![1.0; 30];
        values.push(1000.0);
        let analysis = DistributionAnalyzer::new().analyze(&values);
        assert!(analysis.skewness.unwrap() > 2.0);
        assert_eq!(analysis.distribution_type, Some(DistributionType::RightSkewed));
    }

    #[test]
    fn test_left_skewed() {
        let mut values = vec![1000.0; 30];
        values.push(1.0);
        let analysis = DistributionAnalyzer::new().analyze(&values);
        assert_eq!(analysis.distribution_type, Some(DistributionType::LeftSkewed));
        assert_eq!(analysis.is_normal, Some(false));
    }

    #[test]
    fn test_constant() {
        let analysis = DistributionAnalyzer::new().analyze(&[4.0, 4.0, 4.0]);
        assert_eq!(analysis.distribution_type, Some(DistributionType::Constant));
        assert!(analysis.skewness.is_none());
        assert!(analysis.kurtosis.is_none());
    }

    #[test]
    fn test_too_few_values() {
        let analysis = DistributionAnalyzer::new().analyze(&[1.0, 2.0]);
        assert_eq!(analysis, DistributionAnalysis::default());
    }
}
