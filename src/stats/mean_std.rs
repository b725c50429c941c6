//! Arithmetic mean and sample standard deviation

use super::{Statistic, StatisticValue};
use crate::error::StatisticError;

/// Summarizes a series as its mean and sample standard deviation
///
/// Needs at least two values; the standard deviation divides by `n - 1`
/// (Bessel's correction).
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAndStd;

impl Statistic for MeanAndStd {
    fn caption(&self) -> &str {
        "Mean and Std"
    }

    fn compute(&self, values: &[f64]) -> Result<StatisticValue, StatisticError> {
        if values.len() < 2 {
            return Err(StatisticError::InsufficientData {
                caption: self.caption().to_string(),
                needed: 2,
                got: values.len(),
            });
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

        Ok(StatisticValue::MeanStd {
            mean,
            std: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_values() {
        let value = MeanAndStd.compute(&[1.0, 2.0, 3.0]).unwrap();
        match value {
            StatisticValue::MeanStd { mean, std } => {
                assert_eq!(mean, 2.0);
                assert_eq!(std, 1.0);
            }
            other => panic!("expected MeanStd, got {:?}", other),
        }
    }

    #[test]
    fn test_caption() {
        assert_eq!(MeanAndStd.caption(), "Mean and Std");
    }

    #[test]
    fn test_rejects_short_series() {
        for values in [&[][..], &[7.0][..]] {
            let err = MeanAndStd.compute(values).unwrap_err();
            match err {
                StatisticError::InsufficientData { needed, got, .. } => {
                    assert_eq!(needed, 2);
                    assert_eq!(got, values.len());
                }
            }
        }
    }

    #[test]
    fn test_identical_values_have_zero_std() {
        let value = MeanAndStd.compute(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(
            value,
            StatisticValue::MeanStd {
                mean: 5.0,
                std: 0.0
            }
        );
    }
}
