//! Median of a sorted series

use super::{Statistic, StatisticValue};
use crate::error::StatisticError;

/// Summarizes a series as its median
///
/// Odd-length series yield the middle element. Even-length series halve the
/// sum of the two middle elements with truncating division, so `[1, 2, 3, 4]`
/// yields `2` rather than `2.5`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Statistic for Median {
    fn caption(&self) -> &str {
        "Median"
    }

    fn compute(&self, values: &[f64]) -> Result<StatisticValue, StatisticError> {
        if values.is_empty() {
            return Err(StatisticError::InsufficientData {
                caption: self.caption().to_string(),
                needed: 1,
                got: 0,
            });
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let middle = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            // Integer-style halving of the middle pair
            ((sorted[middle] + sorted[middle - 1]) / 2.0).trunc()
        } else {
            sorted[middle]
        };

        Ok(StatisticValue::Scalar(median))
    }
}
