//! Statistic strategies: named, pure reductions over a numeric series

mod mean_std;
mod median;

pub use mean_std::MeanAndStd;
pub use median::Median;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StatisticError;

/// Summary value produced by a statistic reduction
///
/// Either a single scalar or a mean/std pair; `Display` is the canonical
/// textual rendering embedded into report items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatisticValue {
    /// A single summary number
    Scalar(f64),
    /// Arithmetic mean with sample standard deviation
    MeanStd { mean: f64, std: f64 },
}

impl fmt::Display for StatisticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticValue::Scalar(value) => write!(f, "{}", value),
            StatisticValue::MeanStd { mean, std } => write!(f, "Mean = {} Std = {}", mean, std),
        }
    }
}

/// Common interface for statistic strategies
///
/// A statistic names itself with a caption and reduces a numeric series to a
/// [`StatisticValue`]. Reductions are pure; a violated length precondition
/// surfaces as [`StatisticError::InsufficientData`] from inside the reduction.
pub trait Statistic: Send + Sync {
    /// Report title for this statistic
    fn caption(&self) -> &str;

    /// Reduce a numeric series to a summary value
    fn compute(&self, values: &[f64]) -> Result<StatisticValue, StatisticError>;
}

type ComputeFn = Box<dyn Fn(&[f64]) -> Result<StatisticValue, StatisticError> + Send + Sync>;

/// Caller-supplied statistic built from a caption and a reduction closure
///
/// Lets collaborators register a new statistic without defining a type.
pub struct Custom {
    caption: String,
    compute: ComputeFn,
}

impl Custom {
    pub fn new<F>(caption: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&[f64]) -> Result<StatisticValue, StatisticError> + Send + Sync + 'static,
    {
        Self {
            caption: caption.into(),
            compute: Box::new(compute),
        }
    }
}

impl Statistic for Custom {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn compute(&self, values: &[f64]) -> Result<StatisticValue, StatisticError> {
        (self.compute)(values)
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Custom({}, <function>)", self.caption)
    }
}
