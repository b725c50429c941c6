//! Measurement value type

use serde::{Deserialize, Serialize};

/// One environmental sample: a temperature and a humidity reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Temperature reading
    pub temperature: f64,
    /// Relative humidity reading
    pub humidity: f64,
}

impl Measurement {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}
