//! Statistical reports over environmental measurements
//!
//! Combines a pluggable statistic ([`stats::Statistic`]) with a pluggable
//! markup dialect ([`markup::Formalization`]) to render a summary of the
//! temperature and humidity series in a measurement sequence. The
//! orchestrator ([`report::make_report`]) never knows which concrete
//! strategy is in play; new statistics and dialects plug in without touching
//! it.

pub mod error;
pub mod markup;
pub mod measurement;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use error::{ReportError, ReportResult, StatisticError};
pub use markup::{Formalization, Html, Markdown};
pub use measurement::Measurement;
pub use report::make_report;
pub use report::presets::{
    mean_and_std_html_report, mean_and_std_markdown_report, median_html_report,
    median_markdown_report,
};
pub use stats::{Custom, MeanAndStd, Median, Statistic, StatisticValue};

/// Version information for the Aerograph project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
