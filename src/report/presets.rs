//! Fixed statistic and formalization pairings
//!
//! Convenience wiring for the pairings external collaborators actually call;
//! no logic of its own.

use super::make_report;
use crate::error::ReportResult;
use crate::markup::{Html, Markdown};
use crate::measurement::Measurement;
use crate::stats::{MeanAndStd, Median};

/// Mean/std summary rendered as HTML
pub fn mean_and_std_html_report(measurements: &[Measurement]) -> ReportResult<String> {
    make_report(measurements, &MeanAndStd, &Html::new())
}

/// Median summary rendered as Markdown
pub fn median_markdown_report(measurements: &[Measurement]) -> ReportResult<String> {
    make_report(measurements, &Median, &Markdown)
}

/// Mean/std summary rendered as Markdown
pub fn mean_and_std_markdown_report(measurements: &[Measurement]) -> ReportResult<String> {
    make_report(measurements, &MeanAndStd, &Markdown)
}

/// Median summary rendered as HTML
pub fn median_html_report(measurements: &[Measurement]) -> ReportResult<String> {
    make_report(measurements, &Median, &Html::new())
}
