//! Report orchestration

pub mod presets;

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::markup::Formalization;
use crate::measurement::Measurement;
use crate::stats::Statistic;

/// Build a report summarizing both measurement fields
///
/// The caption comes from the statistic, the rendering from the
/// formalization. Temperature is always summarized before humidity, and the
/// two reductions are independent. A failure inside a reduction is returned
/// with the failing field attached; no partial report is produced.
pub fn make_report(
    measurements: &[Measurement],
    statistic: &dyn Statistic,
    formalization: &dyn Formalization,
) -> ReportResult<String> {
    debug!(
        measurements = measurements.len(),
        statistic = statistic.caption(),
        "generating report"
    );

    let mut report = String::new();
    report.push_str(&formalization.make_caption(statistic.caption()));
    report.push_str(&formalization.begin_list());
    append_field(&mut report, "Temperature", measurements, statistic, formalization, |m| {
        m.temperature
    })?;
    append_field(&mut report, "Humidity", measurements, statistic, formalization, |m| {
        m.humidity
    })?;
    report.push_str(&formalization.end_list());

    Ok(report)
}

/// Reduce one measurement field and append it as a rendered list item
fn append_field(
    report: &mut String,
    field: &str,
    measurements: &[Measurement],
    statistic: &dyn Statistic,
    formalization: &dyn Formalization,
    selector: impl Fn(&Measurement) -> f64,
) -> ReportResult<()> {
    let values: Vec<f64> = measurements.iter().map(selector).collect();
    let value = statistic
        .compute(&values)
        .map_err(|source| ReportError::Statistic {
            field: field.to_string(),
            source,
        })?;
    report.push_str(&formalization.make_item(field, &value.to_string()));
    Ok(())
}
