//! Core error types for report generation

use thiserror::Error;

/// Failure raised from inside a statistic reduction
#[derive(Error, Debug)]
pub enum StatisticError {
    #[error("{caption} requires at least {needed} values, got {got}")]
    InsufficientData {
        caption: String,
        needed: usize,
        got: usize,
    },
}

/// Main error type for report operations
///
/// Reduction failures are wrapped with the measurement field that was being
/// summarized; nothing is retried or recovered.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to summarize {field}: {source}")]
    Statistic {
        field: String,
        #[source]
        source: StatisticError,
    },
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let stat_error = StatisticError::InsufficientData {
            caption: "Mean and Std".to_string(),
            needed: 2,
            got: 1,
        };
        assert_eq!(
            format!("{}", stat_error),
            "Mean and Std requires at least 2 values, got 1"
        );

        let report_error = ReportError::Statistic {
            field: "Temperature".to_string(),
            source: stat_error,
        };
        assert_eq!(
            format!("{}", report_error),
            "failed to summarize Temperature: Mean and Std requires at least 2 values, got 1"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let report_error = ReportError::Statistic {
            field: "Humidity".to_string(),
            source: StatisticError::InsufficientData {
                caption: "Median".to_string(),
                needed: 1,
                got: 0,
            },
        };

        let source = std::error::Error::source(&report_error);
        assert!(source.is_some());
        assert!(source
            .unwrap()
            .to_string()
            .contains("Median requires at least 1"));
    }

    #[test]
    fn test_error_result_type() {
        fn returns_err() -> ReportResult<String> {
            Err(ReportError::Statistic {
                field: "Temperature".to_string(),
                source: StatisticError::InsufficientData {
                    caption: "Median".to_string(),
                    needed: 1,
                    got: 0,
                },
            })
        }

        match returns_err().unwrap_err() {
            ReportError::Statistic { field, .. } => assert_eq!(field, "Temperature"),
        }
    }
}
