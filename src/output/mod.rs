mod csv;
mod json;
mod reporter;
mod text;

pub use csv::CsvFormatter;
pub use json::{JsonFormatter, JsonReport};
pub use reporter::{
    OUTPUT_REPORT_FILE, OUTPUT_REPORT_PATH, OUTPUT_VIOLATION_COUNT, OUTPUT_VIOLATIONS,
    OutputNames, ReportOutcome, ReportSettings, ViolationReporter, violation_message,
};
pub use text::TextFormatter;

use std::fmt;

use crate::error::Result;

/// Trait for rendering the violation list into a report.
pub trait ReportFormatter {
    /// Format the violating paths into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, violations: &[String]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Console,
    Csv,
    Json,
}

impl ReportFormat {
    /// Fixed artifact name for file-based formats.
    #[must_use]
    pub const fn report_filename(self) -> Option<&'static str> {
        match self {
            Self::Console => None,
            Self::Csv => Some("violations.csv"),
            Self::Json => Some("violations.json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
