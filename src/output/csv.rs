use super::ReportFormatter;
use crate::error::Result;

/// One path per line, no header and no trailing newline.
pub struct CsvFormatter;

impl ReportFormatter for CsvFormatter {
    fn format(&self, violations: &[String]) -> Result<String> {
        Ok(violations.join("\n"))
    }
}
