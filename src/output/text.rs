use std::fmt::Write;

use super::ReportFormatter;
use crate::error::Result;

/// Two-line console summary: the total and the comma-joined paths.
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub fn total_line(count: usize) -> String {
        format!("Total violations: {count}")
    }

    #[must_use]
    pub fn files_line(violations: &[String]) -> String {
        format!("Violating files: {}", violations.join(", "))
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, violations: &[String]) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "{}", Self::total_line(violations.len()));
        let _ = writeln!(output, "{}", Self::files_line(violations));
        Ok(output)
    }
}
