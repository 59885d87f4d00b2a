use serde::{Deserialize, Serialize};

use super::ReportFormatter;
use crate::error::Result;

pub struct JsonFormatter;

/// Shape of `violations.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonReport {
    pub violations: Vec<String>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, violations: &[String]) -> Result<String> {
        let report = JsonReport {
            violations: violations.to_vec(),
        };
        Ok(serde_json::to_string(&report)?)
    }
}
