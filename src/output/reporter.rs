use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{CsvFormatter, JsonFormatter, ReportFormat, ReportFormatter, TextFormatter};
use crate::config::{PatternConfig, RunConfig};
use crate::error::{FilenameGuardError, Result};
use crate::host::{Logger, ResultSink};
use crate::scanner::ScanResult;

/// Output carrying the number of violations. Always set.
pub const OUTPUT_VIOLATIONS: &str = "conventions_violations";

/// Output carrying the report artifact name. Set for file formats only.
pub const OUTPUT_REPORT_FILE: &str = "report_file";

/// Glob-pattern mode's name for the violation count output.
pub const OUTPUT_VIOLATION_COUNT: &str = "violation-count";

/// Glob-pattern mode's name for the report artifact output.
pub const OUTPUT_REPORT_PATH: &str = "report-path";

/// Names under which a mode publishes its outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputNames {
    pub count: &'static str,
    pub report: &'static str,
}

impl OutputNames {
    pub const SUFFIX: Self = Self {
        count: OUTPUT_VIOLATIONS,
        report: OUTPUT_REPORT_FILE,
    };

    pub const PATTERN: Self = Self {
        count: OUTPUT_VIOLATION_COUNT,
        report: OUTPUT_REPORT_PATH,
    };
}

/// The part of a run's settings the reporter acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub report_format: ReportFormat,
    pub verbose: bool,
    pub fail_on_violations: bool,
    pub outputs: OutputNames,
}

impl From<&RunConfig> for ReportSettings {
    fn from(config: &RunConfig) -> Self {
        Self {
            report_format: config.report_format,
            verbose: config.verbose,
            fail_on_violations: config.fail_on_violations,
            outputs: OutputNames::SUFFIX,
        }
    }
}

impl From<&PatternConfig> for ReportSettings {
    fn from(config: &PatternConfig) -> Self {
        Self {
            report_format: config.report_format,
            verbose: config.verbose,
            fail_on_violations: config.fail_on_violation,
            outputs: OutputNames::PATTERN,
        }
    }
}

/// What the reporter did with a finished scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub violation_count: usize,
    /// Location of the written report artifact, if any.
    pub report_file: Option<PathBuf>,
    /// Whether the failure signal was raised.
    pub failed: bool,
}

/// Failure message raised when violations fail the run.
#[must_use]
pub fn violation_message(count: usize) -> String {
    format!("There are {count} test file naming convention violations.")
}

/// Publishes a finished scan: logs, outputs, report artifact, failure signal.
pub struct ViolationReporter<'a> {
    settings: ReportSettings,
    report_dir: &'a Path,
}

impl<'a> ViolationReporter<'a> {
    /// `report_dir` is where `violations.csv` / `violations.json` are written.
    #[must_use]
    pub fn new(settings: impl Into<ReportSettings>, report_dir: &'a Path) -> Self {
        Self {
            settings: settings.into(),
            report_dir,
        }
    }

    /// Emit the results of `result`.
    ///
    /// # Errors
    /// Returns an error if the console, the report file or an output cannot be written.
    pub fn report(
        &self,
        result: &ScanResult,
        logger: &mut dyn Logger,
        sink: &mut dyn ResultSink,
        console: &mut dyn Write,
    ) -> Result<ReportOutcome> {
        let count = result.violation_count();

        if self.settings.verbose {
            logger.info(&TextFormatter::total_line(count));
            logger.info(&TextFormatter::files_line(&result.violations));
        }

        sink.set_output(self.settings.outputs.count, &count.to_string())?;

        let format = self.settings.report_format;
        if format == ReportFormat::Console || self.settings.verbose {
            let summary = TextFormatter.format(&result.violations)?;
            console.write_all(summary.as_bytes())?;
            console.flush()?;
        }

        let report_file = match format.report_filename() {
            Some(filename) => {
                let path = self.write_report(format, filename, &result.violations)?;
                sink.set_output(self.settings.outputs.report, filename)?;
                Some(path)
            }
            None => None,
        };

        let failed = self.settings.fail_on_violations && count > 0;
        if failed {
            sink.set_failed(&violation_message(count));
        }

        Ok(ReportOutcome {
            violation_count: count,
            report_file,
            failed,
        })
    }

    fn write_report(
        &self,
        format: ReportFormat,
        filename: &str,
        violations: &[String],
    ) -> Result<PathBuf> {
        let content = match format {
            ReportFormat::Csv => CsvFormatter.format(violations)?,
            ReportFormat::Json => JsonFormatter.format(violations)?,
            ReportFormat::Console => TextFormatter.format(violations)?,
        };

        let path = self.report_dir.join(filename);
        fs::write(&path, content).map_err(|source| FilenameGuardError::FileWrite {
            path: path.clone(),
            source,
        })?;
        log::info!("Report written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
