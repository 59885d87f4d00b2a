//! Settings for the glob-pattern checker.
//!
//! Unlike the suffix checker, flag and format values are compared without
//! regard to letter case, and line breaks inside list values are dropped so
//! multi-line workflow inputs read as one list.

use super::model::{KEY_REPORT_FORMAT, KEY_VERBOSE_LOGGING, split_list};
use super::resolver::raw_value;
use crate::host::{ConfigSource, Logger};
use crate::output::ReportFormat;

pub const KEY_NAME_PATTERNS: &str = "name_patterns";
pub const KEY_PATHS: &str = "paths";
pub const KEY_EXCLUDES: &str = "excludes";
pub const KEY_FAIL_ON_VIOLATION: &str = "fail_on_violation";

/// Resolved settings for one glob-pattern run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    /// Globs a file path must match to be valid; `*` crosses `/`.
    pub name_patterns: Vec<String>,

    /// Globs selecting the files to check, relative to the scan root.
    pub paths: Vec<String>,

    /// Globs removing files from the check; `*` crosses `/`.
    pub excludes: Vec<String>,

    pub report_format: ReportFormat,
    pub verbose: bool,
    pub fail_on_violation: bool,
}

/// Resolve pattern settings, logging them when verbose logging is on.
pub fn resolve_pattern_config<S: ConfigSource + ?Sized>(
    source: &S,
    logger: &mut dyn Logger,
) -> PatternConfig {
    let config = resolve_patterns(source);
    if config.verbose {
        log_pattern_settings(&config, logger);
    }
    config
}

#[must_use]
pub fn resolve_patterns<S: ConfigSource + ?Sized>(source: &S) -> PatternConfig {
    PatternConfig {
        name_patterns: pattern_list(source, KEY_NAME_PATTERNS),
        paths: pattern_list(source, KEY_PATHS),
        excludes: pattern_list(source, KEY_EXCLUDES),
        report_format: raw_value(source, KEY_REPORT_FORMAT)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default(),
        verbose: flag(source, KEY_VERBOSE_LOGGING),
        fail_on_violation: flag(source, KEY_FAIL_ON_VIOLATION),
    }
}

pub fn log_pattern_settings(config: &PatternConfig, logger: &mut dyn Logger) {
    logger.info(&format!("Name patterns: {:?}", config.name_patterns));
    logger.info(&format!("Paths: {:?}", config.paths));
    logger.info(&format!("Excludes: {:?}", config.excludes));
    logger.info(&format!("Report format: {}", config.report_format));
    logger.info(&format!("Fail on violations: {}", config.fail_on_violation));
}

fn pattern_list<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Vec<String> {
    raw_value(source, key)
        .map(|value| split_list(&value.replace(['\r', '\n'], "")))
        .unwrap_or_default()
}

fn flag<S: ConfigSource + ?Sized>(source: &S, key: &str) -> bool {
    raw_value(source, key).is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
