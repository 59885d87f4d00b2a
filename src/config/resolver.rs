//! Turns raw host inputs into a [`RunConfig`].
//!
//! Nothing here fails: missing or malformed values fall back to their
//! documented defaults.

use indexmap::IndexSet;

use super::model::{
    DEFAULT_EXCLUDE_DIRECTORIES, DEFAULT_INCLUDE_DIRECTORIES, KEY_CASE_SENSITIVITY,
    KEY_EXCLUDE_DIRECTORIES, KEY_EXCLUDE_FILES, KEY_FAIL_ON_VIOLATIONS, KEY_INCLUDE_DIRECTORIES,
    KEY_LOGIC, KEY_REPORT_FORMAT, KEY_SUFFIXES, KEY_VERBOSE_LOGGING, RunConfig, SuffixLogic,
    split_list,
};
use crate::host::{ConfigSource, Logger};

const TRUE_LITERAL: &str = "true";

/// Resolve settings from `source`, logging each one when verbose logging is on.
pub fn resolve_config<S: ConfigSource + ?Sized>(source: &S, logger: &mut dyn Logger) -> RunConfig {
    let config = resolve(source);
    if config.verbose {
        log_settings(&config, logger);
    }
    config
}

/// Resolve settings from `source` without side effects.
#[must_use]
pub fn resolve<S: ConfigSource + ?Sized>(source: &S) -> RunConfig {
    RunConfig {
        suffixes: list_or(source, KEY_SUFFIXES, ""),
        include_directories: list_or(source, KEY_INCLUDE_DIRECTORIES, DEFAULT_INCLUDE_DIRECTORIES),
        exclude_directories: set_or(source, KEY_EXCLUDE_DIRECTORIES, DEFAULT_EXCLUDE_DIRECTORIES),
        exclude_files: set_or(source, KEY_EXCLUDE_FILES, ""),
        case_sensitive: flag_or(source, KEY_CASE_SENSITIVITY, true),
        suffix_logic: SuffixLogic::from_flag(flag_or(source, KEY_LOGIC, true)),
        report_format: raw_value(source, KEY_REPORT_FORMAT)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default(),
        verbose: flag_or(source, KEY_VERBOSE_LOGGING, false),
        fail_on_violations: flag_or(source, KEY_FAIL_ON_VIOLATIONS, false),
    }
}

/// Emit one line per setting, in a fixed order.
pub fn log_settings(config: &RunConfig, logger: &mut dyn Logger) {
    logger.info(&format!("Suffixes: {:?}", config.suffixes));
    logger.info(&format!("Include directories: {:?}", config.include_directories));
    logger.info(&format!("Exclude directories: {:?}", config.exclude_directories));
    logger.info(&format!("Exclude files: {:?}", config.exclude_files));
    logger.info(&format!("Case sensitivity: {}", config.case_sensitive));
    logger.info(&format!("Logic: {}", config.suffix_logic.as_flag()));
    logger.info(&format!("Report format: {}", config.report_format));
    logger.info(&format!("Fail on violations: {}", config.fail_on_violations));
}

/// Raw value for `key`; blank values count as absent.
pub(super) fn raw_value<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Option<String> {
    source.get(key).filter(|value| !value.trim().is_empty())
}

fn list_or<S: ConfigSource + ?Sized>(source: &S, key: &str, default: &str) -> Vec<String> {
    raw_value(source, key).map_or_else(|| split_list(default), |value| split_list(&value))
}

fn set_or<S: ConfigSource + ?Sized>(source: &S, key: &str, default: &str) -> IndexSet<String> {
    list_or(source, key, default).into_iter().collect()
}

/// Only the exact literal `true` enables a flag; absence yields `default`.
fn flag_or<S: ConfigSource + ?Sized>(source: &S, key: &str, default: bool) -> bool {
    raw_value(source, key).map_or(default, |value| value.trim() == TRUE_LITERAL)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
