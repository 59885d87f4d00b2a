//! `patterns` subcommand: glob name patterns over glob-selected files.

use std::collections::HashMap;
use std::io;

use super::check::{CheckOptions, HostIo, exit_code};
use crate::checker::PatternChecker;
use crate::cli::PatternArgs;
use crate::config::{
    KEY_EXCLUDES, KEY_FAIL_ON_VIOLATION, KEY_NAME_PATTERNS, KEY_PATHS, KEY_REPORT_FORMAT,
    KEY_VERBOSE_LOGGING, resolve_pattern_config,
};
use crate::host::{ConfigSource, ConsoleSink, StdoutLogger};
use crate::output::{ReportOutcome, ViolationReporter};
use crate::scanner::{FileScanner, GlobScanner};

/// Run a pattern check from command-line arguments.
#[must_use]
pub fn run_patterns_command(args: &PatternArgs) -> i32 {
    let inputs = pattern_cli_inputs(args);
    let options = CheckOptions {
        root: &args.root,
        report_dir: &args.report_dir,
    };

    let mut logger = StdoutLogger;
    let mut sink = ConsoleSink::new();
    let mut stdout = io::stdout();
    let mut host_io = HostIo {
        logger: &mut logger,
        sink: &mut sink,
        console: &mut stdout,
    };

    run_patterns(&inputs, options, &mut host_io)
}

pub fn run_patterns<S: ConfigSource + ?Sized>(
    source: &S,
    options: CheckOptions<'_>,
    io: &mut HostIo<'_>,
) -> i32 {
    let result = run_patterns_impl(source, options, io);
    exit_code(result, io.sink)
}

/// Resolve, compile globs, select and classify, report.
///
/// # Errors
/// Returns an error if a pattern is invalid, the tree cannot be walked or the
/// results cannot be published.
pub fn run_patterns_impl<S: ConfigSource + ?Sized>(
    source: &S,
    options: CheckOptions<'_>,
    io: &mut HostIo<'_>,
) -> crate::Result<ReportOutcome> {
    let config = resolve_pattern_config(source, io.logger);

    let scanner = GlobScanner::new(PatternChecker::new(&config)?, &config.paths)?;
    let result = scanner.scan(options.root, io.logger)?;

    ViolationReporter::new(&config, options.report_dir).report(
        &result,
        io.logger,
        io.sink,
        io.console,
    )
}

/// Translate pattern flags into raw inputs.
#[must_use]
pub fn pattern_cli_inputs(args: &PatternArgs) -> HashMap<String, String> {
    let mut inputs = HashMap::new();
    let mut set = |key: &str, value: Option<&str>| {
        if let Some(value) = value {
            inputs.insert(key.to_string(), value.to_string());
        }
    };

    set(KEY_NAME_PATTERNS, args.name_patterns.as_deref());
    set(KEY_PATHS, args.paths.as_deref());
    set(KEY_EXCLUDES, args.excludes.as_deref());
    set(KEY_REPORT_FORMAT, args.report_format.as_deref());
    set(KEY_VERBOSE_LOGGING, args.verbose_logging.then_some("true"));
    set(KEY_FAIL_ON_VIOLATION, args.fail_on_violation.then_some("true"));

    inputs
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
