use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use crate::checker::NamingChecker;
use crate::cli::CheckArgs;
use crate::config::{
    KEY_CASE_SENSITIVITY, KEY_EXCLUDE_DIRECTORIES, KEY_EXCLUDE_FILES, KEY_FAIL_ON_VIOLATIONS,
    KEY_INCLUDE_DIRECTORIES, KEY_LOGIC, KEY_REPORT_FORMAT, KEY_SUFFIXES, KEY_VERBOSE_LOGGING,
    resolve_config,
};
use crate::host::{ConfigSource, ConsoleSink, Logger, ResultSink, StdoutLogger};
use crate::output::{ReportOutcome, ViolationReporter};
use crate::scanner::{DirectoryScanner, FileScanner};
use crate::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

/// Where to scan and where to put report artifacts.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions<'a> {
    pub root: &'a Path,
    pub report_dir: &'a Path,
}

/// Host-side channels a run writes to.
pub struct HostIo<'a> {
    pub logger: &'a mut dyn Logger,
    pub sink: &'a mut dyn ResultSink,
    pub console: &'a mut dyn Write,
}

/// Run a check from command-line arguments.
#[must_use]
pub fn run_check_command(args: &CheckArgs) -> i32 {
    let inputs = cli_inputs(args);
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

    run_check(&inputs, options, &mut host_io)
}

/// Run one check and map the result to an exit code.
///
/// Any error is reported once through the failure signal.
pub fn run_check<S: ConfigSource + ?Sized>(
    source: &S,
    options: CheckOptions<'_>,
    io: &mut HostIo<'_>,
) -> i32 {
    let result = run_check_impl(source, options, io);
    exit_code(result, io.sink)
}

/// Map a finished run to an exit code, raising the failure signal for errors.
pub(crate) fn exit_code(result: crate::Result<ReportOutcome>, sink: &mut dyn ResultSink) -> i32 {
    match result {
        Ok(outcome) if outcome.failed => EXIT_VIOLATIONS,
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            log::error!("{}: {e}", e.error_type());
            sink.set_failed(&format!("Action failed with error: {e}"));
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Resolve, scan, classify, report.
///
/// # Errors
/// Returns an error if the tree cannot be walked or the results cannot be published.
pub fn run_check_impl<S: ConfigSource + ?Sized>(
    source: &S,
    options: CheckOptions<'_>,
    io: &mut HostIo<'_>,
) -> crate::Result<ReportOutcome> {
    // 1. Resolve configuration
    let config = resolve_config(source, io.logger);

    // 2. Walk the tree, classifying each file as it is found
    let scanner = DirectoryScanner::from_config(NamingChecker::new(&config), &config);
    let result = scanner.scan(options.root, io.logger)?;

    // 3. Publish
    ViolationReporter::new(&config, options.report_dir).report(
        &result,
        io.logger,
        io.sink,
        io.console,
    )
}

/// Translate command-line flags into the same raw inputs a CI host would supply.
#[must_use]
pub fn cli_inputs(args: &CheckArgs) -> HashMap<String, String> {
    let mut inputs = HashMap::new();
    let mut set = |key: &str, value: Option<&str>| {
        if let Some(value) = value {
            inputs.insert(key.to_string(), value.to_string());
        }
    };

    set(KEY_SUFFIXES, args.suffixes.as_deref());
    set(KEY_INCLUDE_DIRECTORIES, args.include_directories.as_deref());
    set(KEY_EXCLUDE_DIRECTORIES, args.exclude_directories.as_deref());
    set(KEY_EXCLUDE_FILES, args.exclude_files.as_deref());
    set(KEY_CASE_SENSITIVITY, args.case_insensitive.then_some("false"));
    set(KEY_LOGIC, args.contains.then_some("false"));
    set(KEY_REPORT_FORMAT, args.report_format.as_deref());
    set(KEY_VERBOSE_LOGGING, args.verbose_logging.then_some("true"));
    set(KEY_FAIL_ON_VIOLATIONS, args.fail_on_violations.then_some("true"));

    inputs
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
