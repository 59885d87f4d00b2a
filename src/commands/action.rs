//! `action` subcommand: run as a GitHub Actions step.

use std::io::{self, Write};
use std::path::Path;

use super::check::{CheckOptions, HostIo, run_check};
use super::patterns::run_patterns;
use crate::EXIT_RUNTIME_ERROR;
use crate::cli::ActionMode;
use crate::host::{ConfigSource, EnvSource, GithubOutputSink, Logger, ResultSink, StdoutLogger};

/// Run with inputs, outputs and root taken from the Actions runtime.
#[must_use]
pub fn run_action(mode: ActionMode) -> i32 {
    let source = EnvSource::from_env();
    let mut sink = GithubOutputSink::from_env();
    let mut logger = StdoutLogger;
    let mut stdout = io::stdout();

    let workspace = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("Cannot determine working directory: {e}");
            sink.set_failed(&format!("Action failed with error: {e}"));
            return EXIT_RUNTIME_ERROR;
        }
    };

    run_action_in(&source, &workspace, mode, &mut logger, &mut sink, &mut stdout)
}

/// Scan `workspace` and write report artifacts into it.
pub fn run_action_in<S: ConfigSource + ?Sized>(
    source: &S,
    workspace: &Path,
    mode: ActionMode,
    logger: &mut dyn Logger,
    sink: &mut dyn ResultSink,
    console: &mut dyn Write,
) -> i32 {
    log::debug!("Running {mode:?} action in {}", workspace.display());
    let options = CheckOptions {
        root: workspace,
        report_dir: workspace,
    };
    let mut host_io = HostIo {
        logger,
        sink,
        console,
    };
    match mode {
        ActionMode::Suffix => run_check(source, options, &mut host_io),
        ActionMode::Pattern => run_patterns(source, options, &mut host_io),
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
