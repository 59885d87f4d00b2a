use std::io::{self, Write};

use super::{Logger, ResultSink};
use crate::error::Result;

/// Logger writing each line to stdout.
#[derive(Debug, Default)]
pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn info(&mut self, message: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{message}") {
            log::warn!("Failed to write log line: {e}");
        }
    }
}

/// Result sink for local command-line runs.
///
/// Outputs only surface as diagnostics; the failure message goes to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    failure: Option<String>,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self { failure: None }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

impl ResultSink for ConsoleSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        log::info!("{name}={value}");
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        eprintln!("Error: {message}");
        self.failure = Some(message.to_string());
    }
}
