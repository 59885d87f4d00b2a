//! Boundary between the scan engine and whatever is hosting it.
//!
//! The engine only ever reads named configuration values, emits log lines,
//! sets named outputs and signals failure. Each concern is one narrow trait so
//! a CI runner, the local CLI and tests can plug in their own mechanism.

mod console;
mod github;
mod memory;

pub use console::{ConsoleSink, StdoutLogger};
pub use github::{EnvSource, GithubOutputSink, escape_command_data};
pub use memory::{MemoryLogger, MemorySink};

use std::collections::HashMap;

use crate::error::Result;

/// Read-only key/value source for raw configuration values.
pub trait ConfigSource {
    /// Returns the raw value for `name`, or `None` when it was not provided.
    fn get(&self, name: &str) -> Option<String>;
}

/// Sink for human-readable log lines.
pub trait Logger {
    fn info(&mut self, message: &str);
}

/// Sink for named run outputs and the failure signal.
pub trait ResultSink {
    /// Publish a named output value.
    ///
    /// # Errors
    /// Returns an error if the host's output channel cannot be written.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Mark the run as failed with `message`.
    fn set_failed(&mut self, message: &str);
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
