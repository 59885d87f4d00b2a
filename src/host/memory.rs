use indexmap::IndexMap;

use super::{Logger, ResultSink};
use crate::error::Result;

/// Logger that keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryLogger {
    pub lines: Vec<String>,
}

impl MemoryLogger {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl Logger for MemoryLogger {
    fn info(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

/// Result sink that records outputs in the order they were set.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub outputs: IndexMap<String, String>,
    pub failure: Option<String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }
}

impl ResultSink for MemorySink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failure = Some(message.to_string());
    }
}
