//! GitHub Actions runtime adapters.
//!
//! Inputs arrive as `INPUT_<NAME>` environment variables, outputs are appended
//! to the file named by `GITHUB_OUTPUT`, and failures are reported with the
//! `::error::` workflow command.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use super::{ConfigSource, ResultSink};
use crate::error::{FilenameGuardError, Result};

const INPUT_PREFIX: &str = "INPUT_";
const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// Action inputs captured from a snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Environment variable name the runner uses for input `name`.
    #[must_use]
    pub fn variable_name(name: &str) -> String {
        format!("{INPUT_PREFIX}{}", name.replace(' ', "_").to_uppercase())
    }
}

impl ConfigSource for EnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars
            .get(&Self::variable_name(name))
            .map(|value| value.trim().to_string())
    }
}

/// Result sink speaking the GitHub Actions output protocol.
pub struct GithubOutputSink<W: Write> {
    output_file: Option<PathBuf>,
    out: W,
}

impl GithubOutputSink<Stdout> {
    /// Sink bound to `$GITHUB_OUTPUT` and the process stdout.
    #[must_use]
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(GITHUB_OUTPUT_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(output_file, io::stdout())
    }
}

impl<W: Write> GithubOutputSink<W> {
    #[must_use]
    pub const fn new(output_file: Option<PathBuf>, out: W) -> Self {
        Self { output_file, out }
    }

    #[must_use]
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
        let to_write_error = |source| FilenameGuardError::FileWrite {
            path: path.to_path_buf(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(to_write_error)?;
        writeln!(file, "{name}={value}").map_err(to_write_error)
    }
}

impl<W: Write> ResultSink for GithubOutputSink<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        log::debug!("output {name}={value}");
        if let Some(path) = &self.output_file {
            return Self::append_output(path, name, value);
        }

        // Runners without GITHUB_OUTPUT only understand the legacy command.
        writeln!(
            self.out,
            "::set-output name={}::{}",
            escape_command_property(name),
            escape_command_data(value)
        )?;
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        log::error!("{message}");
        if let Err(e) = writeln!(self.out, "::error::{}", escape_command_data(message)) {
            log::warn!("Failed to emit error command: {e}");
        }
    }
}

/// Escape a workflow command payload so it stays on a single line.
#[must_use]
pub fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_command_property(property: &str) -> String {
    escape_command_data(property)
        .replace(':', "%3A")
        .replace(',', "%2C")
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
