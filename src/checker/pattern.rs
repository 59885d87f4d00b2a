use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::config::PatternConfig;
use crate::error::{FilenameGuardError, Result};
use crate::host::Logger;
use crate::scanner::ScanResult;

use super::{FileClassifier, NameVerdict};

/// Checks relative file paths against name and exclude globs.
///
/// Both sets match the whole relative path, and `*` also matches `/`, so
/// `*UnitTest.*` accepts `src/test/FooUnitTest.java`.
pub struct PatternChecker {
    name_patterns: GlobSet,
    excludes: GlobSet,
    verbose: bool,
}

impl PatternChecker {
    /// Compile the name and exclude globs of `config`.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid glob.
    pub fn new(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            name_patterns: build_glob_set(&config.name_patterns)?,
            excludes: build_glob_set(&config.excludes)?,
            verbose: config.verbose,
        })
    }

    #[must_use]
    pub fn verdict(&self, relative_path: &str) -> NameVerdict {
        if self.excludes.is_match(relative_path) {
            NameVerdict::Excluded
        } else if self.name_patterns.is_match(relative_path) {
            NameVerdict::Valid
        } else {
            NameVerdict::Violation
        }
    }
}

impl FileClassifier for PatternChecker {
    fn classify(
        &self,
        full_path: &str,
        _filename: &str,
        result: &mut ScanResult,
        logger: &mut dyn Logger,
    ) {
        let verdict = self.verdict(full_path);
        if self.verbose {
            let label = match verdict {
                NameVerdict::Excluded => "Excluded file",
                NameVerdict::Valid => "Valid file",
                NameVerdict::Violation => "Violating file",
            };
            logger.info(&format!("{label}: {full_path}"));
        }
        if verdict == NameVerdict::Violation {
            result.record_violation(full_path);
        }
    }
}

/// Compile one glob; `literal_separator` keeps `*` from crossing `/`.
///
/// # Errors
/// Returns an error if `pattern` is not a valid glob.
pub fn compile_glob(pattern: &str, literal_separator: bool) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(literal_separator)
        .build()
        .map_err(|e| FilenameGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern, false)?);
    }
    builder.build().map_err(|e| FilenameGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
