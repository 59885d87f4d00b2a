use crate::config::RunConfig;
use crate::host::Logger;
use crate::scanner::ScanResult;

use super::{FileClassifier, NameVerdict};

/// Checks filenames against the configured suffix convention.
pub struct NamingChecker<'a> {
    config: &'a RunConfig,
    /// Configured suffixes, case-folded once up front when matching is case-insensitive.
    suffixes: Vec<String>,
}

impl<'a> NamingChecker<'a> {
    #[must_use]
    pub fn new(config: &'a RunConfig) -> Self {
        let suffixes = config
            .suffixes
            .iter()
            .map(|suffix| fold_case(suffix, config.case_sensitive))
            .collect();
        Self { config, suffixes }
    }

    /// Whether `filename` satisfies at least one configured suffix.
    ///
    /// Only the part before the first `.` is compared, so `FooUnitTests.spec.js`
    /// is checked as `FooUnitTests`.
    #[must_use]
    pub fn matches_convention(&self, filename: &str) -> bool {
        let folded = fold_case(filename, self.config.case_sensitive);
        let stem = name_stem(&folded);
        self.suffixes
            .iter()
            .any(|suffix| self.config.suffix_logic.matches(stem, suffix))
    }

    /// Verdict for a file that is already known to be in scope.
    #[must_use]
    pub fn verdict(&self, filename: &str) -> NameVerdict {
        if self.config.exclude_files.contains(filename) {
            NameVerdict::Excluded
        } else if self.matches_convention(filename) {
            NameVerdict::Valid
        } else {
            NameVerdict::Violation
        }
    }

    fn log(&self, logger: &mut dyn Logger, message: &str) {
        if self.config.verbose {
            logger.info(message);
        }
    }
}

impl FileClassifier for NamingChecker<'_> {
    fn classify(
        &self,
        full_path: &str,
        filename: &str,
        result: &mut ScanResult,
        logger: &mut dyn Logger,
    ) {
        // Each matching fragment evaluates the file again, so a path matching
        // two fragments can be reported twice.
        for fragment in &self.config.include_directories {
            if !full_path.contains(fragment.as_str()) {
                continue;
            }

            match self.verdict(filename) {
                NameVerdict::Excluded => {
                    self.log(logger, &format!("Excluded file: {full_path}"));
                }
                NameVerdict::Valid => {
                    self.log(logger, &format!("Valid file: {full_path}"));
                }
                NameVerdict::Violation => {
                    self.log(logger, &format!("Violating file: {full_path}"));
                    result.record_violation(full_path);
                }
            }
        }
    }
}

fn fold_case(value: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        value.to_string()
    } else {
        value.to_lowercase()
    }
}

/// Everything before the first `.`; the whole name when there is none.
fn name_stem(filename: &str) -> &str {
    filename
        .split_once('.')
        .map_or(filename, |(stem, _)| stem)
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
