mod naming;
mod pattern;

pub use naming::NamingChecker;
pub use pattern::{PatternChecker, compile_glob};

use crate::host::Logger;
use crate::scanner::ScanResult;

/// Outcome of checking one in-scope file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVerdict {
    /// Listed in the excluded filenames.
    Excluded,
    /// Satisfies the suffix convention.
    Valid,
    /// Breaks the suffix convention.
    Violation,
}

pub trait FileClassifier {
    /// Classify one file found during traversal, recording any violation in `result`.
    ///
    /// - `full_path`: the scan root joined with the file's relative location
    /// - `filename`: the bare file name
    fn classify(
        &self,
        full_path: &str,
        filename: &str,
        result: &mut ScanResult,
        logger: &mut dyn Logger,
    );
}
