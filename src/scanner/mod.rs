mod directory;
mod glob;
mod types;

pub use directory::DirectoryScanner;
pub use glob::GlobScanner;
pub use types::ScanResult;

use std::path::Path;

use crate::error::Result;
use crate::host::Logger;

/// Trait for walking a tree and collecting naming violations.
pub trait FileScanner {
    /// Scan everything below `root` and return the violations found.
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory or any entry below it
    /// cannot be read.
    fn scan(&self, root: &Path, logger: &mut dyn Logger) -> Result<ScanResult>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
