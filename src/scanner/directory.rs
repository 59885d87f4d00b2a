use std::path::Path;

use indexmap::IndexSet;
use walkdir::{DirEntry, WalkDir};

use super::{FileScanner, ScanResult};
use crate::checker::FileClassifier;
use crate::config::RunConfig;
use crate::error::{FilenameGuardError, Result};
use crate::host::Logger;

/// Depth of the scan root's immediate children.
const ROOT_CHILD_DEPTH: usize = 1;

/// Depth-first walker that hands every non-directory entry to a classifier.
///
/// Entries are visited in the order the filesystem lists them. Excluded
/// directory names are only honoured directly below the scan root; a nested
/// directory with the same name is still walked.
pub struct DirectoryScanner<'a, C: FileClassifier> {
    classifier: C,
    exclude_directories: &'a IndexSet<String>,
    verbose: bool,
}

impl<'a, C: FileClassifier> DirectoryScanner<'a, C> {
    #[must_use]
    pub const fn new(classifier: C, exclude_directories: &'a IndexSet<String>, verbose: bool) -> Self {
        Self {
            classifier,
            exclude_directories,
            verbose,
        }
    }

    #[must_use]
    pub const fn from_config(classifier: C, config: &'a RunConfig) -> Self {
        Self::new(classifier, &config.exclude_directories, config.verbose)
    }

    fn is_excluded_root_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() == ROOT_CHILD_DEPTH
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude_directories.contains(name))
    }
}

impl<C: FileClassifier> FileScanner for DirectoryScanner<'_, C> {
    fn scan(&self, root: &Path, logger: &mut dyn Logger) -> Result<ScanResult> {
        if !root.is_dir() {
            return Err(FilenameGuardError::Config(format!(
                "Scan root is not a directory: {}",
                root.display()
            )));
        }

        let mut result = ScanResult::default();
        let mut walker = WalkDir::new(root).min_depth(ROOT_CHILD_DEPTH).into_iter();

        while let Some(entry) = walker.next() {
            // Any unreadable entry aborts the whole scan.
            let entry = entry?;

            if entry.file_type().is_dir() {
                if self.is_excluded_root_dir(&entry) {
                    if self.verbose {
                        logger.info(&format!(
                            "Skipping excluded directory: {}",
                            entry.file_name().to_string_lossy()
                        ));
                    }
                    walker.skip_current_dir();
                }
                continue;
            }

            let full_path = entry.path().to_string_lossy();
            let filename = entry.file_name().to_string_lossy();
            log::debug!("Classifying {full_path}");
            self.classifier
                .classify(&full_path, &filename, &mut result, logger);
        }

        log::debug!(
            "Scan of {} finished with {} violation(s)",
            root.display(),
            result.violation_count()
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
