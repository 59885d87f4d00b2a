use std::path::Path;

use globset::GlobMatcher;
use walkdir::WalkDir;

use super::{FileScanner, ScanResult};
use crate::checker::{FileClassifier, compile_glob};
use crate::error::{FilenameGuardError, Result};
use crate::host::Logger;

/// One `paths` glob. `*` stays within a path segment and `**` spans segments.
struct PathGlob {
    matcher: GlobMatcher,
    /// Dot-prefixed entries are only selected when the pattern names one.
    allows_hidden: bool,
}

impl PathGlob {
    fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            matcher: compile_glob(pattern, true)?.compile_matcher(),
            allows_hidden: pattern.starts_with('.') || pattern.contains("/."),
        })
    }

    fn selects(&self, file: &Candidate) -> bool {
        (self.allows_hidden || !file.hidden) && self.matcher.is_match(&file.relative_path)
    }
}

/// A regular file below the scan root.
struct Candidate {
    /// Root-relative path with `/` separators.
    relative_path: String,
    filename: String,
    hidden: bool,
}

/// Selects files with `paths` globs and hands each selection to a classifier.
///
/// Globs are applied one after another, so a file selected by two globs is
/// classified twice. Within one glob, files come in file-name order.
pub struct GlobScanner<C: FileClassifier> {
    classifier: C,
    path_globs: Vec<PathGlob>,
}

impl<C: FileClassifier> GlobScanner<C> {
    /// # Errors
    /// Returns an error if any path pattern is not a valid glob.
    pub fn new(classifier: C, path_patterns: &[String]) -> Result<Self> {
        let path_globs = path_patterns
            .iter()
            .map(|pattern| PathGlob::new(pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            classifier,
            path_globs,
        })
    }

    fn collect_candidates(root: &Path) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            // Follows symlinks, so a link to a file counts as a file.
            if !entry.path().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            candidates.push(Candidate {
                hidden: segments.iter().any(|s| s.starts_with('.')),
                relative_path: segments.join("/"),
                filename: entry.file_name().to_string_lossy().into_owned(),
            });
        }
        Ok(candidates)
    }
}

impl<C: FileClassifier> FileScanner for GlobScanner<C> {
    fn scan(&self, root: &Path, logger: &mut dyn Logger) -> Result<ScanResult> {
        if !root.is_dir() {
            return Err(FilenameGuardError::Config(format!(
                "Scan root is not a directory: {}",
                root.display()
            )));
        }

        let candidates = Self::collect_candidates(root)?;
        log::debug!("{} file(s) below {}", candidates.len(), root.display());

        let mut result = ScanResult::default();
        for glob in &self.path_globs {
            for file in candidates.iter().filter(|file| glob.selects(file)) {
                self.classifier
                    .classify(&file.relative_path, &file.filename, &mut result, logger);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
