use indexmap::IndexSet;

use crate::output::ReportFormat;

// ============================================================================
// Input names
// ============================================================================

pub const KEY_SUFFIXES: &str = "suffixes";
pub const KEY_INCLUDE_DIRECTORIES: &str = "include_directories";
pub const KEY_EXCLUDE_DIRECTORIES: &str = "exclude_directories";
pub const KEY_EXCLUDE_FILES: &str = "exclude_files";
pub const KEY_CASE_SENSITIVITY: &str = "case_sensitivity";
pub const KEY_LOGIC: &str = "logic";
pub const KEY_REPORT_FORMAT: &str = "report_format";
pub const KEY_VERBOSE_LOGGING: &str = "verbose_logging";
pub const KEY_FAIL_ON_VIOLATIONS: &str = "fail_on_violations";

// ============================================================================
// Defaults
// ============================================================================

/// Include fragment used when none is configured.
pub const DEFAULT_INCLUDE_DIRECTORIES: &str = "src/test/";

/// Root-level directories skipped when none are configured.
pub const DEFAULT_EXCLUDE_DIRECTORIES: &str = "dist,node_modules,coverage,target,.idea,.github";

/// How a configured suffix has to appear in the filename stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixLogic {
    /// Stem must end with the suffix.
    #[default]
    EndsWith,
    /// Stem must contain the suffix anywhere.
    Contains,
}

impl SuffixLogic {
    /// Logic selected by the boolean `logic` input: `true` is ends-with.
    #[must_use]
    pub const fn from_flag(ends_with: bool) -> Self {
        if ends_with { Self::EndsWith } else { Self::Contains }
    }

    /// The `logic` input value that selects this variant.
    #[must_use]
    pub const fn as_flag(self) -> bool {
        matches!(self, Self::EndsWith)
    }

    #[must_use]
    pub fn matches(self, stem: &str, suffix: &str) -> bool {
        match self {
            Self::EndsWith => stem.ends_with(suffix),
            Self::Contains => stem.contains(suffix),
        }
    }
}

/// Fully resolved settings for one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Required filename suffixes; any one of them satisfies the convention.
    pub suffixes: Vec<String>,

    /// Path fragments that put a file in scope (plain substring test).
    pub include_directories: Vec<String>,

    /// Directory names skipped at the first level below the scan root only.
    pub exclude_directories: IndexSet<String>,

    /// Exact filenames never reported.
    pub exclude_files: IndexSet<String>,

    pub case_sensitive: bool,
    pub suffix_logic: SuffixLogic,
    pub report_format: ReportFormat,
    pub verbose: bool,
    pub fail_on_violations: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            suffixes: Vec::new(),
            include_directories: split_list(DEFAULT_INCLUDE_DIRECTORIES),
            exclude_directories: split_list(DEFAULT_EXCLUDE_DIRECTORIES)
                .into_iter()
                .collect(),
            exclude_files: IndexSet::new(),
            case_sensitive: true,
            suffix_logic: SuffixLogic::EndsWith,
            report_format: ReportFormat::Console,
            verbose: false,
            fail_on_violations: false,
        }
    }
}

/// Split a comma-delimited value into trimmed items.
///
/// Blank input is an empty list. Otherwise every piece is kept, so
/// `"UnitTests,"` yields `["UnitTests", ""]`.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
