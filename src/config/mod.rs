mod model;
mod pattern;
mod resolver;

pub use model::{
    DEFAULT_EXCLUDE_DIRECTORIES, DEFAULT_INCLUDE_DIRECTORIES, KEY_CASE_SENSITIVITY,
    KEY_EXCLUDE_DIRECTORIES, KEY_EXCLUDE_FILES, KEY_FAIL_ON_VIOLATIONS, KEY_INCLUDE_DIRECTORIES,
    KEY_LOGIC, KEY_REPORT_FORMAT, KEY_SUFFIXES, KEY_VERBOSE_LOGGING, RunConfig, SuffixLogic,
    split_list,
};
pub use pattern::{
    KEY_EXCLUDES, KEY_FAIL_ON_VIOLATION, KEY_NAME_PATTERNS, KEY_PATHS, PatternConfig,
    log_pattern_settings, resolve_pattern_config, resolve_patterns,
};
pub use resolver::{log_settings, resolve, resolve_config};
