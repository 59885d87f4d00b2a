use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "filename-guard")]
#[command(author, version, about = "Filename guard - enforce file naming conventions")]
#[command(long_about = "A tool to check that files under the configured directories \
    carry one of the required name suffixes.\n\n\
    Exit codes:\n  \
    0 - Check passed (or violations found without --fail-on-violations)\n  \
    1 - Violations found and --fail-on-violations set\n  \
    2 - Runtime error")]
pub struct Cli {
    /// Increase diagnostic verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a directory tree against the naming convention
    Check(CheckArgs),

    /// Check files selected by glob patterns against name patterns
    Patterns(PatternArgs),

    /// Run as a GitHub Actions step (inputs from INPUT_* variables)
    Action(ActionArgs),
}

/// Which checker an Actions step runs.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMode {
    /// Required filename suffixes below include directories
    #[default]
    Suffix,
    /// Glob name patterns over files selected by glob paths
    Pattern,
}

#[derive(Args, Debug, Clone)]
pub struct ActionArgs {
    /// Checker to run
    #[arg(long, value_enum, default_value_t = ActionMode::Suffix)]
    pub mode: ActionMode,
}

#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Required filename suffixes (comma-separated, e.g. UnitTests,IntegrationTests)
    #[arg(long, short = 's')]
    pub suffixes: Option<String>,

    /// Path fragments that put a file in scope (comma-separated) [default: src/test/]
    #[arg(long, short = 'I')]
    pub include_directories: Option<String>,

    /// Directory names skipped directly below the root (comma-separated)
    /// [default: dist,node_modules,coverage,target,.idea,.github]
    #[arg(long, short = 'x')]
    pub exclude_directories: Option<String>,

    /// Exact filenames never reported (comma-separated)
    #[arg(long, short = 'e')]
    pub exclude_files: Option<String>,

    /// Ignore letter case when matching suffixes
    #[arg(long)]
    pub case_insensitive: bool,

    /// Accept a suffix anywhere in the name instead of only at its end
    #[arg(long)]
    pub contains: bool,

    /// Report format [possible values: console, csv, json]
    #[arg(short, long)]
    pub report_format: Option<String>,

    /// Directory receiving violations.csv / violations.json
    #[arg(long, default_value = ".")]
    pub report_dir: PathBuf,

    /// Log every setting and every file decision
    #[arg(long)]
    pub verbose_logging: bool,

    /// Exit with code 1 when violations are found
    #[arg(long)]
    pub fail_on_violations: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PatternArgs {
    /// Directory the path globs are relative to
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Globs a file path must match (comma-separated, e.g. "*UnitTest.*,*IntegrationTest.*")
    #[arg(long, short = 'n')]
    pub name_patterns: Option<String>,

    /// Globs selecting the files to check (comma-separated, e.g. "**/src/test/**")
    #[arg(long, short = 'p')]
    pub paths: Option<String>,

    /// Globs of files never reported (comma-separated)
    #[arg(long, short = 'e')]
    pub excludes: Option<String>,

    /// Report format [possible values: console, csv, json]
    #[arg(short, long)]
    pub report_format: Option<String>,

    /// Directory receiving violations.csv / violations.json
    #[arg(long, default_value = ".")]
    pub report_dir: PathBuf,

    /// Log every setting and every file decision
    #[arg(long)]
    pub verbose_logging: bool,

    /// Exit with code 1 when violations are found
    #[arg(long)]
    pub fail_on_violation: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
