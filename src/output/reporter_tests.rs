use tempfile::TempDir;

use super::*;
use crate::host::{MemoryLogger, MemorySink};

fn scan_result(paths: &[&str]) -> ScanResult {
    ScanResult {
        violations: paths.iter().map(|s| (*s).to_string()).collect(),
    }
}

struct Harness {
    logger: MemoryLogger,
    sink: MemorySink,
    console: Vec<u8>,
}

impl Harness {
    fn new() -> Self {
        Self {
            logger: MemoryLogger::new(),
            sink: MemorySink::new(),
            console: Vec::new(),
        }
    }

    fn report(
        &mut self,
        settings: impl Into<ReportSettings>,
        dir: &Path,
        result: &ScanResult,
    ) -> ReportOutcome {
        ViolationReporter::new(settings, dir)
            .report(result, &mut self.logger, &mut self.sink, &mut self.console)
            .unwrap()
    }

    fn console_text(&self) -> String {
        String::from_utf8(self.console.clone()).unwrap()
    }
}

#[test]
fn console_format_prints_summary_and_sets_count() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig::default();

    let outcome = harness.report(&config, temp_dir.path(), &scan_result(&["a/A.js", "b/B.js"]));

    assert_eq!(
        outcome,
        ReportOutcome {
            violation_count: 2,
            report_file: None,
            failed: false,
        }
    );
    assert_eq!(harness.sink.output(OUTPUT_VIOLATIONS), Some("2"));
    assert_eq!(harness.sink.output(OUTPUT_REPORT_FILE), None);
    assert_eq!(
        harness.console_text(),
        "Total violations: 2\nViolating files: a/A.js, b/B.js\n"
    );
    assert!(harness.logger.lines.is_empty());
}

#[test]
fn count_output_is_set_even_without_violations() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig {
        report_format: ReportFormat::Json,
        ..RunConfig::default()
    };

    harness.report(&config, temp_dir.path(), &scan_result(&[]));

    assert_eq!(harness.sink.output(OUTPUT_VIOLATIONS), Some("0"));
}

#[test]
fn csv_format_writes_newline_joined_paths() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig {
        report_format: ReportFormat::Csv,
        ..RunConfig::default()
    };

    let outcome = harness.report(&config, temp_dir.path(), &scan_result(&["a/A.js", "b/B.js"]));

    let report_path = temp_dir.path().join("violations.csv");
    assert_eq!(outcome.report_file, Some(report_path.clone()));
    assert_eq!(
        std::fs::read_to_string(&report_path).unwrap(),
        "a/A.js\nb/B.js"
    );
    assert_eq!(harness.sink.output(OUTPUT_REPORT_FILE), Some("violations.csv"));
    assert!(harness.console_text().is_empty());
}

#[test]
fn json_format_writes_report_that_parses_back() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig {
        report_format: ReportFormat::Json,
        ..RunConfig::default()
    };
    let result = scan_result(&["a/A.js", "b/B.js"]);

    harness.report(&config, temp_dir.path(), &result);

    let content = std::fs::read_to_string(temp_dir.path().join("violations.json")).unwrap();
    let parsed: crate::output::JsonReport = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.violations, result.violations);
    assert_eq!(harness.sink.output(OUTPUT_REPORT_FILE), Some("violations.json"));
    assert_eq!(
        harness.sink.outputs.keys().collect::<Vec<_>>(),
        vec![OUTPUT_VIOLATIONS, OUTPUT_REPORT_FILE]
    );
}

#[test]
fn report_file_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("violations.csv"), "stale\nstale\nstale").unwrap();
    let mut harness = Harness::new();
    let config = RunConfig {
        report_format: ReportFormat::Csv,
        ..RunConfig::default()
    };

    harness.report(&config, temp_dir.path(), &scan_result(&["a/A.js"]));

    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("violations.csv")).unwrap(),
        "a/A.js"
    );
}

#[test]
fn verbose_logs_and_prints_in_addition_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig {
        report_format: ReportFormat::Json,
        verbose: true,
        ..RunConfig::default()
    };

    harness.report(&config, temp_dir.path(), &scan_result(&["a/A.js", "b/B.js"]));

    assert_eq!(
        harness.logger.lines,
        vec!["Total violations: 2", "Violating files: a/A.js, b/B.js"]
    );
    assert!(harness.console_text().contains("Total violations: 2"));
    assert!(temp_dir.path().join("violations.json").exists());
}

#[test]
fn fail_on_violations_signals_failure_with_count() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig {
        fail_on_violations: true,
        ..RunConfig::default()
    };

    let outcome = harness.report(&config, temp_dir.path(), &scan_result(&["a/A.js", "b/B.js"]));

    assert!(outcome.failed);
    assert_eq!(
        harness.sink.failure.as_deref(),
        Some("There are 2 test file naming convention violations.")
    );
}

#[test]
fn fail_on_violations_passes_when_clean() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig {
        fail_on_violations: true,
        ..RunConfig::default()
    };

    let outcome = harness.report(&config, temp_dir.path(), &scan_result(&[]));

    assert!(!outcome.failed);
    assert!(harness.sink.failure.is_none());
}

#[test]
fn violations_without_fail_flag_do_not_fail() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = RunConfig::default();

    let outcome = harness.report(&config, temp_dir.path(), &scan_result(&["a/A.js"]));

    assert!(!outcome.failed);
    assert!(harness.sink.failure.is_none());
}

#[test]
fn unwritable_report_dir_is_file_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let config = RunConfig {
        report_format: ReportFormat::Csv,
        ..RunConfig::default()
    };
    let mut harness = Harness::new();

    let err = ViolationReporter::new(&config, &missing)
        .report(
            &scan_result(&["a/A.js"]),
            &mut harness.logger,
            &mut harness.sink,
            &mut harness.console,
        )
        .unwrap_err();

    assert!(matches!(err, FilenameGuardError::FileWrite { .. }));
}

#[test]
fn pattern_settings_publish_under_pattern_output_names() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = Harness::new();
    let config = PatternConfig {
        report_format: ReportFormat::Csv,
        fail_on_violation: true,
        ..PatternConfig::default()
    };

    let outcome = harness.report(&config, temp_dir.path(), &scan_result(&["src/test/A.js"]));

    assert!(outcome.failed);
    assert_eq!(
        harness.sink.outputs.keys().collect::<Vec<_>>(),
        vec![OUTPUT_VIOLATION_COUNT, OUTPUT_REPORT_PATH]
    );
    assert_eq!(harness.sink.output(OUTPUT_VIOLATION_COUNT), Some("1"));
    assert_eq!(harness.sink.output(OUTPUT_REPORT_PATH), Some("violations.csv"));
    assert!(harness.sink.output(OUTPUT_VIOLATIONS).is_none());
}

#[test]
fn report_settings_from_run_config_use_suffix_names() {
    let settings = ReportSettings::from(&RunConfig::default());
    assert_eq!(settings.outputs, OutputNames::SUFFIX);
    assert_eq!(settings.report_format, ReportFormat::Console);
}

#[test]
fn violation_message_wording() {
    assert_eq!(
        violation_message(7),
        "There are 7 test file naming convention violations."
    );
}
