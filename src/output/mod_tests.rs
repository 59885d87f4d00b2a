use super::*;

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// =============================================================================
// ReportFormat Tests
// =============================================================================

#[test]
fn report_format_from_str() {
    assert_eq!("console".parse::<ReportFormat>().unwrap(), ReportFormat::Console);
    assert_eq!("csv".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
    assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
}

#[test]
fn report_format_from_str_invalid() {
    let err = "xml".parse::<ReportFormat>().unwrap_err();
    assert!(err.contains("Unknown report format"));
}

#[test]
fn report_format_default_is_console() {
    assert_eq!(ReportFormat::default(), ReportFormat::Console);
}

#[test]
fn report_format_display_round_trips() {
    for format in [ReportFormat::Console, ReportFormat::Csv, ReportFormat::Json] {
        assert_eq!(format.to_string().parse::<ReportFormat>().unwrap(), format);
    }
}

#[test]
fn report_filename_only_for_file_formats() {
    assert_eq!(ReportFormat::Console.report_filename(), None);
    assert_eq!(ReportFormat::Csv.report_filename(), Some("violations.csv"));
    assert_eq!(ReportFormat::Json.report_filename(), Some("violations.json"));
}

// =============================================================================
// Formatter Tests
// =============================================================================

#[test]
fn text_formatter_renders_summary() {
    let output = TextFormatter
        .format(&paths(&["src/test/A.js", "src/test/B.js"]))
        .unwrap();
    assert_eq!(
        output,
        "Total violations: 2\nViolating files: src/test/A.js, src/test/B.js\n"
    );
}

#[test]
fn text_formatter_empty_list() {
    let output = TextFormatter.format(&[]).unwrap();
    assert_eq!(output, "Total violations: 0\nViolating files: \n");
}

#[test]
fn csv_formatter_one_path_per_line() {
    let output = CsvFormatter
        .format(&paths(&["src/test/A.js", "src/test/B.js"]))
        .unwrap();
    assert_eq!(output, "src/test/A.js\nsrc/test/B.js");
}

#[test]
fn csv_formatter_empty_list_is_empty() {
    assert_eq!(CsvFormatter.format(&[]).unwrap(), "");
}

#[test]
fn json_formatter_single_key_object() {
    let output = JsonFormatter
        .format(&paths(&["src/test/A.js", "src/test/B.js"]))
        .unwrap();
    assert_eq!(
        output,
        r#"{"violations":["src/test/A.js","src/test/B.js"]}"#
    );
}

#[test]
fn json_formatter_parses_back_to_same_list() {
    let violations = paths(&["src/test/A.js", "src/test/\"quoted\".js", "src/test/A.js"]);
    let output = JsonFormatter.format(&violations).unwrap();

    let parsed: JsonReport = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.violations, violations);
}

#[test]
fn json_formatter_empty_list() {
    assert_eq!(JsonFormatter.format(&[]).unwrap(), r#"{"violations":[]}"#);
}
