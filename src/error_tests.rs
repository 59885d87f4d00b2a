use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = FilenameGuardError::Config("GITHUB_OUTPUT is not writable".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: GITHUB_OUTPUT is not writable"
    );
}

#[test]
fn error_display_file_write() {
    let err = FilenameGuardError::FileWrite {
        path: PathBuf::from("violations.csv"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write file: violations.csv");
}

#[test]
fn error_display_io() {
    let err = FilenameGuardError::Io(std::io::Error::other("disk full"));
    assert_eq!(err.to_string(), "IO error: disk full");
}

#[test]
fn error_from_walkdir_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let walk_err = walkdir::WalkDir::new(&missing)
        .into_iter()
        .find_map(std::result::Result::err)
        .unwrap();

    let err: FilenameGuardError = walk_err.into();
    assert!(matches!(err, FilenameGuardError::Walk(_)));
    assert!(err.to_string().starts_with("Failed to walk directory"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        FilenameGuardError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        FilenameGuardError::FileWrite {
            path: PathBuf::from("violations.json"),
            source: std::io::Error::other("test"),
        }
        .error_type(),
        "FileWrite"
    );
    assert_eq!(
        FilenameGuardError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn error_source_is_preserved_for_file_write() {
    use std::error::Error as _;

    let err = FilenameGuardError::FileWrite {
        path: PathBuf::from("violations.csv"),
        source: std::io::Error::other("inner"),
    };
    assert_eq!(err.source().unwrap().to_string(), "inner");
}

#[test]
fn error_display_invalid_pattern_keeps_source() {
    use std::error::Error as _;

    let source = globset::Glob::new("src/[test").unwrap_err();
    let err = FilenameGuardError::InvalidPattern {
        pattern: "src/[test".to_string(),
        source,
    };
    assert_eq!(err.to_string(), "Invalid glob pattern: src/[test");
    assert_eq!(err.error_type(), "Pattern");
    assert!(err.source().is_some());
}
