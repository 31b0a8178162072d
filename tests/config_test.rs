// tests/config_test.rs
use git_semver::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.output.format, "all");
    assert!(!config.output.verbose);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[output]
format = "full"
verbose = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.output.format, "full");
    assert!(config.output.verbose);
}

#[test]
fn test_partial_file_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output]\nverbose = true\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    // Format falls back to its default when the file omits it
    assert_eq!(config.output.format, "all");
    assert!(config.output.verbose);
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp_file = NamedTempFile::new().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_custom_path_errors() {
    let result = load_config(Some("/nonexistent/gitsemver.toml"));
    assert!(result.is_err());
}

#[test]
fn test_invalid_toml_errors() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output\nformat = ").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}
