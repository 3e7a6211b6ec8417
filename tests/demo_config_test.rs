use box_demo::utils::validation::Validate;
use box_demo::{ConfigError, DemoConfig, DemoEngine, Dimension, Dimensions};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run_demo(config: DemoConfig) -> (String, String, Option<box_demo::BoxError>) {
    let engine = DemoEngine::new(config);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = engine.run(&mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap(), outcome)
}

#[test]
fn test_demo_from_config_file() {
    let file = write_config(
        r#"
[initial]
height = 2.0
width = 3.0
depth = 4.0

[resize]
height = 1.5
width = 1.5
depth = 2.0

[logging]
level = "warn"
"#,
    );

    let config = DemoConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.initial, Dimensions::new(2.0, 3.0, 4.0));

    let (out, err, outcome) = run_demo(config);
    assert!(outcome.is_none());
    assert!(err.is_empty());
    assert!(out.contains("volume: 24.000000"));
    assert!(out.contains("After resizing:"));
    assert!(out.contains("volume: 4.500000"));
}

#[test]
fn test_demo_with_defaults_matches_reference_run() {
    let (out, err, outcome) = run_demo(DemoConfig::default());
    assert!(outcome.is_none());
    assert!(err.is_empty());

    let expected_order = [
        "Box Class Demo",
        "As Initialized",
        "box1:",
        "height: 1.000000",
        "box2:",
        "height: 10.500000",
        "volume: 1675.8",
        "After resizing:",
        "height: 96.800000",
        "width: 8.950000",
        "depth: 10.000000",
        "volume: 8663.6",
    ];
    let mut cursor = 0;
    for needle in expected_order {
        let found = out[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("'{}' missing or out of order in:\n{}", needle, out));
        cursor += found + needle.len();
    }
}

#[test]
fn test_demo_reports_invalid_resize_from_file() {
    let file = write_config(
        r#"
[resize]
height = 5.0
width = 5.0
depth = 0.001
"#,
    );

    let config = DemoConfig::from_file(file.path()).unwrap();
    let (out, err, outcome) = run_demo(config);

    assert_eq!(outcome.unwrap().dimension(), Dimension::Depth);
    assert_eq!(err, "The depth should have a minimum value of 0.01");
    assert!(out.contains("As Initialized"));
    assert!(!out.contains("After resizing:"));
}

#[test]
fn test_missing_config_file() {
    let result = DemoConfig::from_file("/nonexistent/box-demo.toml");
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_malformed_config_file() {
    let file = write_config("[initial\nheight = ");
    let result = DemoConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}
