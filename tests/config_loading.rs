use std::io::Write;

use nn_playground::PlaygroundError;
use nn_playground::config::{AppConfig, DEFAULT_ENDPOINT, load_config};

#[test]
fn loads_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "endpoint": "http://127.0.0.1:8080/train",
            "seed": 42,
            "window_width": 1024.0,
            "window_height": 768.0,
            "visualization_height": 500.0
        }}"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.endpoint, "http://127.0.0.1:8080/train");
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.window_width, 1024.0);
    assert_eq!(config.visualization_height, 500.0);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "seed": 1 }}"#).unwrap();
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(
        AppConfig {
            seed: None,
            ..config
        },
        AppConfig::default()
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PlaygroundError::ConfigRead { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, PlaygroundError::ConfigParse { .. }));
}
