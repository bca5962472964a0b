//! Integration tests for configuration loading into a run context.

use cmdkit::cli::RunContext;
use cmdkit::config::{ColorMode, ConfigLoader};
use cmdkit::output::BufferSink;
use tempfile::TempDir;

#[tokio::test]
async fn test_config_name_flows_into_help() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("cmdkit.toml");
    std::fs::write(
        &config_file,
        r#"
name = "acme"
color = "never"

[logging]
enabled = false
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.color, ColorMode::Never);
    assert!(!config.logging.enabled);

    let context = RunContext::new(config).unwrap();
    let mut out = BufferSink::new();
    context
        .execute(&["help".to_string(), "version".to_string()], &mut out)
        .await
        .unwrap();
    assert_eq!(out.lines()[4], "  acme version");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("cmdkit.toml");
    std::fs::write(&config_file, "[logging]\nlevel = \"chatty\"\n").unwrap();

    let err = ConfigLoader::load_from_file(&config_file).unwrap_err();
    assert!(err.to_string().contains("chatty"));
}
