use patrimoine::config::Config;
use std::io::Write;

#[tokio::test]
async fn defaults_are_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.data_dir, "data");
    assert_eq!(config.log_level, "info");
    assert!(config.sync.sheet_url.is_none());
    assert!(config.textgen.endpoint.is_none());
}

#[tokio::test]
async fn from_file_parses_a_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
data_dir = "/var/lib/patrimoine"
log_level = "debug"

[sync]
sheet_url = "https://sheets.example/push"
timeout = "5s"

[textgen]
endpoint = "https://textgen.example/v1/generate"
api_key = "k-123"
model = "gemini-2.5-flash"
timeout = "45s"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.data_dir, "/var/lib/patrimoine");
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.sync.sheet_url.as_ref().unwrap().as_str(),
        "https://sheets.example/push"
    );
    assert_eq!(config.sync.timeout.as_secs(), 5);
    assert_eq!(config.textgen.api_key.as_deref(), Some("k-123"));
    assert_eq!(config.textgen.timeout.as_secs(), 45);
}

#[tokio::test]
async fn partial_files_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "log_level = \"warn\"").unwrap();

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.data_dir, "data");
    assert_eq!(config.sync.timeout.as_secs(), 10);
    assert_eq!(config.textgen.model, "gemini-2.5-flash");
}

#[tokio::test]
async fn invalid_configs_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "data_dir = \"  \"").unwrap();
    assert!(Config::from_file(file.path().to_str().unwrap()).is_err());

    assert!(Config::from_file("/no/such/path/patrimoine.toml").is_err());
}
