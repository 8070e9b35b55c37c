//! Integration tests for cfbot-config crate.

use cfbot_config::{Config, ConfigError, ConfigLoader};
use std::io::Write;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config fails validation because the token is empty
    assert!(config.validate().is_err());

    config.discord.token = "test_token".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
discord:
  token: "file_token"
  prefix: "cf!"
codeforces:
  contest_url: "https://mirror.codeforces.com/contest/"
  request_timeout_seconds: 10
graphs:
  width: 800
  height: 400
  background: "#fafafa"
"##
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(file.path()).unwrap();
    assert_eq!(config.codeforces.request_timeout_seconds, 10);
    assert_eq!(config.graphs.width, 800);
    assert_eq!(config.data.language, "en-US");
    assert_eq!(
        config.codeforces.problem_url(1520, "C"),
        "https://mirror.codeforces.com/contest/1520/problem/C"
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::load_from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::IoError { .. })));
}

#[test]
fn test_client_config_from_schema() {
    let mut config = Config::default();
    config.codeforces.request_timeout_seconds = 7;
    config.codeforces.max_idle_per_host = 3;

    let client_config = config.codeforces.client_config();
    assert_eq!(client_config.api_url, "https://codeforces.com/api/");
    assert_eq!(client_config.timeout_secs, 7);
    assert_eq!(client_config.max_idle_per_host, 3);
}
