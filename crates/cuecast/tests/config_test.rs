//! Tests for startup configuration.

use cuecast::{CuecastErrorKind, EnvOverrides, RetryPolicy, Settings};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::Builder;

fn credentials() -> EnvOverrides {
    EnvOverrides {
        bot_token: Some("123456:SECRET".to_string()),
        chat_id: Some("-1001234".to_string()),
        script_file: None,
    }
}

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_bundled_defaults() {
    let settings = Settings::from_env(&EnvOverrides::default()).unwrap();

    assert_eq!(settings.telegram.api_base_url, "https://api.telegram.org");
    assert_eq!(settings.script.path, Path::new("Bee.txt"));
    assert_eq!(RetryPolicy::from(&settings.delivery), RetryPolicy::default());
}

#[test]
fn test_missing_credentials_are_both_named() {
    let err = Settings::from_env(&EnvOverrides::default())
        .unwrap()
        .into_config()
        .unwrap_err();

    assert!(err.message.contains("TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID"));
    assert_eq!(err.missing, vec!["TELEGRAM_BOT_TOKEN", "TELEGRAM_CHAT_ID"]);
}

#[test]
fn test_missing_chat_id_alone() {
    let env = EnvOverrides {
        chat_id: None,
        ..credentials()
    };
    let err = Settings::from_env(&env).unwrap().into_config().unwrap_err();

    assert!(err.message.contains("TELEGRAM_CHAT_ID"));
    assert!(!err.message.contains("TELEGRAM_BOT_TOKEN"));
    assert_eq!(err.missing, vec!["TELEGRAM_CHAT_ID"]);
}

#[test]
fn test_load_failure_names_no_credentials() {
    let file = toml_file("[delivery]\ninter_message_delay_ms = \"soon\"");

    let err = Settings::from_file(file.path(), &credentials()).unwrap_err();
    match err.kind() {
        CuecastErrorKind::Config(config) => assert!(!config.is_missing_credentials()),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_environment_supplies_credentials_and_script() {
    let env = EnvOverrides {
        script_file: Some("scripts/shrek.txt".to_string()),
        ..credentials()
    };
    let config = Settings::from_env(&env).unwrap().into_config().unwrap();

    assert_eq!(config.bot_token(), "123456:SECRET");
    assert_eq!(config.chat_id(), "-1001234");
    assert_eq!(config.script_path(), Path::new("scripts/shrek.txt"));
    assert_eq!(config.api_base_url(), "https://api.telegram.org");
}

#[test]
fn test_file_sets_delivery_policy() {
    let file = toml_file(
        r#"
[telegram]
api_base_url = "http://localhost:8081"

[script]
path = "bee_movie.txt"

[delivery]
inter_message_delay_ms = 3000
max_attempts = 10
"#,
    );

    let config = Settings::from_file(file.path(), &credentials())
        .unwrap()
        .into_config()
        .unwrap();

    assert_eq!(config.api_base_url(), "http://localhost:8081");
    assert_eq!(config.script_path(), Path::new("bee_movie.txt"));

    let policy = config.retry_policy();
    assert_eq!(policy.inter_message_delay(), Duration::from_secs(3));
    assert_eq!(policy.default_retry_after(), Duration::from_secs(5));
    assert_eq!(policy.max_attempts(), Some(10));
    assert_eq!(policy.max_total_wait(), None);
}

#[test]
fn test_environment_overrides_file() {
    let file = toml_file(
        r#"
[telegram]
bot_token = "from-file"
chat_id = "from-file"

[script]
path = "file.txt"
"#,
    );
    let env = EnvOverrides {
        script_file: Some("env.txt".to_string()),
        ..credentials()
    };

    let config = Settings::from_file(file.path(), &env)
        .unwrap()
        .into_config()
        .unwrap();

    assert_eq!(config.bot_token(), "123456:SECRET");
    assert_eq!(config.chat_id(), "-1001234");
    assert_eq!(config.script_path(), Path::new("env.txt"));
}

#[test]
fn test_file_credentials_without_environment() {
    let file = toml_file(
        r#"
[telegram]
bot_token = "654321:FILE"
chat_id = "@bee_movie_channel"
"#,
    );

    let config = Settings::from_file(file.path(), &EnvOverrides::default())
        .unwrap()
        .into_config()
        .unwrap();

    assert_eq!(config.bot_token(), "654321:FILE");
    assert_eq!(config.chat_id(), "@bee_movie_channel");
    assert_eq!(config.script_path(), Path::new("Bee.txt"));
}

#[test]
fn test_cli_script_flag_wins() {
    let env = EnvOverrides {
        script_file: Some("env.txt".to_string()),
        ..credentials()
    };
    let config = Settings::from_env(&env)
        .unwrap()
        .with_script_path("cli.txt")
        .into_config()
        .unwrap();

    assert_eq!(config.script_path(), Path::new("cli.txt"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(Settings::load(Some(missing.as_path()), &credentials()).is_err());
}

#[test]
fn test_debug_output_redacts_token() {
    let settings = Settings::from_env(&credentials()).unwrap();
    let config = settings.clone().into_config().unwrap();

    assert!(!format!("{:?}", settings).contains("SECRET"));
    assert!(!format!("{:?}", config).contains("SECRET"));
    assert!(!format!("{:?}", credentials()).contains("SECRET"));
}
