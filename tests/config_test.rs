//! Configuration resolved from the real process environment.
//!
//! These tests mutate environment variables, so they run serially.

use justicia::cli::{parse_args, CliCommand};
use justicia::config::AppConfig;
use justicia::error::ConfigError;
use serial_test::serial;

const VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "API_KEY",
    "JUSTICIA_MODEL",
    "GEMINI_BASE_URL",
    "JUSTICIA_CONNECT_TIMEOUT",
    "JUSTICIA_LOG_FILE",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

fn run_options(args: &[&str]) -> justicia::cli::RunOptions {
    let argv = std::iter::once("justicia".to_string()).chain(args.iter().map(|a| a.to_string()));
    match parse_args(argv) {
        CliCommand::Run(options) => options,
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_missing_key_in_environment() {
    clear_env();
    let result = AppConfig::from_env(&run_options(&[]));
    assert_eq!(result, Err(ConfigError::MissingApiKey));
}

#[test]
#[serial]
fn test_environment_and_flags_combine() {
    clear_env();
    std::env::set_var("API_KEY", "clave");
    std::env::set_var("JUSTICIA_MODEL", "gemini-env");
    std::env::set_var("JUSTICIA_CONNECT_TIMEOUT", "4");

    let config = AppConfig::from_env(&run_options(&["--model", "gemini-flag"])).unwrap();
    assert_eq!(config.api_key, "clave");
    assert_eq!(config.model, "gemini-flag");
    assert_eq!(config.connect_timeout_secs, 4);
    clear_env();
}

#[test]
#[serial]
fn test_log_file_flag() {
    clear_env();
    std::env::set_var("GEMINI_API_KEY", "k");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("j.log");
    let config =
        AppConfig::from_env(&run_options(&["--log-file", path.to_str().unwrap()])).unwrap();
    assert_eq!(config.log_file, path);
    clear_env();
}
