use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults() {
    let config = ServerConfig::from_args(&[], no_env).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.address(), "0.0.0.0:8000");
}

#[test]
fn flags_in_both_spellings() {
    let config = ServerConfig::from_args(&args(&["--host=127.0.0.1", "--port", "9000"]), no_env)
        .unwrap();
    assert_eq!(config.address(), "127.0.0.1:9000");
    assert_eq!(config.to_string(), "http://127.0.0.1:9000");
}

#[test]
fn environment_is_the_fallback() {
    let env = |name: &str| match name {
        "MSYM_HOST" => Some("localhost".to_string()),
        "MSYM_PORT" => Some("8080".to_string()),
        _ => None,
    };
    let config = ServerConfig::from_args(&[], env).unwrap();
    assert_eq!(config.address(), "localhost:8080");

    let config = ServerConfig::from_args(&args(&["--port=1"]), env).unwrap();
    assert_eq!(config.address(), "localhost:1");
}

#[test]
fn rejected_command_lines() {
    assert_eq!(
        ServerConfig::from_args(&args(&["--port=http"]), no_env),
        Err(ConfigError::InvalidPort("http".to_string()))
    );
    assert_eq!(
        ServerConfig::from_args(&args(&["--port=70000"]), no_env),
        Err(ConfigError::InvalidPort("70000".to_string()))
    );
    assert_eq!(
        ServerConfig::from_args(&args(&["--verbose"]), no_env),
        Err(ConfigError::UnknownOption("--verbose".to_string()))
    );
    assert_eq!(
        ServerConfig::from_args(&args(&["--host"]), no_env),
        Err(ConfigError::MissingValue("--host".to_string()))
    );
}
