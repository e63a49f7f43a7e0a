use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("THAISENT_ENV", "development"));

    let raw_addr = or_default("THAISENT_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = raw_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "THAISENT_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("THAISENT_LOG_LEVEL", "info");
    let model_path = PathBuf::from(or_default(
        "THAISENT_MODEL_PATH",
        "./models/sentiment_baseline_tfidf_lr.json",
    ));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        model_path,
    })
}

fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;
    use std::path::PathBuf;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_falls_back_to_development() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("staging"), Environment::Development);
        assert_eq!(parse_environment(""), Environment::Development);
    }

    #[test]
    fn empty_env_uses_defaults() {
        let map = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(
            cfg.model_path,
            PathBuf::from("./models/sentiment_baseline_tfidf_lr.json")
        );
    }

    #[test]
    fn bind_addr_override() {
        let mut map = HashMap::new();
        map.insert("THAISENT_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn bind_addr_invalid() {
        let mut map = HashMap::new();
        map.insert("THAISENT_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "THAISENT_BIND_ADDR"),
            "expected InvalidEnvVar(THAISENT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn model_path_override() {
        let mut map = HashMap::new();
        map.insert("THAISENT_MODEL_PATH", "/opt/models/custom.json");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.model_path, PathBuf::from("/opt/models/custom.json"));
    }

    #[test]
    fn log_level_override() {
        let mut map = HashMap::new();
        map.insert("THAISENT_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn env_override() {
        let mut map = HashMap::new();
        map.insert("THAISENT_ENV", "production");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
    }
}
