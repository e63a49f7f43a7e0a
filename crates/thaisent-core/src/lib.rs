//! Shared types and configuration for the Thai sentiment service.
//!
//! Holds the `Sentiment` label vocabulary, the `Prediction` wire type, and
//! env-var driven application configuration used by the server and CLI.

mod app_config;
mod config;
mod sentiment;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use sentiment::{ParseSentimentError, Prediction, Sentiment};
