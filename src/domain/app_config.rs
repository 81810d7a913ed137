//! Application configuration loaded from `.examark/config.toml`.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiApiConfig {
    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Model identifier used for generation.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}
