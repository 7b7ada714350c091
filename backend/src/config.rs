//! Relay configuration.
//!
//! All settings have in-code defaults. The only value taken from the process
//! environment is the inference credential, read by [`RelayConfig::from_env`].

use std::path::PathBuf;

/// Environment variable holding the bearer token for the AI gateway.
pub const API_KEY_VAR: &str = "LOVABLE_API_KEY";

const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Chat-completions endpoint of the hosted vision model.
    pub gateway_url: String,
    pub model: String,
    /// Kept low so repeated scans of the same leaf agree.
    pub temperature: f32,
    /// `None` when the credential is not configured. The relay still starts
    /// and answers every analysis request with a 500.
    pub api_key: Option<String>,
    /// SQLite file backing the scan history.
    pub database_path: PathBuf,
    /// Maximum accepted request body. Photos arrive base64 encoded.
    pub max_payload_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            api_key: None,
            database_path: PathBuf::from("wheatsure.sqlite"),
            max_payload_bytes: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn bind_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_gateway() {
        let config = RelayConfig::default();
        assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.model, "google/gemini-2.5-flash");
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
        assert!(config.api_key.is_none());
        assert_eq!(config.bind_url(), "http://127.0.0.1:8080");
    }
}
