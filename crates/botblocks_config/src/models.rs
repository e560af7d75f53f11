// --- File: crates/botblocks_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Calendly Config ---
// Holds non-secret Calendly settings. The API token is never committed to a
// config file: the file carries the "secret_from_env" marker and the real
// value is injected from the environment at load time.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalendlyConfig {
    pub api_token: String, // Loaded via BOTBLOCKS_SECRET_CALENDLY_API_TOKEN or CALENDLY_API_TOKEN
    /// Base URL both endpoint paths are appended to. Overridable so tests
    /// and regional deployments can point elsewhere.
    #[serde(default = "default_calendly_base_url")]
    pub api_base_url: String,
    /// Fallback scheduling user when neither the conversation context nor
    /// the block arguments supply one.
    #[serde(default)]
    pub user_uri: Option<String>,
}

fn default_calendly_base_url() -> String {
    "https://api.calendly.com".to_string()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_calendly: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub calendly: Option<CalendlyConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_off() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.use_calendly);
        assert!(config.calendly.is_none());
    }

    #[test]
    fn base_url_defaults_to_public_api() {
        let config: CalendlyConfig =
            serde_json::from_str(r#"{"api_token": "tok_123"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://api.calendly.com");
        assert!(config.user_uri.is_none());
    }
}
