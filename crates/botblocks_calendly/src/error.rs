// --- File: crates/botblocks_calendly/src/error.rs ---
use thiserror::Error;

/// Errors that can occur when interacting with the Calendly API.
///
/// Every variant is a soft failure at the plugin boundary: the wrappers in
/// [`crate::logic`] log it and degrade to an absent/empty result instead of
/// propagating, so a provider outage never breaks a conversation turn.
#[derive(Error, Debug)]
pub enum CalendlyError {
    #[error("Calendly API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Calendly API returned an error: Status={status}, Message='{message}'")]
    ApiError { status: u16, message: String },
    #[error("Failed to parse Calendly API response: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Calendly configuration missing or incomplete")]
    ConfigError,
}
