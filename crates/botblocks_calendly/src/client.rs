// --- File: crates/botblocks_calendly/src/client.rs ---
//! Client for the two Calendly endpoints the availability plugin consumes.
//!
//! Requests reuse the shared HTTP client, so every call is bounded by its
//! timeout. Calls are single-attempt; retry policy belongs to the caller,
//! and the plugin deliberately has none.

use crate::error::CalendlyError;
use crate::models::{AvailableTimesResponse, EventType, EventTypesResponse, TimeSlot};
use botblocks_common::http::HTTP_CLIENT;
use botblocks_config::CalendlyConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;

/// Client for the Calendly REST API.
pub struct CalendlyClient {
    client: Client,
    base_url: String,
    api_token: String,
}

impl CalendlyClient {
    /// Creates a new Calendly client from the plugin configuration.
    pub fn new(config: &CalendlyConfig) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    /// Lists the event types belonging to a scheduling user.
    ///
    /// Issues `GET {base}/event_types?user={user_uri}`. A missing
    /// `collection` in the response body counts as no event types.
    pub async fn list_event_types(&self, user_uri: &str) -> Result<Vec<EventType>, CalendlyError> {
        let url = format!("{}/event_types", self.base_url);
        let res = self
            .client
            .get(&url)
            .query(&[("user", user_uri)])
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(CalendlyError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: EventTypesResponse = serde_json::from_str(&body)?;
        Ok(parsed.collection.unwrap_or_default())
    }

    /// Lists the bookable slots of an event type within a time window.
    ///
    /// Issues `GET {base}/event_type_available_times` with RFC3339 window
    /// bounds; Calendly treats `end_time` as exclusive.
    pub async fn available_times(
        &self,
        event_type_uri: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<TimeSlot>, CalendlyError> {
        let url = format!("{}/event_type_available_times", self.base_url);
        let res = self
            .client
            .get(&url)
            .query(&[
                (
                    "start_time",
                    start_time.to_rfc3339_opts(SecondsFormat::Secs, true),
                ),
                (
                    "end_time",
                    end_time.to_rfc3339_opts(SecondsFormat::Secs, true),
                ),
                ("event_type", event_type_uri.to_string()),
            ])
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(CalendlyError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: AvailableTimesResponse = serde_json::from_str(&body)?;
        Ok(parsed.collection)
    }
}
