// --- File: crates/botblocks_calendly/src/plugin.rs ---
//! The availability block plugin.
//!
//! When the conversation flow reaches its block, the plugin resolves the
//! event name to a Calendly event-type URI, fetches the bookable slots in
//! the requested window, and replies with the distinct UTC dates. The
//! resolved URI (or its absence) is written back to the conversation
//! context under [`TYPE_URI_VAR`] so later blocks can reuse it.

use crate::client::CalendlyClient;
use crate::error::CalendlyError;
use crate::logic::{fetch_available_dates, resolve_event_uri};
use crate::models::{AvailabilityRequest, CalendlyBlockArgs};
use botblocks_common::models::{Block, Context, OutgoingEnvelope};
use botblocks_common::services::{BlockPlugin, BoxedError, ConversationService, ReplyFuture};
use botblocks_config::{AppConfig, CalendlyConfig};
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry name of the block this plugin handles.
pub const PLUGIN_NAME: &str = "calendly-availability";

/// Context variable the resolved event-type URI is persisted under.
pub const TYPE_URI_VAR: &str = "typeuri";

// Context variables consulted for the lookup inputs.
const EVENT_NAME_VAR: &str = "event_name";
const USER_URI_VAR: &str = "user_uri";
const START_TIME_VAR: &str = "start_time";
const END_TIME_VAR: &str = "end_time";

const MISSING_INPUTS_REPLY: &str = "Event name, user, start time, and end time are required.";

/// Block plugin that replies with the days a Calendly event type is bookable.
pub struct CalendlyAvailabilityPlugin {
    client: CalendlyClient,
    settings: CalendlyConfig,
    conversations: Arc<dyn ConversationService<Error = BoxedError>>,
}

impl CalendlyAvailabilityPlugin {
    /// Creates the plugin from its configuration section.
    pub fn new(
        settings: CalendlyConfig,
        conversations: Arc<dyn ConversationService<Error = BoxedError>>,
    ) -> Self {
        Self {
            client: CalendlyClient::new(&settings),
            settings,
            conversations,
        }
    }

    /// Creates the plugin from the application configuration.
    ///
    /// Fails with [`CalendlyError::ConfigError`] when the `use_calendly`
    /// flag is off or the calendly section is missing.
    pub fn from_app_config(
        config: &Arc<AppConfig>,
        conversations: Arc<dyn ConversationService<Error = BoxedError>>,
    ) -> Result<Self, CalendlyError> {
        if !botblocks_common::is_calendly_enabled(config) {
            return Err(CalendlyError::ConfigError);
        }
        let settings = config.calendly.clone().ok_or(CalendlyError::ConfigError)?;
        Ok(Self::new(settings, conversations))
    }

    /// Resolves the four lookup inputs from context vars, block args and
    /// configuration.
    ///
    /// Context variables take precedence over block args; the user URI
    /// additionally falls back to the configured default. Returns `None`
    /// when any input is missing or blank, a window bound is not RFC3339,
    /// or the window is empty.
    fn resolve_request(&self, block: &Block, context: &Context) -> Option<AvailabilityRequest> {
        let args = match block.arguments::<CalendlyBlockArgs>() {
            Ok(args) => args,
            Err(err) => {
                warn!("Ignoring malformed block args: {}", err);
                CalendlyBlockArgs::default()
            }
        };

        let event_name = context
            .string_var(EVENT_NAME_VAR)
            .or_else(|| non_blank(args.event_name.as_deref()))?
            .to_string();
        let user_uri = context
            .string_var(USER_URI_VAR)
            .or_else(|| non_blank(args.user_uri.as_deref()))
            .or_else(|| non_blank(self.settings.user_uri.as_deref()))?
            .to_string();
        let start_raw = context
            .string_var(START_TIME_VAR)
            .or_else(|| non_blank(args.start_time.as_deref()))?;
        let end_raw = context
            .string_var(END_TIME_VAR)
            .or_else(|| non_blank(args.end_time.as_deref()))?;

        let (start_time, end_time) = match parse_window(start_raw, end_raw) {
            Some(window) => window,
            None => {
                warn!(
                    "Invalid availability window: start='{}', end='{}'",
                    start_raw, end_raw
                );
                return None;
            }
        };

        Some(AvailabilityRequest {
            event_name,
            user_uri,
            start_time,
            end_time,
        })
    }

    /// Writes the lookup outcome into the conversation context.
    ///
    /// A persistence failure must not affect the reply, but it gets its own
    /// warning so operators can tell it apart from provider failures.
    async fn persist_type_uri(&self, conversation_id: &str, uri: Option<String>) {
        if let Err(err) = self
            .conversations
            .update_context_var(conversation_id, TYPE_URI_VAR, uri)
            .await
        {
            warn!(
                "Failed to persist context var '{}' for conversation {}: {}",
                TYPE_URI_VAR, conversation_id, err
            );
        }
    }
}

impl BlockPlugin for CalendlyAvailabilityPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn process(&self, block: &Block, context: &Context, conversation_id: &str) -> ReplyFuture<'_> {
        // Inputs are resolved before any await, so an incomplete block
        // prompts for input without touching the network.
        let request = self.resolve_request(block, context);
        let conversation_id = conversation_id.to_string();

        Box::pin(async move {
            let Some(request) = request else {
                debug!("Availability lookup inputs incomplete, prompting for input");
                return OutgoingEnvelope::text(MISSING_INPUTS_REPLY);
            };

            let event_uri =
                resolve_event_uri(&self.client, &request.event_name, &request.user_uri).await;

            // Persist before replying, in the found and not-found branches
            // alike, so stale URIs from earlier turns cannot leak forward.
            self.persist_type_uri(&conversation_id, event_uri.clone())
                .await;

            let Some(event_uri) = event_uri else {
                return OutgoingEnvelope::text(format!(
                    "Event \"{}\" not found for user \"{}\".",
                    request.event_name, request.user_uri
                ));
            };

            let dates = fetch_available_dates(
                &self.client,
                &event_uri,
                request.start_time,
                request.end_time,
            )
            .await;

            if dates.is_empty() {
                return OutgoingEnvelope::text(format!(
                    "No available dates found for event \"{}\" within the given time range.",
                    request.event_name
                ));
            }

            let listing = dates
                .iter()
                .map(NaiveDate::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            OutgoingEnvelope::text(format!(
                "Available dates for event \"{}\":\n{}",
                request.event_name, listing
            ))
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// Both bounds must parse as RFC3339 and the window must be non-empty.
fn parse_window(start: &str, end: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start_time = DateTime::parse_from_rfc3339(start)
        .ok()?
        .with_timezone(&Utc);
    let end_time = DateTime::parse_from_rfc3339(end).ok()?.with_timezone(&Utc);
    (start_time < end_time).then_some((start_time, end_time))
}
