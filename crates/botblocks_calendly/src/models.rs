// --- File: crates/botblocks_calendly/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::Deserialize;

// --- Calendly API Types ---

/// One event type record as returned by `GET /event_types`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventType {
    pub uri: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EventTypesResponse {
    pub collection: Option<Vec<EventType>>,
}

/// One bookable slot as returned by `GET /event_type_available_times`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    /// "available" on current API versions; a missing status counts as
    /// available.
    pub status: Option<String>,
    pub scheduling_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableTimesResponse {
    #[serde(default)]
    pub collection: Vec<TimeSlot>,
}

// --- Plugin Argument / Request Shapes ---

/// Per-block settings stored by the flow designer.
///
/// Every field is optional: conversation context variables take precedence
/// and the configuration can supply a default user, so a block may leave any
/// of them unset.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CalendlyBlockArgs {
    pub event_name: Option<String>,
    pub user_uri: Option<String>,
    /// RFC3339 window bounds, end exclusive.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// The fully resolved inputs of one availability lookup.
///
/// Built per invocation after the input guard has validated all four
/// values; never persisted.
#[derive(Debug, Clone)]
pub struct AvailabilityRequest {
    pub event_name: String,
    pub user_uri: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
