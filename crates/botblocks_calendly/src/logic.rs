// --- File: crates/botblocks_calendly/src/logic.rs ---
//! Lookup and reduction logic for the availability block.
//!
//! The pure helpers are separated from the HTTP calls so matching and date
//! reduction stay unit-testable. The `resolve_*`/`fetch_*` wrappers apply
//! the plugin's error policy on top of [`CalendlyClient`]: log and degrade,
//! never propagate.

use crate::client::CalendlyClient;
use crate::models::{EventType, TimeSlot};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Matches an event-type name against one user's records.
///
/// The match is exact and case-sensitive; the first hit in provider order
/// wins. Returns the matching record's URI.
pub fn find_event_uri(event_types: &[EventType], event_name: &str) -> Option<String> {
    event_types
        .iter()
        .find(|event_type| event_type.name == event_name)
        .map(|event_type| event_type.uri.clone())
}

/// Reduces slots to the distinct UTC calendar dates they start on.
///
/// Slots whose status is present and not "available" are skipped. The
/// returned set iterates in ascending date order.
pub fn unique_start_dates(slots: &[TimeSlot]) -> BTreeSet<NaiveDate> {
    slots
        .iter()
        .filter(|slot| slot.status.as_deref().map_or(true, |s| s == "available"))
        .map(|slot| slot.start_time.date_naive())
        .collect()
}

/// Resolves an event-type name to its Calendly URI.
///
/// Failure and absence both collapse to `None` so the conversation turn can
/// continue, but they are kept apart in the logs: a provider error is a
/// warning with the error attached, a name with no match is a debug note.
pub async fn resolve_event_uri(
    client: &CalendlyClient,
    event_name: &str,
    user_uri: &str,
) -> Option<String> {
    let event_types = match client.list_event_types(user_uri).await {
        Ok(event_types) => event_types,
        Err(err) => {
            warn!("Calendly event type lookup failed for user {}: {}", user_uri, err);
            return None;
        }
    };

    let uri = find_event_uri(&event_types, event_name);
    if uri.is_none() {
        debug!("No Calendly event type named '{}' for user {}", event_name, user_uri);
    }
    uri
}

/// Fetches the distinct UTC dates with at least one bookable slot, sorted
/// ascending.
///
/// Failure degrades to an empty list, logged at warn.
pub async fn fetch_available_dates(
    client: &CalendlyClient,
    event_type_uri: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Vec<NaiveDate> {
    let slots = match client
        .available_times(event_type_uri, start_time, end_time)
        .await
    {
        Ok(slots) => slots,
        Err(err) => {
            warn!("Calendly availability lookup failed for {}: {}", event_type_uri, err);
            return Vec::new();
        }
    };

    unique_start_dates(&slots).into_iter().collect()
}
