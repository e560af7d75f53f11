//! Manual smoke tool for the Calendly plugin configuration.
//!
//! Resolves an event type by name and prints the days it is bookable,
//! through the same code paths the block plugin uses:
//!
//! ```text
//! calendly_probe "Demo Call" [days]
//! ```

use botblocks_calendly::logic::{fetch_available_dates, resolve_event_uri};
use botblocks_calendly::CalendlyClient;
use botblocks_common::logging;
use botblocks_config::load_config;
use chrono::{Duration, Utc};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        info!("Usage: calendly_probe <event name> [days]");
        info!("Looks up the event type and prints the days with bookable slots.");
        return;
    }
    let event_name = &args[1];
    let days: i64 = args.get(2).and_then(|d| d.parse().ok()).unwrap_or(7);

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            info!("Error loading configuration: {}", err);
            std::process::exit(1);
        }
    };
    let Some(calendly) = config.calendly else {
        info!("No [calendly] section configured.");
        std::process::exit(1);
    };
    let Some(user_uri) = calendly.user_uri.clone() else {
        info!("Set calendly.user_uri to probe availability.");
        std::process::exit(1);
    };

    let client = CalendlyClient::new(&calendly);

    let Some(event_uri) = resolve_event_uri(&client, event_name, &user_uri).await else {
        info!("Event '{}' not found for user {}", event_name, user_uri);
        std::process::exit(1);
    };
    info!("Resolved '{}' to {}", event_name, event_uri);

    let start = Utc::now();
    let end = start + Duration::days(days);
    let dates = fetch_available_dates(&client, &event_uri, start, end).await;

    if dates.is_empty() {
        info!("No bookable days in the next {} days.", days);
    } else {
        for date in dates {
            println!("{}", date);
        }
    }
}
