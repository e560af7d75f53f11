// --- File: crates/botblocks_calendly/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod error;
pub mod logic;
pub mod models;
pub mod plugin;

// Re-export the plugin surface for hosts embedding this crate
pub use client::CalendlyClient;
pub use error::CalendlyError;
pub use plugin::{CalendlyAvailabilityPlugin, PLUGIN_NAME, TYPE_URI_VAR};
