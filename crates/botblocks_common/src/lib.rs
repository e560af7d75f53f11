// --- File: crates/botblocks_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Host-side data shapes
#[cfg(test)]
mod models_test;
pub mod services; // Service abstractions

// Re-export the host seam types for easier access
pub use error::ArgsError;
pub use models::{Block, Context, OutgoingEnvelope, TextMessage};
pub use services::{BlockPlugin, BoxFuture, BoxedError, ConversationService, ReplyFuture};

// Re-export HTTP utilities for easier access
pub use http::{create_client, HTTP_CLIENT};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

// Conditionally re-export feature-specific functions
#[cfg(feature = "calendly")]
pub use features::is_calendly_enabled;
