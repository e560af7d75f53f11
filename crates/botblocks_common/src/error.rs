// --- File: crates/botblocks_common/src/error.rs ---
use thiserror::Error;

/// Error produced when a block's stored arguments cannot be decoded into a
/// plugin's settings type.
///
/// Carries the block name so the operator log points at the misconfigured
/// flow node rather than at the plugin.
#[derive(Error, Debug)]
#[error("invalid arguments for block '{block}': {source}")]
pub struct ArgsError {
    pub block: String,
    #[source]
    pub source: serde_json::Error,
}
