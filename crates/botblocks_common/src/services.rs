// --- File: crates/botblocks_common/src/services.rs ---
//! Service abstractions for the chatbot host.
//!
//! This module provides trait definitions for the host facilities plugins
//! depend on. The host itself (block scheduling, context resolution,
//! conversation persistence) is an external system; these traits decouple
//! plugin logic from any concrete host and make it testable in isolation.

use crate::models::{Block, Context, OutgoingEnvelope};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Future returned by [`BlockPlugin::process`].
///
/// Block execution never fails past the plugin boundary; degraded outcomes
/// are expressed in the reply itself, so the output is a plain envelope.
pub type ReplyFuture<'a> = Pin<Box<dyn Future<Output = OutgoingEnvelope> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the host's conversation persistence.
///
/// Plugins use this to write back into the conversation's context, e.g. to
/// remember a resolved identifier for later blocks in the flow.
pub trait ConversationService: Send + Sync {
    /// Error type returned by conversation persistence operations.
    type Error: StdError + Send + Sync + 'static;

    /// Set a single context variable on a conversation.
    ///
    /// `None` clears the variable (stores an explicit null), so a failed
    /// lookup cannot leave a stale value from an earlier turn behind.
    fn update_context_var(
        &self,
        conversation_id: &str,
        name: &str,
        value: Option<String>,
    ) -> BoxFuture<'_, (), Self::Error>;
}

/// A trait for executable block plugins.
///
/// Implementors handle one named block type of the conversation flow. The
/// host invokes [`process`](BlockPlugin::process) when the flow reaches such
/// a block and renders whatever envelope comes back.
pub trait BlockPlugin: Send + Sync {
    /// The block name this plugin is registered under.
    fn name(&self) -> &str;

    /// Execute the block against the current conversation state.
    fn process(&self, block: &Block, context: &Context, conversation_id: &str) -> ReplyFuture<'_>;
}
