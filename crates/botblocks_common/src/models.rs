// --- File: crates/botblocks_common/src/models.rs ---
//! Host-side data shapes shared by every block plugin.
//!
//! These mirror the wire format of the chatbot host: the reply envelope its
//! rendering layer consumes, the block node a plugin is invoked for, and the
//! conversation context it reads its inputs from.

use crate::error::ArgsError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A message reply in one of the host's outgoing formats.
///
/// Tagged by `format` on the wire, so a text reply serializes as
/// `{"format":"text","message":{"text":"..."}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum OutgoingEnvelope {
    Text { message: TextMessage },
}

/// Payload of a text-format envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    pub text: String,
}

impl OutgoingEnvelope {
    /// Build a text-format envelope.
    pub fn text(text: impl Into<String>) -> Self {
        OutgoingEnvelope::Text {
            message: TextMessage { text: text.into() },
        }
    }

    /// The message text carried by the envelope.
    pub fn message_text(&self) -> &str {
        match self {
            OutgoingEnvelope::Text { message } => &message.text,
        }
    }
}

/// One node of the host's conversation flow, as handed to a plugin.
///
/// `args` holds the per-block settings the flow designer stored for the
/// plugin; their schema is plugin-specific, so they stay loosely typed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

impl Block {
    /// Decode the block's stored arguments into the plugin's settings type.
    pub fn arguments<T: DeserializeOwned>(&self) -> Result<T, ArgsError> {
        serde_json::from_value(Value::Object(self.args.clone())).map_err(|source| ArgsError {
            block: self.name.clone(),
            source,
        })
    }
}

/// The conversation's persisted context, scoped to what plugins consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub vars: HashMap<String, Value>,
}

impl Context {
    /// Look up a context variable as a string.
    ///
    /// Returns `None` for missing variables, non-string values, and strings
    /// that are empty after trimming, so callers can treat "unset" and
    /// "blank" alike.
    pub fn string_var(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
