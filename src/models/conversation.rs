//! Conversation model.
//!
//! Conversations are the replies and notes exchanged on a ticket. They are
//! returned inline when a ticket is fetched with `include=conversations`.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::common::{decode, null_as_default, opt};
use super::Attachment;
use crate::error::{EntityError, EntityKind};

/// A reply or note on a ticket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversation {
    id: u64,
    body: String,
    body_text: String,
    created_at: Option<String>,
    updated_at: Option<String>,
    user_id: u64,
    #[serde(default)]
    from_email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    attachments: Vec<Attachment>,
}

impl Conversation {
    /// Builds a conversation from a decoded wire object.
    ///
    /// Nested attachments are decoded with [`Attachment::from_value`]; one
    /// bad attachment fails the whole conversation.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Conversation`] error describing the first
    /// failure.
    pub fn from_value(object: &Value) -> Result<Self, EntityError> {
        decode(EntityKind::Conversation, object)
    }

    /// Unique conversation ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// HTML body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Plain-text body.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// ID of the user who wrote the conversation.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Sender address, for conversations that arrived by email.
    pub fn from_email(&self) -> Option<&str> {
        self.from_email.as_deref()
    }

    /// Files attached to this conversation.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Canonical mapping of all fields, using snake_case keys.
    pub fn to_array(&self) -> Map<String, Value> {
        let mut conversation = Map::new();
        conversation.insert("id".to_string(), json!(self.id));
        conversation.insert("body".to_string(), json!(self.body));
        conversation.insert("body_text".to_string(), json!(self.body_text));
        conversation.insert("created_at".to_string(), opt(&self.created_at));
        conversation.insert("updated_at".to_string(), opt(&self.updated_at));
        conversation.insert("user_id".to_string(), json!(self.user_id));
        conversation.insert("from_email".to_string(), opt(&self.from_email));
        conversation.insert(
            "attachments".to_string(),
            Value::Array(
                self.attachments
                    .iter()
                    .map(|attachment| Value::Object(attachment.to_array()))
                    .collect(),
            ),
        );
        conversation
    }

    /// JSON encoding of [`to_array`](Self::to_array).
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Conversation`] error if encoding fails.
    pub fn to_json(&self) -> Result<String, EntityError> {
        serde_json::to_string(&self.to_array())
            .map_err(|e| EntityError::new(EntityKind::Conversation, e.to_string()))
    }
}
