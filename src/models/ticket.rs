//! Ticket model.
//!
//! A ticket is returned by the create, get, and list endpoints. Fetching a
//! single ticket also returns its conversations inline.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::common::{decode, null_as_default, opt, optional_string_or_int};
use super::{Attachment, Conversation, TicketPriority, TicketSource, TicketStatus};
use crate::error::{EntityError, EntityKind};

/// A helpdesk ticket.
///
/// `status`, `priority`, and `source` are checked against their code sets
/// while decoding; an unknown code fails construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    id: u64,
    requester_id: u64,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_int")]
    phone: Option<String>,
    status: TicketStatus,
    priority: TicketPriority,
    source: TicketSource,
    #[serde(default, rename = "type")]
    ticket_type: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    description_text: Option<String>,
    #[serde(default)]
    department_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    custom_fields: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    deleted: bool,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "null_as_default")]
    conversations: Vec<Conversation>,
}

impl Ticket {
    /// Builds a ticket from a decoded wire object.
    ///
    /// Attachments and conversations are decoded recursively; a malformed
    /// nested entity fails the whole ticket.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Ticket`] error describing the first
    /// failure, e.g. `Unsupported status`.
    pub fn from_value(object: &Value) -> Result<Self, EntityError> {
        decode(EntityKind::Ticket, object)
    }

    /// Unique ticket ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// User ID of the requester.
    pub fn requester_id(&self) -> u64 {
        self.requester_id
    }

    /// Email address of the requester, when the API includes it.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Phone number of the requester, when the API includes it.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Current status.
    pub fn status(&self) -> TicketStatus {
        self.status
    }

    /// Priority.
    pub fn priority(&self) -> TicketPriority {
        self.priority
    }

    /// Channel the ticket came in through.
    pub fn source(&self) -> TicketSource {
        self.source
    }

    /// Ticket type, e.g. `Incident`.
    pub fn ticket_type(&self) -> Option<&str> {
        self.ticket_type.as_deref()
    }

    /// Subject line.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// HTML description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Plain-text description.
    pub fn description_text(&self) -> Option<&str> {
        self.description_text.as_deref()
    }

    /// Department of the requester.
    pub fn department_id(&self) -> Option<u64> {
        self.department_id
    }

    /// Account-specific custom fields.
    pub fn custom_fields(&self) -> &Map<String, Value> {
        &self.custom_fields
    }

    /// Whether the ticket is in the trash.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// Files attached to the ticket itself.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Replies and notes on the ticket.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Canonical mapping of all fields, using snake_case keys.
    pub fn to_array(&self) -> Map<String, Value> {
        let mut ticket = Map::new();
        ticket.insert("id".to_string(), json!(self.id));
        ticket.insert("requester_id".to_string(), json!(self.requester_id));
        ticket.insert("email".to_string(), opt(&self.email));
        ticket.insert("phone".to_string(), opt(&self.phone));
        ticket.insert("status".to_string(), self.status.into());
        ticket.insert("priority".to_string(), self.priority.into());
        ticket.insert("source".to_string(), self.source.into());
        ticket.insert("type".to_string(), opt(&self.ticket_type));
        ticket.insert("subject".to_string(), opt(&self.subject));
        ticket.insert("description".to_string(), opt(&self.description));
        ticket.insert("description_text".to_string(), opt(&self.description_text));
        ticket.insert("department_id".to_string(), opt(&self.department_id));
        ticket.insert(
            "custom_fields".to_string(),
            Value::Object(self.custom_fields.clone()),
        );
        ticket.insert("deleted".to_string(), json!(self.deleted));
        ticket.insert("created_at".to_string(), opt(&self.created_at));
        ticket.insert("updated_at".to_string(), opt(&self.updated_at));
        ticket.insert(
            "attachments".to_string(),
            Value::Array(
                self.attachments
                    .iter()
                    .map(|attachment| Value::Object(attachment.to_array()))
                    .collect(),
            ),
        );
        ticket.insert(
            "conversations".to_string(),
            Value::Array(
                self.conversations
                    .iter()
                    .map(|conversation| Value::Object(conversation.to_array()))
                    .collect(),
            ),
        );
        ticket
    }

    /// JSON encoding of [`to_array`](Self::to_array).
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Ticket`] error if encoding fails.
    pub fn to_json(&self) -> Result<String, EntityError> {
        serde_json::to_string(&self.to_array())
            .map_err(|e| EntityError::new(EntityKind::Ticket, e.to_string()))
    }
}
