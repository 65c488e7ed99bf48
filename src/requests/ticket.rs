//! Ticket creation payload.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use super::{is_blank, is_unset_id};
use crate::error::{RequestError, RequestKind};
use crate::models::{TicketPriority, TicketSource, TicketStatus};

/// A local file to upload with a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported to the server.
    pub name: String,
    /// Location on disk.
    pub path: PathBuf,
}

impl UploadFile {
    /// Creates an upload descriptor.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Uses the path's final component as the file name.
    ///
    /// Paths without one (`/`, `..`) fall back to the whole path as shown
    /// by [`Path::display`].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path)
    }
}

/// Payload for creating a ticket.
///
/// Status, priority and source are checked as soon as they are set; the
/// requester and mandatory-field checks run when the payload is built.
///
/// # Example
///
/// ```
/// use freshservice::requests::TicketRequest;
///
/// let request = TicketRequest::new()
///     .with_email("ann@example.com")
///     .with_subject("Printer jam")
///     .with_status(2)?
///     .with_priority(1)?
///     .with_source(2)?;
/// assert!(request.check_request().is_ok());
/// # Ok::<(), freshservice::error::RequestError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketRequest {
    requester_id: Option<u64>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    status: Option<TicketStatus>,
    priority: Option<TicketPriority>,
    source: Option<TicketSource>,
    subject: Option<String>,
    description: Option<String>,
    department_id: Option<u64>,
    custom_fields: Option<Map<String, Value>>,
    attachments: Vec<UploadFile>,
}

impl TicketRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requester by ID.
    pub fn with_requester_id(mut self, requester_id: u64) -> Self {
        self.requester_id = Some(requester_id);
        self
    }

    /// Sets the requester's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the requester's email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the requester's phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the status from its integer code.
    ///
    /// # Errors
    ///
    /// Returns `Unsupported status` when `code` is not a status code.
    pub fn with_status(mut self, code: i64) -> Result<Self, RequestError> {
        let status = TicketStatus::try_from(code)
            .map_err(|e| RequestError::new(RequestKind::Ticket, e.to_string()))?;
        self.status = Some(status);
        Ok(self)
    }

    /// Sets the priority from its integer code.
    ///
    /// # Errors
    ///
    /// Returns `Unsupported priority` when `code` is not a priority code.
    pub fn with_priority(mut self, code: i64) -> Result<Self, RequestError> {
        let priority = TicketPriority::try_from(code)
            .map_err(|e| RequestError::new(RequestKind::Ticket, e.to_string()))?;
        self.priority = Some(priority);
        Ok(self)
    }

    /// Sets the source from its integer code.
    ///
    /// # Errors
    ///
    /// Returns `Unsupported source type` when `code` is not a source code.
    pub fn with_source(mut self, code: i64) -> Result<Self, RequestError> {
        let source = TicketSource::try_from(code)
            .map_err(|e| RequestError::new(RequestKind::Ticket, e.to_string()))?;
        self.source = Some(source);
        Ok(self)
    }

    /// Sets the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the HTML description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the department the ticket belongs to.
    pub fn with_department_id(mut self, department_id: u64) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Sets custom field values.
    pub fn with_custom_fields(mut self, custom_fields: Map<String, Value>) -> Self {
        self.custom_fields = Some(custom_fields);
        self
    }

    /// Adds a file to upload.
    pub fn with_attachment(mut self, file: UploadFile) -> Self {
        self.attachments.push(file);
        self
    }

    /// Replaces the files to upload.
    pub fn with_attachments(mut self, files: impl IntoIterator<Item = UploadFile>) -> Self {
        self.attachments = files.into_iter().collect();
        self
    }

    /// The status, if set.
    pub fn status(&self) -> Option<TicketStatus> {
        self.status
    }

    /// The priority, if set.
    pub fn priority(&self) -> Option<TicketPriority> {
        self.priority
    }

    /// The source, if set.
    pub fn source(&self) -> Option<TicketSource> {
        self.source
    }

    /// Files to upload.
    pub fn attachments(&self) -> &[UploadFile] {
        &self.attachments
    }

    /// Returns true when the ticket must be sent as multipart form data.
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Checks that a requester can be identified and the code fields are set.
    ///
    /// A requester is identified by ID, by email, or by phone together with
    /// a name.
    ///
    /// # Errors
    ///
    /// - `Requester fields error` when no requester can be identified
    /// - `mandatory fields error` when status, priority or source is unset
    pub fn check_request(&self) -> Result<(), RequestError> {
        if is_unset_id(self.requester_id)
            && is_blank(&self.email)
            && (is_blank(&self.phone) || is_blank(&self.name))
        {
            return Err(RequestError::new(
                RequestKind::Ticket,
                "Requester fields error",
            ));
        }

        if self.status.is_none() || self.priority.is_none() || self.source.is_none() {
            return Err(RequestError::new(
                RequestKind::Ticket,
                "mandatory fields error",
            ));
        }

        Ok(())
    }

    /// Validates and builds the payload.
    ///
    /// The requester and content fields are always present (as `null` when
    /// unset); `requester_id`, `department_id` and `custom_fields` only
    /// when set.
    ///
    /// # Errors
    ///
    /// Returns the [`check_request`](Self::check_request) failure.
    pub fn to_array(&self) -> Result<Map<String, Value>, RequestError> {
        self.check_request()?;

        let mut ticket = Map::new();
        ticket.insert("name".to_string(), json!(self.name));
        ticket.insert("email".to_string(), json!(self.email));
        ticket.insert("phone".to_string(), json!(self.phone));
        ticket.insert("status".to_string(), json!(self.status.map(TicketStatus::code)));
        ticket.insert(
            "priority".to_string(),
            json!(self.priority.map(TicketPriority::code)),
        );
        ticket.insert("source".to_string(), json!(self.source.map(TicketSource::code)));
        ticket.insert("subject".to_string(), json!(self.subject));
        ticket.insert("description".to_string(), json!(self.description));

        if let Some(requester_id) = self.requester_id {
            ticket.insert("requester_id".to_string(), json!(requester_id));
        }
        if let Some(department_id) = self.department_id {
            ticket.insert("department_id".to_string(), json!(department_id));
        }
        if let Some(ref custom_fields) = self.custom_fields {
            ticket.insert(
                "custom_fields".to_string(),
                Value::Object(custom_fields.clone()),
            );
        }

        Ok(ticket)
    }

    /// Validates and encodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, or an encoding failure.
    pub fn to_json(&self) -> Result<String, RequestError> {
        let payload = self.to_array()?;
        serde_json::to_string(&payload)
            .map_err(|e| RequestError::new(RequestKind::Ticket, e.to_string()))
    }

    /// Validates and flattens the payload into multipart text fields.
    ///
    /// Null fields are left out. Arrays become repeated `key[]` fields and
    /// objects become `key[sub]` fields.
    ///
    /// # Errors
    ///
    /// Returns the [`check_request`](Self::check_request) failure.
    pub fn to_multipart_fields(&self) -> Result<Vec<(String, String)>, RequestError> {
        let payload = self.to_array()?;
        let mut fields = Vec::new();
        for (key, value) in &payload {
            flatten_field(key.clone(), value, &mut fields);
        }
        Ok(fields)
    }
}

fn flatten_field(name: String, value: &Value, fields: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(text) => fields.push((name, text.clone())),
        Value::Bool(_) | Value::Number(_) => fields.push((name, value.to_string())),
        Value::Array(items) => {
            for item in items {
                flatten_field(format!("{name}[]"), item, fields);
            }
        }
        Value::Object(entries) => {
            for (key, item) in entries {
                flatten_field(format!("{name}[{key}]"), item, fields);
            }
        }
    }
}
