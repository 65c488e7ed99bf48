//! Attachment model.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::common::decode;
use crate::error::{EntityError, EntityKind};

/// A file attached to a ticket or a conversation.
///
/// Every field is mandatory on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attachment {
    id: u64,
    #[serde(alias = "contentType")]
    content_type: String,
    size: u64,
    name: String,
    #[serde(alias = "attachmentUrl")]
    attachment_url: String,
    #[serde(alias = "createdAt")]
    created_at: String,
    #[serde(alias = "updatedAt")]
    updated_at: String,
}

impl Attachment {
    /// Builds an attachment from a decoded wire object.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Attachment`] error if any field is missing
    /// or has the wrong type.
    pub fn from_value(object: &Value) -> Result<Self, EntityError> {
        decode(EntityKind::Attachment, object)
    }

    /// Unique attachment ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// MIME type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Original file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Download URL.
    pub fn attachment_url(&self) -> &str {
        &self.attachment_url
    }

    /// Upload timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Canonical mapping of all fields, using camelCase keys.
    pub fn to_array(&self) -> Map<String, Value> {
        let mut attachment = Map::new();
        attachment.insert("id".to_string(), json!(self.id));
        attachment.insert("contentType".to_string(), json!(self.content_type));
        attachment.insert("size".to_string(), json!(self.size));
        attachment.insert("name".to_string(), json!(self.name));
        attachment.insert("attachmentUrl".to_string(), json!(self.attachment_url));
        attachment.insert("createdAt".to_string(), json!(self.created_at));
        attachment.insert("updatedAt".to_string(), json!(self.updated_at));
        attachment
    }

    /// JSON encoding of [`to_array`](Self::to_array).
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Attachment`] error if encoding fails.
    pub fn to_json(&self) -> Result<String, EntityError> {
        serde_json::to_string(&self.to_array())
            .map_err(|e| EntityError::new(EntityKind::Attachment, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_value() {
        let attachment = Attachment::from_value(&wire_attachment(7, "screen.png")).unwrap();
        assert_eq!(attachment.id(), 7);
        assert_eq!(attachment.content_type(), "image/png");
        assert_eq!(attachment.size(), 2048);
        assert_eq!(attachment.name(), "screen.png");
        assert_eq!(
            attachment.attachment_url(),
            "https://files.example.com/screen.png"
        );
    }

    #[test]
    fn test_missing_field_fails() {
        let mut wire = wire_attachment(7, "screen.png");
        wire.as_object_mut().unwrap().remove("attachment_url");

        let err = Attachment::from_value(&wire).unwrap_err();
        assert_eq!(err.kind, EntityKind::Attachment);
        assert!(err.message.contains("attachment_url"));
    }

    #[test]
    fn test_to_array_uses_camel_case() {
        let attachment = Attachment::from_value(&wire_attachment(7, "screen.png")).unwrap();
        let binding = attachment.to_array();
        let keys: Vec<&str> = binding.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "contentType",
                "size",
                "name",
                "attachmentUrl",
                "createdAt",
                "updatedAt"
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let attachment = Attachment::from_value(&wire_attachment(7, "screen.png")).unwrap();
        let array = attachment.to_array();
        let rebuilt = Attachment::from_value(&Value::Object(array.clone())).unwrap();
        assert_eq!(rebuilt, attachment);
        assert_eq!(rebuilt.to_array(), array);
    }

    #[test]
    fn test_to_json() {
        let attachment = Attachment::from_value(&wire_attachment(7, "a.txt")).unwrap();
        let json = attachment.to_json().unwrap();
        assert!(json.starts_with(r#"{"id":7,"contentType":"image/png""#));
    }
}
