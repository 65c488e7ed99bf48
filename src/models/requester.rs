//! Requester model.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::common::{decode, null_as_default, opt, optional_string_or_int};
use crate::error::{EntityError, EntityKind};

/// A person who raises tickets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Requester {
    id: u64,
    first_name: String,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    primary_email: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_int")]
    work_phone_number: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_int")]
    mobile_phone_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    department_ids: Vec<u64>,
}

impl Requester {
    /// Builds a requester from a decoded wire object.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Requester`] error if `id` or `first_name`
    /// is missing or a field has the wrong type.
    pub fn from_value(object: &Value) -> Result<Self, EntityError> {
        decode(EntityKind::Requester, object)
    }

    /// Unique requester ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Job title.
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    /// Primary email address.
    pub fn primary_email(&self) -> Option<&str> {
        self.primary_email.as_deref()
    }

    /// Work phone number.
    pub fn work_phone_number(&self) -> Option<&str> {
        self.work_phone_number.as_deref()
    }

    /// Mobile phone number.
    pub fn mobile_phone_number(&self) -> Option<&str> {
        self.mobile_phone_number.as_deref()
    }

    /// Departments the requester belongs to.
    pub fn department_ids(&self) -> &[u64] {
        &self.department_ids
    }

    /// Canonical mapping of all fields, using snake_case keys.
    pub fn to_array(&self) -> Map<String, Value> {
        let mut requester = Map::new();
        requester.insert("id".to_string(), json!(self.id));
        requester.insert("first_name".to_string(), json!(self.first_name));
        requester.insert("last_name".to_string(), opt(&self.last_name));
        requester.insert("job_title".to_string(), opt(&self.job_title));
        requester.insert("primary_email".to_string(), opt(&self.primary_email));
        requester.insert(
            "work_phone_number".to_string(),
            opt(&self.work_phone_number),
        );
        requester.insert(
            "mobile_phone_number".to_string(),
            opt(&self.mobile_phone_number),
        );
        requester.insert("department_ids".to_string(), json!(self.department_ids));
        requester
    }

    /// JSON encoding of [`to_array`](Self::to_array).
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Requester`] error if encoding fails.
    pub fn to_json(&self) -> Result<String, EntityError> {
        serde_json::to_string(&self.to_array())
            .map_err(|e| EntityError::new(EntityKind::Requester, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_value() {
        let requester = Requester::from_value(&wire_requester(1001, "ann@example.com")).unwrap();
        assert_eq!(requester.id(), 1001);
        assert_eq!(requester.first_name(), "Ann");
        assert_eq!(requester.last_name(), Some("Lee"));
        assert_eq!(requester.job_title(), Some("Accountant"));
        assert_eq!(requester.primary_email(), Some("ann@example.com"));
        assert_eq!(requester.work_phone_number(), Some("+1 555 0100"));
        assert_eq!(requester.mobile_phone_number(), Some("5550101"));
        assert_eq!(requester.department_ids(), [17, 18]);
    }

    #[test]
    fn test_phone_only_requester() {
        let requester = Requester::from_value(&json!({
            "id": 5,
            "first_name": "Bo",
            "primary_email": null,
            "work_phone_number": "0123",
            "department_ids": null
        }))
        .unwrap();
        assert_eq!(requester.primary_email(), None);
        assert!(requester.department_ids().is_empty());
    }

    #[test]
    fn test_missing_first_name_fails() {
        let err = Requester::from_value(&json!({"id": 5})).unwrap_err();
        assert_eq!(err.kind, EntityKind::Requester);
        assert!(err.message.contains("first_name"));
    }

    #[test]
    fn test_round_trip() {
        let requester = Requester::from_value(&wire_requester(1001, "ann@example.com")).unwrap();
        let array = requester.to_array();
        let rebuilt = Requester::from_value(&Value::Object(array.clone())).unwrap();
        assert_eq!(rebuilt, requester);
        assert_eq!(rebuilt.to_array(), array);
    }
}
