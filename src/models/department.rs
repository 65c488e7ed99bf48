//! Department model.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::common::{decode, null_as_default, opt};
use crate::error::{EntityError, EntityKind};

/// A department (company unit) requesters belong to.
///
/// Missing or null `domains` and `custom_fields` decode as empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Department {
    #[serde(default)]
    id: Option<u64>,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "headUserId")]
    head_user_id: Option<u64>,
    #[serde(default, alias = "prime_user_id", alias = "primeUserId")]
    primary_user_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    domains: Vec<String>,
    #[serde(default, alias = "customFields", deserialize_with = "null_as_default")]
    custom_fields: Map<String, Value>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
}

impl Department {
    /// Builds a department from a decoded wire object.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Department`] error if `name` is missing or
    /// a field has the wrong type.
    pub fn from_value(object: &Value) -> Result<Self, EntityError> {
        decode(EntityKind::Department, object)
    }

    /// Unique department ID.
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Department name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// User who heads the department.
    pub fn head_user_id(&self) -> Option<u64> {
        self.head_user_id
    }

    /// User who is the prime contact for the department.
    pub fn prime_user_id(&self) -> Option<u64> {
        self.primary_user_id
    }

    /// Email domains associated with the department.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Account-specific custom fields.
    pub fn custom_fields(&self) -> &Map<String, Value> {
        &self.custom_fields
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// Canonical mapping of all fields, using camelCase keys.
    pub fn to_array(&self) -> Map<String, Value> {
        let mut department = Map::new();
        department.insert("id".to_string(), opt(&self.id));
        department.insert("name".to_string(), json!(self.name));
        department.insert("description".to_string(), opt(&self.description));
        department.insert("headUserId".to_string(), opt(&self.head_user_id));
        department.insert("primeUserId".to_string(), opt(&self.primary_user_id));
        department.insert("domains".to_string(), json!(self.domains));
        department.insert(
            "customFields".to_string(),
            Value::Object(self.custom_fields.clone()),
        );
        department.insert("createdAt".to_string(), opt(&self.created_at));
        department.insert("updatedAt".to_string(), opt(&self.updated_at));
        department
    }

    /// JSON encoding of [`to_array`](Self::to_array).
    ///
    /// # Errors
    ///
    /// Returns an [`EntityKind::Department`] error if encoding fails.
    pub fn to_json(&self) -> Result<String, EntityError> {
        serde_json::to_string(&self.to_array())
            .map_err(|e| EntityError::new(EntityKind::Department, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_value() {
        let department = Department::from_value(&wire_department(17, "IT")).unwrap();
        assert_eq!(department.id(), Some(17));
        assert_eq!(department.name(), "IT");
        assert_eq!(department.head_user_id(), Some(3));
        assert_eq!(department.prime_user_id(), Some(4));
        assert_eq!(department.domains(), ["it.example.com".to_string()]);
        assert_eq!(department.custom_fields()["cost_center"], "CC-12");
    }

    #[test]
    fn test_prime_user_id_alias() {
        let department =
            Department::from_value(&json!({"name": "HR", "prime_user_id": 8})).unwrap();
        assert_eq!(department.prime_user_id(), Some(8));
    }

    #[test]
    fn test_missing_collections_become_empty() {
        let department = Department::from_value(&json!({
            "id": 1,
            "name": "Legal",
            "domains": null
        }))
        .unwrap();
        assert!(department.domains().is_empty());
        assert!(department.custom_fields().is_empty());
        assert_eq!(department.description(), None);
        assert_eq!(department.head_user_id(), None);

        let array = department.to_array();
        assert_eq!(array["domains"], json!([]));
        assert_eq!(array["customFields"], json!({}));
    }

    #[test]
    fn test_missing_name_fails() {
        let err = Department::from_value(&json!({"id": 1})).unwrap_err();
        assert_eq!(err.kind, EntityKind::Department);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn test_to_array_uses_camel_case() {
        let department = Department::from_value(&wire_department(17, "IT")).unwrap();
        let binding = department.to_array();
        let keys: Vec<&str> = binding.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "name",
                "description",
                "headUserId",
                "primeUserId",
                "domains",
                "customFields",
                "createdAt",
                "updatedAt"
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let department = Department::from_value(&wire_department(17, "IT")).unwrap();
        let array = department.to_array();
        let rebuilt = Department::from_value(&Value::Object(array.clone())).unwrap();
        assert_eq!(rebuilt, department);
        assert_eq!(rebuilt.to_array(), array);
    }
}
