//! Department creation payload.

use serde_json::{json, Map, Value};

use super::is_blank;
use crate::error::{RequestError, RequestKind};

/// Payload for creating a department.
///
/// # Example
///
/// ```
/// use freshservice::requests::DepartmentRequest;
///
/// let request = DepartmentRequest::new().with_name("IT");
/// assert_eq!(request.to_json().unwrap(), r#"{"name":"IT"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentRequest {
    id: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    head_user_id: Option<u64>,
    prime_user_id: Option<u64>,
    domains: Option<Vec<String>>,
    custom_fields: Option<Map<String, Value>>,
}

impl DepartmentRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit department ID.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the department name (required).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the user who heads the department.
    pub fn with_head_user_id(mut self, user_id: u64) -> Self {
        self.head_user_id = Some(user_id);
        self
    }

    /// Sets the department's prime user.
    pub fn with_prime_user_id(mut self, user_id: u64) -> Self {
        self.prime_user_id = Some(user_id);
        self
    }

    /// Sets the email domains associated with the department.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Sets custom field values.
    pub fn with_custom_fields(mut self, custom_fields: Map<String, Value>) -> Self {
        self.custom_fields = Some(custom_fields);
        self
    }

    /// The department name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Checks that the name is present.
    ///
    /// # Errors
    ///
    /// Returns `Department name is required` when the name is unset or empty.
    pub fn check_request(&self) -> Result<(), RequestError> {
        if is_blank(&self.name) {
            return Err(RequestError::new(
                RequestKind::Department,
                "Department name is required",
            ));
        }
        Ok(())
    }

    /// Validates and builds the payload. Only fields that were set are included.
    ///
    /// # Errors
    ///
    /// Returns the [`check_request`](Self::check_request) failure.
    pub fn to_array(&self) -> Result<Map<String, Value>, RequestError> {
        self.check_request()?;

        let mut department = Map::new();
        department.insert("name".to_string(), json!(self.name));

        if let Some(id) = self.id {
            department.insert("id".to_string(), json!(id));
        }
        if let Some(ref description) = self.description {
            department.insert("description".to_string(), json!(description));
        }
        if let Some(head_user_id) = self.head_user_id {
            department.insert("head_user_id".to_string(), json!(head_user_id));
        }
        if let Some(prime_user_id) = self.prime_user_id {
            department.insert("prime_user_id".to_string(), json!(prime_user_id));
        }
        if let Some(ref domains) = self.domains {
            department.insert("domains".to_string(), json!(domains));
        }
        if let Some(ref custom_fields) = self.custom_fields {
            department.insert(
                "custom_fields".to_string(),
                Value::Object(custom_fields.clone()),
            );
        }

        Ok(department)
    }

    /// Validates and encodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, or an encoding failure.
    pub fn to_json(&self) -> Result<String, RequestError> {
        let payload = self.to_array()?;
        serde_json::to_string(&payload)
            .map_err(|e| RequestError::new(RequestKind::Department, e.to_string()))
    }
}
