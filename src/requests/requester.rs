//! Requester creation and update payload.

use serde_json::{json, Map, Value};

use super::is_blank;
use crate::error::{RequestError, RequestKind};

/// Payload for creating or updating a requester.
///
/// A requester needs a first name and at least one way to reach them:
/// a primary email, a work phone, or a mobile phone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequesterRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    job_title: Option<String>,
    primary_email: Option<String>,
    work_phone_number: Option<String>,
    mobile_phone_number: Option<String>,
    department_ids: Vec<u64>,
}

impl RequesterRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name (required).
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the job title.
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    /// Sets the primary email address.
    pub fn with_primary_email(mut self, email: impl Into<String>) -> Self {
        self.primary_email = Some(email.into());
        self
    }

    /// Sets the work phone number.
    pub fn with_work_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.work_phone_number = Some(phone.into());
        self
    }

    /// Sets the mobile phone number.
    pub fn with_mobile_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.mobile_phone_number = Some(phone.into());
        self
    }

    /// Sets the departments the requester belongs to.
    pub fn with_department_ids(mut self, department_ids: impl IntoIterator<Item = u64>) -> Self {
        self.department_ids = department_ids.into_iter().collect();
        self
    }

    /// The primary email, if set.
    pub fn primary_email(&self) -> Option<&str> {
        self.primary_email.as_deref()
    }

    /// Checks the contact and name requirements.
    ///
    /// # Errors
    ///
    /// - `Requester fields error` when email and both phone numbers are empty
    /// - `First name is required` when the first name is empty
    pub fn check_request(&self) -> Result<(), RequestError> {
        if is_blank(&self.primary_email)
            && is_blank(&self.work_phone_number)
            && is_blank(&self.mobile_phone_number)
        {
            return Err(RequestError::new(
                RequestKind::Requester,
                "Requester fields error",
            ));
        }

        if is_blank(&self.first_name) {
            return Err(RequestError::new(
                RequestKind::Requester,
                "First name is required",
            ));
        }

        Ok(())
    }

    /// Validates and builds the payload.
    ///
    /// Contact fields and the job title are always present (as `null` when
    /// unset); the last name and department IDs only when set.
    ///
    /// # Errors
    ///
    /// Returns the [`check_request`](Self::check_request) failure.
    pub fn to_array(&self) -> Result<Map<String, Value>, RequestError> {
        self.check_request()?;

        let mut requester = Map::new();
        requester.insert("first_name".to_string(), json!(self.first_name));
        requester.insert("job_title".to_string(), json!(self.job_title));
        requester.insert("primary_email".to_string(), json!(self.primary_email));
        requester.insert(
            "work_phone_number".to_string(),
            json!(self.work_phone_number),
        );
        requester.insert(
            "mobile_phone_number".to_string(),
            json!(self.mobile_phone_number),
        );

        if let Some(ref last_name) = self.last_name {
            requester.insert("last_name".to_string(), json!(last_name));
        }
        if !self.department_ids.is_empty() {
            requester.insert("department_ids".to_string(), json!(self.department_ids));
        }

        Ok(requester)
    }

    /// Validates and encodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, or an encoding failure.
    pub fn to_json(&self) -> Result<String, RequestError> {
        let payload = self.to_array()?;
        serde_json::to_string(&payload)
            .map_err(|e| RequestError::new(RequestKind::Requester, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_email_and_first_name() {
        let payload = RequesterRequest::new()
            .with_first_name("Ann")
            .with_primary_email("a@x.com")
            .to_array()
            .unwrap();

        assert_eq!(
            Value::Object(payload),
            json!({
                "first_name": "Ann",
                "job_title": null,
                "primary_email": "a@x.com",
                "work_phone_number": null,
                "mobile_phone_number": null
            })
        );
    }

    #[test]
    fn test_no_contact_fails() {
        let err = RequesterRequest::new()
            .with_first_name("Ann")
            .to_array()
            .unwrap_err();
        assert_eq!(err.kind, RequestKind::Requester);
        assert_eq!(err.message, "Requester fields error");

        let err = RequesterRequest::new()
            .with_first_name("Ann")
            .with_primary_email("")
            .with_work_phone_number("")
            .to_json()
            .unwrap_err();
        assert_eq!(err.message, "Requester fields error");
    }

    #[test]
    fn test_missing_first_name_fails() {
        let err = RequesterRequest::new()
            .with_mobile_phone_number("5550101")
            .to_array()
            .unwrap_err();
        assert_eq!(err.message, "First name is required");
    }

    #[test]
    fn test_contact_check_runs_first() {
        let err = RequesterRequest::new().to_array().unwrap_err();
        assert_eq!(err.message, "Requester fields error");
    }

    #[test]
    fn test_any_phone_is_enough() {
        for request in [
            RequesterRequest::new().with_work_phone_number("0100"),
            RequesterRequest::new().with_mobile_phone_number("0101"),
        ] {
            assert!(request.with_first_name("Bo").check_request().is_ok());
        }
    }

    #[test]
    fn test_optional_fields() {
        let payload = RequesterRequest::new()
            .with_first_name("Ann")
            .with_last_name("Lee")
            .with_job_title("Accountant")
            .with_primary_email("a@x.com")
            .with_department_ids([17, 18])
            .to_array()
            .unwrap();

        assert_eq!(payload["last_name"], "Lee");
        assert_eq!(payload["job_title"], "Accountant");
        assert_eq!(payload["department_ids"], json!([17, 18]));
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys.last(), Some(&"department_ids"));
    }
}
