//! HTTP client for the Freshservice v2 API.
//!
//! This module provides [`FreshserviceClient`], which makes authenticated
//! requests to a Freshservice account and turns the responses into entities.
//!
//! # Not-found handling
//!
//! Lookups that the API answers with a "nothing here" status return an empty
//! result instead of an error. The status differs per endpoint:
//!
//! - ticket and department by ID: 404 gives `None`
//! - tickets by email: 400 gives an empty list
//! - department pages: 404 gives an empty list
//! - department by name, requester by email: 404 gives `None`, while an
//!   empty match list is a [`FreshserviceError::NotFound`] error
//!
//! Any other failing status becomes [`FreshserviceError::HttpStatus`].
//!
//! # Security
//!
//! The API key is never logged. Error bodies are sanitized before they are
//! stored in an error.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::{EntityError, FreshserviceError};
use crate::i18n::Translations;
use crate::models::{Department, Requester, Ticket};
use crate::requests::{DepartmentRequest, RequesterRequest, TicketRequest};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API path appended to the account domain.
const API_PATH: &str = "/api/v2";

/// Password sent with the API key in basic authentication.
const BASIC_AUTH_PASSWORD: &str = "X";

/// Request body variants.
enum Payload {
    Empty,
    Json(String),
    Multipart(Form),
}

/// HTTP client for the Freshservice API.
///
/// # Example
///
/// ```no_run
/// use freshservice::{Config, FreshserviceClient};
///
/// # async fn run() -> Result<(), freshservice::FreshserviceError> {
/// let config = Config::from_env()?;
/// let client = FreshserviceClient::new(&config)?;
///
/// if let Some(ticket) = client.get_ticket_by_id(42).await? {
///     println!("{:?}", ticket.subject());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FreshserviceClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the API (e.g., `https://acme.freshservice.com/api/v2`).
    base_url: String,

    /// SECURITY: Never log this value!
    api_key: String,

    /// Labels for the configured locale.
    translations: Translations,
}

impl FreshserviceClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, FreshserviceError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(FreshserviceError::HttpClient)?;

        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client that sends requests through `http`.
    pub fn with_http_client(config: &Config, http: Client) -> Self {
        Self {
            http,
            base_url: Self::normalize_base_url(&config.domain),
            api_key: config.api_key().to_string(),
            translations: config.translator(),
        }
    }

    /// Appends the API path to the account domain.
    fn normalize_base_url(domain: &str) -> String {
        let domain = domain.trim_end_matches('/');
        let domain = domain.strip_suffix(API_PATH).unwrap_or(domain);
        format!("{}{}", domain.trim_end_matches('/'), API_PATH)
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Label table for the configured locale.
    ///
    /// ```no_run
    /// # use freshservice::FreshserviceClient;
    /// # fn run(client: &FreshserviceClient) {
    /// use freshservice::models::TicketPriority;
    ///
    /// let label = TicketPriority::Urgent.localized_label(client.translator());
    /// # }
    /// ```
    pub fn translator(&self) -> &Translations {
        &self.translations
    }

    /// Creates a ticket.
    ///
    /// The ticket is sent as JSON, or as multipart form data when it has
    /// attachments. Validation runs before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Request` on validation failure,
    /// `FreshserviceError::Io` if an attachment cannot be read, and
    /// `FreshserviceError::WrongResponse` if the response has no `ticket`.
    pub async fn create_ticket(&self, request: &TicketRequest) -> Result<Ticket, FreshserviceError> {
        let payload = if request.has_attachments() {
            Payload::Multipart(Self::ticket_form(request).await?)
        } else {
            Payload::Json(request.to_json()?)
        };

        let response = self.send(Method::POST, "/tickets", payload).await?;
        let mut body = self.read_body(response).await?;
        let ticket = take_key(&mut body, "ticket")?;
        Ok(Ticket::from_value(&ticket)?)
    }

    async fn ticket_form(request: &TicketRequest) -> Result<Form, FreshserviceError> {
        let mut form = Form::new();
        for (name, value) in request.to_multipart_fields()? {
            form = form.text(name, value);
        }

        for file in request.attachments() {
            let bytes = tokio::fs::read(&file.path).await?;
            tracing::debug!(file = %file.name, size = bytes.len(), "Attaching file to ticket");
            form = form.part("attachments[]", Part::bytes(bytes).file_name(file.name.clone()));
        }

        Ok(form)
    }

    /// Fetches a ticket with its conversations and requester.
    ///
    /// Returns `Ok(None)` when the API answers 404.
    pub async fn get_ticket_by_id(&self, id: u64) -> Result<Option<Ticket>, FreshserviceError> {
        let path = format!("/tickets/{}?include=conversations,requester", id);
        let response = self.send(Method::GET, &path, Payload::Empty).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(id, "Ticket not found");
            return Ok(None);
        }

        let mut body = self.read_body(response).await?;
        let ticket = take_key(&mut body, "ticket")?;
        Ok(Some(Ticket::from_value(&ticket)?))
    }

    /// Lists the tickets raised from an email address.
    ///
    /// Returns an empty list when the API answers 400, which it does for
    /// an unknown address.
    pub async fn get_tickets_by_email(&self, email: &str) -> Result<Vec<Ticket>, FreshserviceError> {
        let path = format!("/tickets?email={}", email);
        let response = self.send(Method::GET, &path, Payload::Empty).await?;
        if response.status() == StatusCode::BAD_REQUEST {
            tracing::debug!("No tickets for email");
            return Ok(Vec::new());
        }

        let mut body = self.read_body(response).await?;
        let tickets = take_key(&mut body, "tickets")?;
        decode_list(&tickets, "tickets", Ticket::from_value)
    }

    /// Creates a department.
    pub async fn create_department(
        &self,
        request: &DepartmentRequest,
    ) -> Result<Department, FreshserviceError> {
        let payload = Payload::Json(request.to_json()?);
        let response = self.send(Method::POST, "/departments", payload).await?;
        let mut body = self.read_body(response).await?;
        let department = take_key(&mut body, "department")?;
        Ok(Department::from_value(&department)?)
    }

    /// Lists one page of departments. Pages past the end are empty.
    pub async fn get_departments(&self, page: u32) -> Result<Vec<Department>, FreshserviceError> {
        let path = format!("/departments?page={}", page);
        let response = self.send(Method::GET, &path, Payload::Empty).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(page, "No departments on page");
            return Ok(Vec::new());
        }

        let mut body = self.read_body(response).await?;
        let departments = take_key(&mut body, "departments")?;
        decode_list(&departments, "departments", Department::from_value)
    }

    /// Fetches a department. Returns `Ok(None)` when the API answers 404.
    pub async fn get_department_by_id(
        &self,
        id: u64,
    ) -> Result<Option<Department>, FreshserviceError> {
        let path = format!("/departments/{}", id);
        let response = self.send(Method::GET, &path, Payload::Empty).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(id, "Department not found");
            return Ok(None);
        }

        let mut body = self.read_body(response).await?;
        let department = take_key(&mut body, "department")?;
        Ok(Some(Department::from_value(&department)?))
    }

    /// Finds a department by exact name.
    ///
    /// Returns `Ok(None)` when the API answers 404 and the first match
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::NotFound` when the query matches nothing.
    pub async fn get_department_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Department>, FreshserviceError> {
        let path = format!("/departments?query=\"name:'{}'\"", name);
        let response = self.send(Method::GET, &path, Payload::Empty).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Department lookup by name returned 404");
            return Ok(None);
        }

        let mut body = self.read_body(response).await?;
        let departments = take_key(&mut body, "departments")?;
        let first = first_match(&departments, "departments", "Department")?;
        Ok(Some(Department::from_value(first)?))
    }

    /// Creates a requester.
    pub async fn create_requester(
        &self,
        request: &RequesterRequest,
    ) -> Result<Requester, FreshserviceError> {
        let payload = Payload::Json(request.to_json()?);
        let response = self.send(Method::POST, "/requesters", payload).await?;
        let mut body = self.read_body(response).await?;
        let requester = take_key(&mut body, "requester")?;
        Ok(Requester::from_value(&requester)?)
    }

    /// Replaces a requester's fields.
    pub async fn update_requester(
        &self,
        id: u64,
        request: &RequesterRequest,
    ) -> Result<Requester, FreshserviceError> {
        let payload = Payload::Json(request.to_json()?);
        let path = format!("/requesters/{}", id);
        let response = self.send(Method::PUT, &path, payload).await?;
        let mut body = self.read_body(response).await?;
        let requester = take_key(&mut body, "requester")?;
        Ok(Requester::from_value(&requester)?)
    }

    /// Finds a requester by primary email.
    ///
    /// Returns `Ok(None)` when the API answers 404 and the first match
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::NotFound` when the query matches nothing.
    pub async fn get_requester_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Requester>, FreshserviceError> {
        let path = format!("/requesters?query=\"primary_email:'{}'\"", email);
        let response = self.send(Method::GET, &path, Payload::Empty).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Requester lookup by email returned 404");
            return Ok(None);
        }

        let mut body = self.read_body(response).await?;
        let requesters = take_key(&mut body, "requesters")?;
        let first = first_match(&requesters, "requesters", "Requester")?;
        Ok(Some(Requester::from_value(first)?))
    }

    /// Sends an authenticated request and returns the raw response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<Response, FreshserviceError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(
            method = %method,
            path = %path,
            "Making Freshservice API request"
        );

        let mut req = self
            .http
            .request(method, &url)
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD))
            .header("Accept", "application/json");

        req = match payload {
            Payload::Empty => req,
            Payload::Json(body) => req.header("Content-Type", "application/json").body(body),
            Payload::Multipart(form) => req.multipart(form),
        };

        req.send().await.map_err(FreshserviceError::Http)
    }

    /// Fails on a non-success status, then parses the body as JSON.
    async fn read_body(&self, response: Response) -> Result<Value, FreshserviceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = FreshserviceError::sanitize_message(&body, &self.api_key);
            tracing::warn!(status = %status, "Freshservice API returned an error status");
            return Err(FreshserviceError::HttpStatus { status, body });
        }

        let body = response.text().await.map_err(FreshserviceError::Http)?;
        tracing::trace!(body = %body, "Freshservice API response");

        Ok(serde_json::from_str(&body)?)
    }
}

/// Removes `key` from a response object, failing if it is absent or null.
fn take_key(body: &mut Value, key: &'static str) -> Result<Value, FreshserviceError> {
    body.get_mut(key)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or_else(|| {
            tracing::warn!(key, "Freshservice API response is missing the expected key");
            FreshserviceError::wrong_response(key)
        })
}

fn decode_list<T>(
    value: &Value,
    key: &'static str,
    decode: impl Fn(&Value) -> Result<T, EntityError>,
) -> Result<Vec<T>, FreshserviceError> {
    let items = value
        .as_array()
        .ok_or_else(|| FreshserviceError::wrong_response(key))?;
    items
        .iter()
        .map(|item| decode(item).map_err(FreshserviceError::from))
        .collect()
}

fn first_match<'a>(
    value: &'a Value,
    key: &'static str,
    resource: &'static str,
) -> Result<&'a Value, FreshserviceError> {
    value
        .as_array()
        .ok_or_else(|| FreshserviceError::wrong_response(key))?
        .first()
        .ok_or_else(|| FreshserviceError::not_found(resource))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketPriority;
    use serde_json::json;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            FreshserviceClient::normalize_base_url("https://acme.freshservice.com"),
            "https://acme.freshservice.com/api/v2"
        );
        assert_eq!(
            FreshserviceClient::normalize_base_url("https://acme.freshservice.com/"),
            "https://acme.freshservice.com/api/v2"
        );
        assert_eq!(
            FreshserviceClient::normalize_base_url("https://acme.freshservice.com/api/v2"),
            "https://acme.freshservice.com/api/v2"
        );
        assert_eq!(
            FreshserviceClient::normalize_base_url("https://acme.freshservice.com/api/v2/"),
            "https://acme.freshservice.com/api/v2"
        );
    }

    #[test]
    fn test_base_url_from_config() {
        let config = Config::new("https://acme.freshservice.com/", "abc123").unwrap();
        let client = FreshserviceClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://acme.freshservice.com/api/v2");
    }

    #[test]
    fn test_translator_follows_config_locale() {
        let config = Config::new("https://acme.freshservice.com", "abc123")
            .unwrap()
            .with_locale("de_DE");
        let client = FreshserviceClient::new(&config).unwrap();
        assert_eq!(client.translator().locale(), "de_DE");
        assert_eq!(
            TicketPriority::High.localized_label(client.translator()),
            "Hoch"
        );
    }

    #[test]
    fn test_take_key() {
        let mut body = json!({"ticket": {"id": 1}, "other": null});
        assert_eq!(take_key(&mut body, "ticket").unwrap(), json!({"id": 1}));

        let err = take_key(&mut body, "other").unwrap_err();
        assert!(matches!(err, FreshserviceError::WrongResponse { key: "other" }));

        let err = take_key(&mut body, "tickets").unwrap_err();
        assert_eq!(err.to_string(), "Wrong json response");
    }

    #[test]
    fn test_first_match() {
        let empty = json!([]);
        let err = first_match(&empty, "requesters", "Requester").unwrap_err();
        assert_eq!(err.to_string(), "Requester not found");

        let not_a_list = json!({"id": 1});
        let err = first_match(&not_a_list, "requesters", "Requester").unwrap_err();
        assert!(matches!(err, FreshserviceError::WrongResponse { .. }));

        let found = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(
            first_match(&found, "requesters", "Requester").unwrap(),
            &json!({"id": 1})
        );
    }

    #[test]
    fn test_decode_list_reports_entity_error() {
        let tickets = json!([{"id": 1}]);
        let err = decode_list(&tickets, "tickets", Ticket::from_value).unwrap_err();
        assert!(matches!(err, FreshserviceError::Entity(_)));
    }
}
