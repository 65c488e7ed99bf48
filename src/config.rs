//! Configuration for the Freshservice client.
//!
//! Configuration can be built directly with [`Config::new`] or loaded from
//! environment variables (and an optional `.env` file) with
//! [`Config::from_env`].

use std::env;
use std::fmt;

use url::Url;

use crate::error::FreshserviceError;
use crate::i18n::Translations;

/// Locale used for labels when `FRESHSERVICE_LOCALE` is not set.
pub const DEFAULT_LOCALE: &str = "en";

/// Configuration for connecting to a Freshservice account.
///
/// The API key is stored but never logged or exposed in error messages;
/// the `Debug` output redacts it.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the account (e.g., `https://acme.freshservice.com`).
    pub domain: String,

    /// Locale used when rendering enumeration labels.
    pub locale: String,

    api_key: String,
}

impl Config {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Config` if the domain is not an
    /// http(s) URL or the API key is empty or a placeholder.
    pub fn new(
        domain: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, FreshserviceError> {
        let domain = Self::validate_domain(domain.into())?;
        let api_key = api_key.into();
        Self::validate_api_key(&api_key)?;

        Ok(Config {
            domain,
            locale: DEFAULT_LOCALE.to_string(),
            api_key,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Required Environment Variables
    ///
    /// - `FRESHSERVICE_DOMAIN`: base URL of the account
    /// - `FRESHSERVICE_API_KEY`: API key used for basic authentication
    ///
    /// # Optional Environment Variables
    ///
    /// - `FRESHSERVICE_LOCALE`: label locale (default `en`)
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Config` if any required variable is
    /// missing or if values fail validation.
    pub fn from_env() -> Result<Self, FreshserviceError> {
        dotenvy::dotenv().ok();

        let domain = Self::get_required_env("FRESHSERVICE_DOMAIN")?;
        let api_key = Self::get_required_env("FRESHSERVICE_API_KEY")?;

        let config = Self::new(domain, api_key)?;
        match env::var("FRESHSERVICE_LOCALE") {
            Ok(locale) if !locale.trim().is_empty() => Ok(config.with_locale(locale.trim())),
            _ => Ok(config),
        }
    }

    /// Sets the locale used for labels.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Label table for the configured locale.
    pub fn translator(&self) -> Translations {
        Translations::for_locale(&self.locale)
    }

    /// Returns the API key.
    ///
    /// Only the HTTP layer should need this; never log it.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshserviceError> {
        env::var(name)
            .map_err(|_| FreshserviceError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreshserviceError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes the account domain.
    fn validate_domain(domain: String) -> Result<String, FreshserviceError> {
        let domain = domain.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&domain).map_err(|e| {
            FreshserviceError::invalid_config(format!(
                "FRESHSERVICE_DOMAIN is not a valid URL: {}",
                e
            ))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FreshserviceError::invalid_config(
                "FRESHSERVICE_DOMAIN must start with http:// or https://",
            ));
        }

        if parsed.host_str().is_none() {
            return Err(FreshserviceError::invalid_config(
                "FRESHSERVICE_DOMAIN must include a host",
            ));
        }

        Ok(domain)
    }

    /// Validates the API key is present and not a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreshserviceError> {
        if key.trim().is_empty() {
            return Err(FreshserviceError::invalid_config(
                "FRESHSERVICE_API_KEY must not be empty",
            ));
        }

        let key_lower = key.to_lowercase();
        let placeholder_patterns = ["your_api_key", "your_key", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(FreshserviceError::invalid_config(
                    "FRESHSERVICE_API_KEY appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("locale", &self.locale)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests that modify environment variables are avoided; they would race
    // with each other under the default parallel test runner.

    #[test]
    fn test_validate_domain_removes_trailing_slash() {
        let result = Config::validate_domain("https://acme.freshservice.com/".to_string()).unwrap();
        assert_eq!(result, "https://acme.freshservice.com");
    }

    #[test]
    fn test_validate_domain_requires_scheme() {
        assert!(Config::validate_domain("acme.freshservice.com".to_string()).is_err());
        assert!(Config::validate_domain("ftp://acme.freshservice.com".to_string()).is_err());
    }

    #[test]
    fn test_validate_api_key_rejects_placeholder() {
        assert!(Config::validate_api_key("your_api_key_here").is_err());
        assert!(Config::validate_api_key("   ").is_err());
    }

    #[test]
    fn test_validate_api_key_accepts_real_key() {
        assert!(Config::validate_api_key("abc123def456").is_ok());
    }

    #[test]
    fn test_new_defaults_locale() {
        let config = Config::new("https://acme.freshservice.com", "abc123").unwrap();
        assert_eq!(config.locale, DEFAULT_LOCALE);
        assert_eq!(config.api_key(), "abc123");

        let config = config.with_locale("de");
        assert_eq!(config.locale, "de");
    }

    #[test]
    fn test_locale_selects_labels() {
        use crate::i18n::Identity;
        use crate::models::TicketStatus;

        let config = Config::new("https://acme.freshservice.com", "abc123").unwrap();
        assert_eq!(
            TicketStatus::Closed.localized_label(&config.translator()),
            TicketStatus::Closed.localized_label(&Identity)
        );

        let config = config.with_locale("de");
        assert_eq!(
            TicketStatus::Closed.localized_label(&config.translator()),
            "Geschlossen"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("https://acme.freshservice.com", "secret-abc123").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-abc123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
