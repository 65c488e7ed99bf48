//! # Freshservice
//!
//! A typed async client for the Freshservice helpdesk REST API (v2).
//!
//! It creates and looks up tickets, departments and requesters, and turns
//! the JSON the API returns into validated entities.
//!
//! ## Features
//!
//! - **Tickets**: create (with file attachments), fetch by ID with
//!   conversations, list by requester email
//! - **Departments**: create, page through, look up by ID or name
//! - **Requesters**: create, update, look up by primary email
//! - **Code sets**: status, priority and source codes with localizable labels
//! - **Security**: API keys are never logged or exposed in error messages
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with message sanitization
//! - [`client`] - HTTP client for the Freshservice API
//! - [`models`] - Entities decoded from API responses
//! - [`requests`] - Validated payload builders for create and update calls
//! - [`i18n`] - Label translation
//!
//! ## Configuration
//!
//! [`Config::from_env`] reads:
//!
//! - `FRESHSERVICE_DOMAIN`: base URL of the account
//! - `FRESHSERVICE_API_KEY`: API key for basic authentication
//! - `FRESHSERVICE_LOCALE` (optional): locale for labels, default `en`
//!
//! ## Example
//!
//! ```no_run
//! use freshservice::{Config, FreshserviceClient, TicketRequest};
//!
//! async fn example() -> Result<(), freshservice::FreshserviceError> {
//!     let config = Config::from_env()?;
//!     let client = FreshserviceClient::new(&config)?;
//!
//!     let request = TicketRequest::new()
//!         .with_email("ann@example.com")
//!         .with_subject("Laptop will not boot")
//!         .with_status(2)?
//!         .with_priority(3)?
//!         .with_source(2)?;
//!
//!     let ticket = client.create_ticket(&request).await?;
//!     println!("#{}: {}", ticket.id(), ticket.status().label());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod requests;

pub use client::FreshserviceClient;
pub use config::Config;
pub use error::FreshserviceError;
pub use requests::{DepartmentRequest, RequesterRequest, TicketRequest, UploadFile};
