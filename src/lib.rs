//! Rust SDK for CAS (Central Authentication Service) ticket validation.
//!
//! Validates a single-sign-on service ticket against a CAS server's
//! validation endpoint and returns the authenticated identity.
//!
//! # Features
//!
//! - **Ticket validation** - one GET to the validation endpoint with
//!   `format=json`, mapped to a typed identity or a typed failure
//! - **Typed failures** - branch on [`CasError`] variants (transport, bad
//!   status, non-JSON response, malformed JSON, rejected ticket) instead of
//!   parsing message text
//! - **Ticket extraction** - pull the `ticket` parameter out of an incoming
//!   request's query string
//!
//! # Example
//!
//! ```rust,ignore
//! use cas_sdk::{CasClient, CasConfig};
//!
//! let client = CasClient::new(CasConfig {
//!     validation_url: "https://cas.example.com/cas/p3/serviceValidate?service=app".to_string(),
//!     connect_timeout: None,
//!     request_timeout: None,
//! })?;
//!
//! let user = client.validate("ST-123").await?;
//! println!("Authenticated: {}", user.user);
//! ```

mod client;
mod error;
mod extract;
mod proto;

#[cfg(feature = "client")]
pub use client::{CasClient, validate};
pub use client::{CasConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, TicketValidator};
pub use error::{CasError, CasResult};
pub use extract::extract_ticket;
pub use proto::{
    AttributeValue, AuthenticationFailure, AuthenticationSuccess, CasUser, ServiceResponse,
    ValidationResponse,
};
