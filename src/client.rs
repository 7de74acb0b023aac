//! CAS validation client implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CasError, CasResult};
use crate::proto::CasUser;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the CAS client.
#[derive(Debug, Clone)]
pub struct CasConfig {
    /// Validation endpoint URL, already carrying any deployment parameters
    /// (e.g. `service=`), without a trailing `ticket` or `format` parameter
    pub validation_url: String,

    /// Connect timeout (default: 5s)
    pub connect_timeout: Option<Duration>,

    /// Total request timeout (default: 30s)
    pub request_timeout: Option<Duration>,
}

/// Anything that can turn a service ticket into an authenticated identity.
///
/// [`CasClient`] is the HTTP implementation; tests substitute an in-memory
/// fake to exercise callers without real network access.
#[async_trait]
pub trait TicketValidator: Send + Sync {
    async fn validate(&self, ticket: &str) -> CasResult<CasUser>;
}

/// CAS client for server-side ticket validation.
///
/// Cheap to clone and safe to share across tasks; each call is a single
/// independent request.
#[cfg(feature = "client")]
#[derive(Clone)]
pub struct CasClient {
    validation_url: url::Url,
    http_client: reqwest::Client,
}

#[cfg(feature = "client")]
impl CasClient {
    /// Create a new CAS client.
    ///
    /// # Arguments
    /// * `config` - Client configuration including the validation endpoint
    ///
    /// # Returns
    /// A configured `CasClient` or an error if configuration is invalid.
    pub fn new(config: CasConfig) -> CasResult<Self> {
        if config.validation_url.is_empty() {
            return Err(CasError::Config("validationUrl is required".into()));
        }

        let validation_url = url::Url::parse(&config.validation_url).map_err(|e| {
            CasError::Config(format!("validationUrl is not a valid absolute URL: {e}"))
        })?;

        let http_client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .timeout(config.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()?;

        Ok(Self {
            validation_url,
            http_client,
        })
    }

    /// Validate a service ticket against the configured endpoint.
    ///
    /// Issues one GET to `<validation_url>&ticket=<encoded>&format=json` and
    /// maps the response to [`CasUser`] or a [`CasError`] variant. No retries
    /// are attempted; a failure is terminal for the attempt and the caller
    /// decides whether to retry or reject the ticket.
    pub async fn validate(&self, ticket: &str) -> CasResult<CasUser> {
        use crate::proto::{ServiceResponse, ValidationResponse};

        let mut url = self.validation_url.clone();
        url.query_pairs_mut()
            .append_pair("ticket", ticket)
            .append_pair("format", "json");

        tracing::debug!(url = %self.validation_url, "Validating CAS service ticket");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CasError::BadStatus {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.contains("application/json") {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                content_type = %content_type,
                validation_url = %self.validation_url,
                "CAS endpoint answered with a non-JSON response (legacy XML or an HTML error page?)"
            );
            return Err(CasError::NotJson {
                content_type,
                body,
                validation_url: self.validation_url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: ValidationResponse = serde_json::from_str(&body)?;

        match parsed.service_response {
            ServiceResponse::AuthenticationFailure(failure) => {
                tracing::warn!(
                    code = %failure.code,
                    description = %failure.description,
                    "CAS rejected the service ticket"
                );
                Err(CasError::TicketRejected {
                    code: failure.code,
                    description: failure.description,
                })
            }
            ServiceResponse::AuthenticationSuccess(success) => Ok(success.into()),
        }
    }
}

#[cfg(feature = "client")]
#[async_trait]
impl TicketValidator for CasClient {
    async fn validate(&self, ticket: &str) -> CasResult<CasUser> {
        CasClient::validate(self, ticket).await
    }
}

/// Validate a service ticket with a per-call client using default timeouts.
///
/// Convenience wrapper over [`CasClient`] for callers that validate rarely;
/// construct a [`CasClient`] once and reuse it on hot paths.
#[cfg(feature = "client")]
pub async fn validate(validation_url: &str, ticket: &str) -> CasResult<CasUser> {
    let client = CasClient::new(CasConfig {
        validation_url: validation_url.to_string(),
        connect_timeout: None,
        request_timeout: None,
    })?;

    client.validate(ticket).await
}
