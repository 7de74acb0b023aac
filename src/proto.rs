//! Wire model of the CAS validation protocol's JSON response format.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Envelope wrapping every CAS validation response.
#[derive(Debug, Deserialize)]
pub struct ValidationResponse {
    #[serde(rename = "serviceResponse")]
    pub service_response: ServiceResponse,
}

/// The two arms of the `serviceResponse` envelope.
///
/// A well-formed response carries exactly one of them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceResponse {
    AuthenticationSuccess(AuthenticationSuccess),
    AuthenticationFailure(AuthenticationFailure),
}

/// Success payload: the authenticated identity plus optional proxy fields.
#[derive(Debug, Deserialize)]
pub struct AuthenticationSuccess {
    /// Username the CAS server authenticated
    pub user: String,

    /// Issued only in proxy deployments; not projected into [`CasUser`]
    #[serde(rename = "proxyGrantingTicket")]
    pub proxy_granting_ticket: Option<String>,

    /// Proxy chain; not projected into [`CasUser`]
    pub proxies: Option<Vec<String>>,

    /// Additional identity claims (e.g. email, roles)
    #[serde(default)]
    pub attributes: HashMap<String, AttributeValue>,
}

/// Failure payload: the server's diagnostic for a rejected ticket.
#[derive(Debug, Deserialize)]
pub struct AuthenticationFailure {
    pub code: String,
    pub description: String,
}

/// An attribute value is either a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Single(String),
    Multiple(Vec<String>),
}

/// The authenticated identity returned to callers.
///
/// A projection of [`AuthenticationSuccess`]: proxy fields are intentionally
/// dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasUser {
    /// Username the CAS server authenticated
    pub user: String,

    /// Additional identity claims (e.g. email, roles)
    pub attributes: HashMap<String, AttributeValue>,
}

impl From<AuthenticationSuccess> for CasUser {
    fn from(success: AuthenticationSuccess) -> Self {
        Self {
            user: success.user,
            attributes: success.attributes,
        }
    }
}
