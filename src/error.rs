use thiserror::Error;

/// Ticket validation failures, one variant per cause.
///
/// Every message opens with "Ticket failed validation" so log lines from all
/// failure paths group together; callers branch on the variant instead of
/// parsing the text. The CAS server's own diagnostic is kept as structured
/// data on [`CasError::TicketRejected`].
#[derive(Debug, Error)]
pub enum CasError {
    /// Client configuration is unusable (empty or unparseable validation URL)
    #[error("Ticket failed validation: invalid configuration: {0}")]
    Config(String),

    /// Network error reaching the validation endpoint (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Ticket failed validation: request to CAS endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("Ticket failed validation: CAS endpoint returned status {status}")]
    BadStatus { status: u16 },

    /// The endpoint answered with something other than JSON.
    ///
    /// Carries the content-type, raw body, and the validation URL used: CAS
    /// servers frequently answer with the legacy XML format or an HTML error
    /// page when misconfigured, and operators need all three to see which.
    #[error(
        "Ticket failed validation: CAS response is not JSON: content-type: {content_type}, body: {body}, validation URL: {validation_url}"
    )]
    NotJson {
        content_type: String,
        body: String,
        validation_url: String,
    },

    /// The body claimed a JSON content-type but failed to parse
    #[error("Ticket failed validation: invalid JSON response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Well-formed response explicitly rejecting the ticket (invalid, expired, already used)
    #[error("Ticket failed validation: {code}: {description}")]
    TicketRejected { code: String, description: String },
}

pub type CasResult<T> = Result<T, CasError>;
