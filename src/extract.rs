//! Ticket extraction utilities.

/// Extract the `ticket` parameter from a raw query string.
///
/// Framework-agnostic: pass the query portion of the incoming request URL,
/// with or without the leading `?`. The value is returned percent-decoded,
/// ready to hand to [`CasClient::validate`](crate::CasClient::validate).
///
/// # Example
///
/// ```rust,ignore
/// use cas_sdk::extract_ticket;
///
/// let ticket = extract_ticket("service=app&ticket=ST-123");
/// assert_eq!(ticket.as_deref(), Some("ST-123"));
/// ```
pub fn extract_ticket(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "ticket")
        .map(|(_, value)| value.into_owned())
}
