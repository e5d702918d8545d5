//! Transport metadata of a completed request.

use std::time::Duration;

/// Metadata captured from the last HTTP response, exposed by
/// [`DnsHostingClient::info`](crate::client::DnsHostingClient::info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    /// Final URL of the request.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` of the response, if sent.
    pub content_type: Option<String>,
    /// Size of the response body in bytes.
    pub size: usize,
    /// Time from sending the request to reading the full body.
    pub elapsed: Duration,
}
