//! Constants for the DNS hosting API v1.
//!
//! Contains the client version, transaction ID defaults, header names, and
//! the environment variable names read by [`ClientConfig::from_env`] and
//! [`Credentials::from_env`].
//!
//! [`ClientConfig::from_env`]: crate::client::ClientConfig::from_env
//! [`Credentials::from_env`]: crate::types::auth::Credentials::from_env

/// Version reported by [`DnsHostingClient::version`](crate::client::DnsHostingClient::version).
pub const VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// Transaction IDs
// ---------------------------------------------------------------------------

/// Default prefix of the per-request `Transaction` header value.
pub const DEFAULT_TRANSACTION_PREFIX: &str = "API-";

/// Default suffix of the per-request `Transaction` header value.
pub const DEFAULT_TRANSACTION_SUFFIX: &str = "-DNS-v1";

/// `chrono` format of the timestamp embedded in a transaction ID.
pub const TRANSACTION_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Scheme word placed before the token in the `Authorization` header.
pub const AUTH_SCHEME: &str = "APIToken";

/// Name of the request correlation header.
pub const TRANSACTION_HEADER: &str = "Transaction";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable names.
pub mod env {
    /// Base endpoint URL (required by `ClientConfig::from_env`).
    pub const ENDPOINT: &str = "DNS_API_ENDPOINT";
    /// Optional transaction ID prefix override.
    pub const TRANSACTION_PREFIX: &str = "DNS_API_TR_PREFIX";
    /// Optional transaction ID suffix override.
    pub const TRANSACTION_SUFFIX: &str = "DNS_API_TR_SUFFIX";
    /// Set to `1` or `true` to turn TLS certificate verification on.
    pub const VERIFY_TLS: &str = "DNS_API_VERIFY_TLS";
    /// Account login.
    pub const LOGIN: &str = "DNS_API_LOGIN";
    /// Account password.
    pub const PASSWORD: &str = "DNS_API_PASSWORD";
    /// Reseller the account belongs to.
    pub const RESELLER: &str = "DNS_API_RESELLER";
}
