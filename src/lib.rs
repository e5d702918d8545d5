//! # dns-hosting-api
//!
//! A Rust client library for the DNS hosting REST API v1: login, resellers,
//! domains, zones, and zone records.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dns_hosting_api::DnsHostingClient;
//!
//! #[tokio::main]
//! async fn main() -> dns_hosting_api::Result<()> {
//!     let mut client = DnsHostingClient::new("https://dns.example.net/api/v1/")?;
//!     client.login("user", "password", "reseller").await?;
//!     let records = client.domain_zone_records("example.ua").await?;
//!     println!("{records:#}");
//!     Ok(())
//! }
//! ```
//!
//! Every endpoint method returns the parsed JSON payload on success. A
//! payload carrying a `message` key is an API error and comes back as
//! [`DnsHostingError::Api`]; the client also keeps the last error for the
//! [`error_code`](DnsHostingClient::error_code) /
//! [`error_message`](DnsHostingClient::error_message) accessors.

pub mod api;
pub mod client;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod types;

/// Re-export the main client types at crate root for convenience.
pub use client::{ClientConfig, DnsHostingClient};
/// Re-export the endpoint table.
pub use endpoint::Endpoint;
/// Re-export the error type and Result alias.
pub use error::{ApiErrorBody, DnsHostingError, Result};
