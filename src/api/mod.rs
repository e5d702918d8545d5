//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`DnsHostingClient`](crate::client::DnsHostingClient) via `impl` blocks.
//! Every method fills its endpoint template, picks the HTTP verb, and returns
//! the parsed JSON payload or a [`DnsHostingError`](crate::error::DnsHostingError).
//!
//! ## Usage
//!
//! ```no_run
//! use dns_hosting_api::DnsHostingClient;
//!
//! # #[tokio::main]
//! # async fn main() -> dns_hosting_api::Result<()> {
//! let mut client = DnsHostingClient::new("https://dns.example.net/api/v1/")?;
//! client.login("user", "password", "reseller").await?;
//! let domains = client.domains().await?;
//! let zone = client.domain_zone_as_text("example.ua").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`auth`] | 1 | Login, session token capture |
//! | [`reseller`] | 3 | Reseller list, zone template, user info |
//! | [`domain`] | 4 | Domain list, resource, users, full info |
//! | [`zone`] | 8 | Zone read/update, text export, records, history |
//! | [`ns`] | 1 | Name server list |

pub mod auth;
pub mod domain;
pub mod ns;
pub mod reseller;
pub mod zone;
