//! Integration tests against a real DNS hosting API endpoint.
//!
//! # Running
//!
//! These tests require real credentials. Set the following environment
//! variables before running:
//!
//! ```sh
//! export DNS_API_ENDPOINT="https://dns.example.net/api/v1/"
//! export DNS_API_LOGIN="user"
//! export DNS_API_PASSWORD="password"
//! export DNS_API_RESELLER="reseller"
//! export DNS_API_DOMAIN="example.ua"   # optional, enables the domain tests
//! cargo test --test live -- --nocapture
//! ```
//!
//! Without these env vars, every test is silently skipped.

use dns_hosting_api::client::{ClientConfig, DnsHostingClient};
use dns_hosting_api::error::DnsHostingError;
use dns_hosting_api::types::auth::Credentials;

/// Helper: log in with env credentials, or skip the test.
async fn live_client() -> Option<(DnsHostingClient, Credentials)> {
    let config = ClientConfig::from_env().ok()?;
    let credentials = Credentials::from_env().ok()?;
    let mut client = DnsHostingClient::with_config(config).expect("client");
    client
        .login_with(&credentials)
        .await
        .expect("login failed");
    Some((client, credentials))
}

fn live_domain() -> Option<String> {
    std::env::var("DNS_API_DOMAIN").ok().filter(|d| !d.is_empty())
}

/// Macro to skip a test when credentials are missing.
macro_rules! require_client {
    () => {
        match live_client().await {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (DNS_API_* credentials not set)");
                return;
            }
        }
    };
}

macro_rules! require_domain {
    () => {
        match live_domain() {
            Some(d) => d,
            None => {
                eprintln!("⏭  Skipped (DNS_API_DOMAIN not set)");
                return;
            }
        }
    };
}

// ===================================================================
// Login
// ===================================================================

#[tokio::test]
async fn test_login() {
    let (client, _) = require_client!();
    assert!(client.is_authenticated());
    println!("✔ Login successful");
}

#[tokio::test]
async fn test_bad_login_returns_api_error() {
    let Ok(config) = ClientConfig::from_env() else {
        eprintln!("⏭  Skipped (DNS_API_ENDPOINT not set)");
        return;
    };
    let mut client = DnsHostingClient::with_config(config).expect("client");
    let err = client
        .login("dns-hosting-api-test", "wrong-password", "none")
        .await
        .unwrap_err();
    match &err {
        DnsHostingError::Api(body) => println!("✔ Bad login rejected: {body}"),
        other => panic!("Expected DnsHostingError::Api, got: {other:?}"),
    }
    assert!(!client.error_message().is_empty());
}

// ===================================================================
// Reseller
// ===================================================================

#[tokio::test]
async fn test_zone_template() {
    let (mut client, credentials) = require_client!();
    let tpl = client
        .zone_template(&credentials.reseller)
        .await
        .expect("zone_template failed");
    println!("✔ Zone template: {tpl}");
}

// ===================================================================
// Domain
// ===================================================================

#[tokio::test]
async fn test_domain_info() {
    let (mut client, _) = require_client!();
    let domain = require_domain!();
    let info = client.domain_info(&domain).await.expect("domain_info failed");
    println!("✔ Domain info: {info}");
}

#[tokio::test]
async fn test_domain_resource() {
    let (mut client, _) = require_client!();
    let domain = require_domain!();
    let resource = client
        .domain_resource(&domain)
        .await
        .expect("domain_resource failed");
    println!("✔ Domain resource: {resource}");
}

#[tokio::test]
async fn test_domain_zone_records() {
    let (mut client, _) = require_client!();
    let domain = require_domain!();
    let records = client
        .domain_zone_records(&domain)
        .await
        .expect("domain_zone_records failed");
    assert!(records.get("list").is_some(), "records should contain a list");
    println!("✔ Zone records: total_count={}", records["total_count"]);
    assert_eq!(client.transport_error(), None);
}
