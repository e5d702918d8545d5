//! Binary to log in to the DNS hosting API and dump the zone of one domain,
//! for checking credentials and connectivity by hand.
//!
//! # Usage
//!
//! ```sh
//! export DNS_API_ENDPOINT="https://dns.example.net/api/v1/"
//! export DNS_API_LOGIN="user"
//! export DNS_API_PASSWORD="password"
//! export DNS_API_RESELLER="reseller"
//! cargo run --bin dns_check --features cli -- example.ua
//! ```

use std::env;

use dns_hosting_api::client::{ClientConfig, DnsHostingClient};
use dns_hosting_api::types::auth::Credentials;

#[tokio::main]
async fn main() -> dns_hosting_api::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let credentials = Credentials::from_env()?;
    let domain = env::args().nth(1);

    let mut client = DnsHostingClient::with_config(config)?;
    println!("Client v{} → {}", client.version(), client.base_url());

    if let Err(err) = client.login_with(&credentials).await {
        println!("Login unsuccessful: {err}");
        return Ok(());
    }
    println!("Login successful");

    match client.zone_template(&credentials.reseller).await {
        Ok(tpl) => println!("Zone template:\n{tpl:#}"),
        Err(err) => println!("Zone template failed: {err}"),
    }

    let Some(domain) = domain else {
        println!("No domain given, done.");
        return Ok(());
    };

    match client.domain_info(&domain).await {
        Ok(info) => println!("Domain info:\n{info:#}"),
        Err(err) => println!("Domain info failed: {err}"),
    }

    match client.domain_zone_records(&domain).await {
        Ok(records) => {
            println!("Total records: {}", records["total_count"]);
            println!("{:#}", records["list"]);
        }
        Err(err) => println!("Zone records failed: {err}"),
    }

    match client.domain_zone_as_text(&domain).await {
        Ok(text) => println!("Zone file:\n{text}"),
        Err(err) => println!("Zone text failed: {err}"),
    }

    println!("Last error message: {:?}", client.error_message());
    Ok(())
}
