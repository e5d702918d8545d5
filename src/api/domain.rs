//! Domain endpoints.

use serde_json::Value;

use crate::client::DnsHostingClient;
use crate::endpoint::Endpoint;
use crate::error::Result;

impl DnsHostingClient {
    /// List domains visible to the session.
    ///
    /// **Endpoint:** `GET service/dns/domains`
    pub async fn domains(&mut self) -> Result<Value> {
        self.get(Endpoint::DomainList, &[]).await
    }

    /// Domain resource.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain`
    pub async fn domain_resource(&mut self, domain: &str) -> Result<Value> {
        self.get(Endpoint::Domain, &[(":domain", domain)]).await
    }

    /// Users with access to a domain.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/users`
    pub async fn domain_users(&mut self, domain: &str) -> Result<Value> {
        self.get(Endpoint::DomainUserList, &[(":domain", domain)])
            .await
    }

    /// Full domain information.
    ///
    /// **Endpoint:** `GET service/dns/domains/:domain/fullinfo`
    pub async fn domain_info(&mut self, domain: &str) -> Result<Value> {
        self.get(Endpoint::DomainInfo, &[(":domain", domain)]).await
    }
}
