//! Name server endpoint.

use serde_json::Value;

use crate::client::DnsHostingClient;
use crate::endpoint::Endpoint;
use crate::error::Result;

impl DnsHostingClient {
    /// List the service's name servers.
    ///
    /// **Endpoint:** `GET service/dns/ns`
    pub async fn ns_list(&mut self) -> Result<Value> {
        self.get(Endpoint::NsList, &[]).await
    }
}
