//! Reseller endpoints.

use serde_json::Value;

use crate::client::DnsHostingClient;
use crate::endpoint::Endpoint;
use crate::error::Result;

impl DnsHostingClient {
    /// List resellers.
    ///
    /// **Endpoint:** `GET resellers`
    pub async fn resellers(&mut self) -> Result<Value> {
        self.get(Endpoint::ResellerList, &[]).await
    }

    /// Default zone template of a reseller.
    ///
    /// **Endpoint:** `GET service/dns/resellers/:reseller/zone_tpl`
    pub async fn zone_template(&mut self, reseller: &str) -> Result<Value> {
        self.get(Endpoint::ZoneTemplate, &[(":reseller", reseller)])
            .await
    }

    /// Information about a reseller's user.
    ///
    /// **Endpoint:** `GET service/dns/resellers/:reseller/users/:login`
    pub async fn user_info(&mut self, reseller: &str, login: &str) -> Result<Value> {
        self.get(
            Endpoint::UserResource,
            &[(":reseller", reseller), (":login", login)],
        )
        .await
    }
}
