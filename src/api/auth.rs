//! Authentication endpoint.

use serde_json::Value;

use crate::client::DnsHostingClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::auth::{Credentials, LoginRequest};

impl DnsHostingClient {
    /// Log in and store the returned session token.
    ///
    /// Every later request carries `Authorization: APIToken <token>`. The
    /// credentials themselves are not kept.
    ///
    /// **Endpoint:** `POST auth`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use dns_hosting_api::DnsHostingClient;
    /// # #[tokio::main]
    /// # async fn main() -> dns_hosting_api::Result<()> {
    /// let mut client = DnsHostingClient::new("https://dns.example.net/api/v1/")?;
    /// client.login("user", "password", "reseller").await?;
    /// assert!(client.is_authenticated());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&mut self, login: &str, password: &str, reseller: &str) -> Result<Value> {
        let req = LoginRequest {
            login,
            password,
            reseller,
        };
        self.post(Endpoint::Login, &[], &req).await
    }

    /// [`login`](Self::login) with a [`Credentials`] bundle.
    pub async fn login_with(&mut self, credentials: &Credentials) -> Result<Value> {
        self.post(Endpoint::Login, &[], &credentials.as_request())
            .await
    }
}
