//! Authentication types — login request body and caller credentials.

use serde::Serialize;

use crate::constants::env;
use crate::error::{DnsHostingError, Result};

/// Request body for `POST auth`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub login: &'a str,
    pub password: &'a str,
    pub reseller: &'a str,
}

/// Account credentials supplied by the caller.
///
/// The client never keeps these; only the token returned by a successful
/// login is stored.
#[derive(Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    pub reseller: String,
}

impl Credentials {
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        reseller: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            reseller: reseller.into(),
        }
    }

    /// Read credentials from `DNS_API_LOGIN`, `DNS_API_PASSWORD` and
    /// `DNS_API_RESELLER`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            login: required_var(env::LOGIN)?,
            password: required_var(env::PASSWORD)?,
            reseller: required_var(env::RESELLER)?,
        })
    }

    /// Borrow as a login request body.
    pub fn as_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            login: &self.login,
            password: &self.password,
            reseller: &self.reseller,
        }
    }
}

// Password is deliberately left out.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("reseller", &self.reseller)
            .finish_non_exhaustive()
    }
}

pub(crate) fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(DnsHostingError::InvalidArgument(format!(
            "environment variable {name} is not set"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_all_fields() {
        let creds = Credentials::new("user", "secret", "r1");
        let body = serde_json::to_value(creds.as_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"login": "user", "password": "secret", "reseller": "r1"})
        );
    }

    #[test]
    fn debug_hides_password() {
        let creds = Credentials::new("user", "secret", "r1");
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
