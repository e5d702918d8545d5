//! Request and response types for the DNS hosting API v1.
//!
//! Most endpoints answer with free-form JSON that is handed back to the
//! caller as a [`serde_json::Value`]; only the pieces the client itself
//! builds or inspects are typed here.
//!
//! - [`auth`] — Login request body and caller credentials
//! - [`response`] — Transport metadata of the last completed request

pub mod auth;
pub mod response;
