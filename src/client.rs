//! Core HTTP client for the DNS hosting REST API v1.
//!
//! The [`DnsHostingClient`] struct is the main entry point. It wraps
//! [`reqwest::Client`], injects the `Authorization` and `Transaction` headers
//! into every request, captures the session token on login, and records the
//! state of the last call for the accessor methods.
//!
//! API endpoint methods are added to `DnsHostingClient` via `impl` blocks in
//! the [`crate::api`] module.

use std::time::Instant;

use chrono::{DateTime, Local};
use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{
    AUTH_SCHEME, DEFAULT_TRANSACTION_PREFIX, DEFAULT_TRANSACTION_SUFFIX,
    TRANSACTION_HEADER, TRANSACTION_TIMESTAMP_FORMAT, VERSION, env,
};
use crate::endpoint::Endpoint;
use crate::error::{ApiErrorBody, DnsHostingError, Result};
use crate::types::auth::required_var;
use crate::types::response::ResponseInfo;

/// Construction-time settings of a [`DnsHostingClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint URL. Paths are appended verbatim, so it normally ends
    /// with `/`.
    pub base_url: String,
    /// Prefix of the `Transaction` header value.
    pub transaction_prefix: String,
    /// Suffix of the `Transaction` header value.
    pub transaction_suffix: String,
    /// Skip TLS certificate verification.
    ///
    /// Defaults to `true` for compatibility with the API's historical
    /// clients. Turn it off with [`ClientConfig::verify_tls`] whenever the
    /// endpoint is reached over an untrusted network.
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Config with the default transaction prefix/suffix (`API-` / `-DNS-v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            transaction_prefix: DEFAULT_TRANSACTION_PREFIX.to_owned(),
            transaction_suffix: DEFAULT_TRANSACTION_SUFFIX.to_owned(),
            accept_invalid_certs: true,
        }
    }

    /// Read the config from `DNS_API_ENDPOINT` and the optional
    /// `DNS_API_TR_PREFIX`, `DNS_API_TR_SUFFIX` and `DNS_API_VERIFY_TLS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(required_var(env::ENDPOINT)?);
        if let Ok(prefix) = std::env::var(env::TRANSACTION_PREFIX) {
            config.transaction_prefix = prefix;
        }
        if let Ok(suffix) = std::env::var(env::TRANSACTION_SUFFIX) {
            config.transaction_suffix = suffix;
        }
        if let Ok(flag) = std::env::var(env::VERIFY_TLS) {
            config.accept_invalid_certs = !matches!(flag.trim(), "1" | "true" | "yes");
        }
        Ok(config)
    }

    /// Override the transaction ID prefix.
    pub fn transaction_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.transaction_prefix = prefix.into();
        self
    }

    /// Override the transaction ID suffix.
    pub fn transaction_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.transaction_suffix = suffix.into();
        self
    }

    /// Turn TLS certificate verification on or off.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.accept_invalid_certs = !verify;
        self
    }
}

/// State of the last executed request.
///
/// Fields are overwritten as each request progresses and are never cleared
/// up front: API error fields survive later successful calls and later
/// transport failures alike.
#[derive(Debug)]
struct LastCall {
    info: Option<ResponseInfo>,
    raw: Option<String>,
    result: Option<Value>,
    transport_error: Option<String>,
    api_error: Option<ApiErrorBody>,
    errors: Vec<Value>,
    command: String,
    command_value: Value,
}

impl Default for LastCall {
    fn default() -> Self {
        Self {
            info: None,
            raw: None,
            result: None,
            transport_error: None,
            api_error: None,
            errors: Vec::new(),
            command: String::new(),
            command_value: Value::Object(Map::new()),
        }
    }
}

/// Client for the DNS hosting REST API v1.
///
/// Call [`login`](DnsHostingClient::login) first; the returned token is kept
/// and sent as `Authorization: APIToken <token>` on every later request.
/// Nothing stops unauthenticated calls, the API simply rejects them.
///
/// Every request method takes `&mut self`, so one instance drives one
/// request at a time. Wrap it in a lock to share it between tasks.
///
/// # Example
///
/// ```no_run
/// use dns_hosting_api::DnsHostingClient;
///
/// # #[tokio::main]
/// # async fn main() -> dns_hosting_api::Result<()> {
/// let mut client = DnsHostingClient::new("https://dns.example.net/api/v1/")?;
/// client.login("user", "password", "reseller").await?;
/// let records = client.domain_zone_records("example.ua").await?;
/// println!("{}", records["total_count"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DnsHostingClient {
    http: reqwest::Client,
    config: ClientConfig,
    /// Session token, empty until a successful login.
    auth_token: String,
    last: LastCall,
}

impl DnsHostingClient {
    /// Create a client for `base_url` with the default transaction prefix
    /// and suffix.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a client from a full [`ClientConfig`].
    ///
    /// Fails with [`DnsHostingError::DependencyMissing`] if the HTTP client
    /// cannot be built (e.g. no TLS backend could be initialised).
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|err| DnsHostingError::DependencyMissing(err.to_string()))?;

        if config.accept_invalid_certs {
            tracing::debug!("TLS certificate verification disabled");
        }

        Ok(Self {
            http,
            config,
            auth_token: String::new(),
            last: LastCall::default(),
        })
    }

    /// Replace the base URL. Applies to subsequent requests only.
    pub fn set_end_point(&mut self, base_url: impl Into<String>) {
        self.config.base_url = base_url.into();
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the session token (empty before login).
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Whether a login has stored a session token.
    pub fn is_authenticated(&self) -> bool {
        !self.auth_token.is_empty()
    }

    // -----------------------------------------------------------------------
    // Last-call accessors
    // -----------------------------------------------------------------------

    /// Client version string.
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Transport metadata of the last completed response.
    pub fn info(&self) -> Option<&ResponseInfo> {
        self.last.info.as_ref()
    }

    /// Raw body of the last response.
    pub fn result_raw(&self) -> Option<&str> {
        self.last.raw.as_deref()
    }

    /// Parsed body of the last response, `None` if it was not JSON.
    pub fn result(&self) -> Option<&Value> {
        self.last.result.as_ref()
    }

    /// Last API error payload. May be left over from an earlier call.
    pub fn api_error(&self) -> Option<&ApiErrorBody> {
        self.last.api_error.as_ref()
    }

    /// Message of the last transport failure.
    pub fn transport_error(&self) -> Option<&str> {
        self.last.transport_error.as_deref()
    }

    /// `code` of the last API error.
    pub fn error_code(&self) -> Option<&Value> {
        self.last.api_error.as_ref().and_then(|err| err.code.as_ref())
    }

    /// `message` of the last API error, empty if none was seen yet.
    pub fn error_message(&self) -> &str {
        self.last
            .api_error
            .as_ref()
            .map_or("", |err| err.message.as_str())
    }

    /// Last API error list: the full error payload as its single element.
    pub fn errors(&self) -> &[Value] {
        &self.last.errors
    }

    /// JSON body of the last request, as sent.
    pub fn command(&self) -> &str {
        &self.last.command
    }

    /// Body of the last request as a structured value.
    pub fn command_value(&self) -> &Value {
        &self.last.command_value
    }

    // -----------------------------------------------------------------------
    // Dispatch helpers used by the endpoint modules
    // -----------------------------------------------------------------------

    /// GET an endpoint, rendering its template with `params`.
    pub(crate) async fn get(
        &mut self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.dispatch(Method::GET, endpoint, params, None::<&Value>)
            .await
    }

    /// POST a JSON body to an endpoint.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &mut self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<Value> {
        self.dispatch(Method::POST, endpoint, params, Some(body))
            .await
    }

    /// PUT a JSON body to an endpoint.
    pub(crate) async fn put<B: Serialize + ?Sized>(
        &mut self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<Value> {
        self.dispatch(Method::PUT, endpoint, params, Some(body))
            .await
    }

    /// Execute a request and turn the payload into the caller-facing result.
    ///
    /// Stores the session token when a login payload carries `token`, and
    /// maps any payload with a non-null `message` key to [`DnsHostingError::Api`].
    /// Empty payloads (`{}`, `[]`, `0`, `""`) are returned as `Ok`.
    async fn dispatch<B: Serialize + ?Sized>(
        &mut self,
        method: Method,
        endpoint: Endpoint,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Value> {
        let path = endpoint.path(params);
        let payload = self.execute(method, &path, body).await?;

        if endpoint == Endpoint::Login {
            if let Some(token) = payload.get("token").and_then(Value::as_str) {
                tracing::debug!("session token stored");
                self.auth_token = token.to_owned();
            }
        }

        match ApiErrorBody::from_payload(&payload) {
            Some(err) => Err(DnsHostingError::Api(err)),
            None => Ok(payload),
        }
    }

    /// Send one request and record its outcome in the last-call state.
    ///
    /// `path` is appended to the base URL without normalisation. The body
    /// (or `{}` when absent) is serialised for every method but only sent
    /// for non-GET requests. A payload with a `message` key updates the API
    /// error fields but is still returned as `Ok`.
    pub(crate) async fn execute<B: Serialize + ?Sized>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, path);

        let command_value = match body {
            Some(body) => serde_json::to_value(body)?,
            None => Value::Object(Map::new()),
        };
        self.last.command = serde_json::to_string(&command_value)?;
        self.last.command_value = command_value;

        let headers = self.request_headers(&method)?;
        tracing::debug!(%url, %method, "request");

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if method != Method::GET {
            request = request.body(self.last.command.clone());
        }

        let started = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.transport_failure(err)),
        };

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return Err(self.transport_failure(err)),
        };

        self.last.info = Some(ResponseInfo {
            url: final_url,
            status,
            content_type,
            size: bytes.len(),
            elapsed: started.elapsed(),
        });

        let raw = String::from_utf8_lossy(&bytes).into_owned();
        let parsed = serde_json::from_slice::<Value>(&bytes).ok();
        self.last.raw = Some(raw.clone());
        self.last.result = parsed.clone();

        let Some(payload) = parsed else {
            tracing::debug!(status, "response body is not JSON");
            return Err(DnsHostingError::InvalidResponse { body: raw });
        };

        if let Some(err) = ApiErrorBody::from_payload(&payload) {
            tracing::debug!(code = ?err.code, message = %err.message, "API error");
            self.last.errors = vec![payload.clone()];
            self.last.api_error = Some(err);
        }

        Ok(payload)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Headers for one request. `Content-Length` is set explicitly for PUT
    /// and DELETE, matching the serialised command.
    fn request_headers(&self, method: &Method) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let auth = format!("{AUTH_SCHEME} {}", self.auth_token);
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&auth).map_err(|_| {
                DnsHostingError::InvalidArgument("auth token contains invalid characters".into())
            })?,
        );

        let transaction = transaction_id(
            &self.config.transaction_prefix,
            &self.config.transaction_suffix,
            Local::now(),
        );
        headers.insert(
            TRANSACTION_HEADER,
            HeaderValue::from_str(&transaction).map_err(|_| {
                DnsHostingError::InvalidArgument(
                    "transaction prefix/suffix contains invalid characters".into(),
                )
            })?,
        );

        if *method == Method::PUT || *method == Method::DELETE {
            headers.insert(
                header::CONTENT_LENGTH,
                HeaderValue::from(self.last.command.len()),
            );
        }

        Ok(headers)
    }

    /// Record a transport failure. API error fields are left untouched.
    fn transport_failure(&mut self, err: reqwest::Error) -> DnsHostingError {
        tracing::warn!(error = %err, "request failed");
        self.last.transport_error = Some(err.to_string());
        self.last.info = None;
        self.last.raw = None;
        self.last.result = None;
        DnsHostingError::Transport(err)
    }
}

/// `prefix + YYYYMMDDHHMMSS + rounded unix seconds + suffix`.
///
/// Two requests in the same second get the same ID.
pub(crate) fn transaction_id(prefix: &str, suffix: &str, now: DateTime<Local>) -> String {
    let seconds = (now.timestamp_millis() as f64 / 1000.0).round() as i64;
    format!(
        "{prefix}{}{seconds}{suffix}",
        now.format(TRANSACTION_TIMESTAMP_FORMAT)
    )
}
