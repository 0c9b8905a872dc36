//! HTTP client adapter.
//!
//! Attaches the current session's credentials to every outgoing request so
//! callers never pass them explicitly, and surfaces server error responses
//! unmodified.
//!
//! DESIGN
//! ======
//! The credential pair is a thread-local cell with a single designated
//! writer: [`crate::state::session`]. It is never read back from durable
//! storage here. Responses are not retried or transformed; a non-2xx
//! status becomes [`ApiError::Status`] carrying the original status code
//! and the server's message.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base address used when `VITE_API_BASE_URL` is unset at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// The process-wide credential pair attached to outgoing requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: Option<String>,
    pub tenant_id: Option<String>,
}

thread_local! {
    static CREDENTIALS: RefCell<Credentials> = RefCell::new(Credentials::default());
}

/// Replace the credential pair. The session manager is the sole caller.
pub fn set_credentials(token: Option<String>, tenant_id: Option<String>) {
    CREDENTIALS.with(|cell| *cell.borrow_mut() = Credentials { token, tenant_id });
}

/// Snapshot of the current credential pair.
pub fn current_credentials() -> Credentials {
    CREDENTIALS.with(|cell| cell.borrow().clone())
}

/// API gateway base address, resolved once at build time.
pub fn base_url() -> &'static str {
    option_env!("VITE_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Header pairs for a credential snapshot. An absent token or tenant
/// contributes no header at all, never an empty placeholder.
pub fn auth_headers(creds: &Credentials) -> Vec<(&'static str, String)> {
    let mut headers = Vec::new();
    if let Some(token) = &creds.token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    if let Some(tenant) = &creds.tenant_id {
        headers.push(("X-Tenant-Id", tenant.clone()));
    }
    headers
}

/// A request that did not produce a usable 2xx response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status; `message` is the body's
    /// `message` field when present, else the raw body.
    Status { status: u16, message: String },
    /// The request could not be sent or the response never parsed.
    Network(String),
    /// No response within [`REQUEST_TIMEOUT_MS`].
    Timeout,
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message to show a user when no page-specific mapping applies.
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Network(detail) => format!("Network error: {detail}"),
            Self::Timeout => "The server took too long to respond.".to_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { status, message } => write!(f, "HTTP {status}: {message}"),
            Self::Network(detail) => write!(f, "network error: {detail}"),
            Self::Timeout => f.write_str("request timed out"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Extract a display message from an error response body.
pub fn error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToOwned::to_owned));
    from_json.unwrap_or_else(|| {
        if body.trim().is_empty() {
            format!("request failed with status {status}")
        } else {
            body.to_owned()
        }
    })
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::get(&join(path)));
        with_timeout(async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(response).await
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_side())
    }
}

/// POST a JSON body and parse a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&join(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        with_timeout(async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(response).await
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_side())
    }
}

/// POST a JSON body where the response body carries nothing of interest.
pub async fn post_json_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&join(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        with_timeout(async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(&response).await
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_side())
    }
}

/// POST without a body and parse a JSON response.
pub async fn post_no_body<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&join(path)));
        with_timeout(async move {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(response).await
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_side())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiError {
    ApiError::Network("not available on the server".to_owned())
}

#[cfg(feature = "hydrate")]
fn join(path: &str) -> String {
    format!("{}{path}", base_url())
}

#[cfg(feature = "hydrate")]
fn authorized(mut builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    for (name, value) in auth_headers(&current_credentials()) {
        builder = builder.header(name, &value);
    }
    builder
}

/// Race a request against the fixed timeout.
#[cfg(feature = "hydrate")]
async fn with_timeout<T>(
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures::future::Either;

    let timeout =
        gloo_timers::future::sleep(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS));
    match futures::future::select(Box::pin(request), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    } else {
        Err(status_error(response).await)
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(response: &gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message: error_message(status, &body) })
    }
}

#[cfg(feature = "hydrate")]
async fn status_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status { status, message: error_message(status, &body) }
}
