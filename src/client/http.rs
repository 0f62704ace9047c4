//! Request dispatcher
//!
//! Single shared path to the MHFL backend: attaches the bearer token when a
//! valid credential exists, sends with a fixed timeout, then classifies the
//! response into exactly one `Ok` or `Err`. Classification order:
//!
//! 1. transport failure → `Failure` with code 0 and the fixed message
//!    `network error`, plus a notice distinguishing timeout from connect
//! 2. envelope with code 200 → success with `envelope.data`
//! 3. envelope with any other code → `Failure` carrying the envelope message
//!    and code, always surfaced as a warning notice
//! 4. no envelope, HTTP status != 200 → synthesized `request failed (<status>)`
//! 5. no envelope, HTTP status 200 → the raw body is the success payload
//!
//! Callers therefore never observe a request that resolves to neither
//! success nor failure.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::credentials::CredentialStore;
use crate::error::{Failure, FailureKind, transport_kind};
use crate::notify::Notifier;

/// MHFL backend origin, fixed at build time
const DEFAULT_API_HOST: &str = "http://localhost:8088";

/// Env override for the test harness only
const API_HOST_ENV: &str = "MHFLOP_API_HOST";

/// Every request resolves within this window
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The wire envelope every MHFL JSON endpoint is expected to satisfy
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: String,
}

/// A response body: either the standard envelope or a raw payload.
///
/// The predicate is explicit: a JSON object carrying an integer `code` field
/// is an envelope, everything else is raw.
#[derive(Debug)]
pub enum Body {
    Envelope(Envelope),
    Raw(Value),
}

impl Body {
    pub fn parse(text: &str) -> Body {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => {
                let looks_enveloped = value
                    .as_object()
                    .is_some_and(|obj| obj.get("code").is_some_and(Value::is_i64));
                if looks_enveloped {
                    match serde_json::from_value::<Envelope>(value.clone()) {
                        Ok(envelope) => Body::Envelope(envelope),
                        Err(_) => Body::Raw(value),
                    }
                } else {
                    Body::Raw(value)
                }
            }
            // Non-JSON bodies pass through as plain text
            Err(_) => Body::Raw(Value::String(text.to_string())),
        }
    }
}

/// Notice text for a transport failure; the returned `Failure` message stays
/// fixed regardless.
fn transport_notice(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Timeout => "Request timed out, please check your network connection",
        FailureKind::Connect => {
            "Could not connect to the MHFL backend, please check the server is running"
        }
        _ => "Network error, please try again later",
    }
}

/// The request dispatcher shared by every API surface
pub struct Dispatcher {
    http: HttpClient,
    base_url: String,
    store: Arc<CredentialStore>,
    notifier: Notifier,
}

impl Dispatcher {
    /// Create a dispatcher against the fixed backend origin.
    pub fn new(store: Arc<CredentialStore>, notifier: Notifier) -> crate::error::Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| crate::error::Error::Other(format!("http client: {}", e)))?;

        let base_url =
            std::env::var(API_HOST_ENV).unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        Ok(Self {
            http,
            base_url,
            store,
            notifier,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));
        // Absent or expired credentials mean an unauthenticated request;
        // the read itself may emit an expiry notice.
        match self.store.read() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a JSON endpoint.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Failure> {
        self.execute(self.builder(Method::GET, path), path).await
    }

    /// GET with query parameters.
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Failure> {
        self.execute(self.builder(Method::GET, path).query(query), path)
            .await
    }

    /// POST a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure> {
        self.execute(self.builder(Method::POST, path).json(body), path)
            .await
    }

    /// POST with parameters in the query string and an empty body.
    pub async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Failure> {
        self.execute(self.builder(Method::POST, path).query(query), path)
            .await
    }

    /// POST a form-urlencoded body.
    pub async fn post_urlencoded<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &B,
    ) -> Result<T, Failure> {
        self.execute(self.builder(Method::POST, path).form(form), path)
            .await
    }

    /// POST a multipart form.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, Failure> {
        self.execute(self.builder(Method::POST, path).multipart(form), path)
            .await
    }

    /// PUT a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Failure> {
        self.execute(self.builder(Method::PUT, path).json(body), path)
            .await
    }

    /// PUT with parameters in the query string and an empty body.
    pub async fn put_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Failure> {
        self.execute(self.builder(Method::PUT, path).query(query), path)
            .await
    }

    /// DELETE an endpoint.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Failure> {
        self.execute(self.builder(Method::DELETE, path), path).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, Failure> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.transport_failure(&err, path)),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => return Err(self.transport_failure(&err, path)),
        };

        classify(status, &text, path, &self.notifier)
    }

    fn transport_failure(&self, err: &reqwest::Error, path: &str) -> Failure {
        let kind = transport_kind(err);
        log::warn!("transport error for {}: {}", path, err);
        self.notifier.error(transport_notice(kind));
        Failure::transport(kind, path)
    }
}

/// Classify a received response per the ordered rules above.
///
/// Split out of [`Dispatcher::execute`] so the decision table is testable
/// without a live server.
fn classify<T: DeserializeOwned>(
    status: StatusCode,
    text: &str,
    url: &str,
    notifier: &Notifier,
) -> Result<T, Failure> {
    match Body::parse(text) {
        Body::Envelope(envelope) if envelope.code == 200 => decode(envelope.data, url),
        Body::Envelope(envelope) => {
            log::warn!(
                "request to {} failed with code {}: {}",
                url,
                envelope.code,
                envelope.message
            );
            notifier.warn(&envelope.message);
            Err(Failure::application(envelope.message, envelope.code, url))
        }
        Body::Raw(_) if status != StatusCode::OK => {
            let failure = Failure::http(status.as_u16(), url);
            log::warn!("request to {} failed: {}", url, failure.message);
            notifier.warn(&failure.message);
            Err(failure)
        }
        Body::Raw(value) => decode(value, url),
    }
}

fn decode<T: DeserializeOwned>(value: Value, url: &str) -> Result<T, Failure> {
    serde_json::from_value(value).map_err(|e| Failure::decode(e, url))
}
