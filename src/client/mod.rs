//! Client layer: owns configuration, executes request descriptors and normalizes failures.

mod error;
mod http;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use crate::domain::ApiKey;
use crate::resources::{
    Campaigns, Contacts, Insights, Messages, Numbers, Phonebooks, SenderIds, Templates,
};
use crate::transport::{RequestDescriptor, decode_envelope};

pub use error::{ErrorKind, ErrorResult, TermiiError};
pub use http::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportFailure};

use http::ReqwestTransport;

/// Base URL of the Termii API; request paths are resolved below it.
pub const DEFAULT_BASE_URL: &str = "https://api.ng.termii.com/api/";

/// Outcome of every resource method: the declared success type, or the normalized failure.
pub type ApiResult<T> = Result<T, ErrorResult>;

/// Shared request executor borrowed by every resource handle.
#[derive(Clone)]
pub(crate) struct Executor {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Executor {
    /// Execute one request and decode `data` from the response envelope.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, TermiiError> {
        let request = self.build_request(descriptor)?;
        let method = request.method;
        let path = request.url.path().to_owned();

        tracing::debug!(%method, %path, "sending Termii request");
        let response = self.http.send(request).await.map_err(|err| {
            tracing::warn!(%method, %path, error = %err, "Termii request failed in transport");
            TermiiError::Transport(err)
        })?;
        tracing::debug!(%method, %path, status = response.status, "received Termii response");

        if !response.is_success() {
            tracing::warn!(%method, %path, status = response.status, "Termii returned non-success status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(TermiiError::HttpStatus {
                status: response.status,
                body,
            });
        }

        decode_envelope(&response.body).map_err(|err| {
            tracing::warn!(%method, %path, error = %err, "Termii response did not match the expected shape");
            TermiiError::Decode(err)
        })
    }

    /// [`Executor::execute`] with the failure normalized.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> ApiResult<T> {
        Ok(self.execute(descriptor).await?)
    }

    fn build_request(&self, descriptor: RequestDescriptor) -> Result<HttpRequest, TermiiError> {
        let RequestDescriptor {
            method,
            path,
            page,
            body,
        } = descriptor;

        let relative = path.trim_start_matches('/');
        if relative.trim().is_empty() {
            return Err(TermiiError::InvalidRequest(
                "request path must not be empty".to_owned(),
            ));
        }

        if relative.contains(['?', '#']) {
            return Err(TermiiError::InvalidRequest(
                "request path must not carry a query or fragment".to_owned(),
            ));
        }
        if Url::parse(relative).is_ok() {
            return Err(TermiiError::InvalidRequest(
                "request path must be relative to the base URL".to_owned(),
            ));
        }

        let base = Url::parse(&self.base_url)?;
        let mut url = base.join(relative)?;
        if url.origin() != base.origin() || !url.path().starts_with(base.path()) {
            return Err(TermiiError::InvalidRequest(
                "request path must stay below the base URL".to_owned(),
            ));
        }

        let mut query = Vec::<(&str, String)>::new();
        let body = if method.carries_body() {
            let mut body = body.unwrap_or_else(|| Value::Object(Map::new()));
            let Some(fields) = body.as_object_mut() else {
                return Err(TermiiError::InvalidRequest(
                    "request body must be a JSON object".to_owned(),
                ));
            };
            fields.insert(
                ApiKey::FIELD.to_owned(),
                Value::String(self.api_key.as_str().to_owned()),
            );
            Some(body)
        } else {
            query.push((ApiKey::FIELD, self.api_key.as_str().to_owned()));
            body
        };
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(HttpRequest { method, url, body })
    }
}

#[derive(Clone)]
/// Builder for [`TermiiClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent or HTTP transport.
pub struct TermiiClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl fmt::Debug for TermiiClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermiiClientBuilder")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl TermiiClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the base URL (for example a regional Termii host or a local mock).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is installed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is installed.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the reqwest-based transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`TermiiClient`].
    ///
    /// Fails with [`ErrorKind::Unexpected`] when the base URL cannot be a base for
    /// relative paths, and with [`ErrorKind::Transport`] when the HTTP client cannot be built.
    pub fn build(self) -> Result<TermiiClient, ErrorResult> {
        let base_url = normalize_base_url(&self.base_url)?;

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| TermiiError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(TermiiClient {
            executor: Executor {
                api_key: self.api_key,
                base_url,
                http,
            },
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, TermiiError> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(TermiiError::InvalidRequest(format!(
            "base URL cannot have relative paths: {raw}"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.into())
}

#[derive(Clone, Debug)]
/// High-level Termii client.
///
/// Requests go to [`DEFAULT_BASE_URL`] unless overridden through [`TermiiClient::builder`].
/// Endpoints are grouped into resource handles ([`TermiiClient::campaigns`],
/// [`TermiiClient::phonebooks`], ...); every handle method returns [`ApiResult`].
///
/// The client is cheap to clone and safe to share between tasks.
pub struct TermiiClient {
    executor: Executor,
}

impl TermiiClient {
    /// Create a client using the default base URL and HTTP settings.
    ///
    /// For more customization, use [`TermiiClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            executor: Executor {
                api_key,
                base_url: DEFAULT_BASE_URL.to_owned(),
                http: Arc::new(ReqwestTransport::new(reqwest::Client::new())),
            },
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TermiiClientBuilder {
        TermiiClientBuilder::new(api_key)
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.executor.base_url
    }

    /// Execute an arbitrary request descriptor against the API.
    ///
    /// This is the operation every resource handle is built on; use it for endpoints
    /// this crate does not wrap yet.
    pub async fn execute<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> ApiResult<T> {
        self.executor.call(descriptor).await
    }

    /// Single and bulk messages.
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(&self.executor)
    }

    /// Sender name listing and requests.
    pub fn sender_ids(&self) -> SenderIds<'_> {
        SenderIds::new(&self.executor)
    }

    /// Messages from auto-generated numbers.
    pub fn numbers(&self) -> Numbers<'_> {
        Numbers::new(&self.executor)
    }

    /// Messages rendered from device templates.
    pub fn templates(&self) -> Templates<'_> {
        Templates::new(&self.executor)
    }

    pub fn phonebooks(&self) -> Phonebooks<'_> {
        Phonebooks::new(&self.executor)
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(&self.executor)
    }

    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(&self.executor)
    }

    /// Account insights such as the balance.
    pub fn insights(&self) -> Insights<'_> {
        Insights::new(&self.executor)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Transport double: records every request and replays a fixed outcome.
    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        outcome: FakeOutcome,
    }

    #[derive(Debug, Clone)]
    enum FakeOutcome {
        Respond(u16, String),
        Unreachable,
    }

    impl FakeTransport {
        pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_outcome(FakeOutcome::Respond(response_status, response_body.into()))
        }

        pub(crate) fn unreachable() -> Self {
            Self::with_outcome(FakeOutcome::Unreachable)
        }

        fn with_outcome(outcome: FakeOutcome) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    outcome,
                })),
            }
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            let state = self.state.lock().unwrap();
            state.requests.last().cloned().expect("no request was sent")
        }

        pub(crate) fn request_count(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
            Box::pin(async move {
                let outcome = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    state.outcome.clone()
                };
                match outcome {
                    FakeOutcome::Respond(status, body) => Ok(HttpResponse::new(status, body)),
                    FakeOutcome::Unreachable => Err(Box::new(std::io::Error::new(
                        std::io::ErrorKind::ConnectionRefused,
                        "connection refused",
                    )) as TransportFailure),
                }
            })
        }
    }

    pub(crate) fn make_client(transport: FakeTransport) -> TermiiClient {
        TermiiClient::builder(ApiKey::new("abc123").unwrap())
            .base_url("https://example.invalid/api")
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    pub(crate) fn query(request: &HttpRequest) -> Vec<(String, String)> {
        request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub(crate) fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }
}
