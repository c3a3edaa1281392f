//! The HTTP seam: everything the executor needs from an HTTP client.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use url::Url;

use crate::transport::Method;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Failure produced by a transport before any response was obtained.
pub type TransportFailure = Box<dyn StdError + Send + Sync>;

/// Fully built request: absolute URL (credentials and `page` already in the query) and JSON body.
///
/// The `Debug` output omits the query string and the body, both of which carry the API key.
#[derive(Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<serde_json::Value>,
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut endpoint = self.url.clone();
        endpoint.set_query(None);
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &endpoint.as_str())
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Performs exactly one HTTP round trip per call.
///
/// Non-2xx statuses are returned as responses, not errors. Implement this to
/// plug in a different HTTP stack or a test double.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest)
    -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

// reqwest errors embed the request URL, which carries the API key in its query.
fn redact(err: reqwest::Error) -> TransportFailure {
    Box::new(err.without_url())
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self
                .client
                .request(method, request.url)
                .header(reqwest::header::ACCEPT, "application/json");
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(redact)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(redact)?;
            Ok(HttpResponse { status, body })
        })
    }
}
