//! HTTP transport seam.
//!
//! # Design
//! Requests and responses are plain data. `LiveClient` builds an
//! `HttpRequest`, hands it to a `Transport`, and decodes whatever
//! `HttpResponse` comes back. TLS, pooling, proxies and timeouts all belong
//! to the transport; the client never retries and never adds a deadline of
//! its own.
//!
//! Hosts that prefer to do their own I/O can skip `Transport` entirely: call
//! `LiveClient::build_get` / `build_post`, execute the request, and pass the
//! response to `decode_envelope`.

/// HTTP method for a request. The Live API only uses these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// Hand-written so the bearer key never ends up in logs.
impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "<redacted>")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one request and returns the raw response.
///
/// Implementations must return non-2xx responses as `Ok`: the Live API puts
/// its error code in the body, and the client reads it from there.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    type Error = T::Error;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use super::{HttpMethod, HttpRequest, HttpResponse, Transport};

    /// Blocking transport backed by a shared `ureq::Agent`.
    #[derive(Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl std::fmt::Debug for UreqTransport {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("UreqTransport").finish_non_exhaustive()
        }
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }

        /// Wrap a caller-configured agent (timeouts, proxy, TLS).
        ///
        /// The agent should be built with `http_status_as_error(false)`, or
        /// API errors delivered with a 4xx/5xx status surface as transport
        /// errors instead.
        pub fn with_agent(agent: ureq::Agent) -> Self {
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        type Error = ureq::Error;

        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
            let mut response = match (request.method, request.body.as_deref()) {
                (HttpMethod::Get, _) => {
                    let mut builder = self.agent.get(&request.url);
                    for (key, value) in &request.headers {
                        builder = builder.header(key.as_str(), value.as_str());
                    }
                    builder.call()?
                }
                (HttpMethod::Post, body) => {
                    let mut builder = self.agent.post(&request.url);
                    for (key, value) in &request.headers {
                        builder = builder.header(key.as_str(), value.as_str());
                    }
                    match body {
                        Some(body) => builder.send(body.as_bytes())?,
                        None => builder.send_empty()?,
                    }
                }
            };

            let status = response.status().as_u16();
            let body = response.body_mut().read_to_string()?;
            Ok(HttpResponse { status, body })
        }
    }
}
