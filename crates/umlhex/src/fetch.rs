//! HTTP transport used to retrieve rendered images.
//!
//! The pipeline talks to the network only through the [`Fetch`] trait.
//! [`HttpFetcher`] is the production implementation, a thin wrapper around a
//! blocking [`reqwest`] client that is built once and reused for every
//! request.

use std::time::Duration;

use log::{debug, trace};

use crate::error::{FetchError, UmlHexError};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from a status code and raw body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the raw body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// A blocking GET transport.
///
/// Implementations must return `Ok` for every response the server sends,
/// whatever its status; `Err` is reserved for exchanges that produced no
/// response at all.
pub trait Fetch {
    /// Performs a single GET request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on connection failures, timeouts or when the
    /// body cannot be read.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

/// [`Fetch`] implementation backed by [`reqwest::blocking::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`UmlHexError::Config`] if `timeout` is zero, and
    /// [`UmlHexError::Client`] if the TLS backend or the client cannot be
    /// initialised.
    pub fn new(timeout: Duration) -> Result<Self, UmlHexError> {
        if timeout.is_zero() {
            return Err(UmlHexError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("umlhex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(timeout:?; "HTTP client ready");

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        trace!(url = url; "Sending GET request");

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        debug!(status = status, body_len = body.len(); "Received response");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "ok").is_success());
        assert!(HttpResponse::new(204, Vec::new()).is_success());
        assert!(!HttpResponse::new(199, Vec::new()).is_success());
        assert!(!HttpResponse::new(301, Vec::new()).is_success());
        assert!(!HttpResponse::new(500, Vec::new()).is_success());
    }

    #[test]
    fn test_body_accessors() {
        let response = HttpResponse::new(200, b"ABC".to_vec());
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"ABC");
    }

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new(Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn test_http_fetcher_accepts_sub_second_timeout() {
        assert!(HttpFetcher::new(Duration::from_millis(250)).is_ok());
    }

    #[test]
    fn test_http_fetcher_rejects_zero_timeout() {
        let err = HttpFetcher::new(Duration::ZERO).unwrap_err();
        assert!(matches!(err, UmlHexError::Config(msg) if msg.contains("timeout")));
    }
}
