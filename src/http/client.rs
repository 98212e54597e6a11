//! HTTP client setup and middleware configuration.
//!
//! Every request goes through a [`TracingMiddleware`] so that manifest and clip
//! requests show up as spans. Retries are off by default: a failed manifest
//! request must end the run immediately, and a failed clip is simply reported.
//! Callers of the library may opt into a retry policy with
//! [`HttpClientConfig::retries`].
//!
//! ```rust
//! use soundboard_dl::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

use reqwest::header::HeaderMap;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Number of retries for transient failures. `0` disables the retry layer.
    pub retries: u32,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Creates an HTTP client with middleware configuration.
///
/// Redirects are followed with reqwest's default policy, so the response URL
/// of a clip request is the redirect-resolved one.
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    // Trace HTTP requests. See the tracing crate to make use of these traces.
    let mut builder = ClientBuilder::new(inner_client).with(TracingMiddleware::default());

    if config.retries > 0 {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, USER_AGENT};

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.retries, 0);
        assert!(config.headers.is_none());
    }

    #[test]
    fn test_create_http_client_default() {
        let client = create_http_client(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_http_client_with_retries_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("test-agent"));

        let config = HttpClientConfig {
            retries: 2,
            headers: Some(headers),
        };

        assert!(create_http_client(config).is_ok());
    }
}
