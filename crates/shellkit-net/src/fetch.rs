//! HTTP GET of remote resources.

use reqwest::Client as HttpClient;
use shellkit_core::{Result, ToolError};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads resource bodies as raw bytes
#[derive(Clone)]
pub struct Fetcher {
    http: HttpClient,
}

impl Fetcher {
    /// Create a fetcher with default settings
    pub fn new() -> Result<Self> {
        FetcherBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    /// Returns true if the string parses as an http(s) URL
    #[must_use]
    pub fn is_remote(source: &str) -> bool {
        Url::parse(source).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
    }

    /// GET a URL and return the body bytes.
    ///
    /// Only http and https URLs are accepted. Non-success statuses are errors.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = Url::parse(url).map_err(|e| ToolError::invalid("url", url, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ToolError::invalid("url", url, "an http or https URL"));
        }

        debug!(url = %parsed, "GET request");

        let response = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(|e| http_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Http {
                url: url.to_string(),
                message: format!("server returned {status}"),
            });
        }

        let body = response.bytes().await.map_err(|e| http_error(url, &e))?;
        debug!(url, bytes = body.len(), "response received");

        Ok(body.to_vec())
    }
}

fn http_error(url: &str, err: &reqwest::Error) -> ToolError {
    ToolError::Http {
        url: url.to_string(),
        message: err.to_string(),
    }
}

/// Builder for configuring a [`Fetcher`]
pub struct FetcherBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FetcherBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("shellkit/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the fetcher
    pub fn build(self) -> Result<Fetcher> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ToolError::Unsupported(format!("HTTP client unavailable: {e}")))?;

        Ok(Fetcher { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_bytes_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lib.js"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"alert(1);".to_vec()))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let body = fetcher
            .get_bytes(&format!("{}/lib.js", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, b"alert(1);");
    }

    #[tokio::test]
    async fn test_not_found_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/missing.css", server.uri());
        let err = Fetcher::new().unwrap().get_bytes(&url).await.unwrap_err();
        assert!(err.is_external());
        assert!(err.to_string().contains("missing.css"));
    }

    #[tokio::test]
    async fn test_non_http_scheme_rejected() {
        let err = Fetcher::new()
            .unwrap()
            .get_bytes("ftp://example.com/a.js")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_is_remote() {
        assert!(Fetcher::is_remote("https://cdn.example.com/x.js"));
        assert!(Fetcher::is_remote("http://localhost:8080/x.css"));
        assert!(!Fetcher::is_remote("./static/app.js"));
        assert!(!Fetcher::is_remote("C:\\web\\app.js"));
    }
}
