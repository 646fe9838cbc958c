use std::time::Duration;

use futures_util::future::join_all;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use tracing::{debug, warn};

use crate::config::{Config, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};

/// Blocking HTTP session bound to one base URL.
///
/// Connections are released when the session is dropped or [`closed`].
///
/// [`closed`]: HttpClient::close
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    base_url: String,
    raise_status_errors: bool,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, raise_status_errors: bool) -> Result<Self> {
        Self::with_timeout(base_url, raise_status_errors, DEFAULT_TIMEOUT)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.base_url(), config.raise_status_errors, config.timeout)
    }

    fn with_timeout(
        base_url: impl Into<String>,
        raise_status_errors: bool,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: reqwest::blocking::Client::builder()
                .default_headers(default_headers())
                .timeout(timeout)
                .build()?,
            base_url: base_url.into(),
            raise_status_errors,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<reqwest::blocking::Response> {
        let url = join_url(&self.base_url, endpoint);
        debug!(%method, %url, params = params.len(), "sending request");
        let response = self
            .client
            .request(method, &url)
            .query(params)
            .send()?;
        check_status(response.status(), &url, self.raise_status_errors)?;
        Ok(response)
    }

    pub fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<reqwest::blocking::Response> {
        self.request(Method::GET, endpoint, params)
    }

    pub fn close(self) {
        debug!(base_url = %self.base_url, "closing http session");
    }
}

/// Async counterpart of [`HttpClient`]; requests may be in flight concurrently.
#[derive(Clone, Debug)]
pub struct AsyncHttpClient {
    client: reqwest::Client,
    base_url: String,
    raise_status_errors: bool,
}

impl AsyncHttpClient {
    pub fn new(base_url: impl Into<String>, raise_status_errors: bool) -> Result<Self> {
        Self::with_timeout(base_url, raise_status_errors, DEFAULT_TIMEOUT)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.base_url(), config.raise_status_errors, config.timeout)
    }

    fn with_timeout(
        base_url: impl Into<String>,
        raise_status_errors: bool,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(default_headers())
                .timeout(timeout)
                .build()?,
            base_url: base_url.into(),
            raise_status_errors,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response> {
        let url = join_url(&self.base_url, endpoint);
        debug!(%method, %url, params = params.len(), "sending request");
        let response = self
            .client
            .request(method, &url)
            .query(params)
            .send()
            .await?;
        check_status(response.status(), &url, self.raise_status_errors)?;
        Ok(response)
    }

    pub async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<reqwest::Response> {
        self.request(Method::GET, endpoint, params).await
    }

    /// Issues every GET at once and waits for all of them.
    ///
    /// Results come back in the order of `requests`, whatever order the
    /// responses arrived in.
    pub async fn get_all<E: AsRef<str>>(
        &self,
        requests: &[(E, Vec<(&str, String)>)],
    ) -> Vec<Result<reqwest::Response>> {
        join_all(
            requests
                .iter()
                .map(|(endpoint, params)| self.get(endpoint.as_ref(), params)),
        )
        .await
    }

    pub fn close(self) {
        debug!(base_url = %self.base_url, "closing http session");
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

pub(crate) fn check_status(status: StatusCode, url: &str, raise: bool) -> Result<()> {
    if !status.is_client_error() && !status.is_server_error() {
        return Ok(());
    }
    if !raise {
        warn!(%status, %url, "passing through error response");
        return Ok(());
    }
    debug!(%status, %url, "translating error response");
    if status.is_client_error() {
        Err(Error::ClientError {
            status,
            url: url.into(),
        })
    } else {
        Err(Error::ServerError {
            status,
            url: url.into(),
        })
    }
}
