//! reqwest client setup.

use reqwest::Url;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Path of the status endpoint.
pub const STATUS_PATH: &str = "/data";

/// Path of the clear-data endpoint.
pub const CLEAR_PATH: &str = "/clear-data";

/// Path of the CSV export endpoint.
pub const EXPORT_PATH: &str = "/download-data";

const USER_AGENT: &str = concat!("trapcam/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP adapter.
pub struct Config {
    /// Backend root (e.g. `http://station.local:5000`).
    pub base_url: String,
}

impl Config {
    /// Build an [`HttpBackend`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// `http`/`https` URL, or [`HttpError::Request`] if the client cannot be
    /// created.
    pub fn build(self) -> Result<HttpBackend, HttpError> {
        let parsed =
            Url::parse(&self.base_url).map_err(|_| HttpError::InvalidBaseUrl(self.base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpError::InvalidBaseUrl(self.base_url));
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(HttpBackend {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Client for the station backend.
///
/// Implements [`ImageSource`](trapcam_app::ports::ImageSource),
/// [`StatusSource`](trapcam_app::ports::StatusSource) and
/// [`AdminGateway`](trapcam_app::ports::AdminGateway).
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Absolute URL for a backend path such as `/data` or `images`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// GET `path` and decode the JSON body; non-2xx answers are errors.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = self.url(path);
        tracing::trace!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status { url, status });
        }
        Ok(response.json().await?)
    }
}
