// src/core/net.rs
// Blocking HTTP GET. Failures are logged here and surface as `None`.

use reqwest::blocking::Client;
use tracing::{ debug, warn };

use crate::core::html::Markup;
use crate::error::{ FetchError, Result };

/// Anything that can turn a URL into page text.
/// The provided `fetch` adds the failure policy: log, then treat as "no data".
pub trait Fetch {
    fn get_text(&self, url: &str) -> std::result::Result<String, FetchError>;

    fn fetch(&self, url: &str) -> Option<Markup> {
        debug!(url, "GET");
        match self.get_text(url) {
            Ok(body) => Some(Markup::parse(&body)),
            Err(e) => {
                warn!("Fetch failed: {e}");
                None
            }
        }
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Transport defaults only: no custom headers, default timeout.
    pub fn new() -> Result<Self> {
        Ok(Self { client: Client::builder().build()? })
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> std::result::Result<String, FetchError> {
        let http_err = |source| FetchError::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status });
        }
        resp.text().map_err(http_err)
    }
}
