//! HTTP client for GAMCO's closed-end fund NAV API.

use reqwest::StatusCode;
use url::Url;

use crate::{
    decode::decode,
    types::{Fund, FundCollection},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://gabdotcom-api.com";
const NAV_CLOSED_ENDS_PATH: &str = "/api/v1/nav_closed_ends";
const USER_AGENT: &str = concat!("gamco_api/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the `nav_closed_ends` endpoint.
///
/// Every call performs exactly one GET with a freshly built
/// `reqwest::blocking::Client`; nothing is cached or retried. Must not be
/// called from inside an async runtime (use `spawn_blocking` there).
pub struct Client {
    /// Base URL for the API. Defaults to `https://gabdotcom-api.com`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production GAMCO API.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, NAV_CLOSED_ENDS_PATH).as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidUrl(e)
            },
        )
    }

    /// Fetches the raw `nav_closed_ends` body.
    ///
    /// Only `200 OK` counts as success. Any other status yields
    /// [`Error::HttpStatus`] with a truncated body snippet.
    pub fn fetch(&self) -> Result<String, Error> {
        let url = self.get_url()?;
        tracing::debug!("GET {}", url);
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .map_err(|e| {
                tracing::error!("HTTP GET failed: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::ReadBody(e)
        })
    }

    /// Fetches and decodes every published fund, indexed by symbol.
    pub fn get_funds(&self) -> Result<FundCollection, Error> {
        let body = self.fetch()?;
        decode(&body)
    }

    /// Fetches the funds and returns the one published under `symbol`.
    pub fn get_fund(&self, symbol: &str) -> Result<Fund, Error> {
        self.get_funds()?
            .into_fund(symbol)
            .ok_or_else(|| Error::NotFound {
                symbol: symbol.to_string(),
            })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
