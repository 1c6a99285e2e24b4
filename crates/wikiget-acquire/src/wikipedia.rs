use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use wikiget_model::PageReference;

const USER_AGENT: &str = concat!(
    "wikiget/",
    env!("CARGO_PKG_VERSION"),
    " (rendered Wikipedia page fetcher)"
);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("API returned error '{code}': {info}")]
    Remote { code: String, info: String },

    #[error("response has no parse.text field")]
    MissingText,
}

/// `action=parse` response body with `formatversion=2`.
#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    error: Option<RemoteError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

/// Build the `parse` API request URL for a page.
///
/// The title is query-encoded, so names with spaces, `&` or `+` reach the
/// API intact.
pub fn api_url(page: &PageReference) -> Result<Url> {
    let endpoint = format!("https://{}.wikipedia.org/w/api.php", page.lang);
    let title = page.title();
    Url::parse_with_params(
        &endpoint,
        &[
            ("action", "parse"),
            ("page", title.as_str()),
            ("prop", "text"),
            ("formatversion", "2"),
            ("format", "json"),
        ],
    )
    .with_context(|| format!("Cannot build API URL for language '{}'", page.lang))
}

/// Pull the rendered HTML out of a `parse` response body.
pub fn extract_html(body: &str) -> Result<String, ApiError> {
    let response: ParseResponse = serde_json::from_str(body)?;
    if let Some(err) = response.error {
        return Err(ApiError::Remote {
            code: err.code,
            info: err.info,
        });
    }
    response
        .parse
        .and_then(|p| p.text)
        .ok_or(ApiError::MissingText)
}

/// Client for the Wikipedia `parse` endpoint of any language edition.
pub struct WikiClient {
    http: reqwest::Client,
}

impl WikiClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    /// Fetch the rendered HTML of one page. Single attempt, no retry.
    pub async fn fetch_page(&self, page: &PageReference) -> Result<String> {
        let url = api_url(page)?;
        tracing::debug!(url = %url, "Requesting page");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| {
                format!(
                    "Unable to fetch '{}' ({}) from the remote server",
                    page.name, page.lang
                )
            })?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        tracing::debug!(bytes = body.len(), "Received response");

        extract_html(&body)
            .with_context(|| format!("Unexpected response for '{}' ({})", page.name, page.lang))
    }
}
