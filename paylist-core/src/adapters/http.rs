//! Payments API client
//!
//! Talks to the remote payments API for contacts, cards and transfers.
//! Every collection endpoint returns a single JSON object wrapping the list:
//!
//! - `GET /contacts`  -> `{ "contacts": [...] }`
//! - `GET /cards`     -> `{ "cards": [...] }`
//! - `GET /transfers` -> `{ "transfers": [...] }`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::{Card, Contact, Transfer};
use crate::ports::{CardsSource, ContactsSource, TransfersSource};

// =============================================================================
// API Response Models
// =============================================================================

#[derive(Debug, Deserialize)]
struct ContactsResponse {
    contacts: Vec<Contact>,
}

#[derive(Debug, Deserialize)]
struct CardsResponse {
    cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct TransfersResponse {
    transfers: Vec<Transfer>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

// =============================================================================
// HTTP Client
// =============================================================================

/// Default production API URL
pub const PAYMENTS_PRODUCTION_URL: &str = "https://api.paylist.app/v1";

/// Environment variable to override the payments API base URL.
pub const PAYMENTS_BASE_URL_ENV: &str = "PAYLIST_API_BASE_URL";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Payments API client
#[derive(Debug, Clone)]
pub struct PaymentsApiClient {
    client: Client,
    base_url: Url,
}

impl PaymentsApiClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // A trailing slash makes Url::join append instead of replacing the last segment
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::Config(format!("invalid API base URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(map_request_error)?;

        let response = check_response_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| Error::source_failure(format!("unexpected response from {}: {}", path, e)))
    }
}

/// Map transport errors to user-facing network errors
fn map_request_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::network("request timed out")
    } else if e.is_connect() {
        Error::network("could not connect to the payments API")
    } else {
        Error::network(e.to_string())
    }
}

/// Turn a non-success status into a source error, keeping the API's message
async fn check_response_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .ok();

    let summary = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "access denied".to_string(),
        StatusCode::NOT_FOUND => "endpoint not found".to_string(),
        StatusCode::TOO_MANY_REQUESTS => "rate limited".to_string(),
        s if s.is_server_error() => format!("server error ({})", s.as_u16()),
        s => format!("HTTP {}", s.as_u16()),
    };

    Err(Error::source_failure(match detail {
        Some(detail) => format!("{}: {}", summary, detail),
        None => summary,
    }))
}

#[async_trait]
impl ContactsSource for PaymentsApiClient {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>> {
        let body: ContactsResponse = self.get_json("contacts").await?;
        Ok(body.contacts)
    }
}

#[async_trait]
impl CardsSource for PaymentsApiClient {
    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        let body: CardsResponse = self.get_json("cards").await?;
        Ok(body.cards)
    }
}

#[async_trait]
impl TransfersSource for PaymentsApiClient {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>> {
        let body: TransfersResponse = self.get_json("transfers").await?;
        Ok(body.transfers)
    }
}
