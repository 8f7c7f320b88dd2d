//! Retrying JSON fetcher for the card data repository.
//!
//! Every fetch in the pipeline goes through [`FetchClient::fetch_json`]:
//! up to three attempts with a fixed one-second delay in between, then the
//! result degrades to `None` and the caller decides whether that absence
//! is fatal. All failures are retried alike; no distinction is made
//! between transient and permanent errors.

use crate::error::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use std::thread;
use std::time::Duration;

/// Identifying User-Agent sent with every request
const USER_AGENT: &str = "Pokemon-Card-Tracker/1.0";

/// Total attempts per URL before giving up
const MAX_ATTEMPTS: u32 = 3;

/// Delay between attempts
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client with fixed retry behavior.
pub struct FetchClient {
    client: reqwest::blocking::Client,
}

impl FetchClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch JSON from `url` and deserialize it, retrying on any failure.
    ///
    /// Returns `None` once all attempts are exhausted. Each failed attempt
    /// is logged; the retry delay is skipped after the final attempt.
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        for attempt in 1..=MAX_ATTEMPTS {
            match self.fetch_once(url) {
                Ok(value) => return Some(value),
                Err(e) if attempt < MAX_ATTEMPTS => {
                    log::warn!("Retry {} for {}: {}", attempt, url, e);
                    thread::sleep(RETRY_DELAY);
                }
                Err(e) => {
                    log::error!("Failed to fetch {}: {}", url, e);
                }
            }
        }
        None
    }

    /// A single GET attempt. Non-2xx statuses and malformed bodies are
    /// errors like any network failure.
    fn fetch_once<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
