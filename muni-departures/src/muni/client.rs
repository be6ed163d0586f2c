//! 511 Transit HTTP client.
//!
//! One GET per query, authenticated by a token in the query string. The
//! underlying `reqwest::Client` is built once and shared by every call.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::domain::{HumanReadableSchedule, StopCode};

use super::convert::{decode_departures, primary_agency, to_schedules};
use super::error::MuniError;
use super::types::Route;

/// Default base URL for the 511 Transit 2.0 API.
const DEFAULT_BASE_URL: &str = "http://services.my511.org/Transit2.0/";

/// Endpoint appended to the base URL.
const NEXT_DEPARTURES_PATH: &str = "GetNextDeparturesByStopCode.aspx";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the 511 client.
#[derive(Debug, Clone)]
pub struct MuniConfig {
    /// 511 API token
    pub token: String,
    /// Base URL for the API, including the trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MuniConfig {
    /// Create a new config with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 511 next-departures client.
///
/// Cheap to clone; clones share the connection pool. Holds no per-request
/// state, so one instance can serve concurrent queries.
#[derive(Debug, Clone)]
pub struct MuniClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl MuniClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MuniConfig) -> Result<Self, MuniError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::with_http_client(http, config))
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The config's timeout is not applied; the given client's settings win.
    pub fn with_http_client(http: reqwest::Client, config: MuniConfig) -> Self {
        Self {
            http,
            base_url: config.base_url,
            token: config.token,
        }
    }

    /// Request URL for a stop's next departures.
    pub fn departures_url(&self, stop_code: StopCode) -> Result<Url, MuniError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, NEXT_DEPARTURES_PATH))
            .map_err(|e| MuniError::InvalidEndpoint(format!("{}: {e}", self.base_url)))?;

        url.query_pairs_mut()
            .append_pair("stopcode", &stop_code.to_string())
            .append_pair("token", &self.token);

        Ok(url)
    }

    /// Fetch the raw response body for a stop.
    ///
    /// Any non-2xx status is an [`MuniError::ApiError`] carrying the body.
    /// The body is returned undecoded; charset handling is left to
    /// [`decode_departures`].
    pub async fn fetch(&self, stop_code: StopCode) -> Result<Vec<u8>, MuniError> {
        let url = self.departures_url(stop_code)?;

        debug!(stop = %stop_code, "requesting next departures");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MuniError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.bytes().await?.to_vec();

        debug!(stop = %stop_code, bytes = body.len(), "received departures");

        Ok(body)
    }

    /// Get the routes serving a stop, as decoded from the first agency.
    pub async fn next_departures_by_stop_code(
        &self,
        stop_code: StopCode,
    ) -> Result<Vec<Route>, MuniError> {
        let body = self.fetch(stop_code).await?;
        let rtt = decode_departures(&body, stop_code)?;
        let agency = primary_agency(&rtt, stop_code)?;

        Ok(agency.routes().to_vec())
    }

    /// Get human-readable schedules for a stop, sorted by route name
    /// descending.
    pub async fn next(&self, stop_code: StopCode) -> Result<Vec<HumanReadableSchedule>, MuniError> {
        let body = self.fetch(stop_code).await?;
        let rtt = decode_departures(&body, stop_code)?;
        let agency = primary_agency(&rtt, stop_code)?;

        Ok(to_schedules(agency))
    }
}
