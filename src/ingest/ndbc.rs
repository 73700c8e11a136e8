/// NDBC station page retrieval.
///
/// One blocking GET per requested reading kind; no retries and no caching.
/// A non-2xx status is terminal for the invocation. Connection and read
/// timeouts live on the client, not in the scraping core.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::model::NdbcError;
use crate::stations::station_url;

const USER_AGENT: &str = concat!("buoymon/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared blocking HTTP client.
pub fn build_client() -> Result<Client, NdbcError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| NdbcError::Request(e.to_string()))
}

/// Fetches the raw status page body for a station.
///
/// # Errors
/// - `EmptyStationId` when the id is blank after trimming.
/// - `HttpStatus` on any non-2xx response.
/// - `Request` on transport failures.
pub fn fetch_station_page(client: &Client, station_id: &str) -> Result<String, NdbcError> {
    if station_id.trim().is_empty() {
        return Err(NdbcError::EmptyStationId);
    }

    let url = station_url(station_id);
    let response = client.get(&url).send()?;

    if !response.status().is_success() {
        return Err(NdbcError::HttpStatus(response.status().as_u16()));
    }

    Ok(response.text()?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_station_id_is_rejected_before_any_request() {
        let client = build_client().expect("client should build");
        assert_eq!(
            fetch_station_page(&client, "   "),
            Err(NdbcError::EmptyStationId)
        );
    }

    #[test]
    #[ignore] // Don't run in CI - depends on external API
    fn station_page_fetch_returns_conditions_table() {
        let client = build_client().expect("client should build");
        let body = fetch_station_page(&client, "46053").expect("live fetch should succeed");
        assert!(
            body.contains("Conditions at"),
            "station page should carry a conditions caption"
        );
    }
}
