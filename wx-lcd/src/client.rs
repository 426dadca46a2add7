//! HTTP client for the remote daily climate CSV.

use crate::error::Result;
use crate::observation::{parse_daily_climate, DailyObservation};
use reqwest::Client;

/// Fixed URL of the SFO daily climate dataset, 2015 through 2020.
pub const DAILY_CLIMATE_CSV_URL: &str = "https://gist.githubusercontent.com/andre6639/d1c2a41f82286e210bfaa2e158117b4a/raw/49de362c1f2762ccd9c1934c3afb850985983d60/SFO_dailyClimate_data_2015thr2020_concise.csv";

/// Fetches and parses the daily climate CSV at `url`.
///
/// One-shot GET with no retry; transport failures propagate to the caller.
///
/// # Arguments
///
/// * `client` - HTTP client (reuse for multiple requests)
/// * `url` - location of the CSV resource, usually [`DAILY_CLIMATE_CSV_URL`]
pub async fn fetch_daily_climate(client: &Client, url: &str) -> Result<Vec<DailyObservation>> {
    log::info!("fetching daily climate data from {}", url);
    let body = http_request_body(client, url).await?;
    parse_daily_climate(&body)
}

async fn http_request_body(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    Ok(response.text().await?)
}
