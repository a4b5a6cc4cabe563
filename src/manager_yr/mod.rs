pub mod errors;
mod models;

use std::time::Duration;
use log::info;
use reqwest::Client;
use crate::forecast::RawForecast;
use crate::initialization::YrConfig;
use crate::manager_yr::errors::YrError;
use crate::manager_yr::models::FullForecast;

/// Struct for fetching weather forecasts from MET Norway (yr.no)
pub struct Yr {
    client: Client,
    base_url: String,
    lat: f64,
    long: f64,
}

impl Yr {
    /// Returns a Yr struct ready for fetching forecasts for the configured location
    ///
    /// MET Norway rejects requests without an identifying user agent, and asks for
    /// coordinates with at most 4 decimals.
    ///
    /// # Arguments
    ///
    /// * 'config' - yr section of the configuration
    pub fn new(config: &YrConfig) -> Result<Yr, YrError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            lat: config.lat,
            long: config.long,
        })
    }

    /// Retrieves the complete compact forecast for the configured location.
    /// No filtering is done here, picking days is up to the summarizer.
    ///
    pub async fn new_forecast(&self) -> Result<RawForecast, YrError> {
        let url = format!("{}/compact?lat={:0.4}&lon={:0.4}", self.base_url, self.lat, self.long);

        let req = self.client
            .get(url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(YrError::Status(status));
        }

        let json = req.text().await?;
        let forecast = parse_forecast(&json)?;

        if forecast.timeseries.is_empty() {
            Err(YrError::Document("forecast contains no timeseries".to_string()))
        } else {
            info!("fetched forecast with {} points", forecast.timeseries.len());
            Ok(forecast)
        }
    }
}

/// Parses a compact forecast document into a raw forecast
///
/// # Arguments
///
/// * 'json' - locationforecast compact document
pub fn parse_forecast(json: &str) -> Result<RawForecast, YrError> {
    let full_forecast: FullForecast = serde_json::from_str(json)?;
    Ok(RawForecast::from(full_forecast))
}
