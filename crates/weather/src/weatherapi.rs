//! weatherapi.com forecast client.
//!
//! Issues `GET {base_url}/forecast.json?key=..&q=..&days=..&aqi=no&alerts=no`
//! and keeps only what the advisor renders: the date and condition text of
//! each forecast day.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use wayfarer_core::error::WeatherError;
use wayfarer_core::weather::{Forecast, ForecastDay, ForecastRequest};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Forecast client backed by weatherapi.com.
pub struct WeatherApiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl WeatherApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: http_client(DEFAULT_TIMEOUT),
        }
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }

    /// Parse a `forecast.json` body.
    fn parse_forecast(body: &str) -> std::result::Result<Forecast, WeatherError> {
        let api: ApiForecastResponse = serde_json::from_str(body)
            .map_err(|e| WeatherError::InvalidPayload(e.to_string()))?;

        let days = api
            .forecast
            .forecastday
            .into_iter()
            .map(|d| ForecastDay {
                date: d.date,
                condition: d.day.condition.text,
            })
            .collect();

        Ok(Forecast { days })
    }

    /// Pull the provider's message out of an error body, falling back to the raw text.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ApiErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string())
    }
}

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[async_trait]
impl wayfarer_core::WeatherClient for WeatherApiClient {
    fn name(&self) -> &str {
        "weatherapi"
    }

    async fn forecast(
        &self,
        request: &ForecastRequest,
    ) -> std::result::Result<Forecast, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = request.days.to_string();

        debug!(city = %request.city, days = request.days, "Requesting forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", request.city.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = Self::error_message(&body);
            warn!(status = status.as_u16(), %message, "Weather API returned error");
            return Err(WeatherError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        Self::parse_forecast(&body)
    }
}

// --- weatherapi.com types (internal) ---

#[derive(Debug, Deserialize)]
struct ApiForecastResponse {
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: String,
    day: ApiDay,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
