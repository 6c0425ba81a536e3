//! WeatherClient trait — the abstraction over forecast lookups.
//!
//! A WeatherClient resolves a city name into a per-day forecast. Any failure
//! (transport, status, payload) is reported as a [`WeatherError`]; callers
//! treat every error as "no data".

use crate::error::WeatherError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A forecast lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Free-text city name as typed by the user
    pub city: String,

    /// Number of forecast days to request
    pub days: u8,
}

impl ForecastRequest {
    pub fn new(city: impl Into<String>, days: u8) -> Self {
        Self {
            city: city.into(),
            days,
        }
    }
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Date as reported by the provider (e.g. "2024-01-01")
    pub date: String,

    /// Human-readable condition (e.g. "Sunny")
    pub condition: String,
}

impl ForecastDay {
    pub fn new(date: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            condition: condition.into(),
        }
    }
}

/// A multi-day forecast, chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub days: Vec<ForecastDay>,
}

/// The weather lookup seam.
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// A human-readable name for this client (e.g., "weatherapi").
    fn name(&self) -> &str;

    /// Fetch the forecast for a city.
    async fn forecast(
        &self,
        request: &ForecastRequest,
    ) -> std::result::Result<Forecast, WeatherError>;
}
