//! Shared test doubles for the advisor and session tests.

use std::sync::Mutex;
use wayfarer_core::error::{ProviderError, WeatherError};
use wayfarer_core::message::Message;
use wayfarer_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use wayfarer_core::weather::{Forecast, ForecastDay, ForecastRequest, WeatherClient};

/// A mock provider that returns a sequence of scripted results and records
/// every request it receives.
///
/// Panics if more calls are made than results provided.
pub struct ScriptedProvider {
    results: Mutex<Vec<Result<ProviderResponse, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new(results: Vec<Result<ProviderResponse, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider answering every listed turn with the given text.
    pub fn replies(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(make_text_response(t))).collect())
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let mut results = self.results.lock().unwrap();

        if results.is_empty() {
            panic!(
                "ScriptedProvider: no more responses (call #{})",
                requests.len()
            );
        }

        requests.push(request);
        results.remove(0)
    }
}

/// A mock weather client with one canned answer for every city.
pub struct ScriptedWeather {
    forecast: Option<Forecast>,
    requests: Mutex<Vec<ForecastRequest>>,
}

impl ScriptedWeather {
    pub fn returning(forecast: Forecast) -> Self {
        Self {
            forecast: Some(forecast),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every lookup fails.
    pub fn unavailable() -> Self {
        Self {
            forecast: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ForecastRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WeatherClient for ScriptedWeather {
    fn name(&self) -> &str {
        "scripted_weather"
    }

    async fn forecast(&self, request: &ForecastRequest) -> Result<Forecast, WeatherError> {
        self.requests.lock().unwrap().push(request.clone());
        self.forecast.clone().ok_or_else(|| WeatherError::ApiError {
            status_code: 400,
            message: "No matching location found.".into(),
        })
    }
}

/// Create a simple text response.
pub fn make_text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
    }
}

/// The three-day forecast used across tests.
pub fn three_day_forecast() -> Forecast {
    Forecast {
        days: vec![
            ForecastDay::new("2024-01-01", "Sunny"),
            ForecastDay::new("2024-01-02", "Rainy"),
            ForecastDay::new("2024-01-03", "Cloudy"),
        ],
    }
}
