//! The trip advisor turn handler.

use std::sync::Arc;
use tracing::{debug, info, warn};
use wayfarer_config::AppConfig;
use wayfarer_core::message::Message;
use wayfarer_core::provider::{Provider, ProviderRequest};
use wayfarer_core::state::SessionState;
use wayfarer_core::weather::{ForecastRequest, WeatherClient};

use crate::context::truncate_context;
use crate::error::TurnError;
use crate::forecast;
use crate::router::{self, Intent};

/// Answers one turn at a time: updates the session state, then replies with
/// a forecast or with the completion provider's answer.
pub struct TripAdvisor {
    /// Completion backend for general chat
    provider: Arc<dyn Provider>,

    /// Forecast backend for weather turns
    weather: Arc<dyn WeatherClient>,

    model: String,
    temperature: f32,
    system_prompt: String,

    /// Days requested per forecast
    forecast_days: u8,
}

impl TripAdvisor {
    pub fn new(
        provider: Arc<dyn Provider>,
        weather: Arc<dyn WeatherClient>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            weather,
            model: model.into(),
            temperature: 0.7,
            system_prompt: wayfarer_config::DEFAULT_SYSTEM_PROMPT.into(),
            forecast_days: 10,
        }
    }

    /// Build an advisor with the model, prompt, and forecast settings from `config`.
    pub fn from_config(
        config: &AppConfig,
        provider: Arc<dyn Provider>,
        weather: Arc<dyn WeatherClient>,
    ) -> Self {
        Self::new(provider, weather, &config.model)
            .with_temperature(config.temperature)
            .with_system_prompt(&config.system_prompt)
            .with_forecast_days(config.weather.forecast_days)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Handle the latest message in `history`.
    ///
    /// `state` is updated in place before any network call, so a failed
    /// completion still leaves this turn's key point and preferences behind.
    pub async fn on_message(
        &self,
        mut history: Vec<Message>,
        state: &mut SessionState,
    ) -> Result<String, TurnError> {
        let latest = history
            .last()
            .map(|m| m.content.clone())
            .ok_or(TurnError::EmptyHistory)?;

        match router::route(state, &latest) {
            Intent::Weather { city } => return Ok(self.weather_reply(&city).await),
            Intent::Chat => {}
        }

        let dropped = truncate_context(&mut history, state.key_points.len());

        info!(
            messages = history.len(),
            dropped,
            key_points = state.key_points.len(),
            model = %self.model,
            "Forwarding turn to completion provider"
        );

        let request = ProviderRequest::new(&self.model, &self.system_prompt, history)
            .with_temperature(self.temperature);
        let response = self.provider.complete(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                model = %response.model,
                total_tokens = usage.total_tokens,
                "Completion received"
            );
        }

        Ok(response.message.content)
    }

    /// Look up `city` and render the reply. Lookup failures become the failure sentence.
    pub async fn weather_reply(&self, city: &str) -> String {
        let request = ForecastRequest::new(city, self.forecast_days);

        match self.weather.forecast(&request).await {
            Ok(found) => {
                info!(city, days = found.days.len(), "Forecast retrieved");
                forecast::forecast_reply(city, self.forecast_days, &found)
            }
            Err(e) => {
                warn!(city, client = self.weather.name(), "Forecast lookup failed: {e}");
                forecast::failure_reply(city)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MAX_CONTEXT_LENGTH, context_length};
    use crate::test_helpers::{ScriptedProvider, ScriptedWeather, three_day_forecast};
    use wayfarer_core::error::ProviderError;
    use wayfarer_core::message::Role;
    use wayfarer_core::state::TripPreference;

    fn advisor(provider: &Arc<ScriptedProvider>, weather: &Arc<ScriptedWeather>) -> TripAdvisor {
        TripAdvisor::new(provider.clone(), weather.clone(), "gpt-3.5-turbo")
    }

    #[tokio::test]
    async fn empty_history_is_an_error() {
        let provider = Arc::new(ScriptedProvider::replies(&[]));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut state = SessionState::new();

        let err = advisor(&provider, &weather)
            .on_message(vec![], &mut state)
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::EmptyHistory));
        assert_eq!(state, SessionState::default());
    }

    #[tokio::test]
    async fn weather_success_formats_forecast() {
        let provider = Arc::new(ScriptedProvider::replies(&[]));
        let weather = Arc::new(ScriptedWeather::returning(three_day_forecast()));
        let mut state = SessionState::new();

        let reply = advisor(&provider, &weather)
            .on_message(vec![Message::user("weather Paris")], &mut state)
            .await
            .unwrap();

        assert_eq!(
            reply,
            "The weather forecast for Paris for the next 10 days:\n\
             2024-01-01: Condition: Sunny\n\n\
             2024-01-02: Condition: Rainy\n\n\
             2024-01-03: Condition: Cloudy\n\n"
        );
        assert_eq!(weather.requests(), [ForecastRequest::new("Paris", 10)]);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(state.key_points, ["weather paris"]);
    }

    #[tokio::test]
    async fn weather_failure_names_city_and_skips_completion() {
        let provider = Arc::new(ScriptedProvider::replies(&[]));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut state = SessionState::new();

        let reply = advisor(&provider, &weather)
            .on_message(vec![Message::user("weather Atlantis")], &mut state)
            .await
            .unwrap();

        assert_eq!(reply, "Failed to retrieve weather data for Atlantis.");
        assert_eq!(provider.call_count(), 0);
        assert_eq!(weather.requests().len(), 1);
    }

    #[tokio::test]
    async fn forecast_days_come_from_builder() {
        let provider = Arc::new(ScriptedProvider::replies(&[]));
        let weather = Arc::new(ScriptedWeather::returning(three_day_forecast()));
        let mut state = SessionState::new();

        let reply = advisor(&provider, &weather)
            .with_forecast_days(3)
            .on_message(vec![Message::user("Weather Rome")], &mut state)
            .await
            .unwrap();

        assert!(reply.starts_with("The weather forecast for Rome for the next 3 days:"));
        assert_eq!(weather.requests()[0].days, 3);
    }

    #[tokio::test]
    async fn chat_calls_provider_once_with_system_prompt() {
        let provider = Arc::new(ScriptedProvider::replies(&["How about Porto?"]));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut state = SessionState::new();

        let reply = advisor(&provider, &weather)
            .with_system_prompt("Be brief.")
            .with_temperature(0.3)
            .on_message(vec![Message::user("Where should I go in May?")], &mut state)
            .await
            .unwrap();

        assert_eq!(reply, "How about Porto?");
        assert_eq!(provider.call_count(), 1);
        assert!(weather.requests().is_empty());

        let request = &provider.requests()[0];
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert!((request.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, "Be brief.");
        assert_eq!(request.messages[1].content, "Where should I go in May?");
    }

    #[tokio::test]
    async fn chat_history_is_truncated_before_completion() {
        let provider = Arc::new(ScriptedProvider::replies(&["ok"]));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut state = SessionState::new();

        let mut history: Vec<Message> = (0..5).map(|_| Message::user("x".repeat(1000))).collect();
        history.push(Message::user("and what about trains?"));

        advisor(&provider, &weather)
            .on_message(history, &mut state)
            .await
            .unwrap();

        let request = &provider.requests()[0];
        let sent = &request.messages[1..];
        assert!(context_length(sent, state.key_points.len()) <= MAX_CONTEXT_LENGTH);
        assert_eq!(sent.len(), 5);
        assert_eq!(sent.last().unwrap().content, "and what about trains?");
    }

    #[tokio::test]
    async fn reset_turn_clears_prior_trip() {
        let provider = Arc::new(ScriptedProvider::replies(&["Sure!"]));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut state = SessionState::new();
        state.push_key_point("my destination is rome");
        state.set_preference(TripPreference::Destination, "my  is rome");

        advisor(&provider, &weather)
            .on_message(vec![Message::user("let's start a trip")], &mut state)
            .await
            .unwrap();

        assert!(state.trip_preferences.is_empty());
        assert_eq!(state.key_points, ["let's start a trip"]);
    }

    #[tokio::test]
    async fn preference_turn_stores_value_and_still_chats() {
        let provider = Arc::new(ScriptedProvider::replies(&["Paris is lovely."]));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut state = SessionState::new();

        let reply = advisor(&provider, &weather)
            .on_message(vec![Message::user("my destination is Paris")], &mut state)
            .await
            .unwrap();

        assert_eq!(reply, "Paris is lovely.");
        assert_eq!(
            state.preference(TripPreference::Destination),
            Some("my  is paris")
        );
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn completion_failure_propagates_but_keeps_state() {
        let provider = Arc::new(ScriptedProvider::failing(ProviderError::Network(
            "connection reset".into(),
        )));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut state = SessionState::new();

        let err = advisor(&provider, &weather)
            .on_message(vec![Message::user("budget 900")], &mut state)
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::Completion(ProviderError::Network(_))));
        assert_eq!(state.key_points, ["budget 900"]);
        assert_eq!(state.preference(TripPreference::Budget), Some("900"));
    }

    #[test]
    fn from_config_applies_settings() {
        let provider = Arc::new(ScriptedProvider::replies(&[]));
        let weather = Arc::new(ScriptedWeather::unavailable());
        let mut config = AppConfig::default();
        config.model = "gpt-4o-mini".into();
        config.weather.forecast_days = 5;

        let advisor = TripAdvisor::from_config(&config, provider, weather);
        assert_eq!(advisor.model(), "gpt-4o-mini");
        assert_eq!(advisor.forecast_days, 5);
        assert_eq!(advisor.system_prompt, config.system_prompt);
    }
}
