//! `wayfarer weather` — Print a forecast without starting a chat.

use wayfarer_agent::forecast;
use wayfarer_config::AppConfig;
use wayfarer_core::weather::ForecastRequest;

pub async fn run(city: String, days: Option<u8>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    if let Some(days) = days {
        config.weather.forecast_days = days;
        config.validate()?;
    }

    let city = city.trim();
    let days = config.weather.forecast_days;
    let client = wayfarer_weather::build_from_config(&config.weather);

    match client.forecast(&ForecastRequest::new(city, days)).await {
        Ok(found) => print!("{}", forecast::forecast_reply(city, days, &found)),
        Err(e) => {
            tracing::warn!(city, "Forecast lookup failed: {e}");
            println!("{}", forecast::failure_reply(city));
        }
    }

    Ok(())
}
