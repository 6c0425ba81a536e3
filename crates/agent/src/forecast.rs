//! User-facing forecast replies.

use wayfarer_core::weather::Forecast;

/// One `"<date>: Condition: <text>"` block per day, each followed by a blank line.
pub fn format_forecast(forecast: &Forecast) -> String {
    forecast
        .days
        .iter()
        .map(|day| format!("{}: Condition: {}\n\n", day.date, day.condition))
        .collect()
}

/// Reply for a successful lookup.
pub fn forecast_reply(city: &str, days: u8, forecast: &Forecast) -> String {
    format!(
        "The weather forecast for {city} for the next {days} days:\n{}",
        format_forecast(forecast)
    )
}

/// Reply when no forecast could be retrieved.
pub fn failure_reply(city: &str) -> String {
    format!("Failed to retrieve weather data for {city}.")
}
