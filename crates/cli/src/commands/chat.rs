//! `wayfarer chat` — Interactive or single-message chat mode.

use wayfarer_agent::{Session, TripAdvisor};
use wayfarer_channels::{BOT_PREFIX, CliChannel};
use wayfarer_config::AppConfig;
use wayfarer_core::channel::Channel;

/// Typed in chat to print the current session state.
const STATE_COMMAND: &str = "/state";

pub async fn run(message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let missing = config.missing_keys();
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(", "),
            "API keys not configured; lookups will fail until they are set"
        );
    }

    let provider = wayfarer_providers::build_from_config(&config);
    let weather = wayfarer_weather::build_from_config(&config.weather);
    let advisor = TripAdvisor::from_config(&config, provider, weather);
    let mut session = Session::new(advisor);

    if let Some(msg) = message {
        // Single message mode
        let reply = session.turn(&msg).await?;
        println!("{reply}");
        return Ok(());
    }

    // Interactive mode
    println!("Welcome to the Trip Advisor Chatbot! Type 'exit' or 'quit' to leave.");
    println!("Model: {}  ·  '{STATE_COMMAND}' shows what I remember.", config.model);
    println!();

    let channel = CliChannel::new();
    let mut rx = channel
        .start()
        .await
        .map_err(|e| format!("Channel error: {e}"))?;

    channel.prompt();

    while let Some(result) = rx.recv().await {
        match result {
            Ok(chan_msg) => {
                if chan_msg.content == STATE_COMMAND {
                    println!("{}", serde_json::to_string_pretty(session.state())?);
                } else {
                    match session.turn(&chan_msg.content).await {
                        Ok(reply) => channel.send(&reply).await?,
                        Err(e) => eprintln!("[Error] {e}"),
                    }
                }
                channel.prompt();
            }
            Err(e) => {
                eprintln!("[Channel Error] {e}");
                break;
            }
        }
    }

    println!();
    println!("{BOT_PREFIX} Goodbye! Enjoy your trip.");
    tracing::debug!(turns = session.turns(), "Chat session ended");

    Ok(())
}
