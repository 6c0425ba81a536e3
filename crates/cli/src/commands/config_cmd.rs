//! `wayfarer config` — Configuration management commands.

use wayfarer_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let missing = config.missing_keys();
            if missing.is_empty() {
                println!("   ✅ All keys present");
            } else {
                println!();
                for key in &missing {
                    println!("   ⚠️  {key} not set");
                }
            }

            println!();
            println!("   Model:        {}", config.model);
            println!("   Temperature:  {}", config.temperature);
            println!("   Forecast:     {} days", config.weather.forecast_days);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    println!("{}", redacted_toml(&config)?);
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}

/// Render `config` as TOML with secrets masked.
fn redacted_toml(config: &AppConfig) -> Result<String, toml::ser::Error> {
    let mut shown = config.clone();
    if shown.openai_api_key.is_some() {
        shown.openai_api_key = Some("[REDACTED]".into());
    }
    if shown.weather.api_key.is_some() {
        shown.weather.api_key = Some("[REDACTED]".into());
    }
    toml::to_string_pretty(&shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_valid() {
        let path = AppConfig::config_dir().join("config.toml");
        assert!(path.to_str().unwrap().contains("config.toml"));
    }

    #[test]
    fn show_masks_secrets() {
        let mut config = AppConfig::default();
        config.openai_api_key = Some("sk-secret".into());
        config.weather.api_key = Some("w-secret".into());

        let rendered = redacted_toml(&config).unwrap();
        assert!(!rendered.contains("sk-secret"));
        assert!(!rendered.contains("w-secret"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("gpt-3.5-turbo"));
    }
}
