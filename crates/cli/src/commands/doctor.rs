//! `wayfarer doctor` — Diagnose configuration.

use wayfarer_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Wayfarer Doctor — Configuration Diagnostics");
    println!("==============================================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  ✅ Config file found at {}", config_path.display());
    } else {
        println!("  ⚠️  No config file — defaults in use (run `wayfarer onboard`)");
    }

    match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid");
            println!("     Model:     {}", config.model);
            println!("     Endpoint:  {}", config.api_url);
            println!(
                "     Weather:   {} ({} days)",
                config.weather.base_url, config.weather.forecast_days
            );

            for key in config.missing_keys() {
                println!("  ⚠️  {key} not set — add it to config.toml or the environment");
                issues += 1;
            }

            if config.openai_api_key.is_some() {
                let provider = wayfarer_providers::build_from_config(&config);
                match provider.health_check().await {
                    Ok(true) => println!("  ✅ Completion endpoint reachable"),
                    Ok(false) => {
                        println!("  ❌ Completion endpoint rejected the health check");
                        issues += 1;
                    }
                    Err(e) => {
                        println!("  ❌ Completion endpoint unreachable: {e}");
                        issues += 1;
                    }
                }
            }
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
