use clap::ArgMatches;
use colored::*;

use crate::config::{get_api_base_url, load_config, save_config};
use crate::constants::TREND_WINDOWS;
use crate::dashboard_error;
use crate::error::{DashboardError, DashboardResult};

pub fn handle_config(matches: &ArgMatches) -> DashboardResult<()> {
    let mut config = load_config();
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("api_url") {
        config.api_base_url = Some(url.trim_end_matches('/').to_string());
        changed = true;
    }

    if let Some(window) = matches.get_one::<String>("trend_window") {
        if !TREND_WINDOWS.contains(&window.as_str()) {
            return Err(dashboard_error!(
                InvalidInput,
                "Invalid window '{}'. Expected one of: {}",
                window,
                TREND_WINDOWS.join(", ")
            ));
        }
        config.trend_window = Some(window.clone());
        changed = true;
    }

    if changed {
        save_config(&config)
            .map_err(|e| dashboard_error!(ConfigError, "Failed to save config: {}", e))?;
        println!("{}", "Configuration saved.".green());
    }

    println!("{}: {}", "Server".dimmed(), get_api_base_url());
    println!(
        "{}: {}",
        "Trend window".dimmed(),
        config.trend_window.as_deref().unwrap_or("24h")
    );

    Ok(())
}
