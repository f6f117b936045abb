use clap::ArgMatches;

use crate::client::DashboardClient;
use crate::config::{get_api_base_url, get_trend_window};
use crate::constants::TREND_WINDOWS;
use crate::error::{DashboardError, DashboardResult};
use crate::formatting::print_trends;
use crate::dashboard_error;

pub async fn handle_trends(matches: &ArgMatches) -> DashboardResult<()> {
    let window = matches
        .get_one::<String>("window")
        .cloned()
        .unwrap_or_else(get_trend_window);

    if !TREND_WINDOWS.contains(&window.as_str()) {
        return Err(dashboard_error!(
            InvalidInput,
            "Invalid window '{}'. Expected one of: {}",
            window,
            TREND_WINDOWS.join(", ")
        ));
    }

    let client = DashboardClient::new(get_api_base_url());
    let trends = client.fetch_trends(&window).await?;
    print_trends(&trends);
    Ok(())
}
