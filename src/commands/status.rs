use clap::ArgMatches;
use colored::*;

use crate::client::DashboardClient;
use crate::config::get_api_base_url;
use crate::dashboard_error;
use crate::error::{DashboardError, DashboardResult};

use crate::models::IssueStatus;

pub async fn handle_status(matches: &ArgMatches) -> DashboardResult<()> {
    let issue_id = matches
        .get_one::<String>("issue_id")
        .ok_or_else(|| dashboard_error!(InvalidInput, "issue id is required"))?;

    let status_arg = matches
        .get_one::<String>("new_status")
        .ok_or_else(|| dashboard_error!(InvalidInput, "new status is required"))?;

    let new_status = IssueStatus::parse(status_arg).ok_or_else(|| {
        dashboard_error!(
            InvalidInput,
            "Invalid status '{}'. Expected OPEN, IN_PROGRESS, RESOLVED or REOPENED",
            status_arg
        )
    })?;

    let client = DashboardClient::new(get_api_base_url());
    let result = client.update_status(issue_id, new_status).await?;

    println!(
        "{} {} → {}",
        "Updated".green().bold(),
        result.issue_id.as_deref().unwrap_or(issue_id).blue(),
        result.new_status.as_deref().unwrap_or(new_status.as_str())
    );

    Ok(())
}
