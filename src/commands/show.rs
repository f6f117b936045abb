use clap::ArgMatches;

use crate::client::DashboardClient;
use crate::config::get_api_base_url;
use crate::constants::ISSUE_FETCH_LIMIT;
use crate::dashboard_error;
use crate::error::{DashboardError, DashboardResult};
use crate::formatting::print_single_issue;

/// There is no by-id read on the dashboard service; resolve the id against
/// the fetched queue instead.
pub async fn handle_show(matches: &ArgMatches) -> DashboardResult<()> {
    let issue_id = matches
        .get_one::<String>("issue_id")
        .ok_or_else(|| dashboard_error!(InvalidInput, "issue id is required"))?;

    let client = DashboardClient::new(get_api_base_url());
    let issues = client.fetch_priority_issues(ISSUE_FETCH_LIMIT, None).await?;

    let issue = issues
        .iter()
        .find(|i| i.id == *issue_id)
        .ok_or_else(|| dashboard_error!(InvalidInput, "Issue '{}' not in the queue", issue_id))?;

    print_single_issue(issue);
    Ok(())
}
