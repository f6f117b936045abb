use clap::ArgMatches;
use colored::*;

use crate::client::DashboardClient;
use crate::config::get_api_base_url;
use crate::constants::ISSUE_FETCH_LIMIT;
use crate::error::DashboardResult;
use crate::filtering::parse_filter_expr;
use crate::models::IssueStatus;
use crate::view::QueueController;
use crate::{dashboard_error, error::DashboardError};

pub async fn handle_queue(matches: &ArgMatches) -> DashboardResult<()> {
    let client = DashboardClient::new(get_api_base_url());

    let limit = matches
        .get_one::<String>("limit")
        .map(|s| s.parse::<u32>())
        .transpose()
        .map_err(|_| dashboard_error!(InvalidInput, "--limit must be a number"))?
        .unwrap_or(ISSUE_FETCH_LIMIT);

    // Server-side pass-through status filter, distinct from --filter
    let status = matches
        .get_one::<String>("status")
        .map(|s| {
            IssueStatus::parse(s).ok_or_else(|| {
                dashboard_error!(
                    InvalidInput,
                    "Invalid status '{}'. Expected OPEN, IN_PROGRESS, RESOLVED or REOPENED",
                    s
                )
            })
        })
        .transpose()?;

    let issues = client.fetch_priority_issues(limit, status).await?;

    let mut controller = QueueController::new();
    if let Some(expr) = matches.get_one::<String>("filter") {
        controller.replace_filters(parse_filter_expr(expr)?);
    }

    if let Some(page) = matches.get_one::<String>("page") {
        let page = page
            .parse::<usize>()
            .map_err(|_| dashboard_error!(InvalidInput, "--page must be a number"))?;
        if !controller.go_to_page(page, &issues) {
            println!("{}", format!("Page {} is out of range; showing page 1.", page).yellow());
        }
    }

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let page = controller.page(&issues);
    crate::formatting::print_queue_page(&page, format);

    Ok(())
}
