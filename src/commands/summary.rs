use colored::*;
use std::process;

use crate::client::DashboardClient;
use crate::config::{get_api_base_url, get_trend_window};
use crate::constants::ISSUE_FETCH_LIMIT;
use crate::error::DashboardResult;
use crate::formatting::{print_distributions, print_summary};
use crate::view::SnapshotOrchestrator;

pub async fn handle_summary() -> DashboardResult<()> {
    let client = DashboardClient::new(get_api_base_url());
    let mut orchestrator =
        SnapshotOrchestrator::new(client, get_trend_window(), ISSUE_FETCH_LIMIT);

    orchestrator.fetch_snapshot(false).await;

    // All-or-nothing: any failed read leaves no snapshot and one message
    if let Some(message) = orchestrator.error() {
        eprintln!("{}", message.red());
        process::exit(1);
    }

    print_summary(orchestrator.summary());
    if let Some(snapshot) = orchestrator.snapshot() {
        print_distributions(&snapshot.health);
        println!(
            "\n{}",
            format!("{} issues in queue", snapshot.issues.len()).dimmed()
        );
    }

    Ok(())
}
