use clap::{Arg, Command};
use colored::*;
use std::process;

use hostel_desk::commands;
use hostel_desk::interactive;
use hostel_desk::logging::{init_logging, log_error, log_panic_info};

fn build_cli() -> Command {
    Command::new("hdesk")
        .about("Terminal dashboard for the hostel complaint operations queue")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("queue")
                .about("Print the priority issue queue")
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .help("Filter expression, e.g. 'priority:CRITICAL,HIGH hostel:\"Block A\"'"),
                )
                .arg(Arg::new("page").long("page").short('p').help("Page number (20 per page)"))
                .arg(Arg::new("status").long("status").help("Server-side status filter"))
                .arg(Arg::new("limit").long("limit").help("Fetch at most N issues (cap 200)"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["table", "json", "grouped"])
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print one issue from the queue")
                .arg(Arg::new("issue_id").required(true)),
        )
        .subcommand(Command::new("summary").about("Print KPI counters and distributions"))
        .subcommand(Command::new("sla").about("Print the SLA timer feed"))
        .subcommand(
            Command::new("trends")
                .about("Print the trend window payload")
                .arg(Arg::new("window").long("window").short('w').help("1h, 6h, 24h or 7d")),
        )
        .subcommand(
            Command::new("status")
                .about("Update an issue's lifecycle status")
                .arg(Arg::new("issue_id").required(true))
                .arg(Arg::new("new_status").required(true).help("OPEN, IN_PROGRESS, RESOLVED or REOPENED")),
        )
        .subcommand(
            Command::new("config")
                .about("Show or set client configuration")
                .arg(Arg::new("api_url").long("api-url").help("Dashboard server base URL"))
                .arg(Arg::new("trend_window").long("trend-window").help("Default trend window")),
        )
        .subcommand(Command::new("dashboard").about("Interactive dashboard (default)"))
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{} {}", "Warning:".yellow(), format!("logging unavailable: {}", e).dimmed());
    }

    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
    }));

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("queue", sub)) => commands::queue::handle_queue(sub).await,
        Some(("show", sub)) => commands::show::handle_show(sub).await,
        Some(("summary", _)) => commands::summary::handle_summary().await,
        Some(("sla", _)) => commands::sla::handle_sla().await,
        Some(("trends", sub)) => commands::trends::handle_trends(sub).await,
        Some(("status", sub)) => commands::status::handle_status(sub).await,
        Some(("config", sub)) => commands::config::handle_config(sub),
        _ => {
            // No subcommand: launch the interactive dashboard
            if let Err(e) = interactive::run_dashboard().await {
                log_error(&format!("Dashboard error: {}", e));
                eprintln!("{} {}", "Error:".red().bold(), e);
                process::exit(1);
            }
            return;
        }
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
