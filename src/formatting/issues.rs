use colored::*;
use std::collections::HashMap;

use super::utils::*;
use crate::models::{Issue, IssueStatus};
use crate::view::PageView;

pub fn format_status_badge(status: IssueStatus) -> ColoredString {
    match status {
        IssueStatus::Open => "OPEN".blue(),
        IssueStatus::InProgress => "IN_PROGRESS".yellow(),
        IssueStatus::Resolved => "RESOLVED".green(),
        IssueStatus::Reopened => "REOPENED".red(),
    }
}

pub fn format_priority_badge(label: Option<&str>) -> ColoredString {
    match label {
        Some("CRITICAL") => "CRITICAL".red().bold(),
        Some("HIGH") => "HIGH".red(),
        Some("MEDIUM") => "MEDIUM".yellow(),
        Some("LOW") => "LOW".normal(),
        Some(other) => other.normal(),
        None => "-".dimmed(),
    }
}

pub fn format_severity_badge(label: Option<&str>) -> ColoredString {
    match label {
        Some("SEV-1") => "SEV-1".red().bold(),
        Some("SEV-2") => "SEV-2".red(),
        Some("SEV-3") => "SEV-3".yellow(),
        Some("SEV-4") => "SEV-4".normal(),
        Some(other) => other.normal(),
        None => "-".dimmed(),
    }
}

pub fn format_health_badge(label: Option<&str>) -> ColoredString {
    match label {
        Some("HEALTHY") => "HEALTHY".green(),
        Some("MONITOR") => "MONITOR".cyan(),
        Some("WARNING") => "WARNING".yellow(),
        Some("CRITICAL") => "CRITICAL".red(),
        Some("EMERGENCY") => "EMERGENCY".red().bold(),
        Some(other) => other.normal(),
        None => "-".dimmed(),
    }
}

pub fn format_sla_badge(risk: Option<&str>) -> ColoredString {
    match risk {
        Some("OK") => "OK".green(),
        Some("WARNING") => "WARNING".yellow(),
        Some("BREACHING") => "BREACHING".red().bold(),
        Some(other) => other.normal(),
        None => "-".dimmed(),
    }
}

pub fn get_priority_indicator(label: Option<&str>) -> ColoredString {
    match label {
        Some("CRITICAL") => "!".red().bold(),
        Some("HIGH") => "!".red(),
        Some("MEDIUM") => "!".yellow(),
        _ => " ".normal(),
    }
}

pub fn print_queue_page(page: &PageView, format: &str) {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&page.items).unwrap_or_default();
            println!("{}", json);
            return;
        }
        "table" => print_table(&page.items),
        _ => print_grouped(&page.items),
    }

    print_page_footer(page);
}

fn print_table(issues: &[&Issue]) {
    if issues.is_empty() {
        println!("{}", "No issues on this page.".dimmed());
        return;
    }

    println!("{}", "─".repeat(120).dimmed());
    println!(
        "{:<14} {:<14} {:<14} {:<13} {:<10} {:<7} {:<10} {:<11} {:>6}  {}",
        "ID".bold(),
        "Hostel".bold(),
        "Category".bold(),
        "Status".bold(),
        "Priority".bold(),
        "Sev".bold(),
        "Health".bold(),
        "SLA".bold(),
        "Compl".bold(),
        "Age".bold()
    );
    println!("{}", "─".repeat(120).dimmed());

    for issue in issues {
        let age = issue
            .created_at()
            .map(format_relative_time)
            .unwrap_or_else(|| "unknown".to_string());

        println!(
            "{:<14} {:<14} {:<14} {:<13} {:<10} {:<7} {:<10} {:<11} {:>6}  {}",
            truncate(&issue.id, 14).blue(),
            truncate(&issue.hostel, 14),
            truncate(&issue.category, 14),
            format_status_badge(issue.status),
            format_priority_badge(issue.priority_label()),
            format_severity_badge(issue.severity_label()),
            format_health_badge(issue.health_label()),
            format_sla_badge(issue.sla_risk()),
            issue.complaint_total(),
            age.dimmed()
        );
    }
    println!("{}", "─".repeat(120).dimmed());
}

fn print_grouped(issues: &[&Issue]) {
    if issues.is_empty() {
        println!("{}", "No issues on this page.".dimmed());
        return;
    }

    let mut grouped: HashMap<&str, Vec<&&Issue>> = HashMap::new();
    for issue in issues {
        grouped.entry(issue.status.as_str()).or_default().push(issue);
    }

    let status_order = ["REOPENED", "OPEN", "IN_PROGRESS", "RESOLVED"];
    for status_name in &status_order {
        if let Some(group) = grouped.get(*status_name) {
            println!("\n{} ({})", status_name.bold(), group.len());
            println!("{}", "─".repeat(50).dimmed());

            for issue in group {
                println!(
                    "{} {} - {} / {} {}",
                    get_priority_indicator(issue.priority_label()),
                    issue.id.blue(),
                    issue.hostel,
                    issue.category.cyan(),
                    format!("({} complaints)", issue.complaint_total()).dimmed()
                );
            }
        }
    }
}

fn print_page_footer(page: &PageView) {
    let numbers: Vec<String> = page
        .window
        .iter()
        .map(|n| {
            if *n == page.current_page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();

    println!(
        "\n{} {} {}",
        format!("Page {}/{}", page.current_page, page.total_pages).bold(),
        numbers.join(" ").cyan(),
        format!("({} matching issues)", page.filtered_count).dimmed()
    );
}

pub fn print_single_issue(issue: &Issue) {
    println!("\n{}", "═".repeat(80).blue());
    println!(
        "{} {} / {}",
        issue.id.blue().bold(),
        issue.hostel.bold(),
        issue.category
    );
    println!("{}", "─".repeat(80).dimmed());

    println!(
        "{}: {} | {}: {} | {}: {}",
        "Status".dimmed(),
        format_status_badge(issue.status),
        "Priority".dimmed(),
        format_priority_badge(issue.priority_label()),
        "Severity".dimmed(),
        format_severity_badge(issue.severity_label())
    );

    println!(
        "{}: {} | {}: {}",
        "Health".dimmed(),
        format_health_badge(issue.health_label()),
        "SLA".dimmed(),
        format_sla_badge(issue.sla_risk())
    );

    if let Some(sla) = &issue.sla {
        if let Some(minutes) = sla.time_remaining_minutes {
            let line = if issue.is_breached() {
                format_minutes(-minutes.abs()).red().to_string()
            } else {
                format_minutes(minutes).normal().to_string()
            };
            println!("{}: {}", "SLA clock".dimmed(), line);
        }
    }

    if let Some(complaints) = &issue.complaints {
        println!(
            "{}: {} total, {} unique, {} duplicates",
            "Complaints".dimmed(),
            complaints.total.unwrap_or(0),
            complaints.unique.unwrap_or(0),
            complaints.duplicates.unwrap_or(0)
        );
    }

    if let Some(created) = issue.created_at() {
        println!(
            "{}: {}",
            "Created".dimmed(),
            format_relative_time(created).dimmed()
        );
    }

    println!("{}", "═".repeat(80).blue());
}
