use colored::*;
use std::collections::BTreeMap;

use super::utils::{format_minutes, format_trend};
use crate::models::{HealthSummaryPayload, SlaTimersPayload, SummarySnapshot, TrendsPayload};

pub fn print_summary(summary: &SummarySnapshot) {
    println!("\n{}", "Operations summary".bold().blue());
    println!("{}", "═".repeat(60).blue());

    println!(
        "{:<20} {}",
        "Active issues".dimmed(),
        summary.active_issues.to_string().bold()
    );
    println!(
        "{:<20} {}  {}",
        "Critical".dimmed(),
        summary.critical_issues.to_string().red().bold(),
        format_trend(summary.trend.critical_change)
    );
    println!(
        "{:<20} {}",
        "SLA at risk".dimmed(),
        summary.sla_risk_issues.to_string().yellow().bold()
    );
    println!(
        "{:<20} {}  {}",
        "Complaints today".dimmed(),
        summary.complaints_today.to_string().bold(),
        format_trend(summary.trend.complaints_change)
    );
}

pub fn print_distributions(health: &HealthSummaryPayload) {
    println!("\n{}", "Distributions".bold());
    println!("{}", "─".repeat(60).dimmed());
    print_distribution("Health", &health.health_distribution);
    print_distribution("Severity", &health.severity_distribution);
    print_distribution("SLA risk", &health.sla_risk_distribution);
}

fn print_distribution(name: &str, distribution: &BTreeMap<String, u64>) {
    if distribution.is_empty() {
        println!("{:<10} {}", name.dimmed(), "no data".dimmed());
        return;
    }

    let parts: Vec<String> = distribution
        .iter()
        .map(|(label, count)| format!("{} {}", label, count.to_string().bold()))
        .collect();
    println!("{:<10} {}", name.dimmed(), parts.join("  "));
}

pub fn print_sla_feed(timers: &SlaTimersPayload) {
    println!("\n{}", "SLA timers".bold().blue());
    println!("{}", "═".repeat(60).blue());

    if timers.breaching.is_empty() && timers.warning.is_empty() {
        println!("{}", "Nothing breaching or at risk.".green());
        return;
    }

    if !timers.breaching.is_empty() {
        println!("\n{} ({})", "Breaching".red().bold(), timers.breaching.len());
        for entry in &timers.breaching {
            println!(
                "  {} {} / {} [{}] {}",
                entry.issue_id.blue(),
                entry.hostel,
                entry.category.cyan(),
                entry.severity.as_deref().unwrap_or("-"),
                format_minutes(-entry.minutes_overdue.unwrap_or(0).abs()).red()
            );
        }
    }

    if !timers.warning.is_empty() {
        println!("\n{} ({})", "Warning".yellow().bold(), timers.warning.len());
        for entry in &timers.warning {
            println!(
                "  {} {} / {} [{}] {} remaining",
                entry.issue_id.blue(),
                entry.hostel,
                entry.category.cyan(),
                entry.severity.as_deref().unwrap_or("-"),
                format_minutes(entry.minutes_remaining.unwrap_or(0)).yellow()
            );
        }
    }
}

pub fn print_trends(trends: &TrendsPayload) {
    println!(
        "\n{} {}",
        "Trends".bold().blue(),
        trends
            .window
            .as_deref()
            .map(|w| format!("({})", w))
            .unwrap_or_default()
            .dimmed()
    );
    println!("{}", "═".repeat(60).blue());

    print_trend_bucket("Complaints", trends.complaints.as_ref());
    print_trend_bucket("New issues", trends.new_issues.as_ref());
    print_trend_bucket("Resolved", trends.resolved_issues.as_ref());
}

fn print_trend_bucket(name: &str, bucket: Option<&crate::models::TrendBucket>) {
    match bucket {
        Some(bucket) => {
            let change = bucket
                .change_pct
                .map(|pct| {
                    if pct > 0.0 {
                        format!("+{:.1}%", pct).red().to_string()
                    } else if pct < 0.0 {
                        format!("{:.1}%", pct).green().to_string()
                    } else {
                        "0.0%".dimmed().to_string()
                    }
                })
                .unwrap_or_else(|| "-".dimmed().to_string());
            println!(
                "{:<12} {:>6}  {}",
                name.dimmed(),
                bucket.total.unwrap_or(0).to_string().bold(),
                change
            );
        }
        None => println!("{:<12} {}", name.dimmed(), "no data".dimmed()),
    }
}
