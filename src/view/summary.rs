use crate::models::{Issue, SummarySnapshot, TrendDelta, TrendsPayload};

/// Derive the KPI counters from the raw issue list and the server's trend
/// payload. Always consumes the full list, independent of any filters.
///
/// Total by construction: malformed per-record fields were already coerced
/// to "no value" at the deserialization boundary, so no single record can
/// abort the rollup.
pub fn summarize(issues: &[Issue], trends: Option<&TrendsPayload>) -> SummarySnapshot {
    let mut active_issues = 0u64;
    let mut critical_issues = 0u64;
    let mut sla_risk_issues = 0u64;
    let mut complaints_today = 0u64;

    for issue in issues.iter().filter(|issue| issue.is_active()) {
        active_issues += 1;

        if issue.priority_label() == Some("CRITICAL") {
            critical_issues += 1;
        }

        if matches!(issue.sla_risk(), Some("WARNING") | Some("BREACHING")) {
            sla_risk_issues += 1;
        }

        complaints_today += issue.complaint_total() as u64;
    }

    SummarySnapshot {
        active_issues,
        critical_issues,
        sla_risk_issues,
        complaints_today,
        trend: TrendDelta {
            critical_change: trends.and_then(|t| t.critical_change).unwrap_or(0),
            complaints_change: trends.and_then(|t| t.complaints_change).unwrap_or(0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplaintStats, IssueStatus, PriorityField, PriorityInfo, SlaInfo};

    fn issue(id: &str, status: IssueStatus) -> Issue {
        Issue {
            id: id.to_string(),
            hostel: "Block A".to_string(),
            category: "plumbing".to_string(),
            status,
            priority: None,
            severity: None,
            health: None,
            sla: None,
            complaints: None,
            complaint_count: None,
            timestamps: None,
        }
    }

    #[test]
    fn test_active_count_excludes_resolved() {
        let issues = vec![
            issue("1", IssueStatus::Open),
            issue("2", IssueStatus::InProgress),
            issue("3", IssueStatus::Reopened),
            issue("4", IssueStatus::Resolved),
        ];
        let summary = summarize(&issues, None);
        assert_eq!(summary.active_issues, 3);
    }

    #[test]
    fn test_critical_count_supports_both_priority_shapes() {
        let mut enriched = issue("1", IssueStatus::Open);
        enriched.priority = Some(PriorityField::Enriched(PriorityInfo {
            score: Some(91.0),
            label: Some("CRITICAL".to_string()),
        }));

        let mut legacy = issue("2", IssueStatus::Open);
        legacy.priority = Some(PriorityField::Label("CRITICAL".to_string()));

        let mut low = issue("3", IssueStatus::Open);
        low.priority = Some(PriorityField::Label("LOW".to_string()));

        // Resolved criticals don't count
        let mut resolved = issue("4", IssueStatus::Resolved);
        resolved.priority = Some(PriorityField::Label("CRITICAL".to_string()));

        let summary = summarize(&[enriched, legacy, low, resolved], None);
        assert_eq!(summary.critical_issues, 2);
    }

    #[test]
    fn test_sla_risk_counts_warning_and_breaching() {
        let risks = ["OK", "WARNING", "BREACHING"];
        let issues: Vec<Issue> = risks
            .iter()
            .enumerate()
            .map(|(n, risk)| {
                let mut i = issue(&n.to_string(), IssueStatus::Open);
                i.sla = Some(SlaInfo {
                    risk: Some(risk.to_string()),
                    time_remaining_minutes: Some(10),
                    is_breached: Some(*risk == "BREACHING"),
                });
                i
            })
            .collect();
        let summary = summarize(&issues, None);
        assert_eq!(summary.sla_risk_issues, 2);
    }

    #[test]
    fn test_complaints_sum_tolerates_malformed_records() {
        let mut a = issue("1", IssueStatus::Open);
        a.complaints = Some(ComplaintStats {
            total: Some(7),
            unique: Some(5),
            duplicates: Some(2),
        });

        // Legacy flat count only
        let mut b = issue("2", IssueStatus::Open);
        b.complaint_count = Some(3);

        // No counts anywhere: contributes 0, never aborts
        let c = issue("3", IssueStatus::Open);

        // Negative garbage clamps to 0
        let mut d = issue("4", IssueStatus::Open);
        d.complaints = Some(ComplaintStats {
            total: Some(-9),
            unique: None,
            duplicates: None,
        });

        let summary = summarize(&[a, b, c, d], None);
        assert_eq!(summary.complaints_today, 10);
    }

    #[test]
    fn test_trend_relayed_with_defaults() {
        let summary = summarize(&[], None);
        assert_eq!(summary.trend.critical_change, 0);
        assert_eq!(summary.trend.complaints_change, 0);

        let trends = TrendsPayload {
            critical_change: Some(-2),
            complaints_change: Some(5),
            ..Default::default()
        };
        let summary = summarize(&[], Some(&trends));
        assert_eq!(summary.trend.critical_change, -2);
        assert_eq!(summary.trend.complaints_change, 5);
    }

    #[test]
    fn test_empty_list_is_all_zero() {
        assert_eq!(summarize(&[], None), SummarySnapshot::default());
    }
}
