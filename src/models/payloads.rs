use serde::Deserialize;
use std::collections::BTreeMap;

use super::issue::{lenient_count, Issue};
use crate::error::{DashboardError, DashboardResult};

/// Envelope of the priority-issues read. `issues` stays an Option so a
/// null/missing payload is distinguishable from a genuinely empty queue.
#[derive(Debug, Clone, Deserialize)]
pub struct PriorityQueuePayload {
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub issues: Option<Vec<Issue>>,
}

impl PriorityQueuePayload {
    /// A 200 response whose issues payload is missing is a hard error, not an
    /// empty-result success.
    pub fn into_issues(self) -> DashboardResult<Vec<Issue>> {
        self.issues.ok_or_else(|| {
            DashboardError::DataIntegrity("issues payload missing from response".to_string())
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthSummaryPayload {
    #[serde(default)]
    pub total_issues: u64,
    #[serde(default)]
    pub health_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub severity_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub sla_risk_distribution: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlaTimersPayload {
    #[serde(default)]
    pub breaching: Vec<SlaTimerEntry>,
    #[serde(default)]
    pub warning: Vec<SlaTimerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlaTimerEntry {
    pub issue_id: String,
    #[serde(default)]
    pub hostel: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub minutes_overdue: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub minutes_remaining: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendsPayload {
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub critical_change: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub complaints_change: Option<i64>,
    #[serde(default)]
    pub complaints: Option<TrendBucket>,
    #[serde(default)]
    pub new_issues: Option<TrendBucket>,
    #[serde(default)]
    pub resolved_issues: Option<TrendBucket>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendBucket {
    #[serde(default, alias = "count", deserialize_with = "lenient_count")]
    pub total: Option<i64>,
    #[serde(default)]
    pub change_pct: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdatePayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub issue_id: Option<String>,
    #[serde(default)]
    pub new_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_issues_is_data_integrity_error() {
        let payload: PriorityQueuePayload =
            serde_json::from_str(r#"{"generated_at": "2026-08-07T10:00:00", "count": 0, "issues": null}"#)
                .unwrap();
        match payload.into_issues() {
            Err(DashboardError::DataIntegrity(_)) => {}
            other => panic!("expected DataIntegrity, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_missing_issues_is_data_integrity_error() {
        let payload: PriorityQueuePayload = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert!(payload.into_issues().is_err());
    }

    #[test]
    fn test_empty_issues_is_success() {
        let payload: PriorityQueuePayload = serde_json::from_str(r#"{"issues": []}"#).unwrap();
        assert_eq!(payload.into_issues().unwrap().len(), 0);
    }

    #[test]
    fn test_trends_payload_defaults() {
        let trends: TrendsPayload = serde_json::from_str(r#"{"window": "24h"}"#).unwrap();
        assert_eq!(trends.critical_change, None);
        assert_eq!(trends.complaints_change, None);
    }

    #[test]
    fn test_trend_bucket_count_alias() {
        let trends: TrendsPayload = serde_json::from_str(
            r#"{
                "window": "24h",
                "complaints": {"total": 42, "change_pct": 12.5},
                "new_issues": {"count": 7, "change_pct": -3.0}
            }"#,
        )
        .unwrap();
        assert_eq!(trends.complaints.unwrap().total, Some(42));
        assert_eq!(trends.new_issues.unwrap().total, Some(7));
    }
}
