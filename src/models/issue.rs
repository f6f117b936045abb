use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Lifecycle status of an aggregated issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
    Reopened,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Reopened,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "OPEN",
            IssueStatus::InProgress => "IN_PROGRESS",
            IssueStatus::Resolved => "RESOLVED",
            IssueStatus::Reopened => "REOPENED",
        }
    }

    pub fn parse(s: &str) -> Option<IssueStatus> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "OPEN" => Some(IssueStatus::Open),
            "IN_PROGRESS" => Some(IssueStatus::InProgress),
            "RESOLVED" => Some(IssueStatus::Resolved),
            "REOPENED" => Some(IssueStatus::Reopened),
            _ => None,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An aggregated cluster of related complaints sharing hostel + category,
/// enriched server-side with priority/severity/health/SLA signals.
///
/// Every enrichment sub-object may be absent or null; absence means "no value
/// for this dimension", never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "issue_id")]
    pub id: String,
    #[serde(default)]
    pub hostel: String,
    #[serde(default)]
    pub category: String,
    pub status: IssueStatus,
    #[serde(default)]
    pub priority: Option<PriorityField>,
    #[serde(default)]
    pub severity: Option<SeverityInfo>,
    #[serde(default)]
    pub health: Option<HealthInfo>,
    #[serde(default)]
    pub sla: Option<SlaInfo>,
    #[serde(default)]
    pub complaints: Option<ComplaintStats>,
    /// Flat count sent by payloads that predate the complaints block.
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub complaint_count: Option<i64>,
    #[serde(default)]
    pub timestamps: Option<Timestamps>,
}

/// Priority arrives either as the enriched `{score, label}` object or, in
/// legacy payloads, as a bare label string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriorityField {
    Enriched(PriorityInfo),
    Label(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityInfo {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
}

impl PriorityField {
    pub fn label(&self) -> Option<&str> {
        match self {
            PriorityField::Enriched(info) => info.label.as_deref().filter(|l| !l.is_empty()),
            PriorityField::Label(label) => {
                if label.is_empty() {
                    None
                } else {
                    Some(label.as_str())
                }
            }
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            PriorityField::Enriched(info) => info.score,
            PriorityField::Label(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityInfo {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub numeric: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInfo {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaInfo {
    #[serde(default)]
    pub risk: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub time_remaining_minutes: Option<i64>,
    #[serde(default)]
    pub is_breached: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub unique: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub duplicates: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl Issue {
    pub fn is_active(&self) -> bool {
        self.status != IssueStatus::Resolved
    }

    pub fn priority_label(&self) -> Option<&str> {
        self.priority.as_ref().and_then(|p| p.label())
    }

    pub fn priority_score(&self) -> Option<f64> {
        self.priority.as_ref().and_then(|p| p.score())
    }

    pub fn severity_label(&self) -> Option<&str> {
        self.severity
            .as_ref()
            .and_then(|s| s.label.as_deref())
            .filter(|l| !l.is_empty())
    }

    pub fn health_label(&self) -> Option<&str> {
        self.health
            .as_ref()
            .and_then(|h| h.label.as_deref())
            .filter(|l| !l.is_empty())
    }

    pub fn sla_risk(&self) -> Option<&str> {
        self.sla
            .as_ref()
            .and_then(|s| s.risk.as_deref())
            .filter(|r| !r.is_empty())
    }

    pub fn is_breached(&self) -> bool {
        self.sla
            .as_ref()
            .and_then(|s| s.is_breached)
            .unwrap_or(false)
    }

    /// Complaint contribution of this record. Prefers the complaints block,
    /// falls back to the legacy flat count, and bottoms out at 0 so one
    /// malformed record never skews the rollups negative.
    pub fn complaint_total(&self) -> i64 {
        self.complaints
            .as_ref()
            .and_then(|c| c.total)
            .or(self.complaint_count)
            .unwrap_or(0)
            .max(0)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.timestamps.as_ref().and_then(|t| t.created_at.as_deref())
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.timestamps.as_ref().and_then(|t| t.last_updated.as_deref())
    }
}

/// Accepts numbers, numeric strings, or garbage; garbage becomes None rather
/// than failing the whole payload.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_issue(json: &str) -> Issue {
        serde_json::from_str(json).expect("issue should deserialize")
    }

    #[test]
    fn test_enriched_priority_shape() {
        let issue = parse_issue(
            r#"{
                "issue_id": "ISS-001",
                "hostel": "Block A",
                "category": "plumbing",
                "status": "OPEN",
                "priority": {"score": 87.5, "label": "CRITICAL"}
            }"#,
        );
        assert_eq!(issue.priority_label(), Some("CRITICAL"));
        assert_eq!(issue.priority_score(), Some(87.5));
    }

    #[test]
    fn test_legacy_bare_string_priority() {
        let issue = parse_issue(
            r#"{
                "issue_id": "ISS-002",
                "hostel": "Block B",
                "category": "electrical",
                "status": "REOPENED",
                "priority": "CRITICAL"
            }"#,
        );
        assert_eq!(issue.priority_label(), Some("CRITICAL"));
        assert_eq!(issue.priority_score(), None);
    }

    #[test]
    fn test_missing_sub_objects_are_none() {
        let issue = parse_issue(
            r#"{"issue_id": "ISS-003", "hostel": "Block C", "category": "wifi", "status": "IN_PROGRESS"}"#,
        );
        assert!(issue.priority.is_none());
        assert!(issue.severity.is_none());
        assert!(issue.health.is_none());
        assert!(issue.sla.is_none());
        assert_eq!(issue.complaint_total(), 0);
        assert!(issue.created_at().is_none());
    }

    #[test]
    fn test_null_sub_objects_are_none() {
        let issue = parse_issue(
            r#"{
                "issue_id": "ISS-004",
                "hostel": "Block A",
                "category": "mess",
                "status": "OPEN",
                "priority": null,
                "sla": null,
                "complaints": null
            }"#,
        );
        assert!(issue.priority.is_none());
        assert!(issue.sla.is_none());
        assert_eq!(issue.complaint_total(), 0);
    }

    #[test]
    fn test_lenient_counts() {
        let issue = parse_issue(
            r#"{
                "issue_id": "ISS-005",
                "hostel": "Block D",
                "category": "mess",
                "status": "OPEN",
                "complaints": {"total": "12", "unique": "lots", "duplicates": 3.7}
            }"#,
        );
        let complaints = issue.complaints.as_ref().unwrap();
        assert_eq!(complaints.total, Some(12));
        assert_eq!(complaints.unique, None);
        assert_eq!(complaints.duplicates, Some(3));
        assert_eq!(issue.complaint_total(), 12);
    }

    #[test]
    fn test_legacy_flat_complaint_count() {
        let issue = parse_issue(
            r#"{
                "issue_id": "ISS-006",
                "hostel": "Block A",
                "category": "plumbing",
                "status": "OPEN",
                "complaint_count": 5
            }"#,
        );
        assert_eq!(issue.complaint_total(), 5);
    }

    #[test]
    fn test_negative_complaint_total_clamps_to_zero() {
        let issue = parse_issue(
            r#"{
                "issue_id": "ISS-007",
                "hostel": "Block A",
                "category": "plumbing",
                "status": "OPEN",
                "complaints": {"total": -4}
            }"#,
        );
        assert_eq!(issue.complaint_total(), 0);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(IssueStatus::parse("in_progress"), Some(IssueStatus::InProgress));
        assert_eq!(IssueStatus::parse("IN-PROGRESS"), Some(IssueStatus::InProgress));
        assert_eq!(IssueStatus::parse("resolved"), Some(IssueStatus::Resolved));
        assert_eq!(IssueStatus::parse("closed"), None);
    }
}
