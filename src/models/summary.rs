use serde::{Deserialize, Serialize};

/// KPI counters derived from the raw issue list plus the server's trend
/// payload. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub active_issues: u64,
    pub critical_issues: u64,
    pub sla_risk_issues: u64,
    pub complaints_today: u64,
    pub trend: TrendDelta,
}

/// Deltas relayed from the trend read; the client never computes its own
/// historical changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendDelta {
    pub critical_change: i64,
    pub complaints_change: i64,
}
