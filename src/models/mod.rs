pub mod issue;
pub mod payloads;
pub mod summary;

pub use issue::{
    ComplaintStats, HealthInfo, Issue, IssueStatus, PriorityField, PriorityInfo, SeverityInfo,
    SlaInfo, Timestamps,
};
pub use payloads::{
    HealthSummaryPayload, PriorityQueuePayload, SlaTimerEntry, SlaTimersPayload,
    StatusUpdatePayload, TrendBucket, TrendsPayload,
};
pub use summary::{SummarySnapshot, TrendDelta};
