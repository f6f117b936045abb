use crate::client::DashboardClient;
use crate::error::DashboardResult;
use crate::logging::{log_error, log_info};
use crate::models::{
    HealthSummaryPayload, Issue, IssueStatus, SlaTimersPayload, SummarySnapshot, TrendsPayload,
};
use crate::view::summary::summarize;

/// The merged result of the four collaborator reads at a point in time.
/// Installed and discarded as a unit; there is no partial snapshot.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub health: HealthSummaryPayload,
    pub issues: Vec<Issue>,
    pub sla: SlaTimersPayload,
    pub trends: TrendsPayload,
}

/// Owns the four-way fetch, the all-or-nothing install, and the derived
/// summary. The auto-refresh timer lives with the mounted view, not here.
pub struct SnapshotOrchestrator {
    client: DashboardClient,
    trend_window: String,
    issue_limit: u32,
    snapshot: Option<DashboardSnapshot>,
    summary: SummarySnapshot,
    error: Option<String>,
    loading: bool,
    refreshing: bool,
    // Fetch generations guard against a stale in-flight response overwriting
    // a newer snapshot when a manual refresh races the timer.
    started_generation: u64,
    finished_generation: u64,
}

impl SnapshotOrchestrator {
    pub fn new(client: DashboardClient, trend_window: String, issue_limit: u32) -> Self {
        Self {
            client,
            trend_window,
            issue_limit,
            snapshot: None,
            summary: SummarySnapshot::default(),
            error: None,
            loading: false,
            refreshing: false,
            started_generation: 0,
            finished_generation: 0,
        }
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn issues(&self) -> &[Issue] {
        self.snapshot
            .as_ref()
            .map(|s| s.issues.as_slice())
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> &SummarySnapshot {
        &self.summary
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn trend_window(&self) -> &str {
        &self.trend_window
    }

    /// Fetch all four reads concurrently and install the merged snapshot.
    /// On failure of any one read the entire snapshot is discarded and a
    /// single categorized message is surfaced.
    ///
    /// `is_refresh` distinguishes the inline refreshing indicator from the
    /// full initial-load skeleton.
    pub async fn fetch_snapshot(&mut self, is_refresh: bool) {
        let generation = self.begin_fetch(is_refresh);
        let outcome = Self::gather(&self.client, &self.trend_window, self.issue_limit).await;
        self.finish_fetch(generation, outcome);
    }

    async fn gather(
        client: &DashboardClient,
        trend_window: &str,
        issue_limit: u32,
    ) -> DashboardResult<DashboardSnapshot> {
        // All four futures settle before the combined result is judged.
        let (health, issues, sla, trends) = tokio::join!(
            client.fetch_health_summary(),
            client.fetch_priority_issues(issue_limit, None),
            client.fetch_sla_timers(),
            client.fetch_trends(trend_window),
        );

        Ok(DashboardSnapshot {
            health: health?,
            issues: issues?,
            sla: sla?,
            trends: trends?,
        })
    }

    fn begin_fetch(&mut self, is_refresh: bool) -> u64 {
        if is_refresh {
            self.refreshing = true;
        } else {
            self.loading = true;
        }
        self.started_generation += 1;
        self.started_generation
    }

    /// Install or discard a completed fetch. Split out from fetch_snapshot
    /// so the state transitions stay exercisable without a live server.
    pub(crate) fn finish_fetch(
        &mut self,
        generation: u64,
        outcome: DashboardResult<DashboardSnapshot>,
    ) {
        self.loading = false;
        self.refreshing = false;

        // A newer fetch already finished; this result is stale.
        if generation <= self.finished_generation {
            return;
        }
        self.finished_generation = generation;

        match outcome {
            Ok(snapshot) => {
                self.summary = summarize(&snapshot.issues, Some(&snapshot.trends));
                self.snapshot = Some(snapshot);
                self.error = None;
                log_info(&format!(
                    "snapshot installed: {} issues",
                    self.issues().len()
                ));
            }
            Err(e) => {
                // Snapshot goes away wholesale; the last good summary is kept.
                self.snapshot = None;
                self.error = Some(e.user_message());
                log_error(&format!("snapshot fetch failed: {}", e));
            }
        }
    }

    /// Speculative local overwrite of one issue's status, applied before the
    /// server confirms. The next completed fetch replaces the list wholesale
    /// and may clobber this; that race is accepted, not reconciled.
    pub fn apply_status_override(&mut self, issue_id: &str, new_status: IssueStatus) -> bool {
        let Some(snapshot) = self.snapshot.as_mut() else {
            return false;
        };
        let Some(issue) = snapshot.issues.iter_mut().find(|i| i.id == issue_id) else {
            return false;
        };
        issue.status = new_status;
        self.summary = summarize(&snapshot.issues, Some(&snapshot.trends));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::models::{ComplaintStats, PriorityField};

    fn orchestrator() -> SnapshotOrchestrator {
        SnapshotOrchestrator::new(
            DashboardClient::new("http://localhost:8000".to_string()),
            "24h".to_string(),
            200,
        )
    }

    fn issue(id: &str, status: IssueStatus) -> Issue {
        Issue {
            id: id.to_string(),
            hostel: "Block A".to_string(),
            category: "plumbing".to_string(),
            status,
            priority: Some(PriorityField::Label("HIGH".to_string())),
            severity: None,
            health: None,
            sla: None,
            complaints: Some(ComplaintStats {
                total: Some(2),
                unique: Some(2),
                duplicates: Some(0),
            }),
            complaint_count: None,
            timestamps: None,
        }
    }

    fn snapshot_with(issues: Vec<Issue>) -> DashboardSnapshot {
        DashboardSnapshot {
            health: HealthSummaryPayload::default(),
            issues,
            sla: SlaTimersPayload::default(),
            trends: TrendsPayload::default(),
        }
    }

    #[test]
    fn test_successful_fetch_installs_and_clears_error() {
        let mut orch = orchestrator();
        let generation = orch.begin_fetch(false);
        assert!(orch.is_loading());

        orch.finish_fetch(generation, Ok(snapshot_with(vec![issue("1", IssueStatus::Open)])));

        assert!(!orch.is_loading());
        assert!(orch.error().is_none());
        assert_eq!(orch.issues().len(), 1);
        assert_eq!(orch.summary().active_issues, 1);
    }

    #[test]
    fn test_failed_fetch_discards_whole_snapshot() {
        let mut orch = orchestrator();
        let g1 = orch.begin_fetch(false);
        orch.finish_fetch(g1, Ok(snapshot_with(vec![issue("1", IssueStatus::Open)])));
        assert!(orch.snapshot().is_some());

        let g2 = orch.begin_fetch(true);
        orch.finish_fetch(
            g2,
            Err(DashboardError::DataIntegrity("issues payload missing".into())),
        );

        // All four parts gone, no partial update
        assert!(orch.snapshot().is_none());
        assert!(orch.issues().is_empty());
        assert_eq!(
            orch.error(),
            Some("No data received from the server. Please retry.")
        );
        // Last good summary is retained
        assert_eq!(orch.summary().active_issues, 1);
    }

    #[test]
    fn test_refresh_flag_selects_indicator() {
        let mut orch = orchestrator();
        let generation = orch.begin_fetch(true);
        assert!(orch.is_refreshing());
        assert!(!orch.is_loading());
        orch.finish_fetch(generation, Ok(snapshot_with(vec![])));
        assert!(!orch.is_refreshing());
    }

    #[test]
    fn test_stale_fetch_never_overwrites_newer() {
        let mut orch = orchestrator();
        let old_generation = orch.begin_fetch(true);
        let new_generation = orch.begin_fetch(true);

        orch.finish_fetch(
            new_generation,
            Ok(snapshot_with(vec![issue("new", IssueStatus::Open)])),
        );
        orch.finish_fetch(
            old_generation,
            Ok(snapshot_with(vec![issue("old", IssueStatus::Open)])),
        );

        assert_eq!(orch.issues().len(), 1);
        assert_eq!(orch.issues()[0].id, "new");
    }

    #[test]
    fn test_status_override_is_local_and_updates_summary() {
        let mut orch = orchestrator();
        let generation = orch.begin_fetch(false);
        orch.finish_fetch(
            generation,
            Ok(snapshot_with(vec![
                issue("1", IssueStatus::Open),
                issue("2", IssueStatus::Open),
            ])),
        );
        assert_eq!(orch.summary().active_issues, 2);

        assert!(orch.apply_status_override("1", IssueStatus::Resolved));
        assert_eq!(orch.summary().active_issues, 1);
        assert_eq!(orch.issues()[0].status, IssueStatus::Resolved);

        assert!(!orch.apply_status_override("missing", IssueStatus::Resolved));
    }
}
