use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::constants::{
    HEALTH_SUMMARY_PATH, ISSUE_FETCH_LIMIT, PRIORITY_ISSUES_PATH, SLA_TIMERS_PATH, TRENDS_PATH,
};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    HealthSummaryPayload, Issue, IssueStatus, PriorityQueuePayload, SlaTimersPayload,
    StatusUpdatePayload, TrendsPayload,
};

pub struct DashboardClient {
    client: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Shared GET helper. Classifies the outcome into the error taxonomy:
    /// transport failure -> Network, 404 -> NotFound, 5xx -> Server, other
    /// non-success -> Unknown, undecodable 200 body -> DataIntegrity.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> DashboardResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        Self::check_status(response.status())?;

        response
            .json()
            .await
            .map_err(|e| DashboardError::DataIntegrity(format!("malformed response body: {}", e)))
    }

    fn check_status(status: StatusCode) -> DashboardResult<()> {
        if status == StatusCode::NOT_FOUND {
            return Err(DashboardError::NotFound);
        }
        if status.is_server_error() {
            return Err(DashboardError::Server {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(DashboardError::Unknown(format!(
                "unexpected HTTP status {}",
                status
            )));
        }
        Ok(())
    }

    /// Priority queue read, capped server-side at 200 records. `status` is
    /// the service's own pass-through filter, distinct from client filtering.
    pub async fn fetch_priority_issues(
        &self,
        limit: u32,
        status: Option<IssueStatus>,
    ) -> DashboardResult<Vec<Issue>> {
        let mut query = vec![("limit", limit.min(ISSUE_FETCH_LIMIT).to_string())];
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }

        let payload: PriorityQueuePayload = self.get_json(PRIORITY_ISSUES_PATH, &query).await?;
        payload.into_issues()
    }

    pub async fn fetch_health_summary(&self) -> DashboardResult<HealthSummaryPayload> {
        self.get_json(HEALTH_SUMMARY_PATH, &[]).await
    }

    pub async fn fetch_sla_timers(&self) -> DashboardResult<SlaTimersPayload> {
        self.get_json(SLA_TIMERS_PATH, &[]).await
    }

    pub async fn fetch_trends(&self, window: &str) -> DashboardResult<TrendsPayload> {
        self.get_json(TRENDS_PATH, &[("window", window.to_string())])
            .await
    }

    /// The one write: update an issue's lifecycle status. The caller applies
    /// the new status to local state before this confirms.
    pub async fn update_status(
        &self,
        issue_id: &str,
        new_status: IssueStatus,
    ) -> DashboardResult<StatusUpdatePayload> {
        let response = self
            .client
            .put(self.url(&format!("/admin/issues/{}/status", issue_id)))
            .json(&json!({ "status": new_status.as_str() }))
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        Self::check_status(response.status())?;

        let payload: StatusUpdatePayload = response
            .json()
            .await
            .map_err(|e| DashboardError::DataIntegrity(format!("malformed response body: {}", e)))?;

        if !payload.success {
            return Err(DashboardError::Unknown(format!(
                "status update rejected for issue {}",
                issue_id
            )));
        }

        Ok(payload)
    }
}
