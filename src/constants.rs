pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const CONFIG_FILE: &str = ".hostel-desk-config.json";

// Dashboard read endpoints
pub const PRIORITY_ISSUES_PATH: &str = "/admin/dashboard/priority-issues";
pub const HEALTH_SUMMARY_PATH: &str = "/admin/dashboard/health-summary";
pub const SLA_TIMERS_PATH: &str = "/admin/dashboard/sla-timers";
pub const TRENDS_PATH: &str = "/admin/dashboard/trends";

/// Server caps the issue-list read at 200 records; larger requests are clamped.
pub const ISSUE_FETCH_LIMIT: u32 = 200;

pub const PAGE_SIZE: usize = 20;
pub const PAGE_WINDOW: usize = 5;

pub const REFRESH_INTERVAL_SECS: u64 = 30;

pub const DEFAULT_TREND_WINDOW: &str = "24h";
pub const TREND_WINDOWS: [&str; 4] = ["1h", "6h", "24h", "7d"];
