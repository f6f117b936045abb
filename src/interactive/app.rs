use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

use crate::client::DashboardClient;
use crate::config::{get_api_base_url, get_trend_window};
use crate::constants::{ISSUE_FETCH_LIMIT, REFRESH_INTERVAL_SECS};
use crate::models::{Issue, IssueStatus};
use crate::view::filters::{available_values, Dimension};
use crate::view::{QueueController, SnapshotOrchestrator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    FilterPanel,
    Detail,
    StatusPick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub created_at: Instant,
}

const NOTICE_TTL_SECS: u64 = 5;

/// The repeating auto-refresh clock. Owned by the mounted dashboard and
/// dropped with it, so a torn-down view can never fire a late refresh and
/// re-entering the dashboard always starts exactly one fresh timer.
pub struct RefreshTimer {
    period: Duration,
    last: Instant,
}

impl RefreshTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last: Instant::now(),
        }
    }

    /// True at most once per period; checking rearms on fire.
    pub fn due(&mut self) -> bool {
        if self.last.elapsed() >= self.period {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }

    /// A manual refresh pushes the next automatic one a full period out.
    pub fn rearm(&mut self) {
        self.last = Instant::now();
    }
}

pub struct DashboardApp {
    pub orchestrator: SnapshotOrchestrator,
    pub controller: QueueController,
    pub mode: AppMode,
    /// Selection within the visible page.
    pub selected_index: usize,
    pub filter_dim_index: usize,
    pub filter_value_index: usize,
    pub status_option_index: usize,
    pub should_quit: bool,
    pub refresh_timer: RefreshTimer,
    pub notice: Option<Notice>,
    pending_status: Option<(String, IssueStatus)>,
}

impl DashboardApp {
    pub fn new() -> Self {
        let client = DashboardClient::new(get_api_base_url());
        Self {
            orchestrator: SnapshotOrchestrator::new(
                client,
                get_trend_window(),
                ISSUE_FETCH_LIMIT,
            ),
            controller: QueueController::new(),
            mode: AppMode::Normal,
            selected_index: 0,
            filter_dim_index: 0,
            filter_value_index: 0,
            status_option_index: 0,
            should_quit: false,
            refresh_timer: RefreshTimer::new(Duration::from_secs(REFRESH_INTERVAL_SECS)),
            notice: None,
            pending_status: None,
        }
    }

    pub fn issues(&self) -> &[Issue] {
        self.orchestrator.issues()
    }

    pub fn current_dimension(&self) -> Dimension {
        Dimension::ALL[self.filter_dim_index % Dimension::ALL.len()]
    }

    pub fn filter_panel_values(&self) -> Vec<String> {
        available_values(self.issues(), self.current_dimension())
    }

    pub fn selected_issue(&self) -> Option<Issue> {
        let page = self.controller.page(self.issues());
        page.items.get(self.selected_index).map(|i| (*i).clone())
    }

    pub fn set_notice(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        });
    }

    pub fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.created_at.elapsed() >= Duration::from_secs(NOTICE_TTL_SECS) {
                self.notice = None;
            }
        }
    }

    /// Queued by the status picker, consumed by the run loop after the local
    /// overwrite is already applied.
    pub fn take_pending_status(&mut self) -> Option<(String, IssueStatus)> {
        self.pending_status.take()
    }

    fn clamp_selection(&mut self) {
        let page_len = self.controller.page(self.issues()).items.len();
        if page_len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= page_len {
            self.selected_index = page_len - 1;
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::FilterPanel => self.handle_filter_key(key),
            AppMode::Detail => self.handle_detail_key(key),
            AppMode::StatusPick => self.handle_status_pick_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                let page_len = self.controller.page(self.issues()).items.len();
                if page_len > 0 {
                    self.selected_index = (self.selected_index + 1) % page_len;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let page_len = self.controller.page(self.issues()).items.len();
                if page_len > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        page_len - 1
                    } else {
                        self.selected_index - 1
                    };
                }
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if self.controller.next_page(self.orchestrator.issues()) {
                    self.selected_index = 0;
                }
            }
            KeyCode::Char('h') | KeyCode::Left => {
                if self.controller.prev_page(self.orchestrator.issues()) {
                    self.selected_index = 0;
                }
            }
            KeyCode::Enter => {
                if self.selected_issue().is_some() {
                    self.mode = AppMode::Detail;
                }
            }
            KeyCode::Char('f') => {
                self.mode = AppMode::FilterPanel;
                self.filter_value_index = 0;
            }
            KeyCode::Char('s') => {
                if self.selected_issue().is_some() {
                    self.mode = AppMode::StatusPick;
                    self.status_option_index = 0;
                }
            }
            KeyCode::Char('c') => {
                self.controller.clear_all();
                self.selected_index = 0;
            }
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => {
                self.mode = AppMode::Normal;
                self.clamp_selection();
            }
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
                self.filter_dim_index = (self.filter_dim_index + 1) % Dimension::ALL.len();
                self.filter_value_index = 0;
            }
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
                self.filter_dim_index =
                    (self.filter_dim_index + Dimension::ALL.len() - 1) % Dimension::ALL.len();
                self.filter_value_index = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.filter_panel_values().len();
                if len > 0 {
                    self.filter_value_index = (self.filter_value_index + 1) % len;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let len = self.filter_panel_values().len();
                if len > 0 {
                    self.filter_value_index = if self.filter_value_index == 0 {
                        len - 1
                    } else {
                        self.filter_value_index - 1
                    };
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let dimension = self.current_dimension();
                if let Some(value) = self.filter_panel_values().get(self.filter_value_index) {
                    self.controller.toggle_value(dimension, value);
                    self.selected_index = 0;
                }
            }
            KeyCode::Char('a') => {
                let dimension = self.current_dimension();
                self.controller.select_all(dimension, self.orchestrator.issues());
                self.selected_index = 0;
            }
            KeyCode::Char('n') => {
                let dimension = self.current_dimension();
                self.controller.select_none(dimension);
                self.selected_index = 0;
            }
            KeyCode::Char('c') => {
                self.controller.clear_all();
                self.selected_index = 0;
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = AppMode::Normal,
            KeyCode::Char('s') => {
                self.mode = AppMode::StatusPick;
                self.status_option_index = 0;
            }
            _ => {}
        }
    }

    fn handle_status_pick_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = AppMode::Normal,
            KeyCode::Char('j') | KeyCode::Down => {
                self.status_option_index = (self.status_option_index + 1) % IssueStatus::ALL.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.status_option_index = (self.status_option_index + IssueStatus::ALL.len() - 1)
                    % IssueStatus::ALL.len();
            }
            KeyCode::Enter => {
                if let Some(issue) = self.selected_issue() {
                    let new_status = IssueStatus::ALL[self.status_option_index];
                    // Optimistic: overwrite local state now, confirm later.
                    // The next scheduled fetch may clobber this; accepted.
                    self.orchestrator.apply_status_override(&issue.id, new_status);
                    self.pending_status = Some((issue.id, new_status));
                    self.clamp_selection();
                }
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }
}
