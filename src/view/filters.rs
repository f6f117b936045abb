use std::collections::{BTreeMap, BTreeSet};

use crate::models::Issue;

/// The closed set of filterable attributes of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Priority,
    Severity,
    Health,
    Category,
    Hostel,
    SlaStatus,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Priority,
        Dimension::Severity,
        Dimension::Health,
        Dimension::Category,
        Dimension::Hostel,
        Dimension::SlaStatus,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Priority => "priority",
            Dimension::Severity => "severity",
            Dimension::Health => "health",
            Dimension::Category => "category",
            Dimension::Hostel => "hostel",
            Dimension::SlaStatus => "slaStatus",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Priority => "Priority",
            Dimension::Severity => "Severity",
            Dimension::Health => "Health",
            Dimension::Category => "Category",
            Dimension::Hostel => "Hostel",
            Dimension::SlaStatus => "SLA",
        }
    }

    pub fn parse(s: &str) -> Option<Dimension> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "priority" => Some(Dimension::Priority),
            "severity" => Some(Dimension::Severity),
            "health" => Some(Dimension::Health),
            "category" => Some(Dimension::Category),
            "hostel" => Some(Dimension::Hostel),
            "sla" | "slastatus" => Some(Dimension::SlaStatus),
            _ => None,
        }
    }
}

/// Project an issue onto a dimension. A record with no value for the
/// dimension yields None and can never satisfy a constrained dimension.
pub fn project(issue: &Issue, dimension: Dimension) -> Option<String> {
    let value = match dimension {
        Dimension::Priority => issue.priority_label().map(str::to_string),
        Dimension::Severity => issue.severity_label().map(str::to_string),
        Dimension::Health => issue.health_label().map(str::to_string),
        Dimension::Category => Some(issue.category.clone()),
        Dimension::Hostel => Some(issue.hostel.clone()),
        Dimension::SlaStatus => issue.sla_risk().map(str::to_string),
    };
    value.filter(|v| !v.is_empty())
}

/// Distinct non-empty values of a dimension actually present in the raw
/// list. Option sets are strictly data-driven, never a static enum.
pub fn available_values(issues: &[Issue], dimension: Dimension) -> Vec<String> {
    let set: BTreeSet<String> = issues
        .iter()
        .filter_map(|issue| project(issue, dimension))
        .collect();
    set.into_iter().collect()
}

/// Admitted-value sets per dimension. An empty (or absent) set means the
/// dimension is unconstrained and matches everything.
///
/// Selections are deliberately sticky: a selected value that disappears from
/// the data stays selected (and keeps constraining) until removed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    admitted: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_constrained(&self, dimension: Dimension) -> bool {
        self.admitted
            .get(&dimension)
            .map(|set| !set.is_empty())
            .unwrap_or(false)
    }

    pub fn contains(&self, dimension: Dimension, value: &str) -> bool {
        self.admitted
            .get(&dimension)
            .map(|set| set.contains(value))
            .unwrap_or(false)
    }

    pub fn selected_values(&self, dimension: Dimension) -> Vec<String> {
        self.admitted
            .get(&dimension)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Total selected values across all dimensions (the chip count).
    pub fn selection_count(&self) -> usize {
        self.admitted.values().map(|set| set.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selection_count() == 0
    }

    pub fn toggle_value(&mut self, dimension: Dimension, value: &str) {
        let set = self.admitted.entry(dimension).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    /// Functionally identical to toggle_value when the value is present;
    /// kept separate for the chip UI, which only ever removes.
    pub fn remove_value(&mut self, dimension: Dimension, value: &str) {
        if let Some(set) = self.admitted.get_mut(&dimension) {
            set.remove(value);
        }
    }

    pub fn set_admitted(&mut self, dimension: Dimension, values: BTreeSet<String>) {
        self.admitted.insert(dimension, values);
    }

    pub fn select_all(&mut self, dimension: Dimension, issues: &[Issue]) {
        let values: BTreeSet<String> = available_values(issues, dimension).into_iter().collect();
        self.admitted.insert(dimension, values);
    }

    pub fn select_none(&mut self, dimension: Dimension) {
        self.admitted.remove(&dimension);
    }

    pub fn clear_all(&mut self) {
        self.admitted.clear();
    }

    /// Resolved issues never pass. Dimensions combine with AND; values
    /// within a dimension combine with OR.
    pub fn matches(&self, issue: &Issue) -> bool {
        if !issue.is_active() {
            return false;
        }

        Dimension::ALL.iter().all(|&dimension| {
            match self.admitted.get(&dimension) {
                None => true,
                Some(set) if set.is_empty() => true,
                Some(set) => match project(issue, dimension) {
                    Some(value) => set.contains(&value),
                    None => false,
                },
            }
        })
    }

    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueStatus, PriorityField, PriorityInfo, SlaInfo};

    fn issue(id: &str, hostel: &str, status: IssueStatus) -> Issue {
        Issue {
            id: id.to_string(),
            hostel: hostel.to_string(),
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

    fn with_priority(mut i: Issue, label: &str) -> Issue {
        i.priority = Some(PriorityField::Enriched(PriorityInfo {
            score: Some(50.0),
            label: Some(label.to_string()),
        }));
        i
    }

    fn with_sla(mut i: Issue, risk: &str) -> Issue {
        i.sla = Some(SlaInfo {
            risk: Some(risk.to_string()),
            time_remaining_minutes: Some(30),
            is_breached: Some(risk == "BREACHING"),
        });
        i
    }

    #[test]
    fn test_available_values_sorted_deduplicated() {
        let issues = vec![
            issue("1", "B", IssueStatus::Open),
            issue("2", "A", IssueStatus::Open),
            issue("3", "A", IssueStatus::Open),
        ];
        assert_eq!(available_values(&issues, Dimension::Hostel), vec!["A", "B"]);
    }

    #[test]
    fn test_available_values_skips_empty() {
        let issues = vec![
            issue("1", "", IssueStatus::Open),
            issue("2", "A", IssueStatus::Open),
        ];
        assert_eq!(available_values(&issues, Dimension::Hostel), vec!["A"]);
    }

    #[test]
    fn test_empty_state_matches_all_active() {
        let state = FilterState::new();
        let issues = vec![
            issue("1", "A", IssueStatus::Open),
            issue("2", "B", IssueStatus::Resolved),
            issue("3", "C", IssueStatus::Reopened),
        ];
        let filtered = state.apply(&issues);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|i| i.is_active()));
    }

    #[test]
    fn test_values_within_dimension_are_or() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::Hostel, "A");
        state.toggle_value(Dimension::Hostel, "B");

        let issues = vec![
            issue("1", "A", IssueStatus::Open),
            issue("2", "B", IssueStatus::Open),
            issue("3", "C", IssueStatus::Open),
        ];
        assert_eq!(state.apply(&issues).len(), 2);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::Hostel, "A");
        state.toggle_value(Dimension::Priority, "CRITICAL");

        let issues = vec![
            with_priority(issue("1", "A", IssueStatus::Open), "CRITICAL"),
            with_priority(issue("2", "A", IssueStatus::Open), "LOW"),
            with_priority(issue("3", "B", IssueStatus::Open), "CRITICAL"),
        ];
        let filtered = state.apply(&issues);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_absent_value_fails_constrained_dimension() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::Priority, "CRITICAL");

        // No priority sub-object at all
        let issues = vec![issue("1", "A", IssueStatus::Open)];
        assert!(state.apply(&issues).is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::Hostel, "A");
        assert!(state.contains(Dimension::Hostel, "A"));
        state.toggle_value(Dimension::Hostel, "A");
        assert!(!state.contains(Dimension::Hostel, "A"));
        assert!(!state.is_constrained(Dimension::Hostel));
    }

    #[test]
    fn test_select_all_snapshots_current_values() {
        let issues = vec![
            issue("1", "A", IssueStatus::Open),
            issue("2", "B", IssueStatus::Open),
        ];
        let mut state = FilterState::new();
        state.select_all(Dimension::Hostel, &issues);
        assert_eq!(state.selected_values(Dimension::Hostel), vec!["A", "B"]);

        state.select_none(Dimension::Hostel);
        assert!(!state.is_constrained(Dimension::Hostel));
    }

    #[test]
    fn test_clear_all() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::Hostel, "A");
        state.toggle_value(Dimension::Priority, "HIGH");
        assert_eq!(state.selection_count(), 2);
        state.clear_all();
        assert!(state.is_empty());
    }

    #[test]
    fn test_sticky_selection_survives_data_change() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::Hostel, "Gone");

        // "Gone" no longer appears in the data; the selection stays and the
        // constrained dimension now matches nothing.
        let issues = vec![issue("1", "A", IssueStatus::Open)];
        assert!(available_values(&issues, Dimension::Hostel) == vec!["A"]);
        assert!(state.contains(Dimension::Hostel, "Gone"));
        assert!(state.apply(&issues).is_empty());
    }

    #[test]
    fn test_apply_subset_of_active() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::SlaStatus, "BREACHING");
        let issues = vec![
            with_sla(issue("1", "A", IssueStatus::Open), "BREACHING"),
            with_sla(issue("2", "A", IssueStatus::Resolved), "BREACHING"),
            with_sla(issue("3", "A", IssueStatus::Open), "OK"),
        ];
        let filtered = state.apply(&issues);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.iter().all(|i| i.is_active()));
    }

    #[test]
    fn test_apply_idempotent() {
        let mut state = FilterState::new();
        state.toggle_value(Dimension::Hostel, "A");
        let issues = vec![
            issue("1", "A", IssueStatus::Open),
            issue("2", "B", IssueStatus::Open),
            issue("3", "A", IssueStatus::Resolved),
        ];
        let once: Vec<Issue> = state.apply(&issues).into_iter().cloned().collect();
        let twice = state.apply(&once);
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(twice.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!(Dimension::parse("priority"), Some(Dimension::Priority));
        assert_eq!(Dimension::parse("slaStatus"), Some(Dimension::SlaStatus));
        assert_eq!(Dimension::parse("sla_status"), Some(Dimension::SlaStatus));
        assert_eq!(Dimension::parse("sla"), Some(Dimension::SlaStatus));
        assert_eq!(Dimension::parse("flavour"), None);
    }
}
