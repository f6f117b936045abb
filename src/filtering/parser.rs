use regex::Regex;

use crate::error::{DashboardError, DashboardResult};
use crate::view::filters::{Dimension, FilterState};

/// Parse a filter expression into a FilterState.
///
/// Syntax: space-separated clauses of `dimension:value[,value...]`, values
/// may be double-quoted to include spaces or commas:
///
///   priority:CRITICAL,HIGH hostel:"Block A" sla:BREACHING
///
/// Values within one clause OR together; clauses AND together; repeating a
/// dimension merges its values.
pub fn parse_filter_expr(input: &str) -> DashboardResult<FilterState> {
    let clause_re = Regex::new(r#"(\w+):((?:"[^"]*"|[^\s,]+)(?:,(?:"[^"]*"|[^\s,]+))*)"#)
        .expect("clause regex is valid");
    let value_re = Regex::new(r#""([^"]*)"|([^\s,]+)"#).expect("value regex is valid");

    let mut state = FilterState::new();
    let mut matched_len = 0;

    for clause in clause_re.captures_iter(input) {
        matched_len += clause[0].len();

        let dimension = Dimension::parse(&clause[1]).ok_or_else(|| {
            DashboardError::InvalidInput(format!(
                "Unknown filter dimension '{}'. Expected one of: priority, severity, health, category, hostel, sla",
                &clause[1]
            ))
        })?;

        for value in value_re.captures_iter(&clause[2]) {
            let value = value
                .get(1)
                .or_else(|| value.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            if !value.is_empty() && !state.contains(dimension, value) {
                state.toggle_value(dimension, value);
            }
        }
    }

    if matched_len == 0 && !input.trim().is_empty() {
        return Err(DashboardError::InvalidInput(format!(
            "No valid filter clauses in '{}'. Use dimension:value[,value...] (e.g. priority:CRITICAL,HIGH)",
            input
        )));
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_clause() {
        let state = parse_filter_expr("priority:CRITICAL").unwrap();
        assert!(state.contains(Dimension::Priority, "CRITICAL"));
        assert_eq!(state.selection_count(), 1);
    }

    #[test]
    fn test_multi_value_clause() {
        let state = parse_filter_expr("priority:CRITICAL,HIGH").unwrap();
        assert!(state.contains(Dimension::Priority, "CRITICAL"));
        assert!(state.contains(Dimension::Priority, "HIGH"));
    }

    #[test]
    fn test_multiple_clauses() {
        let state = parse_filter_expr("priority:CRITICAL hostel:BlockA sla:BREACHING").unwrap();
        assert!(state.contains(Dimension::Priority, "CRITICAL"));
        assert!(state.contains(Dimension::Hostel, "BlockA"));
        assert!(state.contains(Dimension::SlaStatus, "BREACHING"));
    }

    #[test]
    fn test_quoted_values() {
        let state = parse_filter_expr(r#"hostel:"Block A","Block B""#).unwrap();
        assert!(state.contains(Dimension::Hostel, "Block A"));
        assert!(state.contains(Dimension::Hostel, "Block B"));
    }

    #[test]
    fn test_repeated_dimension_merges() {
        let state = parse_filter_expr("hostel:A hostel:B").unwrap();
        assert!(state.contains(Dimension::Hostel, "A"));
        assert!(state.contains(Dimension::Hostel, "B"));
    }

    #[test]
    fn test_unknown_dimension_rejected() {
        let result = parse_filter_expr("flavour:vanilla");
        assert!(matches!(result, Err(DashboardError::InvalidInput(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_filter_expr("!!!").is_err());
    }

    #[test]
    fn test_empty_input_is_empty_state() {
        let state = parse_filter_expr("").unwrap();
        assert!(state.is_empty());
    }
}
