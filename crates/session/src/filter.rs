use crate::format::{format_entry, DisplayResult};

/// Multi-line rows are drawn with less padding than single rows, so each line
/// counts for a little less than a full row.
pub const LINE_COST_FACTOR: f64 = 0.85;

/// Entries eligible for display, before the line budget is applied.
///
/// An empty query takes the first `max_lines` entries. Otherwise entries
/// containing `query` (case-insensitively) are collected until `max_lines` of
/// them are found.
pub fn matching_entries<'a>(history: &'a [String], query: &str, max_lines: usize) -> Vec<&'a str> {
    if query.is_empty() {
        return history.iter().take(max_lines).map(String::as_str).collect();
    }

    let query = query.to_lowercase();
    history
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&query))
        .take(max_lines)
        .map(String::as_str)
        .collect()
}

/// Budget cost of one rendered label.
pub fn line_cost(label: &str) -> f64 {
    let lines = label.split('\n').count() as f64;
    (lines * LINE_COST_FACTOR).max(1.0)
}

/// Formats `matches` in order and keeps them while the summed line cost stays
/// within `max_lines`. Stops at the first entry that would overflow it.
pub fn budget(matches: &[&str], query: &str, max_lines: usize) -> Vec<DisplayResult> {
    let limit = max_lines as f64;
    let mut used = 0.0;
    let mut results = Vec::new();

    for entry in matches {
        let result = format_entry(entry, query);
        let cost = line_cost(&result.label);
        if used + cost > limit {
            break;
        }
        used += cost;
        results.push(result);
    }

    results
}

pub fn filter(history: &[String], query: &str, max_lines: usize) -> Vec<DisplayResult> {
    let matches = matching_entries(history, query, max_lines);
    budget(&matches, query, max_lines)
}
