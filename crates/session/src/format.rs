pub const ELLIPSIS: &str = "...";

/// A history entry prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    /// Up to three lines of context around the matching line
    pub label: String,
    /// The untouched entry, committed on selection
    pub payload: String,
}

/// Builds a short label for `entry`: the first line containing `query`, plus
/// one trimmed line of context on either side.
///
/// An empty query anchors on the first line. So does a query that only
/// matches across a line break, since no single line contains it.
pub fn format_entry(entry: &str, query: &str) -> DisplayResult {
    let lines: Vec<&str> = entry.trim().split('\n').collect();
    let query = query.to_lowercase();

    let pos = if query.is_empty() {
        0
    } else {
        lines
            .iter()
            .position(|line| line.to_lowercase().contains(&query))
            .unwrap_or_else(|| {
                tracing::debug!("Query {:?} spans lines, anchoring on the first line", query);
                0
            })
    };

    let mut context = Vec::with_capacity(3);

    if let Some(before) = pos.checked_sub(1).map(|i| lines[i].trim()) {
        if !before.is_empty() {
            context.push(format!("{ELLIPSIS}{before}"));
        }
    }

    context.push(lines[pos].to_string());

    if let Some(after) = lines.get(pos + 1).map(|line| line.trim()) {
        if !after.is_empty() {
            context.push(format!("{after}{ELLIPSIS}"));
        }
    }

    DisplayResult {
        label: context.join("\n"),
        payload: entry.to_string(),
    }
}
