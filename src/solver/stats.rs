use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Counters describing a single solve invocation.
///
/// The stats are explicit state returned alongside the result rather than
/// hidden instance fields, so repeated solves on the same engine never
/// interfere with each other. Given identical problems and heuristic
/// configuration, every counter is reproducible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of search-node entries: one per recursive search call,
    /// including the node that finds the solution.
    pub nodes_visited: u64,
    /// Number of search nodes that exhausted every candidate value and
    /// reported failure to their caller.
    pub failures: u64,
    /// Number of arc revisions performed by the propagator.
    pub revisions: u64,
    /// Number of revisions that removed at least one value.
    pub prunings: u64,
}

/// Renders the counters as a small table, for comparing runs across
/// heuristic configurations.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    for (name, count) in [
        ("Search nodes", stats.nodes_visited),
        ("Failed nodes", stats.failures),
        ("Arc revisions", stats.revisions),
        ("Domain prunings", stats.prunings),
    ] {
        table.add_row(Row::new(vec![Cell::new(name), Cell::new(&count.to_string())]));
    }
    table.to_string()
}
