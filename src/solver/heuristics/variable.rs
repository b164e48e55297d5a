//! Policies for choosing which undecided variable to branch on next.

use serde::{Deserialize, Serialize};

use crate::solver::{
    snapshot::Snapshot,
    store::ConstraintStore,
    value::{Value, VariableKey},
};

/// Variable-ordering policy, fixed for the duration of one solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableOrdering {
    /// The first undecided variable in declaration order.
    Declaration,
    /// Minimum remaining values: the undecided variable with the smallest
    /// working domain. A "fail-first" strategy that tackles the most
    /// constrained variable early. Ties keep the earliest declared variable.
    MinimumRemaining,
    /// The degree heuristic for the very first node of the search (the
    /// undecided variable with the most constraint partners, before any
    /// assignment has reduced a domain), minimum remaining values for every
    /// node after that.
    DegreeThenMinimumRemaining,
}

/// Selects the next variable to branch on, or `None` when every variable is
/// already decided.
///
/// `first_node` is true only for the opening node of the whole search; it is
/// what gates the degree bootstrap of
/// [`VariableOrdering::DegreeThenMinimumRemaining`].
pub fn select_variable<K: VariableKey, V: Value>(
    ordering: VariableOrdering,
    store: &ConstraintStore<K, V>,
    snapshot: &Snapshot<K, V>,
    first_node: bool,
) -> Option<K> {
    match ordering {
        VariableOrdering::Declaration => first_undecided(store, snapshot),
        VariableOrdering::MinimumRemaining => minimum_remaining(store, snapshot),
        VariableOrdering::DegreeThenMinimumRemaining => {
            if first_node {
                highest_degree(store, snapshot)
            } else {
                minimum_remaining(store, snapshot)
            }
        }
    }
}

fn first_undecided<K: VariableKey, V: Value>(
    store: &ConstraintStore<K, V>,
    snapshot: &Snapshot<K, V>,
) -> Option<K> {
    store
        .variables()
        .iter()
        .find(|&var| snapshot.domain(var).len() > 1)
        .cloned()
}

fn minimum_remaining<K: VariableKey, V: Value>(
    store: &ConstraintStore<K, V>,
    snapshot: &Snapshot<K, V>,
) -> Option<K> {
    let mut best: Option<(&K, usize)> = None;
    for var in store.variables() {
        let len = snapshot.domain(var).len();
        // Strict comparison keeps the earliest declared variable on ties.
        if len > 1 && best.map_or(true, |(_, best_len)| len < best_len) {
            best = Some((var, len));
        }
    }
    best.map(|(var, _)| var.clone())
}

fn highest_degree<K: VariableKey, V: Value>(
    store: &ConstraintStore<K, V>,
    snapshot: &Snapshot<K, V>,
) -> Option<K> {
    let mut best: Option<(&K, usize)> = None;
    for var in store.variables() {
        if snapshot.domain(var).len() > 1 {
            let degree = store.degree(var);
            if best.map_or(true, |(_, best_degree)| degree > best_degree) {
                best = Some((var, degree));
            }
        }
    }
    best.map(|(var, _)| var.clone())
}
