use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::solver::{
    heuristics::{
        value::{order_values, ValueOrdering},
        variable::{select_variable, VariableOrdering},
    },
    propagation::propagate,
    snapshot::Snapshot,
    stats::SearchStats,
    store::ConstraintStore,
    value::{Value, VariableKey},
};

/// A complete assignment: every registered variable mapped to its single
/// decided value.
pub type Assignment<K, V> = HashMap<K, V>;

/// Heuristic configuration, chosen once per solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub variable_ordering: VariableOrdering,
    pub value_ordering: ValueOrdering,
}

impl Default for SolverConfig {
    /// Degree-bootstrapped MRV with least-constraining values.
    fn default() -> Self {
        Self {
            variable_ordering: VariableOrdering::DegreeThenMinimumRemaining,
            value_ordering: ValueOrdering::LeastConstraining,
        }
    }
}

/// The main engine for solving binary constraint satisfaction problems.
///
/// The engine takes a read-only [`ConstraintStore`] and finds one complete
/// assignment satisfying every constraint, or establishes that none exists.
/// It combines AC-3 propagation over the full arc set with a recursive
/// backtracking search that re-propagates incrementally after every
/// tentative assignment (maintaining arc consistency).
///
/// Solving is single-threaded and synchronous; recursion depth is bounded by
/// the number of variables. Each branch of the search works on its own
/// snapshot, so sibling branches never observe each other's domain changes.
pub struct SolverEngine {
    config: SolverConfig,
}

impl SolverEngine {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Attempts to solve the problem described by `store`.
    ///
    /// Returns the assignment together with the search counters for this
    /// invocation. `None` means provably unsatisfiable under the given
    /// constraints; it is a normal negative result, not an error. Given the
    /// same store and configuration, both the assignment and the counters
    /// are identical across calls.
    pub fn solve<K: VariableKey, V: Value>(
        &self,
        store: &ConstraintStore<K, V>,
    ) -> (Option<Assignment<K, V>>, SearchStats) {
        let mut stats = SearchStats::default();
        let snapshot = Snapshot::from_store(store);

        // Weed out values that are not arc-consistent to begin with.
        let Some(snapshot) = propagate(store, snapshot, store.arcs(), &mut stats) else {
            return (None, stats);
        };

        let found = self.search(store, snapshot, &mut stats);
        (found.and_then(Snapshot::into_assignment), stats)
    }

    fn search<K: VariableKey, V: Value>(
        &self,
        store: &ConstraintStore<K, V>,
        snapshot: Snapshot<K, V>,
        stats: &mut SearchStats,
    ) -> Option<Snapshot<K, V>> {
        stats.nodes_visited += 1;

        if snapshot.is_complete() {
            return Some(snapshot);
        }

        // The degree bootstrap applies only to the very first node of the
        // whole search, before any assignment has reduced a domain.
        let first_node = stats.nodes_visited == 1;
        let Some(var) = select_variable(self.config.variable_ordering, store, &snapshot, first_node)
        else {
            // Unreachable while is_complete is false; treat it as complete.
            return Some(snapshot);
        };

        for value in order_values(self.config.value_ordering, store, &snapshot, &var) {
            if !is_consistent(store, &snapshot, &var, &value) {
                continue;
            }

            debug!(var = ?var, value = ?value, "branching");
            let guess = snapshot.assign(&var, &value);
            if let Some(propagated) =
                propagate(store, guess, store.neighbor_arcs(&var), stats)
            {
                if let Some(found) = self.search(store, propagated, stats) {
                    return Some(found);
                }
            }
        }

        stats.failures += 1;
        None
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// A tentative value is locally consistent when every constrained neighbour
/// still has at least one compatible value left in its working domain.
fn is_consistent<K: VariableKey, V: Value>(
    store: &ConstraintStore<K, V>,
    snapshot: &Snapshot<K, V>,
    var: &K,
    value: &V,
) -> bool {
    store.neighbors(var).iter().all(|other| {
        snapshot
            .domain(other)
            .iter()
            .any(|b| store.is_compatible(var, value, other, b))
    })
}
