use im::Vector;
use tracing::{debug, trace};

use crate::solver::{
    snapshot::Snapshot,
    stats::SearchStats,
    store::ConstraintStore,
    value::{Value, VariableKey},
    work_list::WorkList,
};

/// Enforces arc consistency on `snapshot` with the AC-3 algorithm.
///
/// `seed_arcs` is the initial work-queue: the full arc set for the opening
/// propagation of a solve, or just the arcs pointing into a freshly assigned
/// variable for the incremental calls made during search. Arcs are revised in
/// FIFO order; whenever a revision shrinks the domain of `i`, every arc
/// `(k, i)` for a neighbour `k` other than the arc's partner is re-enqueued,
/// since `k`'s consistency against `i` may have been invalidated by the
/// shrinkage.
///
/// Returns the arc-consistent snapshot, or `None` as soon as any working
/// domain empties. Worst case O(e·d³) for e arcs and maximum domain size d:
/// the plain dual-loop support scan in [`revise`] is used rather than a
/// support-counting variant.
pub fn propagate<K: VariableKey, V: Value>(
    store: &ConstraintStore<K, V>,
    mut snapshot: Snapshot<K, V>,
    seed_arcs: impl IntoIterator<Item = (K, K)>,
    stats: &mut SearchStats,
) -> Option<Snapshot<K, V>> {
    let mut worklist = WorkList::seeded(seed_arcs);

    while let Some((i, j)) = worklist.pop_front() {
        stats.revisions += 1;
        if revise(store, &mut snapshot, &i, &j) {
            stats.prunings += 1;
            if snapshot.domain(&i).is_empty() {
                debug!(arc = ?(&i, &j), "domain wiped out during propagation");
                return None;
            }
            for arc in store.neighbor_arcs(&i) {
                if arc.0 != j {
                    worklist.push_back(arc);
                }
            }
        }
    }

    trace!("worklist drained, snapshot is arc-consistent");
    Some(snapshot)
}

/// Removes from working-domain(i) every value without a compatible partner in
/// working-domain(j). Returns whether anything was removed.
///
/// The domain of `i` is copied before the scan and the working domain rebuilt
/// from the survivors: removing values from the sequence being iterated would
/// skip the elements that slide into the freed slots.
fn revise<K: VariableKey, V: Value>(
    store: &ConstraintStore<K, V>,
    snapshot: &mut Snapshot<K, V>,
    i: &K,
    j: &K,
) -> bool {
    let candidates: Vec<V> = snapshot.domain(i).iter().cloned().collect();
    let mut kept: Vector<V> = Vector::new();
    for a in &candidates {
        let supported = snapshot
            .domain(j)
            .iter()
            .any(|b| store.is_compatible(i, a, j, b));
        if supported {
            kept.push_back(a.clone());
        }
    }

    if kept.len() < candidates.len() {
        snapshot.set_domain(i, kept);
        true
    } else {
        false
    }
}
