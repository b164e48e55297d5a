use std::collections::{HashSet, VecDeque};

use crate::solver::value::VariableKey;

/// FIFO queue of arcs awaiting revision, with membership dedup.
///
/// AC-3 re-enqueues arcs whenever a domain shrinks; the membership set keeps
/// an arc from appearing in the queue twice at the same time. An arc may of
/// course be queued again after it has been popped.
#[derive(Debug)]
pub struct WorkList<K: VariableKey> {
    queue: VecDeque<(K, K)>,
    members: HashSet<(K, K)>,
}

impl<K: VariableKey> WorkList<K> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    pub fn seeded(arcs: impl IntoIterator<Item = (K, K)>) -> Self {
        let mut worklist = Self::new();
        for arc in arcs {
            worklist.push_back(arc);
        }
        worklist
    }

    pub fn push_back(&mut self, arc: (K, K)) {
        if self.members.insert(arc.clone()) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<(K, K)> {
        let arc = self.queue.pop_front()?;
        self.members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<K: VariableKey> Default for WorkList<K> {
    fn default() -> Self {
        Self::new()
    }
}
