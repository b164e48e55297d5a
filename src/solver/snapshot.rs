use im::{HashMap, Vector};

use crate::solver::{
    store::ConstraintStore,
    value::{Value, VariableKey},
};

/// The mutable per-branch state of a solve: a working domain for every
/// registered variable.
///
/// A variable is *decided* when its working domain holds exactly one value;
/// a snapshot is *complete* when every variable is decided and *failed* when
/// any working domain is empty.
///
/// Each search branch owns its snapshot exclusively. Snapshots are backed by
/// persistent (`im`) structures, so taking the per-branch copy is cheap and
/// structural sharing never leaks mutations between a branch and its parent
/// or siblings: an insert produces a new spine rather than touching the
/// shared nodes.
#[derive(Clone, Debug)]
pub struct Snapshot<K: VariableKey, V: Value> {
    domains: HashMap<K, Vector<V>>,
}

impl<K: VariableKey, V: Value> Snapshot<K, V> {
    /// Copies every static domain out of the store. This is the one deep copy
    /// of a solve; everything after it is a persistent update.
    pub fn from_store(store: &ConstraintStore<K, V>) -> Self {
        let mut domains = HashMap::new();
        for var in store.variables() {
            domains.insert(var.clone(), store.domain(var).iter().cloned().collect());
        }
        Self { domains }
    }

    /// The working domain of `var`.
    ///
    /// Panics if `var` was never registered; every snapshot carries a domain
    /// for every variable of the store it was built from.
    pub fn domain(&self, var: &K) -> &Vector<V> {
        self.domains
            .get(var)
            .unwrap_or_else(|| panic!("no working domain for variable {var:?}"))
    }

    pub(crate) fn set_domain(&mut self, var: &K, values: Vector<V>) {
        self.domains.insert(var.clone(), values);
    }

    /// A new snapshot in which the working domain of `var` is fixed to the
    /// singleton `{value}`. The receiver is left untouched.
    pub fn assign(&self, var: &K, value: &V) -> Self {
        let mut next = self.clone();
        next.domains.insert(var.clone(), Vector::unit(value.clone()));
        next
    }

    pub fn is_decided(&self, var: &K) -> bool {
        self.domain(var).len() == 1
    }

    /// True when every variable has exactly one value left.
    pub fn is_complete(&self) -> bool {
        self.domains.values().all(|domain| domain.len() == 1)
    }

    /// The single remaining value of `var`, if it is decided.
    pub fn decided_value(&self, var: &K) -> Option<&V> {
        let domain = self.domain(var);
        if domain.len() == 1 {
            domain.front()
        } else {
            None
        }
    }

    /// Collapses a complete snapshot into a variable-to-value mapping.
    /// Returns `None` if any variable is still undecided.
    pub fn into_assignment(self) -> Option<std::collections::HashMap<K, V>> {
        if !self.is_complete() {
            return None;
        }
        Some(
            self.domains
                .iter()
                .map(|(var, domain)| {
                    let value = domain.front().expect("complete snapshot").clone();
                    (var.clone(), value)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_variable_store() -> ConstraintStore<&'static str, i64> {
        let mut store = ConstraintStore::new();
        store.add_variable("X", [1, 2]).unwrap();
        store.add_variable("Y", [3]).unwrap();
        store
    }

    #[test]
    fn from_store_copies_static_domains() {
        let store = two_variable_store();
        let snapshot = Snapshot::from_store(&store);
        assert_eq!(snapshot.domain(&"X").iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(snapshot.is_decided(&"Y"));
        assert!(!snapshot.is_complete());
    }

    #[test]
    fn assign_does_not_touch_the_parent_snapshot() {
        let store = two_variable_store();
        let parent = Snapshot::from_store(&store);
        let child = parent.assign(&"X", &2);

        assert_eq!(child.decided_value(&"X"), Some(&2));
        assert_eq!(parent.domain(&"X").len(), 2);
    }

    #[test]
    fn into_assignment_requires_completeness() {
        let store = two_variable_store();
        let snapshot = Snapshot::from_store(&store);
        assert!(snapshot.clone().into_assignment().is_none());

        let assignment = snapshot.assign(&"X", &1).into_assignment().unwrap();
        assert_eq!(assignment[&"X"], 1);
        assert_eq!(assignment[&"Y"], 3);
    }
}
