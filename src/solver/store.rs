use std::collections::{HashMap, HashSet};

use crate::{
    error::{Error, Result},
    solver::value::{Value, VariableKey},
};

/// A predicate deciding whether a pair of values is jointly legal.
///
/// Constraints are handed to the store as predicates, but the store keeps the
/// *realized* set of compatible pairs rather than the predicate itself, so
/// that later lookups are O(1) set membership instead of a function call.
/// A blanket implementation covers plain closures, which is what callers use
/// in practice; lookup tables or generated code can implement the trait
/// directly.
pub trait CompatibilityPredicate<V> {
    fn compatible(&self, a: &V, b: &V) -> bool;
}

impl<V, F> CompatibilityPredicate<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    fn compatible(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}

/// The read-only description of a binary CSP: variables, static domains, and
/// directional compatible-pair tables.
///
/// The store is built once at problem-setup time and never mutated during
/// solving; the engine and propagator only issue read-only lookups against
/// it. Variables are kept in declaration order and neighbour lists in
/// constraint-insertion order, so every enumeration the solver performs is
/// deterministic.
///
/// Constraint tables are directional and are *not* mirrored automatically:
/// registering a table for `(i, j)` says nothing about `(j, i)`. Whoever
/// populates the store must add both directions (as
/// [`add_all_different`](Self::add_all_different) does), otherwise the
/// constraint graph is asymmetric and propagation over it is unsound.
#[derive(Debug, Default)]
pub struct ConstraintStore<K: VariableKey, V: Value> {
    /// Every registered variable, in declaration order.
    variables: Vec<K>,
    /// The static domain of each variable: ordered, duplicate-free, immutable
    /// after registration.
    domains: HashMap<K, Vec<V>>,
    /// `tables[i][j]` is the set of value pairs `(a, b)` jointly legal for
    /// the ordered variable pair `(i, j)`.
    tables: HashMap<K, HashMap<K, HashSet<(V, V)>>>,
    /// `outgoing[i]` lists every `j` with a table for `(i, j)`, in the order
    /// the tables were first created.
    outgoing: HashMap<K, Vec<K>>,
    /// `incoming[j]` lists every `i` with a table for `(i, j)`.
    incoming: HashMap<K, Vec<K>>,
}

impl<K: VariableKey, V: Value> ConstraintStore<K, V> {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            domains: HashMap::new(),
            tables: HashMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Registers a variable together with its static domain.
    ///
    /// Duplicate values in `domain` are dropped, keeping the order of first
    /// occurrence. Registering the same name twice or supplying an empty
    /// domain is a malformed problem and fails immediately.
    pub fn add_variable(&mut self, name: K, domain: impl IntoIterator<Item = V>) -> Result<()> {
        if self.domains.contains_key(&name) {
            return Err(Error::DuplicateVariable(format!("{name:?}")));
        }
        let mut values: Vec<V> = Vec::new();
        for value in domain {
            if !values.contains(&value) {
                values.push(value);
            }
        }
        if values.is_empty() {
            return Err(Error::EmptyDomain(format!("{name:?}")));
        }
        self.variables.push(name.clone());
        self.domains.insert(name.clone(), values);
        self.tables.insert(name.clone(), HashMap::new());
        self.outgoing.insert(name.clone(), Vec::new());
        self.incoming.insert(name, Vec::new());
        Ok(())
    }

    /// Adds a directional constraint from `i` to `j`.
    ///
    /// On the first call for a pair this filters the Cartesian product of the
    /// two static domains through `predicate`. Repeated calls *intersect*
    /// with the existing table: each call can only narrow the set of legal
    /// pairs, never widen it, so registering the same predicate twice is
    /// idempotent.
    ///
    /// Only the `(i, j)` direction is added. Callers wanting the usual
    /// two-way relationship must call this again with the arguments (and, if
    /// it is not symmetric, the predicate) swapped.
    pub fn add_constraint(
        &mut self,
        i: &K,
        j: &K,
        predicate: impl CompatibilityPredicate<V>,
    ) -> Result<()> {
        let domain_i = self
            .domains
            .get(i)
            .ok_or_else(|| Error::UnknownVariable(format!("{i:?}")))?;
        let domain_j = self
            .domains
            .get(j)
            .ok_or_else(|| Error::UnknownVariable(format!("{j:?}")))?;

        let existing = self.tables.get(i).and_then(|tables| tables.get(j));
        let fresh = existing.is_none();
        let table: HashSet<(V, V)> = match existing {
            Some(pairs) => pairs
                .iter()
                .filter(|(a, b)| predicate.compatible(a, b))
                .cloned()
                .collect(),
            None => {
                let mut pairs = HashSet::new();
                for a in domain_i {
                    for b in domain_j {
                        if predicate.compatible(a, b) {
                            pairs.insert((a.clone(), b.clone()));
                        }
                    }
                }
                pairs
            }
        };

        self.tables
            .get_mut(i)
            .expect("validated above")
            .insert(j.clone(), table);
        if fresh {
            self.outgoing.get_mut(i).expect("validated above").push(j.clone());
            self.incoming.get_mut(j).expect("validated above").push(i.clone());
        }
        Ok(())
    }

    /// Adds a pairwise not-equal constraint, in both directions, between
    /// every distinct ordered pair drawn from `variables`.
    ///
    /// This creates O(k²) constraint tables for k variables.
    pub fn add_all_different(&mut self, variables: &[K]) -> Result<()> {
        for i in variables {
            for j in variables {
                if i != j {
                    self.add_constraint(i, j, |a: &V, b: &V| a != b)?;
                }
            }
        }
        Ok(())
    }

    /// Every registered variable, in declaration order.
    pub fn variables(&self) -> &[K] {
        &self.variables
    }

    /// The static domain of `var`.
    ///
    /// Panics if `var` was never registered; asking for an unknown variable
    /// is a programming error, not a recoverable condition.
    pub fn domain(&self, var: &K) -> &[V] {
        &self.domains[var]
    }

    /// Every variable `j` with a constraint table from `var` to `j`.
    pub fn neighbors(&self, var: &K) -> &[K] {
        &self.outgoing[var]
    }

    /// The number of constraint partners of `var`.
    pub fn degree(&self, var: &K) -> usize {
        self.outgoing[var].len()
    }

    /// Every arc `(i, j)` with a registered constraint table. Arcs are read
    /// off the table key set, not stored independently.
    pub fn arcs(&self) -> Vec<(K, K)> {
        let mut arcs = Vec::new();
        for i in &self.variables {
            for j in &self.outgoing[i] {
                arcs.push((i.clone(), j.clone()));
            }
        }
        arcs
    }

    /// Every arc `(i, var)` pointing into `var`. These are the arcs that must
    /// be re-checked when the domain of `var` shrinks.
    pub fn neighbor_arcs(&self, var: &K) -> Vec<(K, K)> {
        self.incoming[var]
            .iter()
            .map(|i| (i.clone(), var.clone()))
            .collect()
    }

    /// The realized compatible-pair table for `(i, j)`, if one is registered.
    pub fn table(&self, i: &K, j: &K) -> Option<&HashSet<(V, V)>> {
        self.tables.get(i).and_then(|tables| tables.get(j))
    }

    /// Whether `(a, b)` is jointly legal for the ordered pair `(i, j)`.
    ///
    /// The absence of a table means "unconstrained", not "impossible": any
    /// pair is compatible for an unconstrained variable pair.
    pub fn is_compatible(&self, i: &K, a: &V, j: &K, b: &V) -> bool {
        match self.table(i, j) {
            Some(pairs) => pairs.contains(&(a.clone(), b.clone())),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    fn letters() -> ConstraintStore<&'static str, i64> {
        let mut store = ConstraintStore::new();
        store.add_variable("A", [1, 2, 3]).unwrap();
        store.add_variable("B", [2]).unwrap();
        store.add_variable("C", [3]).unwrap();
        store.add_all_different(&["A", "B", "C"]).unwrap();
        store
    }

    fn pairs(
        store: &ConstraintStore<&'static str, i64>,
        i: &'static str,
        j: &'static str,
    ) -> Vec<(i64, i64)> {
        let mut pairs: Vec<_> = store.table(&i, &j).unwrap().iter().cloned().collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn all_different_builds_filtered_tables_in_both_directions() {
        let store = letters();

        assert_eq!(store.variables(), &["A", "B", "C"]);
        assert_eq!(store.domain(&"A"), &[1, 2, 3]);

        assert_eq!(pairs(&store, "A", "B"), vec![(1, 2), (3, 2)]);
        assert_eq!(pairs(&store, "A", "C"), vec![(1, 3), (2, 3)]);
        assert_eq!(pairs(&store, "B", "A"), vec![(2, 1), (2, 3)]);
        assert_eq!(pairs(&store, "B", "C"), vec![(2, 3)]);
        assert_eq!(pairs(&store, "C", "A"), vec![(3, 1), (3, 2)]);
        assert_eq!(pairs(&store, "C", "B"), vec![(3, 2)]);
    }

    #[test]
    fn arcs_enumerate_every_directional_table() {
        let store = letters();
        let arcs = store.arcs();
        assert_eq!(arcs.len(), 6);
        assert_eq!(arcs[0], ("A", "B"));
        assert!(arcs.contains(&("C", "B")));
    }

    #[test]
    fn neighbor_arcs_point_into_the_given_variable() {
        let store = letters();
        assert_eq!(store.neighbor_arcs(&"B"), vec![("A", "B"), ("C", "B")]);
    }

    #[test]
    fn absent_table_means_unconstrained() {
        let mut store: ConstraintStore<&str, i64> = ConstraintStore::new();
        store.add_variable("X", [1]).unwrap();
        store.add_variable("Y", [2]).unwrap();
        assert!(store.table(&"X", &"Y").is_none());
        assert!(store.is_compatible(&"X", &1, &"Y", &2));
    }

    #[test]
    fn repeated_constraints_intersect_cumulatively() {
        let mut store: ConstraintStore<&str, i64> = ConstraintStore::new();
        store.add_variable("X", [1, 2, 3, 4]).unwrap();
        store.add_variable("Y", [1, 2, 3, 4]).unwrap();
        store.add_constraint(&"X", &"Y", |a: &i64, b: &i64| a < b).unwrap();
        store
            .add_constraint(&"X", &"Y", |a: &i64, b: &i64| a + b == 5)
            .unwrap();

        let mut remaining: Vec<_> = store.table(&"X", &"Y").unwrap().iter().cloned().collect();
        remaining.sort();
        assert_eq!(remaining, vec![(1, 4), (2, 3)]);

        // A repeat of an already-applied predicate changes nothing.
        store.add_constraint(&"X", &"Y", |a: &i64, b: &i64| a < b).unwrap();
        assert_eq!(store.table(&"X", &"Y").unwrap().len(), 2);
    }

    #[test]
    fn duplicate_variable_registration_fails() {
        let mut store: ConstraintStore<&str, i64> = ConstraintStore::new();
        store.add_variable("X", [1]).unwrap();
        let err = store.add_variable("X", [2]).unwrap_err();
        assert!(matches!(err, Error::DuplicateVariable(_)));
    }

    #[test]
    fn empty_domain_registration_fails() {
        let mut store: ConstraintStore<&str, i64> = ConstraintStore::new();
        let err = store.add_variable("X", []).unwrap_err();
        assert!(matches!(err, Error::EmptyDomain(_)));
    }

    #[test]
    fn constraint_on_unknown_variable_fails() {
        let mut store: ConstraintStore<&str, i64> = ConstraintStore::new();
        store.add_variable("X", [1]).unwrap();
        let err = store
            .add_constraint(&"X", &"Y", |a: &i64, b: &i64| a != b)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownVariable(_)));
    }

    #[test]
    fn domain_values_are_deduplicated_in_declaration_order() {
        let mut store: ConstraintStore<&str, i64> = ConstraintStore::new();
        store.add_variable("X", [3, 1, 3, 2, 1]).unwrap();
        assert_eq!(store.domain(&"X"), &[3, 1, 2]);
    }

    #[test]
    fn degree_counts_constraint_partners() {
        let store = letters();
        assert_eq!(store.degree(&"A"), 2);
        let mut lonely: ConstraintStore<&str, i64> = ConstraintStore::new();
        lonely.add_variable("X", [1]).unwrap();
        assert_eq!(lonely.degree(&"X"), 0);
    }
}
