/// The base trait for variable identifiers.
///
/// A variable key is an opaque handle: the solver never inspects it beyond
/// equality, hashing, and ordering. The `Ord` bound exists so that iteration
/// over variables is deterministic; strings and integers both qualify. Keys
/// are expected to be stable for the lifetime of a problem instance. This is
/// a marker trait, so any type that satisfies these bounds implements
/// `VariableKey`.
pub trait VariableKey: Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug + 'static {}
impl<T> VariableKey for T where T: Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug + 'static {}

/// The base trait for any value that can appear in a variable's domain.
///
/// Values must be cloneable, debuggable, equatable, hashable, and ordered.
/// Hashing keeps compatible-pair lookups O(1); ordering keeps tie-breaks in
/// the heuristics reproducible.
pub trait Value: Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug + 'static {}
impl<T> Value for T where T: Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug + 'static {}
