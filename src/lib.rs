//! Nodus is a generic solver for binary constraint satisfaction problems.
//!
//! A problem is a set of variables, each with a finite discrete domain, and
//! pairwise constraints describing which value combinations are jointly
//! legal. The solver finds an assignment of exactly one value per variable
//! that satisfies every constraint, or reports that none exists.
//!
//! The core is split into three layers:
//!
//! - **[`ConstraintStore`]**: the read-only problem description: variables,
//!   static domains, and directional compatible-pair tables built from
//!   predicates.
//! - **Propagator** ([`propagate`]): the AC-3 algorithm, shrinking working
//!   domains until every arc is consistent or some domain empties.
//! - **[`SolverEngine`]**: backtracking search that maintains arc
//!   consistency after each tentative assignment, with configurable
//!   variable-ordering (declaration order, MRV, degree bootstrap) and
//!   value-ordering (declaration order, LCV) heuristics.
//!
//! [`ConstraintStore`]: solver::store::ConstraintStore
//! [`propagate`]: solver::propagation::propagate
//! [`SolverEngine`]: solver::engine::SolverEngine
//!
//! # Example
//!
//! Three variables that must all take different values. `B` and `C` are
//! already forced, so propagation pins `A` to `1` without any search:
//!
//! ```
//! use nodus::solver::engine::SolverEngine;
//! use nodus::solver::store::ConstraintStore;
//!
//! # fn main() -> nodus::error::Result<()> {
//! let mut store = ConstraintStore::new();
//! store.add_variable("A", [1, 2, 3])?;
//! store.add_variable("B", [2])?;
//! store.add_variable("C", [3])?;
//! store.add_all_different(&["A", "B", "C"])?;
//!
//! let (solution, stats) = SolverEngine::default().solve(&store);
//! let solution = solution.expect("satisfiable");
//!
//! assert_eq!(solution[&"A"], 1);
//! assert_eq!(stats.failures, 0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod examples;
pub mod solver;
