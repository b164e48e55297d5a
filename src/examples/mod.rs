//! Problem builders exercising the core API: graph colouring and Sudoku.
//!
//! These modules are collaborators of the solver, not part of it: they only
//! call the public construction and solve operations.

pub mod map_colouring;
pub mod sudoku;
