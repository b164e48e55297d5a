//! Variable- and value-ordering policies for the backtracking search.

pub mod value;
pub mod variable;
