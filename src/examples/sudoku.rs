//! A Sudoku frontend for the core solver: each of the 81 cells is a
//! variable, and every row, column, and 3x3 box carries a pairwise
//! all-different constraint.

use crate::{
    error::Result,
    solver::{engine::Assignment, store::ConstraintStore},
};

/// A cell coordinate: (row, column), both 0-based.
pub type Cell = (u8, u8);

/// Builds the CSP for a 9x9 board supplied as 81 cell values in row-major
/// order, 0 meaning blank. Blank cells get the full 1..=9 domain, given
/// cells a singleton.
pub fn sudoku_csp(board: &[u8; 81]) -> Result<ConstraintStore<Cell, u8>> {
    let mut store = ConstraintStore::new();
    for row in 0..9u8 {
        for col in 0..9u8 {
            let given = board[usize::from(row) * 9 + usize::from(col)];
            if given == 0 {
                store.add_variable((row, col), 1..=9)?;
            } else {
                store.add_variable((row, col), [given])?;
            }
        }
    }

    for row in 0..9u8 {
        let cells: Vec<Cell> = (0..9u8).map(|col| (row, col)).collect();
        store.add_all_different(&cells)?;
    }
    for col in 0..9u8 {
        let cells: Vec<Cell> = (0..9u8).map(|row| (row, col)).collect();
        store.add_all_different(&cells)?;
    }
    for band in 0..3u8 {
        for stack in 0..3u8 {
            let mut cells = Vec::with_capacity(9);
            for row in band * 3..(band + 1) * 3 {
                for col in stack * 3..(stack + 1) * 3 {
                    cells.push((row, col));
                }
            }
            store.add_all_different(&cells)?;
        }
    }
    Ok(store)
}

/// Renders a solved board in the usual 3x3-banded layout.
pub fn render_board(assignment: &Assignment<Cell, u8>) -> String {
    let mut out = String::new();
    for row in 0..9u8 {
        for col in 0..9u8 {
            out.push_str(&assignment[&(row, col)].to_string());
            if col == 2 || col == 5 {
                out.push_str(" | ");
            } else if col < 8 {
                out.push(' ');
            }
        }
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str("------+-------+------\n");
        }
    }
    out
}
