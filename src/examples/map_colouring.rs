//! Graph-colouring problems built on the core API: regions are variables,
//! palettes are domains, and every edge is a two-way not-equal constraint.

use crate::{error::Result, solver::store::ConstraintStore};

/// A colour name. Plain strings keep the builders trivially reusable for
/// arbitrary palettes.
pub type Colour = &'static str;

/// A region name.
pub type Region = &'static str;

/// Builds a colouring CSP from per-region palettes and an adjacency list.
/// Each edge adds the not-equal constraint in both directions.
pub fn colouring_csp(
    regions: &[(Region, &[Colour])],
    edges: &[(Region, Region)],
) -> Result<ConstraintStore<Region, Colour>> {
    let mut store = ConstraintStore::new();
    for (region, palette) in regions {
        store.add_variable(*region, palette.iter().copied())?;
    }
    for (a, b) in edges {
        store.add_all_different(&[*a, *b])?;
    }
    Ok(store)
}

/// The classic map-colouring instance: the seven Australian regions with
/// three colours. Tasmania is unconstrained.
pub fn australia() -> Result<ConstraintStore<Region, Colour>> {
    const COLOURS: &[Colour] = &["red", "green", "blue"];
    colouring_csp(
        &[
            ("WA", COLOURS),
            ("NT", COLOURS),
            ("Q", COLOURS),
            ("NSW", COLOURS),
            ("V", COLOURS),
            ("SA", COLOURS),
            ("T", COLOURS),
        ],
        &[
            ("SA", "WA"),
            ("SA", "NT"),
            ("SA", "Q"),
            ("SA", "NSW"),
            ("SA", "V"),
            ("NT", "WA"),
            ("NT", "Q"),
            ("NSW", "Q"),
            ("NSW", "V"),
        ],
    )
}

/// A five-node graph where node 1 is forced to red and node 5 cannot be
/// green. Propagation alone narrows it considerably; one branch finishes it.
pub fn five_node_graph() -> Result<ConstraintStore<Region, Colour>> {
    const RGB: &[Colour] = &["R", "G", "B"];
    colouring_csp(
        &[
            ("1", &["R"]),
            ("2", RGB),
            ("3", RGB),
            ("4", RGB),
            ("5", &["R", "B"]),
        ],
        &[
            ("1", "2"),
            ("1", "3"),
            ("2", "3"),
            ("2", "4"),
            ("3", "4"),
            ("3", "5"),
            ("4", "5"),
        ],
    )
}
