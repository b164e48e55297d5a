pub mod engine;
pub mod heuristics;
pub mod propagation;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod value;
pub mod work_list;
