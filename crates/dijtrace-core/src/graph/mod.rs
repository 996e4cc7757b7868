//! Weighted graph model and the traced shortest-path engine

pub mod algos;
pub mod path;
pub mod types;

pub use algos::dijkstra::{run, RunResult};
pub use path::restore_path;
pub use types::{Edge, Graph};
