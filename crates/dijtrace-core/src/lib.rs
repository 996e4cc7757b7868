//! Dijtrace Core Library
//!
//! Traced single-source shortest-path engine: graph model, instrumented
//! Dijkstra emitting a replayable step trace, path reconstruction, edge-list
//! loading, and trace export.

pub mod error;
pub mod export;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod trace;
