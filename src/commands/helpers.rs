//! Shared helpers for command implementations

use std::fs;
use std::io::Read;

use dijtrace_core::error::Result;
use dijtrace_core::graph::{self, Graph, RunResult};
use dijtrace_core::loader;
use tracing::debug;

use crate::cli::GraphArgs;

/// Read edge text (file or stdin), parse it, and build the validated graph
pub fn load_graph(args: &GraphArgs) -> Result<Graph> {
    let text = match &args.edges {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let edges = loader::parse_edges(&text)?;
    debug!(edges = edges.len(), nodes = args.nodes, "parse_edges");

    loader::build_graph(args.nodes, args.directed, &edges)
}

/// Load the graph and run the traced computation from the source node
pub fn load_and_run(args: &GraphArgs) -> Result<RunResult> {
    let graph = load_graph(args)?;
    graph::run(&graph, args.source)
}
