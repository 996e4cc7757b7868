use serde::Serialize;

use crate::error::{DijtraceError, Result};

/// A single adjacency entry: the edge target and its weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

/// Adjacency-list weighted graph, directed or undirected.
///
/// Nodes are addressed by index `0..node_count`. Adjacency lists keep
/// insertion order; relaxation visits edges in this order, which fixes the
/// trace step sequence for a given input.
#[derive(Debug, Clone)]
pub struct Graph {
    node_count: usize,
    directed: bool,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    ///
    /// Fails with `InvalidGraphSize` when `node_count` is zero.
    pub fn empty(node_count: usize, directed: bool) -> Result<Self> {
        if node_count == 0 {
            return Err(DijtraceError::InvalidGraphSize { nodes: node_count });
        }
        Ok(Graph {
            node_count,
            directed,
            adjacency: vec![Vec::new(); node_count],
        })
    }

    /// Append edge (u, v, w). Undirected graphs also get the mirror entry
    /// (v, u, w); a self-loop is inserted once.
    ///
    /// Endpoints are not bounds-checked here; `loader::build_graph`
    /// validates them before construction completes.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.adjacency[u].push(Edge { to: v, weight });
        if !self.directed && u != v {
            self.adjacency[v].push(Edge { to: u, weight });
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Outgoing edges of `u`, in insertion order.
    pub fn neighbors(&self, u: usize) -> &[Edge] {
        &self.adjacency[u]
    }

    /// Total adjacency entries (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejects_zero_nodes() {
        let err = Graph::empty(0, false).unwrap_err();
        assert!(matches!(err, DijtraceError::InvalidGraphSize { nodes: 0 }));
    }

    #[test]
    fn test_empty_has_no_edges() {
        let g = Graph::empty(4, true).unwrap();
        assert_eq!(g.node_count(), 4);
        assert!(g.is_directed());
        assert_eq!(g.edge_count(), 0);
        for u in 0..4 {
            assert!(g.neighbors(u).is_empty());
        }
    }

    #[test]
    fn test_undirected_edge_is_mirrored() {
        let mut g = Graph::empty(3, false).unwrap();
        g.add_edge(0, 2, 5.0);
        assert_eq!(g.neighbors(0), &[Edge { to: 2, weight: 5.0 }]);
        assert_eq!(g.neighbors(2), &[Edge { to: 0, weight: 5.0 }]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_directed_edge_is_not_mirrored() {
        let mut g = Graph::empty(3, true).unwrap();
        g.add_edge(0, 2, 5.0);
        assert_eq!(g.neighbors(0), &[Edge { to: 2, weight: 5.0 }]);
        assert!(g.neighbors(2).is_empty());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_inserted_once() {
        let mut g = Graph::empty(2, false).unwrap();
        g.add_edge(1, 1, 3.0);
        assert_eq!(g.neighbors(1), &[Edge { to: 1, weight: 3.0 }]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() {
        let mut g = Graph::empty(4, true).unwrap();
        g.add_edge(0, 3, 1.0);
        g.add_edge(0, 1, 2.0);
        g.add_edge(0, 2, 3.0);
        let targets: Vec<usize> = g.neighbors(0).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![3, 1, 2]);
    }
}
