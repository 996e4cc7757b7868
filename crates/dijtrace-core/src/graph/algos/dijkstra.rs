use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::{DijtraceError, Result};
use crate::graph::types::{Edge, Graph};
use crate::trace::{display_distance, Action, Step};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
///
/// Ties are broken by node id: among entries with equal distance the smaller
/// node pops first. This fixes the trace text for a given input; final
/// distances and predecessors do not depend on it.
#[derive(Debug, Clone)]
struct HeapEntry {
    dist: f64,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Final arrays plus the complete step trace for one run
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Shortest distance per node, +inf for unreachable (JSON: null)
    #[serde(serialize_with = "crate::trace::serialize_distances")]
    pub dist: Vec<f64>,
    /// Predecessor on the shortest path per node
    pub parent: Vec<Option<usize>>,
    /// Ordered trace of every engine decision
    pub steps: Vec<Step>,
}

/// State tracked during a traced run
struct DijkstraState {
    dist: Vec<f64>,
    parent: Vec<Option<usize>>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    steps: Vec<Step>,
}

impl DijkstraState {
    fn new(node_count: usize, source: usize) -> Self {
        let mut dist = vec![f64::INFINITY; node_count];
        dist[source] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            dist: 0.0,
            node: source,
        }));
        Self {
            dist,
            parent: vec![None; node_count],
            visited: vec![false; node_count],
            heap,
            steps: Vec::new(),
        }
    }

    /// Record one step with deep copies of the live state arrays. Emitted
    /// steps are frozen; later mutation never changes them.
    fn record(&mut self, action: Action, detail: String, current: Option<usize>) {
        self.steps.push(Step {
            seq: self.steps.len() + 1,
            action,
            detail,
            visited: self.visited.clone(),
            dist: self.dist.clone(),
            parent: self.parent.clone(),
            current,
        });
    }
}

/// Relax a single outgoing edge of the freshly finalized node `u`
fn relax_edge(state: &mut DijkstraState, u: usize, edge: Edge) -> Result<()> {
    let Edge { to: v, weight: w } = edge;
    if w < 0.0 {
        return Err(DijtraceError::NegativeWeight {
            from: u,
            to: v,
            weight: w,
        });
    }

    if state.visited[v] {
        state.record(
            Action::RelaxSkip,
            format!("neighbor {} already finalized, edge {}->{} skipped", v, u, v),
            Some(u),
        );
        return Ok(());
    }

    // Strict improvement only; ties do not update.
    let nd = state.dist[u] + w;
    if nd < state.dist[v] {
        let old = state.dist[v];
        state.dist[v] = nd;
        state.parent[v] = Some(u);
        state.heap.push(Reverse(HeapEntry { dist: nd, node: v }));
        state.record(
            Action::Relax,
            format!(
                "improvement {}->{} (w={}): dist[{}] {} -> {}, parent[{}]={}; pushed to queue",
                u,
                v,
                display_distance(w),
                v,
                display_distance(old),
                display_distance(nd),
                v,
                u
            ),
            Some(u),
        );
    } else {
        state.record(
            Action::NoRelax,
            format!(
                "no improvement for {}->{} (w={}): dist[{}]={}, candidate={}",
                u,
                v,
                display_distance(w),
                v,
                display_distance(state.dist[v]),
                display_distance(nd)
            ),
            Some(u),
        );
    }

    Ok(())
}

/// Run the traced shortest-path computation from `source`.
///
/// Label-setting Dijkstra over a lazily-deleted min-heap: every improvement
/// pushes a fresh queue entry and stale entries are skipped on pop, so no
/// decrease-key is needed. O((E + V) log V). Edges of each node are relaxed
/// in adjacency insertion order.
///
/// Fails with `OutOfRangeIndex` when `source` is not a node of `graph`, and
/// with `NegativeWeight` the first time relaxation encounters a negative
/// edge weight; a negative edge the search never reaches is not flagged.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count(), directed = graph.is_directed()))]
pub fn run(graph: &Graph, source: usize) -> Result<RunResult> {
    let n = graph.node_count();
    if source >= n {
        return Err(DijtraceError::out_of_range("source", source as i64, n));
    }

    let mut state = DijkstraState::new(n, source);
    state.record(Action::Init, format!("start node s={}", source), Some(source));

    while let Some(Reverse(HeapEntry { dist: d, node: u })) = state.heap.pop() {
        state.record(
            Action::Pop,
            format!("popped from queue: (dist={}, v={})", display_distance(d), u),
            Some(u),
        );

        // Stale entry from an earlier, looser relaxation.
        if state.visited[u] {
            state.record(
                Action::Skip,
                format!("node {} already finalized, skipping", u),
                Some(u),
            );
            continue;
        }

        state.visited[u] = true;
        state.record(
            Action::Visit,
            format!("marking node {} as finalized", u),
            Some(u),
        );

        for &edge in graph.neighbors(u) {
            relax_edge(&mut state, u, edge)?;
        }
    }

    state.record(Action::Done, "queue empty, run finished".to_string(), None);

    tracing::debug!(steps = state.steps.len(), "shortest_path_run_complete");

    Ok(RunResult {
        dist: state.dist,
        parent: state.parent,
        steps: state.steps,
    })
}
