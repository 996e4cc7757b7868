//! Edge-list loader: text lines to a validated Graph
//!
//! Line format is `u v w`, one edge per line. Blank lines and `#` comments
//! are skipped; commas count as separators, so `0,1,7` parses too. Node
//! bounds are validated here, before construction completes — the engine
//! assumes every adjacency entry it encounters is in range.

use crate::error::{DijtraceError, Result};
use crate::graph::Graph;

/// A parsed edge before bounds validation
pub type RawEdge = (i64, i64, f64);

/// Parse edge-list text into raw edges, preserving input order.
pub fn parse_edges(text: &str) -> Result<Vec<RawEdge>> {
    let mut edges = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            return Err(malformed(line_no, raw));
        }

        let u: i64 = parts[0].parse().map_err(|_| malformed(line_no, raw))?;
        let v: i64 = parts[1].parse().map_err(|_| malformed(line_no, raw))?;
        let w: f64 = parts[2].parse().map_err(|_| malformed(line_no, raw))?;
        edges.push((u, v, w));
    }
    Ok(edges)
}

fn malformed(line: usize, content: &str) -> DijtraceError {
    DijtraceError::MalformedEdge {
        line,
        content: content.to_string(),
    }
}

/// Build a graph from raw edges, validating every endpoint against
/// `0..node_count`.
pub fn build_graph(node_count: usize, directed: bool, edges: &[RawEdge]) -> Result<Graph> {
    let mut graph = Graph::empty(node_count, directed)?;
    for &(u, v, w) in edges {
        let bound = node_count as i64;
        for endpoint in [u, v] {
            if endpoint < 0 || endpoint >= bound {
                return Err(DijtraceError::out_of_range(
                    &format!("edge {} {} {}", u, v, w),
                    endpoint,
                    node_count,
                ));
            }
        }
        graph.add_edge(u as usize, v as usize, w);
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_lines() {
        let edges = parse_edges("0 1 7\n1 2 10.5\n").unwrap();
        assert_eq!(edges, vec![(0, 1, 7.0), (1, 2, 10.5)]);
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let text = "# header comment\n\n0 1 7\n   \n# trailing\n";
        let edges = parse_edges(text).unwrap();
        assert_eq!(edges, vec![(0, 1, 7.0)]);
    }

    #[test]
    fn test_parse_accepts_comma_separators() {
        let edges = parse_edges("0,1,7\n1, 2, 3.5\n").unwrap();
        assert_eq!(edges, vec![(0, 1, 7.0), (1, 2, 3.5)]);
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let err = parse_edges("0 1 7\n0 1\n").unwrap_err();
        match err {
            DijtraceError::MalformedEdge { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "0 1");
            }
            other => panic!("expected MalformedEdge, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        assert!(parse_edges("a b c").is_err());
        assert!(parse_edges("0 1 seven").is_err());
        // Node ids are integers, not floats
        assert!(parse_edges("0.5 1 7").is_err());
    }

    #[test]
    fn test_parse_keeps_negative_values_for_later_validation() {
        // Bounds and weight sign are not this stage's concern
        let edges = parse_edges("-1 2 7\n0 1 -3\n").unwrap();
        assert_eq!(edges, vec![(-1, 2, 7.0), (0, 1, -3.0)]);
    }

    #[test]
    fn test_build_graph_adds_in_input_order() {
        let g = build_graph(3, true, &[(0, 2, 1.0), (0, 1, 2.0)]).unwrap();
        let targets: Vec<usize> = g.neighbors(0).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![2, 1]);
    }

    #[test]
    fn test_build_graph_rejects_out_of_range_endpoint() {
        let err = build_graph(3, false, &[(0, 3, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            DijtraceError::OutOfRangeIndex { index: 3, nodes: 3, .. }
        ));

        let err = build_graph(3, false, &[(-1, 2, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            DijtraceError::OutOfRangeIndex { index: -1, .. }
        ));
    }

    #[test]
    fn test_build_graph_rejects_zero_nodes() {
        let err = build_graph(0, false, &[]).unwrap_err();
        assert!(matches!(err, DijtraceError::InvalidGraphSize { .. }));
    }
}
