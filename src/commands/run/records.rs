use dijtrace_core::graph::RunResult;
use dijtrace_core::trace::display_distance;

use crate::cli::GraphArgs;

/// Escape double quotes for embedding in a quoted records field
fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Output in line-oriented records format: one R header line, one D line
/// per node, and with `--trace` one S line per step.
pub fn output_run_records(args: &GraphArgs, result: &RunResult, with_trace: bool) {
    println!(
        "R source={} nodes={} directed={} steps={}",
        args.source,
        args.nodes,
        args.directed,
        result.steps.len()
    );

    for (v, d) in result.dist.iter().enumerate() {
        let parent = result.parent[v]
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("D node={} dist={} parent={}", v, display_distance(*d), parent);
    }

    if with_trace {
        for step in &result.steps {
            let current = step
                .current
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "S seq={:03} action={} current={} detail=\"{}\"",
                step.seq,
                step.action,
                current,
                escape_quotes(&step.detail)
            );
        }
    }
}
