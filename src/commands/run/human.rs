use dijtrace_core::graph::RunResult;
use dijtrace_core::trace::display_distance;

use crate::cli::{Cli, GraphArgs};

/// Output in human-readable format
pub fn output_run_human(cli: &Cli, args: &GraphArgs, result: &RunResult, with_trace: bool) {
    if with_trace {
        for step in &result.steps {
            println!("[{:03}] {}: {}", step.seq, step.action, step.detail);
        }
        println!();
    }

    if !cli.quiet {
        println!("Distances from node {}:", args.source);
    }
    println!("{:<6} {:<10} {}", "node", "dist", "parent");
    for (v, d) in result.dist.iter().enumerate() {
        let parent = result.parent[v]
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<6} {:<10} {}", v, display_distance(*d), parent);
    }
}
