//! Path command: reconstruct the shortest route to a target node

use dijtrace_core::error::{DijtraceError, Result};
use dijtrace_core::graph::restore_path;
use dijtrace_core::trace::display_distance;

use super::helpers::load_and_run;
use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the path command
pub fn execute(cli: &Cli, args: &GraphArgs, target: usize) -> Result<()> {
    if target >= args.nodes {
        return Err(DijtraceError::out_of_range(
            "target",
            target as i64,
            args.nodes,
        ));
    }

    let result = load_and_run(args)?;
    let path = restore_path(&result.parent, args.source, target);
    let found = !path.is_empty();
    let length = result.dist[target];

    match cli.format {
        OutputFormat::Json => output_path_json(args, target, found, &path, length)?,
        OutputFormat::Human => output_path_human(cli, args, target, found, &path, length),
        OutputFormat::Records => {
            let route: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            println!(
                "P from={} to={} found={} length={} path={}",
                args.source,
                target,
                found,
                display_distance(length),
                route.join(",")
            );
        }
    }

    Ok(())
}

fn output_path_json(
    args: &GraphArgs,
    target: usize,
    found: bool,
    path: &[usize],
    length: f64,
) -> Result<()> {
    let json = serde_json::json!({
        "from": args.source,
        "to": target,
        "found": found,
        "path": path,
        "length": length.is_finite().then_some(length),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn output_path_human(
    cli: &Cli,
    args: &GraphArgs,
    target: usize,
    found: bool,
    path: &[usize],
    length: f64,
) {
    if found {
        let route: Vec<String> = path.iter().map(|v| v.to_string()).collect();
        println!("{} (length {})", route.join(" -> "), display_distance(length));
    } else if !cli.quiet {
        println!("no path from {} to {}", args.source, target);
    }
}
