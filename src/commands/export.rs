//! Export command: write the step trace to a log file

use std::path::Path;

use dijtrace_core::error::Result;
use dijtrace_core::export::export_steps;

use super::helpers::load_and_run;
use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the export command
pub fn execute(cli: &Cli, args: &GraphArgs, output: &Path) -> Result<()> {
    let result = load_and_run(args)?;

    let header = format!(
        "dijtrace run: source={} nodes={} directed={}",
        args.source, args.nodes, args.directed
    );
    let written = export_steps(output, &header, &result.steps)?;

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "file": written.display().to_string(),
                "steps": result.steps.len(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("wrote {} steps to {}", result.steps.len(), written.display());
            }
        }
        OutputFormat::Records => {
            println!("E file={} steps={}", written.display(), result.steps.len());
        }
    }

    Ok(())
}
