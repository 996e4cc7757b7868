//! Run command: compute distances and print the result table

mod human;
mod json;
mod records;

use dijtrace_core::error::Result;

use super::helpers::load_and_run;
use crate::cli::{Cli, GraphArgs, OutputFormat};

/// Execute the run command
pub fn execute(cli: &Cli, args: &GraphArgs, with_trace: bool) -> Result<()> {
    let result = load_and_run(args)?;

    match cli.format {
        OutputFormat::Json => json::output_run_json(args, &result)?,
        OutputFormat::Human => human::output_run_human(cli, args, &result, with_trace),
        OutputFormat::Records => records::output_run_records(args, &result, with_trace),
    }

    Ok(())
}
