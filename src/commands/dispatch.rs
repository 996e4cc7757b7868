//! Command dispatch logic for dijtrace

use std::time::Instant;

use dijtrace_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Run { graph, trace } => super::run::execute(cli, graph, *trace),
        Commands::Path { graph, target } => super::path::execute(cli, graph, *target),
        Commands::Export { graph, output } => super::export::execute(cli, graph, output),
    };

    debug!(elapsed = ?start.elapsed(), "command_complete");

    result
}
