//! CLI argument parsing for dijtrace
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use dijtrace_core::format::OutputFormat;
use parse::parse_format;

/// Dijtrace - traced single-source shortest-path CLI
#[derive(Parser, Debug)]
#[command(name = "dijtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Graph input shared by every subcommand
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Number of nodes (addressed 0..n-1)
    #[arg(long, short = 'n')]
    pub nodes: usize,

    /// Treat the edge list as directed
    #[arg(long)]
    pub directed: bool,

    /// Edge list file, one `u v w` line per edge (default: stdin)
    #[arg(long, short = 'e')]
    pub edges: Option<PathBuf>,

    /// Source node
    #[arg(long, short = 's', default_value_t = 0)]
    pub source: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the traced shortest-path computation and print distances
    Run {
        #[command(flatten)]
        graph: GraphArgs,

        /// Print every trace step
        #[arg(long)]
        trace: bool,
    },

    /// Reconstruct the shortest path to a target node
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Target node
        #[arg(long, short = 't')]
        target: usize,
    },

    /// Run and write the step trace to a log file
    Export {
        #[command(flatten)]
        graph: GraphArgs,

        /// Output log file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["dijtrace", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["dijtrace", "run", "-n", "6"]).unwrap();
        if let Commands::Run { graph, trace } = cli.command {
            assert_eq!(graph.nodes, 6);
            assert_eq!(graph.source, 0);
            assert!(!graph.directed);
            assert!(!trace);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_parse_run_with_options() {
        let cli = Cli::try_parse_from([
            "dijtrace", "run", "-n", "6", "-s", "2", "--directed", "--trace", "-e", "edges.txt",
        ])
        .unwrap();
        if let Commands::Run { graph, trace } = cli.command {
            assert_eq!(graph.source, 2);
            assert!(graph.directed);
            assert!(trace);
            assert_eq!(graph.edges.as_deref(), Some(std::path::Path::new("edges.txt")));
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_parse_path() {
        let cli = Cli::try_parse_from(["dijtrace", "path", "-n", "6", "-t", "4"]).unwrap();
        if let Commands::Path { graph, target } = cli.command {
            assert_eq!(graph.nodes, 6);
            assert_eq!(target, 4);
        } else {
            panic!("Expected Path command");
        }
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["dijtrace", "--format", "json", "run", "-n", "2"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_unknown_format_fails() {
        let result = Cli::try_parse_from(["dijtrace", "--format", "xml", "run", "-n", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_target_fails() {
        let result = Cli::try_parse_from(["dijtrace", "path", "-n", "6"]);
        assert!(result.is_err());
    }
}
