//! CLI entry point for the `gconn` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_connectivity::cli::commands;
use graph_connectivity::{GraphError, GraphKind};

/// Exit code for a well-formed graph that is not connected.
const EXIT_DISCONNECTED: i32 = 10;

#[derive(Parser)]
#[command(
    name = "gconn",
    about = "Check whether a directed or undirected graph is connected"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging and print the depth-first discovery order
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check connectivity of a JSON graph document
    Check {
        /// Path to the graph document
        file: PathBuf,
        /// Override the document's graph type: directed or undirected
        #[arg(long)]
        kind: Option<String>,
    },
    /// Validate a JSON graph document without checking it
    Validate {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Run the built-in example graphs
    Demo,
    /// Show the cost of each step of the check
    Complexity,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Check { file, kind } => {
            let kind = match kind {
                Some(name) => match GraphKind::from_name(&name) {
                    Some(kind) => Some(kind),
                    None => {
                        eprintln!("Invalid graph kind: {}", name);
                        process::exit(3);
                    }
                },
                None => None,
            };
            commands::cmd_check(&file, kind, cli.verbose, json)
        }
        Commands::Validate { file } => commands::cmd_validate(&file, json).map(|_| true),
        Commands::Demo => commands::cmd_demo(cli.verbose, json).map(|_| true),
        Commands::Complexity => commands::cmd_complexity(json).map(|_| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_DISCONNECTED),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::Io(_) => 1,
                GraphError::Json(_) => 2,
                GraphError::EmptyVertexSet
                | GraphError::MalformedEdge { .. }
                | GraphError::UnknownVertex { .. } => 3,
            };
            process::exit(code);
        }
    }
}
