//! CLI entry point for the `cgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use city_graph::cli::commands;
use city_graph::engine::TraversalKind;
use city_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "cgraph",
    about = "city-graph CLI: road network traversal and shortest paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// JSON network description to load (defaults to the built-in city)
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display every location and its outgoing roads
    Show,
    /// Breadth-first traversal from a location
    Bfs {
        /// Starting vertex ID
        start: u64,
    },
    /// Depth-first traversal from a location
    Dfs {
        /// Starting vertex ID
        start: u64,
    },
    /// Shortest distances from a location to every location
    Shortest {
        /// Source vertex ID
        start: u64,
    },
    /// Cheapest route between two locations
    Route {
        /// Source vertex ID
        from: u64,
        /// Target vertex ID
        to: u64,
    },
    /// Print the network as a JSON description
    Export {
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let network = cli.network.as_deref();
    let result = match cli.command {
        Commands::Show => commands::cmd_show(network, json),
        Commands::Bfs { start } => {
            commands::cmd_traverse(network, TraversalKind::BreadthFirst, start, json)
        }
        Commands::Dfs { start } => {
            commands::cmd_traverse(network, TraversalKind::DepthFirst, start, json)
        }
        Commands::Shortest { start } => commands::cmd_shortest(network, start, json),
        Commands::Route { from, to } => commands::cmd_route(network, from, to, json),
        Commands::Export { pretty } => commands::cmd_export(network, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse(_) => 2,
            GraphError::UnknownVertex(_)
            | GraphError::NotFound(_)
            | GraphError::DuplicateVertex(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
