//! CLI entry point for the `trailgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use trailgraph::cli::commands;
use trailgraph::config::{load_config, Config};
use trailgraph::graph::TraversalOrder;
use trailgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "trailgraph",
    about = "trailgraph CLI — connectivity analysis of account/story graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field delimiter of dataset rows (overrides config)
    #[arg(long)]
    delimiter: Option<char>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report totals, story popularity and connectivity of a dataset
    Investigate {
        /// Path to the dataset table
        dataset: PathBuf,
        /// Also write the graph as TGF to this path
        #[arg(long)]
        tgf: Option<PathBuf>,
        /// URL prefix for story title lookup
        #[arg(long)]
        title_url: Option<String>,
    },
    /// Write the dataset graph as a TGF edge list
    Export {
        /// Path to the dataset table
        dataset: PathBuf,
        /// Output TGF path
        output: PathBuf,
    },
    /// Print the traversal order from a start vertex
    Traverse {
        /// Path to the dataset table
        dataset: PathBuf,
        /// Start vertex label
        start: String,
        /// Order: dfs or bfs
        #[arg(long, default_value = "dfs")]
        order: String,
    },
    /// Vertex/arc counts, undirectedness and component sizes
    Stats {
        /// Path to the dataset table
        dataset: PathBuf,
    },
    /// Successors and predecessors of a vertex
    Neighbors {
        /// Path to the dataset table
        dataset: PathBuf,
        /// Vertex label
        vertex: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        None => Config::default(),
    };
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Investigate {
            dataset,
            tgf,
            title_url,
        } => {
            if tgf.is_some() {
                config.tgf_output = tgf;
            }
            if title_url.is_some() {
                config.title_url = title_url;
            }
            commands::cmd_investigate(&dataset, &config, json)
        }
        Commands::Export { dataset, output } => {
            commands::cmd_export(&dataset, &output, &config, json)
        }
        Commands::Traverse {
            dataset,
            start,
            order,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&dataset, &start, order, &config, json)
        }
        Commands::Stats { dataset } => commands::cmd_stats(&dataset, &config, json),
        Commands::Neighbors { dataset, vertex } => {
            commands::cmd_neighbors(&dataset, &vertex, &config, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } | GraphError::Config(_) => 2,
            GraphError::VertexNotFound(_) => 4,
            GraphError::Network(_) => 5,
        };
        process::exit(code);
    }
}
