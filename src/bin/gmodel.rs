//! CLI entry point for the `gmodel` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graph_model::cli::commands;
use graph_model::{EdgeDirection, GraphError};

#[derive(Parser)]
#[command(
    name = "gmodel",
    about = "gmodel: build graphs from text and query them"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List nodes and edges
    Show {
        /// Graph description (e.g. "A->B->C, D"), or @path to read it from a file
        graph: String,
    },
    /// Print the adjacency matrix
    Matrix {
        /// Graph description, or @path
        graph: String,
        /// Comma-separated row/column order (defaults to sorted node ids)
        #[arg(long)]
        order: Option<String>,
    },
    /// List the parents of a node
    Parents {
        /// Graph description, or @path
        graph: String,
        /// Node ID
        id: String,
    },
    /// List the children of a node
    Children {
        /// Graph description, or @path
        graph: String,
        /// Node ID
        id: String,
    },
    /// List the Markov blanket of a node
    Blanket {
        /// Graph description, or @path
        graph: String,
        /// Node ID
        id: String,
    },
    /// Print the neighbor map
    Neighbors {
        /// Graph description, or @path
        graph: String,
        /// Edge direction: "directed" (default) or "undirected"
        #[arg(long, default_value = "directed")]
        direction: String,
    },
    /// Check whether a path exists between two nodes
    Connected {
        /// Graph description, or @path
        graph: String,
        /// Starting node ID
        from: String,
        /// Target node ID
        to: String,
        /// Edge direction: "directed" (default) or "undirected"
        #[arg(long, default_value = "directed")]
        direction: String,
    },
}

fn parse_direction(name: &str) -> EdgeDirection {
    match EdgeDirection::from_name(name) {
        Some(direction) => direction,
        None => {
            eprintln!("Invalid direction: {}", name);
            process::exit(3);
        }
    }
}

fn run(command: Commands, json: bool) -> Result<String, GraphError> {
    match command {
        Commands::Show { graph } => commands::cmd_show(&commands::load_graph(&graph)?, json),
        Commands::Matrix { graph, order } => {
            let order = order.map(|s| s.split(',').map(|t| t.trim().to_string()).collect());
            commands::cmd_matrix(&commands::load_graph(&graph)?, order, json)
        }
        Commands::Parents { graph, id } => {
            commands::cmd_parents(&commands::load_graph(&graph)?, &id, json)
        }
        Commands::Children { graph, id } => {
            commands::cmd_children(&commands::load_graph(&graph)?, &id, json)
        }
        Commands::Blanket { graph, id } => {
            commands::cmd_blanket(&commands::load_graph(&graph)?, &id, json)
        }
        Commands::Neighbors { graph, direction } => {
            let direction = parse_direction(&direction);
            commands::cmd_neighbors(&commands::load_graph(&graph)?, direction, json)
        }
        Commands::Connected {
            graph,
            from,
            to,
            direction,
        } => {
            let direction = parse_direction(&direction);
            commands::cmd_connected(&commands::load_graph(&graph)?, &from, &to, direction, json)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli.command, json) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::Io(_) => 1,
                GraphError::UnknownNode(_) => 4,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
