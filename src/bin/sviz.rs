//! CLI entry point for the `sviz` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use structviz::cli::commands;
use structviz::config::VisualizerConfig;
use structviz::engine::Workbench;
use structviz::VizError;

#[derive(Parser)]
#[command(
    name = "sviz",
    about = "structviz CLI: step through heap, AVL, hash table and graph operations"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert into and extract from a binary heap
    Heap {
        /// Use max-heap ordering instead of the configured one
        #[arg(long)]
        max: bool,
        /// Values to insert, in order
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        insert: Vec<i64>,
        /// Number of roots to extract afterwards
        #[arg(long, default_value = "0")]
        extract: usize,
    },
    /// Insert into and delete from an AVL tree
    Avl {
        /// Values to insert, in order
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        insert: Vec<i64>,
        /// Values to delete afterwards
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        delete: Vec<i64>,
    },
    /// Put, remove and search hash table entries
    Hash {
        /// Bucket count (overrides the config)
        #[arg(long)]
        buckets: Option<usize>,
        /// Entries as key=value, repeatable
        #[arg(long, allow_hyphen_values = true)]
        put: Vec<String>,
        /// Keys to remove
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        remove: Vec<i64>,
        /// Keys to search for
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        get: Vec<i64>,
    },
    /// Add edges and run BFS and DFS
    Graph {
        /// Vertex count (overrides the config)
        #[arg(long)]
        vertices: Option<usize>,
        /// Edges as u-v, repeatable
        #[arg(long)]
        edge: Vec<String>,
        /// Start vertex for both traversals
        #[arg(long, default_value = "0")]
        start: usize,
    },
    /// Push values at the head of a linked list
    List {
        /// Values to push, in order
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        push: Vec<i64>,
    },
    /// Write the default configuration to a file
    Config {
        /// Destination path
        file: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), VizError> {
    let json = cli.format == "json";
    let mut config = VisualizerConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Config { file } => commands::cmd_config(&file),
        Commands::Heap {
            max,
            insert,
            extract,
        } => {
            if max {
                config.heap.min_heap = false;
            }
            let mut bench = Workbench::from_config(&config)?;
            commands::cmd_heap(&mut bench, &insert, extract, json)
        }
        Commands::Avl { insert, delete } => {
            let mut bench = Workbench::from_config(&config)?;
            commands::cmd_avl(&mut bench, &insert, &delete, json)
        }
        Commands::Hash {
            buckets,
            put,
            remove,
            get,
        } => {
            if let Some(n) = buckets {
                config.hash.bucket_count = n;
            }
            let entries = put
                .iter()
                .map(|s| commands::parse_entry(s))
                .collect::<Result<Vec<_>, _>>()?;
            let mut bench = Workbench::from_config(&config)?;
            commands::cmd_hash(&mut bench, &entries, &remove, &get, json)
        }
        Commands::Graph {
            vertices,
            edge,
            start,
        } => {
            if let Some(n) = vertices {
                config.graph.vertex_count = n;
            }
            let edges = edge
                .iter()
                .map(|s| commands::parse_edge(s))
                .collect::<Result<Vec<_>, _>>()?;
            let mut bench = Workbench::from_config(&config)?;
            commands::cmd_graph(&mut bench, &edges, start, json)
        }
        Commands::List { push } => {
            let mut bench = Workbench::from_config(&config)?;
            commands::cmd_list(&mut bench, &push, json)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            VizError::Io(_) => 1,
            VizError::Config(_) | VizError::ZeroBuckets => 2,
            VizError::InvalidInput(_)
            | VizError::InvalidValue(_)
            | VizError::VertexOutOfRange { .. } => 3,
        };
        process::exit(code);
    }
}
