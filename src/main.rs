// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Gridgraph CLI - weighted graphs from text matrices

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use gridgraph::commands::{self, input::MatrixArgs, OutputFormat, Settings};
use gridgraph::config;
use gridgraph::types::{GeoPoint, MstAlgorithm, SunPosition};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRIDGRAPH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output (any non-empty NO_COLOR also disables it)
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph described by a weight matrix
    Build {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Compute a minimum spanning tree
    Mst {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Algorithm (defaults to the configured one)
        #[arg(short, long, value_enum)]
        algorithm: Option<MstAlgorithm>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Depth-first visiting order over the minimum spanning tree
    Dfs {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Start node
        #[arg(short, long, default_value_t = 0)]
        start: usize,

        /// Traverse the whole graph instead of its spanning tree
        #[arg(long)]
        whole_graph: bool,

        /// Spanning tree algorithm (defaults to the configured one)
        #[arg(short, long, value_enum)]
        algorithm: Option<MstAlgorithm>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Approximate a closed tour through every node
    Tsp {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Start node
        #[arg(short, long, default_value_t = 0)]
        start: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Compute the shadow cast by a building
    Shadow {
        /// Latitude of the building (degrees)
        #[arg(long, default_value_t = 37.5665, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the building (degrees)
        #[arg(long, default_value_t = 126.978, allow_hyphen_values = true)]
        lon: f64,

        /// Building height (meters)
        #[arg(long, default_value_t = 10.0)]
        height: f64,

        /// Solar altitude (degrees above the horizon)
        #[arg(long, allow_hyphen_values = true)]
        altitude: f64,

        /// Solar azimuth (degrees clockwise from north)
        #[arg(long)]
        azimuth: f64,
    },

    /// Convert an integer between bases
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source base (2-36)
        #[arg(long, default_value_t = 10)]
        from: u32,

        /// Target base (2-36)
        #[arg(long, default_value_t = 2)]
        to: u32,
    },

    /// Show configuration
    Config {
        /// Configuration key (omit to show everything)
        key: Option<String>,

        /// Write a default config file
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let config = config::load(Some(config_path.as_path()))?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => config.log_level.parse().unwrap_or(tracing::Level::INFO),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings {
        config,
        json: cli.json,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Build { matrix, format } => commands::build::run(&matrix, format, &settings),
        Commands::Mst {
            matrix,
            algorithm,
            format,
        } => commands::mst::run(&matrix, algorithm, format, &settings),
        Commands::Dfs {
            matrix,
            start,
            whole_graph,
            algorithm,
            format,
        } => commands::dfs::run(&matrix, start, whole_graph, algorithm, format, &settings),
        Commands::Tsp {
            matrix,
            start,
            format,
        } => commands::tsp::run(&matrix, start, format, &settings),
        Commands::Shadow {
            lat,
            lon,
            height,
            altitude,
            azimuth,
        } => commands::shadow::run(
            GeoPoint { lat, lon },
            height,
            SunPosition { altitude, azimuth },
            &settings,
        ),
        Commands::Convert { value, from, to } => {
            commands::convert::run(&value, from, to, &settings)
        }
        Commands::Config { key, init } => {
            commands::config::run(key.as_deref(), init, &config_path, &settings)
        }
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
