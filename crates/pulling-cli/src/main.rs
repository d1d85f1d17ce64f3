mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pulling",
    about = "Generate well-servicing pulling work programs from intervention datasheets",
    version,
    propagate_version = true
)]
struct Cli {
    /// Vocabulary config file (default: built-in vocabulary)
    #[arg(long, global = true, env = "PULLING_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the work program for a datasheet (.json, .yaml or .yml)
    Generate { datasheet: PathBuf },

    /// Show which program modules a datasheet activates
    Modules { datasheet: PathBuf },

    /// Compute anchor setting tension and stretch
    Anchor {
        /// Anchor setting depth, meters
        #[arg(long)]
        depth: f64,

        /// Tubing outer diameter, inches (omit for zero area)
        #[arg(long)]
        diameter: Option<f64>,
    },

    /// Show, validate or write the vocabulary config
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "3141")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Generate { datasheet } => cmd::generate::run(config_path, &datasheet, cli.json),
        Commands::Modules { datasheet } => cmd::modules::run(config_path, &datasheet, cli.json),
        Commands::Anchor { depth, diameter } => cmd::anchor::run(depth, diameter, cli.json),
        Commands::Config { subcommand } => cmd::config::run(config_path, subcommand, cli.json),
        Commands::Serve { bind, port } => cmd::serve::run(config_path, &bind, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
