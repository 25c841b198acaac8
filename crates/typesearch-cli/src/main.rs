//! typesearch CLI tool.
//!
//! Usage:
//! ```bash
//! typesearch find --type <FQN> [OPTIONS] [PATH]
//! typesearch run [OPTIONS] [PATH]
//! typesearch list-recipes
//! typesearch init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Structural type-reference search over attributed Java syntax trees
#[derive(Parser)]
#[command(name = "typesearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find references to one fully qualified type
    Find {
        /// Fully qualified name of the type, e.g. `java.util.List`
        #[arg(short = 't', long = "type", value_name = "FQN")]
        type_name: String,

        /// Directory of tree files (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write annotated trees under this directory
        #[arg(long, value_name = "DIR")]
        emit: Option<PathBuf>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Exit with status 1 if any reference is found
        #[arg(long)]
        fail_on_match: bool,
    },

    /// Run the recipes listed in the configuration file
    Run {
        /// Directory of tree files (default: `[runner] root` from config)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Exit with status 1 if any recipe finds something
        #[arg(long)]
        fail_on_match: bool,
    },

    /// List available recipes
    ListRecipes,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for search results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Find {
            type_name,
            path,
            format,
            emit,
            exclude,
            fail_on_match,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::find::run(&commands::find::FindArgs {
                type_name: &type_name,
                path: &path,
                format,
                emit: emit.as_deref(),
                exclude,
                fail_on_match,
                source: &source,
            })
        }
        Commands::Run {
            path,
            format,
            exclude,
            fail_on_match,
        } => {
            let project = path.as_deref().unwrap_or(Path::new("."));
            let source = config_resolver::resolve(project, cli.config.as_deref());
            commands::run::run(path.as_deref(), format, exclude, fail_on_match, &source)
        }
        Commands::ListRecipes => {
            commands::list_recipes::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
