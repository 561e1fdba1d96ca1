use clap::{Parser, Subcommand};
use seedgen_schema::SchemaStore;
use std::path::PathBuf;

mod commands;
mod config;

use commands::show::OutputFormat;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "seedgen")]
#[command(about = "Turn C# entity classes and CSV files into static seed-data listings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./seedgen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Schema state file (overrides the config)
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Forget the loaded entity
    Clear,

    /// Generate the SeedData listing from a CSV file
    Generate {
        /// CSV file with a header row and one row per entity
        csv_file: PathBuf,

        /// Entity name to emit (defaults to the loaded class name)
        #[arg(short, long)]
        entity_name: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a C# entity class and remember its schema
    Load {
        /// C# source file declaring the entity
        class_file: PathBuf,
    },

    /// Write a CSV template for the loaded entity
    Sample {
        /// Output file (defaults to sample_entity_data.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the loaded entity schema
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show what each CSV column should contain
    Tips,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = CliConfig::load(cli.config.as_deref())?;
    let store = SchemaStore::new(cli.state.unwrap_or(config.state.schema_file));
    log::debug!("Using schema state {}", store.path().display());

    match cli.command {
        Commands::Clear => commands::state::clear(&store).await,
        Commands::Generate {
            csv_file,
            entity_name,
            output,
        } => {
            let output = output.or(config.generate.output);
            commands::generate::run(&store, &csv_file, entity_name, output).await
        }
        Commands::Load { class_file } => commands::load::run(&store, &class_file).await,
        Commands::Sample { output } => {
            let output = output.unwrap_or(config.sample.file_name);
            commands::sample::run(&store, &output).await
        }
        Commands::Show { format } => commands::show::run(&store, format).await,
        Commands::Tips => commands::tips::run(&store).await,
    }
}
