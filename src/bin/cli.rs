//! SiloKV CLI
//!
//! Command-line access to a named store on local disk.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use silokv::command::{execute, Command, Response};
use silokv::{create_storer, Config, StoreConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// SiloKV CLI
#[derive(Parser, Debug)]
#[command(name = "silokv-cli")]
#[command(about = "CLI for SiloKV key-value stores")]
#[command(version)]
struct Args {
    /// Store name (directory under --path)
    #[arg(short, long)]
    name: String,

    /// Parent directory of the store, `~` is expanded
    #[arg(short, long, default_value = "~/.silokv")]
    path: String,

    /// Operate inside this silo
    #[arg(short, long)]
    silo: Option<String>,

    /// fsync every write
    #[arg(long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Put {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List all entries
    Scan,
}

impl Commands {
    fn into_command(self, silo: Option<String>) -> Command {
        match self {
            Commands::Get { key } => Command::Get { silo, key },
            Commands::Put { key, value } => Command::Put { silo, key, value },
            Commands::Del { key } => Command::Delete { silo, key },
            Commands::Scan => Command::Scan { silo },
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,silokv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .name(&args.name)
        .storage_path(&args.path)
        .sync_writes(args.sync)
        .build();

    let store = match create_storer(&StoreConfig::LevelDb(config)) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = execute(&*store, args.command.into_command(args.silo));

    let code = match outcome {
        Ok(Response::Value(value)) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Ok(Response::NotFound) => {
            eprintln!("not found");
            ExitCode::FAILURE
        }
        Ok(Response::Entries(entries)) => {
            for (key, value) in entries {
                println!("{}={}", key, value);
            }
            ExitCode::SUCCESS
        }
        Ok(Response::Done) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            ExitCode::FAILURE
        }
    };

    if let Err(e) = store.close() {
        tracing::error!("Failed to close store: {}", e);
        return ExitCode::FAILURE;
    }

    code
}
