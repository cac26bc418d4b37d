//! Meridian CLI - developer utilities for account key management.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use meridian_client::{keygen, Error};

#[derive(Parser)]
#[command(name = "meridian")]
#[command(about = "Meridian network client utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate account keys into an existing directory
    #[command(after_help = "\
The command overwrites existing files! Generated files:
   account-hash         # Hash of public key, raw bytes
   account-hash-hex     # Hash of public key, hex text
   account-private.pem  # ed25519 private key
   account-public.pem   # ed25519 public key")]
    Keygen {
        /// Output directory for keys. Must already exist.
        directory: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Keygen { directory } => run_keygen(&directory),
    };
    std::process::exit(code);
}

fn run_keygen(directory: &Path) -> i32 {
    match keygen::generate_key_files(directory) {
        Ok(resolved) => {
            println!(
                "Keys successfully created in directory: {}",
                resolved.display()
            );
            0
        }
        Err(e) => {
            eprintln!("error: {}", e);
            exit_code(&e)
        }
    }
}

// Uniform result-to-exit-code mapping: bad target directory is a usage
// error (2), everything else is an operational failure (1).
fn exit_code(err: &Error) -> i32 {
    match err {
        Error::InvalidDirectory { .. } => 2,
        _ => 1,
    }
}
