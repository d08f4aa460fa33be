//! Command-line entry point for instrumenting and listing fault sites.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use faultline_inject::{
    DEFAULT_MACRO_PATH, InjectError, InstrumentOptions, instrument_in_place, instrument_path,
    list_path,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "faultline-inject", version, about = "Instrument and list faultline fault sites")]
struct Cli {
    /// Log per-file progress (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Wrap every runtime integer literal in a fault_int! site.
    Instrument {
        /// Print the instrumented source instead of rewriting the files.
        #[arg(long)]
        stdout: bool,

        /// Path of the wrapping macro.
        #[arg(long, default_value = DEFAULT_MACRO_PATH)]
        macro_path: String,

        /// Rust source files.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the environment variables of every fault site in the files.
    List {
        /// Rust source files.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        let mut cause = err.source();
        while let Some(inner) = cause {
            eprintln!("  caused by: {inner}");
            cause = inner.source();
        }
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), InjectError> {
    match command {
        Command::Instrument {
            stdout,
            macro_path,
            files,
        } => {
            let options = InstrumentOptions { macro_path };
            for path in &files {
                if stdout {
                    let instrumented = instrument_path(path, &options)?;
                    print!("{}", instrumented.source);
                } else {
                    let wrapped = instrument_in_place(path, &options)?;
                    tracing::info!(path = %path.display(), wrapped, "instrumented");
                }
            }
        }
        Command::List { files } => {
            for path in &files {
                let listings = list_path(path)?;
                tracing::info!(path = %path.display(), sites = listings.len(), "listed");
                for listing in &listings {
                    println!("{}", listing.render(path));
                }
            }
        }
    }
    Ok(())
}
