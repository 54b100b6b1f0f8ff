use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cardkeeper::collection::Collection;
use cardkeeper::error::Result;
use cardkeeper::interface::Shell;
use cardkeeper::persist::Persistor;
use cardkeeper::settings::{FileSettings, Settings};

/// Trading cards helper
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file
    config_file: String,
    /// Read only mode
    #[arg(short, long)]
    read_only: bool,
}

fn run(persistor: &mut Persistor, settings: Settings) -> Result<()> {
    let mut collection = Collection::new(persistor, settings);
    collection.initialize()?;
    info!(cards = collection.persistor().count_records()?, read_only = settings.read_only, "album open");
    let stdin = io::stdin();
    let mut shell = Shell::new(&mut collection, stdin.lock(), io::stdout());
    shell.run()
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let file_settings = match FileSettings::load(&args.config_file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let mode = file_settings.persistence_mode();
    let settings = file_settings.into_settings(args.read_only);

    let mut persistor = match Persistor::open(&mode) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let outcome = run(&mut persistor, settings);
    if let Err(e) = &outcome {
        eprintln!("{}", e);
    }
    // the store is closed whatever happened above
    let closed = persistor.close();
    if let Err(e) = &closed {
        eprintln!("{}", e);
    }
    if outcome.is_ok() && closed.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
