mod analytics;
mod error;
mod invariants;
mod models;
mod parser;
mod report;
mod source;

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use analytics::Analytics;
use clap::Parser;
use error::RunError;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Summarize traffic from an access log in Combined Log Format", long_about = None)]
struct Args {
    /// Path to the access log file
    log_file: PathBuf,
}

fn main() -> ExitCode {
    // Report goes to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let file = File::open(&args.log_file).map_err(|source| RunError::OpenLog {
        path: args.log_file.clone(),
        source,
    })?;

    let mut analytics = Analytics::default();
    source::drain(BufReader::new(file), &mut analytics).map_err(RunError::ReadLog)?;
    report::render(&mut io::stdout().lock(), &analytics).map_err(RunError::WriteReport)
}
