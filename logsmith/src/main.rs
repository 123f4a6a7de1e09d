mod args;
mod generator;
mod writer;

use std::process::ExitCode;

use args::CliArgs;
use clap::Parser;
use writer::write_log;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    println!(
        "Writing {} access log lines to {}",
        args.lines(),
        args.out().display()
    );

    if let Err(e) = write_log(&args) {
        eprintln!("Failed to write log: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
