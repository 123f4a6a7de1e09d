use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "logsmith")]
#[command(about = "Generate fake access logs for testing", long_about = None)]
pub struct CliArgs {
    /// Where to write the generated log
    #[arg(long, default_value = "server.log")]
    out: PathBuf,

    /// How many lines to generate
    #[arg(long, default_value_t = 10_000)]
    lines: usize,

    /// Percentage of lines that come out mangled (0-100)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=100))]
    mangled: u8,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}
