//! hashdial — deterministic line sampling, partitioning and bucketing.
//!
//! Usage:
//!   hashdial sample --probability 0.01 access.log
//!   hashdial partition --count 10 --index 3 < input
//!   hashdial bucket --label blue --label green < users
//!   hashdial verify vectors.json

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hashdial_cli::config::DialConfig;
use hashdial_cli::filter::{self, FilterStats};
use hashdial_cli::verify;

#[derive(Parser)]
#[command(name = "hashdial", version, about = "Hash based line filtering")]
struct Cli {
    /// Seed separating this use from others over the same input
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// JSON config file ({"seed": "..."})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep each line with the given probability
    Sample {
        /// Fraction of distinct lines to keep, in [0, 1]
        #[arg(short, long)]
        probability: f64,
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Keep the lines that hash into one of N partitions
    Partition {
        /// Number of partitions
        #[arg(short = 'n', long)]
        count: usize,
        /// Partition to keep, in [0, count)
        #[arg(short, long)]
        index: usize,
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Prefix each line with a label chosen by hashing it
    Bucket {
        /// Candidate label; repeat for each bucket
        #[arg(short, long = "label", required = true)]
        labels: Vec<String>,
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Check a reference-vector file against this build
    Verify {
        /// Vector file
        path: PathBuf,
    },
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("Failed to open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn log_stats(stats: FilterStats) {
    log::info!(
        "read {} lines, wrote {}",
        stats.lines_read,
        stats.lines_written
    );
    if stats.output_closed {
        log::debug!("output closed by reader, stopped early");
    }
}

fn run<W: Write>(cli: Cli, out: W) -> Result<ExitCode> {
    let config = DialConfig::resolve(cli.config.as_deref(), cli.seed)
        .context("Failed to load configuration")?;
    let dial = config.dial();

    match cli.command {
        Commands::Sample { probability, input } => {
            let stats = filter::sample(dial, probability, open_input(input.as_deref())?, out)?;
            log_stats(stats);
        }
        Commands::Partition {
            count,
            index,
            input,
        } => {
            let stats = filter::partition(dial, count, index, open_input(input.as_deref())?, out)?;
            log_stats(stats);
        }
        Commands::Bucket { labels, input } => {
            let stats = filter::bucket(dial, &labels, open_input(input.as_deref())?, out)?;
            log_stats(stats);
        }
        Commands::Verify { path } => {
            let report = verify::verify_file(&path)
                .with_context(|| format!("Failed to verify {}", path.display()))?;
            match verify::write_report(&report, out) {
                Err(e) if !filter::is_broken_pipe(&e) => return Err(e.into()),
                _ => {}
            }
            if !report.is_ok() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    run(Cli::parse(), BufWriter::new(io::stdout().lock()))
}
