//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: 1,000,000 iterations, 3 trials
//! cargo run --release
//!
//! # Custom run
//! cargo run --release -- --iter 5000000 --trial 10
//!
//! # Per-loop diagnostics on stderr
//! RUST_LOG=branch_oracle=debug cargo run --release -- --iter 1000 --trial 1
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use branch_oracle::output::format_notice;
use branch_oracle::{BranchOracle, Config};

/// Branch misprediction cost meter
#[derive(Parser, Debug)]
#[command(name = "branch-oracle")]
#[command(about = "Time a branchy loop under random and predictable conditions")]
#[command(version)]
struct Args {
    /// Iterations per timed loop (default: 1000000)
    #[arg(long = "iter", value_name = "N")]
    iter: Option<usize>,

    /// Number of trials (default: 3)
    #[arg(long = "trial", value_name = "N")]
    trial: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (config, notice) = Config::from_flags(args.iter, args.trial);
    if let Some(notice) = notice {
        println!("{}", format_notice(&notice));
    }
    tracing::debug!(?config, "resolved configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = BranchOracle::new(config).run(&mut out) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
