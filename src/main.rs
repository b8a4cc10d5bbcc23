use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, Level};
use wordgrid_solver::{Codec, Finder, Grid, Order, RequiredCounts, Wordlist, DEFAULT_MIN_WORD_LEN};

/// Find the dictionary words hidden in a letter grid
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Wordfile with one word per line
    #[arg(short, long, default_value = "dictionary/words.txt")]
    wordlist: String,

    /// Grid rows, separated by commas
    #[arg(short, long, default_value = "bnok,tinv,sgib,hela")]
    grid: String,

    /// Number of words wanted per word length, as LEN=COUNT pairs
    #[arg(short, long, default_value = "4=320,5=100,6=30,7=10,8=100,9=100")]
    counts: String,

    /// Skip dictionary words shorter than this
    #[arg(short, long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_len: usize,

    /// Keep the alphabetically first words instead of the first found
    #[arg(long)]
    alphabetical: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let grid: Grid = cli.grid.parse().context("invalid grid")?;
    let counts: RequiredCounts = cli.counts.parse().context("invalid counts")?;

    let t0 = Instant::now();
    let wordlist = Wordlist::from_file(&cli.wordlist, &Codec::default(), cli.min_len)?;
    info!("Loaded {} in {:?}", wordlist, t0.elapsed());

    let order = if cli.alphabetical {
        Order::Alphabetical
    } else {
        Order::Discovery
    };
    let t0 = Instant::now();
    let found = Finder::new(&wordlist).with_order(order).find_words(&grid, &counts);
    info!(
        "Found {} words in {}x{} grid in {:?}",
        found.total(),
        grid.rows(),
        grid.cols(),
        t0.elapsed()
    );
    println!("{}", found);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:?}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
