//! Letter Pairs - CLI
//!
//! Reads whitespace-separated words and prints the pairs whose letters cover the most
//! of the alphabet.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_pairs::{
    commands::{BenchmarkConfig, analyze_index, pairs_for_index, run_benchmark},
    core::WordIndex,
    output::{print_analysis_result, print_benchmark_result, write_pairs},
    solver::StrategyType,
    wordlists::{
        SAMPLE,
        loader::{load_from_file, load_from_stdin, words_from_slice},
    },
};
use std::io::{self, BufWriter};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "letter_pairs",
    about = "Find the word pairs whose combined distinct letters cover the most of the alphabet",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search strategy: pruned (default) or exhaustive
    #[arg(short, long, global = true, default_value = "pruned")]
    strategy: String,

    /// Input: '-' for stdin (default), 'sample' for the bundled list, or a file path
    #[arg(short, long, global = true, default_value = "-")]
    input: String,

    /// Log search statistics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the best word pairs, one per line (default)
    Pairs,

    /// Summarize signatures and search effort for the input
    Analyze,

    /// Compare pruned and exhaustive search on random word lists
    Benchmark {
        /// Words generated per round
        #[arg(short = 'n', long, default_value = "2000")]
        words: usize,

        /// Maximum generated word length
        #[arg(short = 'l', long, default_value = "12")]
        max_len: usize,

        /// Number of rounds
        #[arg(short, long, default_value = "5")]
        rounds: usize,

        /// Seed for the first round
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Load words based on the -i flag
///
/// - "-": read standard input until end of file
/// - "sample": the bundled sample list
/// - "<path>": read a file
fn load_words(input: &str) -> Result<Vec<String>> {
    match input {
        "-" => load_from_stdin().context("Failed to read words from stdin"),
        "sample" => Ok(words_from_slice(SAMPLE)),
        path => load_from_file(path).with_context(|| format!("Failed to read words from {path}")),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Pairs mode if no command given
    let command = cli.command.unwrap_or(Commands::Pairs);

    match command {
        Commands::Pairs => run_pairs_command(&cli.input, strategy),
        Commands::Analyze => run_analyze_command(&cli.input, strategy),
        Commands::Benchmark {
            words,
            max_len,
            rounds,
            seed,
        } => run_benchmark_command(BenchmarkConfig {
            words,
            max_len,
            rounds,
            seed,
        }),
    }
}

fn run_pairs_command(input: &str, strategy: StrategyType) -> Result<()> {
    let words = load_words(input)?;
    let index = WordIndex::from_words(&words);
    let result = pairs_for_index(&index, &strategy);

    let mut out = BufWriter::new(io::stdout().lock());
    write_pairs(&result, &mut out).context("Failed to write pairs")
}

fn run_analyze_command(input: &str, strategy: StrategyType) -> Result<()> {
    let words = load_words(input)?;
    let index = WordIndex::from_words(&words);
    let result = analyze_index(&index, &strategy, strategy.name());
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: BenchmarkConfig) -> Result<()> {
    println!(
        "Benchmarking {} rounds of {} random words...",
        config.rounds, config.words
    );

    let result = run_benchmark(config)?;
    print_benchmark_result(&result);
    Ok(())
}
