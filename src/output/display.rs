//! Display functions for command results

use super::formatters::{create_progress_bar, format_pair_line, preview_words};
use crate::commands::{AnalysisResult, BenchmarkResult, PairsResult};
use colored::Colorize;
use std::io::{self, Write};

/// Write one line per winning pair and nothing else
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_pairs<W: Write>(result: &PairsResult, out: &mut W) -> io::Result<()> {
    for pair in &result.pairs {
        writeln!(out, "{}", format_pair_line(pair))?;
    }
    out.flush()
}

/// Print the result of word list analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Input:".bright_cyan().bold());
    println!("   Words read:        {}", result.total_words);
    println!("   Distinct words:    {}", result.distinct_words);
    println!(
        "   Signatures:        {}",
        result.signatures.to_string().bright_yellow().bold()
    );

    if let Some((signature, words)) = &result.widest {
        println!(
            "   Widest signature:  {} ({} letters) from {}",
            signature.to_string().bright_white(),
            signature.size(),
            preview_words(words, 5)
        );
    }

    if result.missing_letters.is_empty() {
        println!("   Unused letters:    {}", "none".green());
    } else {
        let missing: String = result.missing_letters.iter().collect();
        println!("   Unused letters:    {}", missing.yellow());
    }

    if !result.size_histogram.is_empty() {
        println!("\n📈 {}", "Signature sizes:".bright_cyan().bold());
        let max_count = result.size_histogram.values().copied().max().unwrap_or(0);
        for (&size, &count) in &result.size_histogram {
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {size:2}: {} {count:6}", bar.green());
        }
    }

    println!(
        "\n🔍 {} ({} search)",
        "Pair search:".bright_cyan().bold(),
        result.strategy
    );
    println!(
        "   Best union:        {}",
        format!("{} letters", result.best).bright_yellow().bold()
    );
    println!("   Winning pairs:     {}", result.winning_pairs);
    println!("   Possible pairs:    {}", result.total_pairs);
    println!("   Pairs reached:     {}", result.candidate_pairs);
    println!("   Unions computed:   {}", result.unions_computed);
    println!("   Early exits:       {}", result.prunes);
    println!(
        "   Work avoided:      {}",
        format!("{:.1}%", result.pruned_fraction() * 100.0).green()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n⚙️  {}", "Setup:".bright_cyan().bold());
    println!("   Words per round:   {}", result.config.words);
    println!("   Max word length:   {}", result.config.max_len);
    println!("   Rounds:            {}", result.config.rounds);
    println!("   Seed:              {}", result.config.seed);
    println!("   Avg signatures:    {:.1}", result.average_signatures);

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Pruned:            {:.3}ms ({} pairs reached, {} unions, {} early exits)",
        result.pruned.duration.as_secs_f64() * 1000.0,
        result.pruned.candidate_pairs,
        result.pruned.unions_computed,
        result.pruned.prunes
    );
    println!(
        "   Exhaustive:        {:.3}ms ({} pairs reached, {} unions)",
        result.exhaustive.duration.as_secs_f64() * 1000.0,
        result.exhaustive.candidate_pairs,
        result.exhaustive.unions_computed
    );
    println!(
        "   Speedup:           {}",
        format!("{:.1}x", result.speedup()).bright_yellow().bold()
    );
    println!(
        "   Unions avoided:    {}",
        format!("{:.1}%", result.pruning_ratio() * 100.0).green()
    );

    let best: Vec<String> = result.best_per_round.iter().map(u32::to_string).collect();
    println!("   Best per round:    {}", best.join(" "));

    println!();
    if result.mismatches == 0 {
        println!("{}", "✅ Pruned and exhaustive search agree".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} rounds disagreed", result.mismatches).red().bold()
        );
    }
}
