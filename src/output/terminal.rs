// Colored terminal output for similarity reports and document details.
//
// This module handles all terminal-specific formatting: colors, tables,
// summary lines. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::analysis::report::SimilarityResult;
use crate::analysis::severity::Severity;

/// Display a ranked similarity report in the terminal.
pub fn display_report(results: &[SimilarityResult]) {
    if results.is_empty() {
        println!("No document pairs to report.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Similarity Report ({} pairs) ===", results.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<30} {:<30} {:>8}  {}",
        "Rank".dimmed(),
        "Document A".dimmed(),
        "Document B".dimmed(),
        "Match".dimmed(),
        "Severity".dimmed(),
    );
    println!("  {}", "-".repeat(88).dimmed());

    for (i, result) in results.iter().enumerate() {
        let severity = Severity::from_score(result.similarity);

        println!(
            "  {:>4}. {:<30} {:<30} {:>7.1}%  {}",
            i + 1,
            super::truncate_chars(&result.document_a, 28),
            super::truncate_chars(&result.document_b, 28),
            result.similarity * 100.0,
            colorize_severity(severity),
        );
    }

    println!();

    // Summary
    let high = count_severity(results, Severity::High);
    let medium = count_severity(results, Severity::Medium);
    let low = count_severity(results, Severity::Low);

    if high > 0 {
        println!("  {} {} high-risk pairs", "!!".red().bold(), high);
    }
    if medium > 0 {
        println!("  {} {} medium-risk pairs", "~".yellow(), medium);
    }
    if low > 0 {
        println!("  {} {} low-risk pairs", "-".green(), low);
    }
}

/// Display a single pair's detailed comparison.
pub fn display_pair_detail(
    name_a: &str,
    name_b: &str,
    tokens_a: usize,
    tokens_b: usize,
    intersection: usize,
    union: usize,
    similarity: f64,
) {
    println!(
        "\n{}",
        format!("=== {} vs {} ===", name_a, name_b).bold()
    );

    let severity = Severity::from_score(similarity);
    println!("  Severity: {}", colorize_severity(severity));
    println!("  Similarity: {:.1}%", similarity * 100.0);
    println!("  Distinct tokens: {tokens_a} vs {tokens_b}");
    println!("  Shared tokens: {intersection} of {union} total");
}

/// Display a single document's token summary.
pub fn display_token_summary(name: &str, tokens: &[String], sample_size: usize) {
    println!(
        "\n{}",
        format!("=== Tokens for {} ({} distinct) ===", name, tokens.len()).bold()
    );

    if tokens.is_empty() {
        println!("  {}", "No tokens — the document is empty.".dimmed());
        return;
    }

    for token in tokens.iter().take(sample_size) {
        println!("  {}", super::truncate_chars(token, 60));
    }

    if tokens.len() > sample_size {
        println!(
            "  {}",
            format!("... and {} more", tokens.len() - sample_size).dimmed()
        );
    }
}

fn count_severity(results: &[SimilarityResult], severity: Severity) -> usize {
    results
        .iter()
        .filter(|r| Severity::from_score(r.similarity) == severity)
        .count()
}

/// Colorize a severity label.
fn colorize_severity(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::High => severity.as_str().red().bold(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::Low => severity.as_str().green(),
    }
}
