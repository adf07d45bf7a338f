use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use textguard::analysis::similarity::jaccard;
use textguard::analysis::tokenize::tokenize;
use textguard::config::Config;
use textguard::corpus::{loader, Corpus};

/// Textguard: lexical plagiarism screening for plain-text files.
///
/// Scores every pair of input documents by word-set overlap (Jaccard
/// similarity) and ranks the results from most to least similar.
#[derive(Parser)]
#[command(name = "textguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every pair of documents and print a ranked report
    Analyze {
        /// Files to compare, or directories to scan for text files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Hide pairs below this similarity (0.0 to 1.0)
        #[arg(long)]
        min_similarity: Option<f64>,

        /// Only show the top N pairs
        #[arg(long)]
        limit: Option<usize>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare exactly two files in detail
    Compare {
        /// First file
        file_a: PathBuf,
        /// Second file
        file_b: PathBuf,
    },

    /// Show the token set extracted from a single file
    Inspect {
        /// The file to tokenize
        file: PathBuf,

        /// How many tokens to print (default: 25)
        #[arg(long, default_value = "25")]
        sample: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textguard=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            paths,
            min_similarity,
            limit,
            json,
        } => {
            let config = Config::load()?;
            let min_similarity = min_similarity.unwrap_or(config.min_similarity);
            if !(0.0..=1.0).contains(&min_similarity) {
                anyhow::bail!("--min-similarity must be between 0.0 and 1.0");
            }

            let mut corpus = Corpus::new();
            loader::load_paths(&mut corpus, &paths, &config.extensions)?;

            if corpus.len() < 2 {
                println!(
                    "Loaded {} document(s) — need at least 2 files to compare.",
                    corpus.len()
                );
                return Ok(());
            }

            info!(documents = corpus.len(), "Analyzing corpus");

            let mut results = textguard::analysis::report::analyze(corpus.documents());
            results.retain(|r| r.similarity >= min_similarity);
            if let Some(limit) = limit {
                results.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                textguard::output::terminal::display_report(&results);
                if results.is_empty() && min_similarity > 0.0 {
                    println!(
                        "{}",
                        "All pairs fell below the similarity floor. Lower --min-similarity to see them."
                            .dimmed()
                    );
                }
            }
        }

        Commands::Compare { file_a, file_b } => {
            let content_a = fs::read_to_string(&file_a)
                .with_context(|| format!("Cannot read {} as UTF-8 text", file_a.display()))?;
            let content_b = fs::read_to_string(&file_b)
                .with_context(|| format!("Cannot read {} as UTF-8 text", file_b.display()))?;

            let tokens_a = tokenize(&content_a);
            let tokens_b = tokenize(&content_b);

            let intersection = tokens_a.intersection(&tokens_b).count();
            let union = tokens_a.len() + tokens_b.len() - intersection;
            let similarity = jaccard(&tokens_a, &tokens_b);

            textguard::output::terminal::display_pair_detail(
                &file_a.display().to_string(),
                &file_b.display().to_string(),
                tokens_a.len(),
                tokens_b.len(),
                intersection,
                union,
                similarity,
            );
        }

        Commands::Inspect { file, sample } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Cannot read {} as UTF-8 text", file.display()))?;

            let mut tokens: Vec<String> = tokenize(&content).into_iter().collect();
            tokens.sort();

            textguard::output::terminal::display_token_summary(
                &file.display().to_string(),
                &tokens,
                sample,
            );
        }
    }

    Ok(())
}
