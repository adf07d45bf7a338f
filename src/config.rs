use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Everything has a sensible default — textguard runs with no .env at all.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Extensions accepted when scanning a directory (explicit file paths
    /// bypass this filter). Lower-cased, no leading dot.
    pub extensions: Vec<String>,
    /// Default report floor — pairs below this similarity are hidden unless
    /// the CLI flag overrides it.
    pub min_similarity: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let extensions = match env::var("TEXTGUARD_EXTENSIONS") {
            Ok(raw) => raw
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
            Err(_) => vec!["txt".to_string()],
        };

        let min_similarity = match env::var("TEXTGUARD_MIN_SIMILARITY") {
            Ok(raw) => {
                let value: f64 = raw.parse().map_err(|_| {
                    anyhow::anyhow!("TEXTGUARD_MIN_SIMILARITY must be a number, got {raw:?}")
                })?;
                if !(0.0..=1.0).contains(&value) {
                    anyhow::bail!("TEXTGUARD_MIN_SIMILARITY must be between 0.0 and 1.0");
                }
                value
            }
            Err(_) => 0.0,
        };

        Ok(Self {
            extensions,
            min_similarity,
        })
    }
}
