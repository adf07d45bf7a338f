// File-system document ingestion.
//
// Explicit file paths are loaded regardless of extension — if you name a
// file, you meant it. Directories are scanned one level deep and filtered
// to the configured extensions, so an accidental `textguard analyze .`
// doesn't pull binaries into the corpus. Files that aren't valid UTF-8 are
// reported as errors for that path rather than silently skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::document::Corpus;

/// Load documents from a mix of file and directory paths into the corpus.
///
/// Returns the number of documents added. The file name (final path
/// component) becomes the document name.
pub fn load_paths<P: AsRef<Path>>(
    corpus: &mut Corpus,
    paths: &[P],
    extensions: &[String],
) -> Result<usize> {
    let mut added = 0;

    for path in paths {
        let path = path.as_ref();
        let meta = fs::metadata(path)
            .with_context(|| format!("Cannot access {}", path.display()))?;

        if meta.is_dir() {
            added += load_directory(corpus, path, extensions)?;
        } else {
            load_file(corpus, path)?;
            added += 1;
        }
    }

    info!(added, total = corpus.len(), "Loaded documents");
    Ok(added)
}

/// Load every matching file in a directory (non-recursive).
fn load_directory(corpus: &mut Corpus, dir: &Path, extensions: &[String]) -> Result<usize> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory {}", dir.display()))?;

    let mut added = 0;

    // Collect and sort so ingestion order (and therefore tie-breaking in
    // the report) doesn't depend on directory iteration order.
    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && matches_extension(p, extensions))
        .collect();
    files.sort();

    for file in files {
        match load_file(corpus, &file) {
            Ok(()) => added += 1,
            Err(e) => warn!(path = %file.display(), error = %e, "Skipping unreadable file"),
        }
    }

    Ok(added)
}

fn load_file(corpus: &mut Corpus, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {} as UTF-8 text", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    corpus.add(name, content);
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.iter().any(|allowed| *allowed == ext)
        }
        None => false,
    }
}
