//! Batch pipeline: reads extracted decision texts, analyzes each, writes the
//! aggregate JSON plus optional per-document JSON and Parquet.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use bghinsights_core::{Analyzer, ExtractionRecord};
use tracing::warn;

const TEXT_EXTENSION: &str = "txt";

/// Where batch results go.
pub struct BatchOutputs<'a> {
    pub aggregate: &'a Path,
    pub per_document: Option<&'a Path>,
    pub parquet: Option<&'a Path>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub documents: usize,
    pub records: usize,
    pub skipped: usize,
}

/// Run the full batch: list `*.txt` → analyze → write outputs.
///
/// A document that cannot be read or has no usable text is logged and skipped;
/// it never aborts the batch.
pub fn run_batch(
    analyzer: &Analyzer,
    input_dir: &Path,
    outputs: &BatchOutputs<'_>,
) -> anyhow::Result<(BatchStats, f64)> {
    let start = Instant::now();

    // 1. Collect input documents in a stable order.
    let paths = list_text_files(input_dir)
        .with_context(|| format!("listing {}", input_dir.display()))?;
    eprintln!("  Found {} documents in {}", paths.len(), input_dir.display());

    // 2. Analyze each document independently.
    let (records, stats) = analyze_all(analyzer, &paths);

    // 3. Persist.
    bghinsights_store::write_aggregate(outputs.aggregate, &records)
        .context("writing aggregate json")?;
    if let Some(dir) = outputs.per_document {
        for record in &records {
            bghinsights_store::write_per_document(dir, record)
                .with_context(|| format!("writing per-document json to {}", dir.display()))?;
        }
    }
    if let Some(path) = outputs.parquet {
        bghinsights_store::write_parquet(path, &records).context("writing parquet")?;
    }

    Ok((stats, start.elapsed().as_secs_f64()))
}

fn analyze_all(analyzer: &Analyzer, paths: &[PathBuf]) -> (Vec<ExtractionRecord>, BatchStats) {
    let mut records = Vec::with_capacity(paths.len());
    let mut stats = BatchStats {
        documents: paths.len(),
        ..BatchStats::default()
    };

    for (i, path) in paths.iter().enumerate() {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read document, skipping");
                stats.skipped += 1;
                continue;
            }
        };

        let filename = path.file_name().and_then(|n| n.to_str());
        match analyzer.analyze(&text, filename) {
            Some(record) => records.push(record),
            None => stats.skipped += 1,
        }

        eprint!("\r  Analyzed {}/{}", i + 1, paths.len());
    }
    if !paths.is_empty() {
        eprintln!();
    }

    stats.records = records.len();
    (records, stats)
}

/// `*.txt` files directly inside `dir`, sorted by name.
fn list_text_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION))
        })
        .collect();
    paths.sort();
    Ok(paths)
}
