use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dialect::{self, Dialect};
use crate::io;
use crate::options::Options;
use crate::rewrite;
use crate::summary::RunSummary;
use crate::walk;

/// What happened to a single file. A file that could not be converted is reported as an `Err`
/// by `convert` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// already single-indexed Casava, left untouched
    Skipped,
    /// rewritten to `dest`
    Converted { dest: PathBuf, records: usize },
}

/// Converts one `.fastq(.gz)` file to single-indexed Casava naming.
///
/// The file is classified from its name (and, for new-pipeline files, its first read), then
/// every read is decoded into memory and rewritten before the output file is created. Output
/// compression follows the input. Unless `opts.keep` is set, the source is deleted once the
/// output has been written, as long as the two paths differ.
///
/// If a file with the new name already exists it is overwritten, with a warning.
///
/// # Errors
///
/// Returns an error if the name or any read identifier is malformed, or on any I/O failure.
/// Nothing is written under the new name in that case.
pub fn convert(path: &Path, opts: &Options) -> Result<Outcome> {
    if opts.verbose {
        info!("PROCESSING: {}", path.display());
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name {}", path.display()))?;

    // new-pipeline files keep their barcode in the reads, so those are decoded up front
    let mut decoded = None;
    let classification = if dialect::is_new_pipeline(name)? {
        let records = io::read_records(path)?;
        let classification = dialect::classify(name, records.first().map(|r| r.id.as_str()))?;
        decoded = Some(records);
        classification
    } else {
        dialect::classify(name, None)?
    };

    debug!(
        "{} is {} with primary barcode {}",
        name, classification.dialect, classification.barcode.primary
    );

    if classification.dialect == Dialect::LegacySingle && !opts.force {
        if opts.verbose {
            info!(
                "{} is already single-indexed Casava. Nothing to do.",
                path.display()
            );
        }
        return Ok(Outcome::Skipped);
    }

    let mut records = match decoded {
        Some(records) => records,
        None => io::read_records(path)?,
    };

    let primary = classification.barcode.primary.as_str();
    for record in records.iter_mut() {
        record.id = rewrite::rewrite_identifier(&record.id, primary)?;
    }

    let dest = path.with_file_name(rewrite::rewrite_name(name, primary)?);
    let in_place = dest == path;

    if !in_place && dest.exists() {
        warn!("{} exists and is being overwritten", dest.display());
    }

    let permissions = fs::metadata(path)?.permissions();
    io::write_records(&dest, &records, io::is_gzipped(path), permissions)?;

    if !opts.keep && !in_place {
        fs::remove_file(path)
            .with_context(|| format!("Unable to remove original file {}", path.display()))?;
    }

    Ok(Outcome::Converted {
        dest,
        records: records.len(),
    })
}

/// Converts every FASTQ file found under `root`, one at a time.
///
/// Failures are logged and counted but never stop the run: a file that cannot be converted is
/// left as it was, and a directory that cannot be listed is skipped.
pub fn convert_tree(root: &Path, opts: &Options) -> RunSummary {
    let mut summary = RunSummary::new(root);

    // collect first so that files written during the run are never revisited
    let candidates: Vec<_> = walk::fastq_files(root).collect();

    for candidate in candidates {
        let path = match candidate {
            Ok(path) => path,
            Err(err) => {
                error!("Unable to read directory: {err}");
                summary.failed += 1;
                continue;
            }
        };

        match convert(&path, opts) {
            Ok(Outcome::Skipped) => summary.skipped += 1,
            Ok(Outcome::Converted { dest, records }) => {
                summary.add_conversion(&path, &dest, records)
            }
            Err(err) => {
                error!("Failed to convert {}: {}", path.display(), err);
                err.chain()
                    .skip(1)
                    .for_each(|cause| error!("  because: {}", cause));
                summary.failed += 1;
            }
        }
    }

    summary
}
