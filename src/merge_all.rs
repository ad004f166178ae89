/// Metadata-free merge driver
///
/// Without a metadata table every FASTQ file in the input directory
/// belongs to one implicit group, split into forward and reverse sets by
/// filename suffix.
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::merge::merge_into;

/// Forward/reverse file sets discovered by filename convention.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReadSets {
    pub forward: Vec<PathBuf>,
    pub reverse: Vec<PathBuf>,
}

/// Scan `dir` for `.fastq` / `.fastq.gz` entries and partition them by
/// suffix containment anywhere in the file name.
///
/// Returns `None` when the directory holds no candidate files at all. A
/// file matching neither suffix is excluded from both sets; each set is
/// sorted lexically by file name so the merge order is reproducible.
pub fn scan_read_sets(
    dir: &Path,
    forward_suffix: &str,
    reverse_suffix: &str,
) -> Result<Option<ReadSets>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read fastq directory {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let name = match name.to_str() {
            Some(name) => name,
            None => continue,
        };
        if name.ends_with(".fastq.gz") || name.ends_with(".fastq") {
            candidates.push((name.to_string(), entry.path()));
        }
    }

    if candidates.is_empty() {
        return Ok(None);
    }
    candidates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut sets = ReadSets::default();
    for (name, path) in candidates {
        if name.contains(forward_suffix) {
            sets.forward.push(path.clone());
        }
        if name.contains(reverse_suffix) {
            sets.reverse.push(path);
        }
    }
    Ok(Some(sets))
}

/// Merge everything in `fastq_dir` into `merged{suffix}.fastq.gz` pairs
/// under `output_dir`. Finding no FASTQ files is a no-op, not an error.
pub fn merge_all(
    fastq_dir: &Path,
    output_dir: &Path,
    forward_suffix: &str,
    reverse_suffix: &str,
) -> Result<()> {
    let sets = match scan_read_sets(fastq_dir, forward_suffix, reverse_suffix)? {
        Some(sets) => sets,
        None => {
            info!(
                "no FASTQ or FASTQ.GZ files found in {}",
                fastq_dir.display()
            );
            return Ok(());
        }
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    info!(
        "found {} forward and {} reverse files",
        sets.forward.len(),
        sets.reverse.len()
    );

    let out_r1 = output_dir.join(format!("merged{forward_suffix}.fastq.gz"));
    info!(
        "merging {} files into {}",
        sets.forward.len(),
        out_r1.display()
    );
    merge_into(&out_r1, &sets.forward)?;

    let out_r2 = output_dir.join(format!("merged{reverse_suffix}.fastq.gz"));
    info!(
        "merging {} files into {}",
        sets.reverse.len(),
        out_r2.display()
    );
    merge_into(&out_r2, &sets.reverse)?;

    info!("all merges complete");
    Ok(())
}
