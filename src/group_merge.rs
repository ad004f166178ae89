/// Metadata-driven merge driver
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::merge::Destination;
use crate::metadata::GroupMapping;
use crate::pairing::locate_pair;

/// Merge every group's samples into `{group}_R1.fastq.gz` /
/// `{group}_R2.fastq.gz` under `output_dir`.
///
/// Samples are appended in metadata order. Stale outputs are removed per
/// group before any sample is examined, so re-runs start fresh. A sample
/// whose pair cannot be located is skipped with a warning; an unreadable
/// located file aborts the run.
pub fn merge_groups(
    mapping: &GroupMapping,
    fastq_dir: &Path,
    output_dir: &Path,
    forward_suffix: &str,
    reverse_suffix: &str,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    for (group, samples) in mapping {
        info!("merging samples for group '{group}': {samples:?}");

        let mut out_r1 = Destination::create(output_dir.join(format!("{group}_R1.fastq.gz")))?;
        let mut out_r2 = Destination::create(output_dir.join(format!("{group}_R2.fastq.gz")))?;

        for sample in samples {
            let pair = match locate_pair(fastq_dir, sample, forward_suffix, reverse_suffix) {
                Some(pair) => pair,
                None => {
                    warn!("skipping {sample}: missing one of the paired files");
                    continue;
                }
            };

            info!(
                "adding {} and {} to group {group}",
                pair.forward.display(),
                pair.reverse.display()
            );
            out_r1.append_decompressed(&pair.forward)?;
            out_r2.append_decompressed(&pair.reverse)?;
        }

        info!(
            "done: {}, {}",
            out_r1.path().display(),
            out_r2.path().display()
        );
    }

    info!("all merges complete");
    Ok(())
}
