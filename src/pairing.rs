/// Forward/reverse pair resolution by filename convention
use std::path::{Path, PathBuf};

/// Resolved forward/reverse files for one sample, in the same compression
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub forward: PathBuf,
    pub reverse: PathBuf,
}

/// Locate the paired files for `sample_id` under `dir`.
///
/// A gzip pair (`{sample}{suffix}.fastq.gz`) is preferred; a plain
/// `.fastq` pair is the fallback. Compression states are never mixed
/// within a pair: a lone `forward.fastq.gz` next to a `reverse.fastq`
/// resolves to nothing. Returns `None` when no complete pair exists.
pub fn locate_pair(
    dir: &Path,
    sample_id: &str,
    forward_suffix: &str,
    reverse_suffix: &str,
) -> Option<FilePair> {
    for ext in ["fastq.gz", "fastq"] {
        let forward = dir.join(format!("{sample_id}{forward_suffix}.{ext}"));
        let reverse = dir.join(format!("{sample_id}{reverse_suffix}.{ext}"));
        if forward.exists() && reverse.exists() {
            return Some(FilePair { forward, reverse });
        }
    }
    None
}
