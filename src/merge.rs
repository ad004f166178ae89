/// Gzip stream concatenation
///
/// Destinations are always gzip. Each appended source becomes an
/// independent gzip member, so a multi-member decoder reading the output
/// reconstructs the inputs' decompressed bytes in append order.
use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Dispatch is by extension only, never content sniffing.
fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}

/// Open `path` for reading, decompressing on the fly when the extension
/// says gzip.
fn open_source(path: &Path) -> Result<Box<dyn Read>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// Merge target in its two-phase lifecycle: created fresh, then
/// append-only. Creation removes any stale file at the path exactly once;
/// the type has no way back to the fresh state, so later appends can
/// never truncate the output mid-run.
///
/// No handle is held across sources. Every append reopens the file in
/// append mode and writes one complete gzip member, so a failure partway
/// through a group leaves a clean prefix of finished members.
pub struct Destination {
    path: PathBuf,
}

impl Destination {
    /// Delete any stale file at `path` and return an appendable
    /// destination. Nothing is written until the first append, so a
    /// destination that never receives data leaves no file behind.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove stale output {}", path.display()))?;
        }
        Ok(Destination { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the decompressed bytes of `source` as one gzip member.
    pub fn append_decompressed(&mut self, source: &Path) -> Result<()> {
        let mut reader = open_source(source)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open output {}", self.path.display()))?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        io::copy(&mut reader, &mut encoder).with_context(|| {
            format!(
                "failed to append {} to {}",
                source.display(),
                self.path.display()
            )
        })?;
        encoder
            .finish()
            .with_context(|| format!("failed to finalize {}", self.path.display()))?;
        Ok(())
    }
}

/// Concatenate `sources` into a fresh gzip file at `dest`, in list order.
pub fn merge_into(dest: &Path, sources: &[PathBuf]) -> Result<()> {
    let mut out = Destination::create(dest)?;
    for source in sources {
        debug!("appending {} to {}", source.display(), dest.display());
        out.append_decompressed(source)?;
    }
    Ok(())
}
