use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use fqgroup::group_merge::merge_groups;
use fqgroup::merge_all::merge_all;
use fqgroup::metadata::read_group_mapping;

/// fqgroup - merge paired FASTQ files into per-group reads
///
/// Merges paired FASTQ (gzip possible) files based on metadata; samples
/// can belong to multiple groups. Without metadata all reads are merged
/// into one forward and one reverse read.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory containing FASTQ files
    #[clap(value_name = "FASTQ_DIR")]
    fastq_dir: PathBuf,

    /// Output directory for merged FASTQs
    #[clap(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Path to metadata CSV/TSV file. If no metadata is included all
    /// files in FASTQ_DIR will be merged to one forward and one reverse
    /// read
    #[clap(long = "metadata")]
    metadata: Option<PathBuf>,

    /// Metadata column name for grouping
    #[clap(long = "group_col", default_value = "group")]
    group_col: String,

    /// Column separator in metadata
    #[clap(long = "sep", default_value = ",")]
    sep: String,

    /// Suffix to find the forward reads
    #[clap(long = "forward_suffix", default_value = "_forward")]
    forward_suffix: String,

    /// Suffix to find the reverse reads
    #[clap(long = "reverse_suffix", default_value = "_reverse")]
    reverse_suffix: String,

    /// Quiet mode (warnings and errors only)
    #[clap(long = "quiet")]
    quiet: bool,
}

/// The metadata separator must be a single byte; `\t` is accepted as a
/// convenience spelling for a tab.
fn parse_delimiter(sep: &str) -> Result<u8> {
    if sep == "\\t" {
        return Ok(b'\t');
    }
    match sep.as_bytes() {
        [byte] => Ok(*byte),
        _ => anyhow::bail!("separator must be a single character, got {sep:?}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let delimiter = parse_delimiter(&args.sep)?;

    match &args.metadata {
        Some(metadata) => {
            let mapping = read_group_mapping(metadata, &args.group_col, delimiter)?;
            merge_groups(
                &mapping,
                &args.fastq_dir,
                &args.output_dir,
                &args.forward_suffix,
                &args.reverse_suffix,
            )?;
        }
        None => {
            merge_all(
                &args.fastq_dir,
                &args.output_dir,
                &args.forward_suffix,
                &args.reverse_suffix,
            )?;
        }
    }

    Ok(())
}
