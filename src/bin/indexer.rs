//! `indexer <latimes.gz> <index_dir>` — builds the on-disk index from a
//! gzipped corpus file (§4.4, §6).

use anyhow::{Context, Result};
use clap::Parser;
use newswire_retrieval::index::builder::IndexBuilder;
use newswire_retrieval::parse::document::parse_record;
use newswire_retrieval::parse::record_stream::RecordReader;
use newswire_retrieval::{logging, parse};
use std::path::PathBuf;
use tracing::{debug, info};

/// Builds a retrieval index from a gzipped TREC-style newswire corpus.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Path to the gzipped corpus file.
    corpus: PathBuf,

    /// Destination index directory; must not already exist.
    index_dir: PathBuf,

    /// Raise log verbosity to DEBUG.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let reader = parse::open_gz(&args.corpus)
        .with_context(|| format!("failed to open corpus {}", args.corpus.display()))?;
    let mut records = RecordReader::new(reader);

    let mut builder = IndexBuilder::create(&args.index_dir)
        .with_context(|| format!("failed to create index directory {}", args.index_dir.display()))?;

    let mut count = 0u64;
    while let Some((raw, offset)) = records.next_record()? {
        let record = parse_record(&raw, offset)?;
        debug!(docno = %record.docno, "indexed record");
        builder.add_record(&record)?;
        count += 1;
        if count % 10_000 == 0 {
            info!(count, "indexing progress");
        }
    }

    builder.finish()?;
    info!(count, index_dir = %args.index_dir.display(), "index built");

    Ok(())
}
