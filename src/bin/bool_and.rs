//! `bool-and <index_dir> <queries_file> <output_file>` — Boolean-AND
//! retrieval over every query in the queries file (§4.5, §6).

use anyhow::{Context, Result};
use clap::Parser;
use newswire_retrieval::config::RetrievalConfig;
use newswire_retrieval::error::RetrievalError;
use newswire_retrieval::index::loader::LoadedIndex;
use newswire_retrieval::logging;
use newswire_retrieval::retrieval::boolean::search_and;
use newswire_retrieval::retrieval::queries_file::parse_queries;
use newswire_retrieval::retrieval::result_line::ResultLine;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Runs Boolean-AND retrieval for every query in `queries_file`.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    index_dir: PathBuf,
    queries_file: PathBuf,
    output_file: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.output_file.exists() {
        return Err(RetrievalError::OutputAlreadyExists {
            path: args.output_file.display().to_string(),
        }
        .into());
    }

    let config = RetrievalConfig::default();

    let index = LoadedIndex::load(&args.index_dir)
        .with_context(|| format!("failed to load index {}", args.index_dir.display()))?;

    let queries_contents = fs::read_to_string(&args.queries_file)
        .with_context(|| format!("failed to read queries file {}", args.queries_file.display()))?;
    let queries = parse_queries(&queries_contents)?;

    let output = fs::File::create(&args.output_file)
        .with_context(|| format!("failed to create output file {}", args.output_file.display()))?;
    let mut writer = BufWriter::new(output);

    for query in &queries {
        let doc_ids = search_and(&index, &query.text);
        let total = doc_ids.len();
        info!(topic_id = query.topic_id, hits = total, "boolean-AND query");

        for (i, doc_id) in doc_ids.iter().enumerate() {
            let rank = i + 1;
            let docno = index
                .doc_meta(*doc_id)
                .map(|m| m.docno.clone())
                .unwrap_or_default();
            let line = ResultLine {
                topic_id: query.topic_id,
                docno,
                rank,
                score: (total - rank + 1) as f64,
                run_tag: config.run_tags.boolean_and.clone(),
            };
            writeln!(writer, "{line}")?;
        }
    }

    writer.flush()?;
    Ok(())
}
