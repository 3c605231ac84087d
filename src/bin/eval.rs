//! `eval <index_dir> <qrels_file> <result_file>` — batch effectiveness
//! evaluator; prints the fixed-format metrics table on stdout (§4.8, §6).

use anyhow::{Context, Result};
use clap::Parser;
use newswire_retrieval::config::RetrievalConfig;
use newswire_retrieval::eval::qrels::parse_qrels;
use newswire_retrieval::eval::report::{evaluate_all, render_table};
use newswire_retrieval::index::loader::LoadedIndex;
use newswire_retrieval::logging;
use newswire_retrieval::retrieval::result_line::parse_strict;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Scores a result file against qrels and prints AP / P@10 / NDCG@10 /
/// NDCG@1000 / TBG per topic, over the configured topic range.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    index_dir: PathBuf,
    qrels_file: PathBuf,
    result_file: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = RetrievalConfig::default();

    let index = LoadedIndex::load(&args.index_dir)
        .with_context(|| format!("failed to load index {}", args.index_dir.display()))?;

    let qrels_contents = fs::read_to_string(&args.qrels_file)
        .with_context(|| format!("failed to read qrels file {}", args.qrels_file.display()))?;
    let relevance = parse_qrels(&qrels_contents)?;

    let result_contents = fs::read_to_string(&args.result_file)
        .with_context(|| format!("failed to read result file {}", args.result_file.display()))?;
    let results = result_contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_strict(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let doc_length = |docno: &str| -> f64 {
        index
            .internal_id(docno)
            .and_then(|id| index.doc_meta(id))
            .map(|m| m.length as f64)
            .unwrap_or(0.0)
    };

    let scores = evaluate_all(&results, &relevance, doc_length, &config);

    let stdout = io::stdout();
    render_table(stdout.lock(), &scores)?;
    io::stdout().flush()?;
    Ok(())
}
