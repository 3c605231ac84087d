//! `search <index_dir>` — interactive SERP loop over BM25 retrieval with
//! query-biased snippets (§4.7, §4.9, §6).

use anyhow::{Context, Result};
use clap::Parser;
use newswire_retrieval::config::RetrievalConfig;
use newswire_retrieval::index::loader::LoadedIndex;
use newswire_retrieval::logging;
use newswire_retrieval::parse::document::parse_record;
use newswire_retrieval::retrieval::bm25::search_bm25;
use newswire_retrieval::snippet::{extract_snippet, format_serp_lines};
use newswire_retrieval::text::tokenize_and_stem;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

const RESULTS_PER_PAGE: usize = 10;

/// Interactive retrieval session: runs a BM25 query, renders a 10-result
/// SERP with query-biased snippets, and lets the user drill into a result
/// or run another query.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    index_dir: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let index = LoadedIndex::load(&args.index_dir)
        .with_context(|| format!("failed to load index {}", args.index_dir.display()))?;
    let config = RetrievalConfig::default();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        println!("Please enter a query:");
        stdout.flush()?;
        let Some(query) = next_line(&mut lines)? else {
            break;
        };

        let start = Instant::now();
        let hits = search_bm25(&index, &query, &config.bm25, config.bm25_top_k);
        let elapsed = start.elapsed();

        let query_terms: ahash::AHashSet<String> = tokenize_and_stem(&query).into_iter().collect();
        let page: Vec<_> = hits.iter().take(RESULTS_PER_PAGE).collect();

        if page.is_empty() {
            println!("No results found");
        } else {
            for (i, hit) in page.iter().enumerate() {
                let rank = i + 1;
                let Some(meta) = index.doc_meta(hit.doc_id) else {
                    continue;
                };
                let body = read_indexable_text(&index, meta);
                let snippet = extract_snippet(&body, &query_terms);
                let (first, second) = format_serp_lines(rank, &meta.headline, &snippet, &meta.date, &meta.docno);
                println!("{first}");
                println!("{second}");
            }
        }

        println!("Retrieval took {:.1} seconds.", elapsed.as_secs_f64());

        'inner: loop {
            println!("Enter 1-10 to view a ranked document, n/N to execute new query or q/Q to quit:");
            stdout.flush()?;
            let Some(command) = next_line(&mut lines)? else {
                return Ok(());
            };
            let command = command.trim();

            match command {
                "n" | "N" => break 'inner,
                "q" | "Q" => return Ok(()),
                _ => match command.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= page.len() => {
                        let meta = index.doc_meta(page[n - 1].doc_id).expect("page entries resolve");
                        match index.store.read(&meta.docno, &meta.date) {
                            Ok(raw) => println!("{raw}"),
                            Err(err) => println!("failed to read document {}: {err}", meta.docno),
                        }
                    }
                    _ => println!("please enter a valid option"),
                },
            }
        }
    }

    Ok(())
}

fn next_line(lines: &mut io::Lines<io::StdinLock<'_>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read from stdin")?)),
        None => Ok(None),
    }
}

fn read_indexable_text(index: &LoadedIndex, meta: &newswire_retrieval::index::metadata::DocMeta) -> String {
    index
        .store
        .read(&meta.docno, &meta.date)
        .ok()
        .and_then(|raw| parse_record(&raw, 0).ok())
        .map(|record| record.indexable_text())
        .unwrap_or_default()
}
