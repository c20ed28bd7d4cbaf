mod db;
mod docset;
mod parser;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::bail;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "javadocset",
    about = "Build a searchable docset from a generated javadoc API folder"
)]
struct Cli {
    /// Name of the docset to create (anything you want)
    docset_name: String,
    /// Path of the javadoc API folder to index
    javadoc_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    info!(
        "Building docset '{}' from {}",
        cli.docset_name,
        cli.javadoc_dir.display()
    );

    let (docs_root, summary_found) = docset::find_docs_root(&cli.javadoc_dir)?;
    let has_split_index = docs_root.join("index-files").is_dir();

    let bundle = docset::Bundle::create(Path::new("."), &cli.docset_name)?;
    let copied = docset::copy_tree(&docs_root, &bundle.documents)?;
    println!("Copied {} files into {}", copied, bundle.documents.display());

    let index_files = docset::collect_index_files(&bundle.documents, has_split_index)?;
    if index_files.is_empty() {
        bail!(
            "{} contains no index files (expected an index-all.html file or an index-files/ folder)",
            docs_root.display()
        );
    }
    let has_index_all = index_files
        .iter()
        .any(|p| p.file_name().is_some_and(|n| n == "index-all.html"));

    println!("Indexing {} file(s)...", index_files.len());
    let entries = parse_all(&index_files);
    if entries.is_empty() {
        bail!(
            "No index entries found in {}; the folder does not look like generated javadoc",
            docs_root.display()
        );
    }

    let conn = db::create(&bundle.db_path())?;
    let inserted = db::insert_entries(&conn, &entries)?;

    let index_page = docset::index_page(summary_found, has_split_index, has_index_all);
    bundle.write_plist(&cli.docset_name, index_page)?;

    println!(
        "Saved {} entries ({} parsed, {} duplicates skipped).",
        inserted,
        entries.len(),
        entries.len() - inserted
    );

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {}", format_duration(elapsed));
    }

    Ok(())
}

/// Parse every index file in parallel. A file that cannot be read is logged
/// and skipped; the run keeps going with whatever the other files yield.
fn parse_all(index_files: &[PathBuf]) -> Vec<parser::IndexEntry> {
    let pb = ProgressBar::new(index_files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("=> "),
    );

    let results: Vec<_> = index_files
        .par_iter()
        .map(|path| {
            let result = parser::parse_index_file(path);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut entries = Vec::new();
    for result in results {
        match result {
            Ok(parsed) => entries.extend(parsed),
            Err(e) => error!("{:#}", e),
        }
    }
    entries
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
