//! Print curated safe code resources.
//!
//! Usage:
//!   safe-code                    # full catalog listing
//!   safe-code --search trivy     # formatted blocks for matching records
//!   safe-code --json             # catalog (or search hits) as JSON

use anyhow::{Context, Result};
use clap::Parser;
use safe_code_resources::{format_resource, list_resources, search_resources, summary_line};

#[derive(Parser, Debug)]
#[command(name = "safe-code")]
#[command(about = "Print curated safe code resources")]
struct Cli {
    /// Search keyword to filter results.
    #[arg(long, short, default_value = "")]
    search: String,
    /// Emit the selected records as a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.json {
        return print_json(&cli.search);
    }

    if cli.search.is_empty() {
        print_catalog();
    } else {
        print_search(&cli.search);
    }
    Ok(())
}

fn print_catalog() {
    let catalog = list_resources();
    println!("Safe Code Resources (Total: {})\n", catalog.len());
    for (i, record) in catalog.iter().enumerate() {
        println!("{}", summary_line(i, record));
    }
}

fn print_search(keyword: &str) {
    let hits = search_resources(keyword);
    if hits.is_empty() {
        println!("No resources matched: {keyword}");
        return;
    }
    println!("Found {} resource(s) matching '{keyword}':\n", hits.len());
    for hit in hits {
        println!("{}", format_resource(hit));
    }
}

fn print_json(keyword: &str) -> Result<()> {
    // An empty keyword selects the whole catalog, matching the text paths.
    let selected: Vec<_> = if keyword.is_empty() {
        list_resources().iter().collect()
    } else {
        search_resources(keyword)
    };
    let json =
        serde_json::to_string_pretty(&selected).context("serializing selected resources")?;
    println!("{json}");
    Ok(())
}
