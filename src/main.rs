// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Analyze every requested page with one shared PageAnalyzer
// 4. Print the results as a report or as JSON
// 5. Exit with proper code (0 = success, 1 = failures found, 2 = error)
//
// Rust concepts used:
// - async/await: the pages (and their link probes) are fetched concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands};
use futures::future::join_all;
use serde::Serialize;
use web_analyzer::{AnalysisResult, PageAnalyzer};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every page analyzed (and, if asked, no inaccessible links)
//   Ok(1) = some page failed, or --fail-on-inaccessible found broken links
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args).await,
    }
}

// One page's outcome, as printed in JSON mode
//
// Success: the AnalysisResult fields plus "url"
// Failure: { "url": ..., "error": "..." }
#[derive(Debug, Serialize)]
struct PageReport {
    url: String,
    #[serde(flatten)]
    result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl PageReport {
    fn has_inaccessible_links(&self) -> bool {
        self.result
            .as_ref()
            .is_some_and(|result| result.links.inaccessible > 0)
    }
}

async fn handle_analyze(args: AnalyzeArgs) -> Result<i32> {
    // One analyzer = one HTTP client and one link cache for the whole run
    let analyzer = PageAnalyzer::new(args.to_config())?;

    if !args.json {
        println!("🔍 Analyzing {} page(s)...\n", args.urls.len());
    }

    let outcomes = join_all(args.urls.iter().map(|url| analyzer.analyze(url))).await;

    let reports: Vec<PageReport> = args
        .urls
        .iter()
        .zip(outcomes)
        .map(|(url, outcome)| match outcome {
            Ok(result) => PageReport {
                url: url.clone(),
                result: Some(result),
                error: None,
            },
            Err(e) => PageReport {
                url: url.clone(),
                result: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        reports.iter().for_each(print_report);
    }

    let failed = reports.iter().any(|report| report.error.is_some());
    let broken = args.fail_on_inaccessible && reports.iter().any(PageReport::has_inaccessible_links);

    Ok(if failed || broken { 1 } else { 0 })
}

// Prints one page as a human-readable block
fn print_report(report: &PageReport) {
    println!("📄 {}", report.url);

    match (&report.result, &report.error) {
        (Some(result), _) => {
            let headings = &result.headings;
            let links = &result.links;

            println!("   {:<14} {}", "HTML version:", result.html_version);
            println!("   {:<14} {}", "Title:", result.page_title);
            println!(
                "   {:<14} h1: {}  h2: {}  h3: {}  h4: {}  h5: {}  h6: {}",
                "Headings:", headings.h1, headings.h2, headings.h3, headings.h4, headings.h5, headings.h6
            );
            println!(
                "   {:<14} {} total, {} internal, {} external, {} inaccessible",
                "Links:", links.total, links.internal, links.external, links.inaccessible
            );
            for url in &links.inaccessible_urls {
                println!("      ❌ {}", url);
            }
            println!(
                "   {:<14} {}",
                "Login form:",
                if result.contains_login_form { "yes" } else { "no" }
            );
        }
        (None, Some(error)) => println!("   ⚠️  {}", error),
        (None, None) => {}
    }

    println!();
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does join_all do?
//    - Takes many futures and waits for all of them
//    - Results come back in the same order as the inputs
//    - That's why we can zip() them with the URL list afterwards
//
// 2. Why #[serde(flatten)] on an Option?
//    - flatten copies the inner struct's fields into the outer JSON object
//    - When the Option is None, nothing is copied
//    - So a failed page prints just "url" and "error"
//
// 3. Why does logging go to stderr?
//    - stdout is reserved for results, so `--json | jq` keeps working
// -----------------------------------------------------------------------------
