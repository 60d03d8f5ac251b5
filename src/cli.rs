// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use web_analyzer::{AnalyzerConfig, FormDetection};

#[derive(Parser, Debug)]
#[command(
    name = "web-analyzer",
    version,
    about = "Analyze web pages: HTML version, title, headings, links and login forms",
    long_about = "web-analyzer fetches a web page and summarizes it: which HTML version it declares, \
                  its title, how many headings of each level it has, how many of its links are \
                  internal, external or inaccessible, and whether it contains a login form."
)]
pub struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more web pages
    ///
    /// Example: web-analyzer analyze example.com https://www.rust-lang.org --json
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Page URL(s) to analyze; https:// is assumed when no scheme is given
    ///
    /// Several pages are analyzed at the same time and share one link cache,
    /// so a link that appears on more than one page is only probed once.
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Output results in JSON format instead of a report
    #[arg(long)]
    pub json: bool,

    /// Maximum number of link probes in flight per page
    #[arg(long, default_value_t = 10)]
    pub concurrency: usize,

    /// Timeout in seconds for fetching each page
    #[arg(long, default_value_t = 10)]
    pub page_timeout: u64,

    /// Timeout in seconds for each link probe
    #[arg(long, default_value_t = 3)]
    pub probe_timeout: u64,

    /// Seconds a link's reachability is remembered (0 = for the whole run)
    #[arg(long, default_value_t = 600)]
    pub cache_ttl: u64,

    /// Maximum number of links the cache remembers
    #[arg(long, default_value_t = 10_000)]
    pub cache_capacity: usize,

    /// How to decide whether a page has a login form
    #[arg(long, value_enum, default_value_t = FormDetection::Structural)]
    pub form_detection: FormDetection,

    /// Exit with code 1 if any page has an inaccessible link
    #[arg(long)]
    pub fail_on_inaccessible: bool,
}

impl AnalyzeArgs {
    // Maps the flags onto the library's configuration
    pub fn to_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            page_timeout: Duration::from_secs(self.page_timeout),
            probe_timeout: Duration::from_secs(self.probe_timeout),
            max_concurrent_probes: self.concurrency,
            cache_ttl: match self.cache_ttl {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            cache_capacity: self.cache_capacity,
            form_detection: self.form_detection,
            ..AnalyzerConfig::default()
        }
    }
}
