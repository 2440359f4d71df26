//! Output module for crawl reports and index statistics
//!
//! This module handles:
//! - Formatting the per-job crawl report
//! - Loading and printing statistics from the index database

pub mod stats;

pub use stats::{load_statistics, print_statistics, IndexStatistics};

use crate::crawler::CrawlReport;
use std::fmt::Write;

/// Renders a crawl report as human-readable text
pub fn format_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Crawl of {}", report.seed);
    if report.cancelled {
        let _ = writeln!(out, "  Status: cancelled");
    } else {
        let _ = writeln!(out, "  Status: completed");
    }
    let _ = writeln!(out, "  Rounds completed: {}", report.rounds_completed);
    let _ = writeln!(out, "  Pages fetched: {}", report.pages_fetched);
    let _ = writeln!(out, "  Documents indexed: {}", report.documents_indexed);
    let _ = writeln!(out, "  Documents skipped: {}", report.documents_skipped);
    let _ = writeln!(out, "  Fetch failures: {}", report.fetch_failures);
    let _ = writeln!(out, "  Store failures: {}", report.store_failures);
    let _ = writeln!(out, "  Links rejected: {}", report.links_rejected);

    out
}

/// Prints a crawl report to stdout
pub fn print_report(report: &CrawlReport) {
    print!("{}", format_report(report));
}
