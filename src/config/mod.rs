//! Configuration module for Lexicrawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use lexicrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("lexicrawl.toml")).unwrap();
//! for job in config.jobs() {
//!     println!("{} (max depth {})", job.seed_url, job.max_depth);
//! }
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlJob, CrawlerConfig, HttpConfig, IdfFormula, IndexConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
