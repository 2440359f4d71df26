//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: The round cycle a crawl job moves through, with its legal transitions

mod crawl_state;

pub use crawl_state::CrawlState;
