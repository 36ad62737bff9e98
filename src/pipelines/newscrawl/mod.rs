//! News Crawl pipelines.
//!
//! Two stages, connected by a lazy sequence of [types::Doc]:
//! - [extraction]: archive lines to deduplicated documents,
//! - [chunking]: documents to sentence-aligned passages.
pub mod chunking;
pub mod extraction;
mod pipeline;
pub mod types;

pub use chunking::{chunk, Chunker};
pub use extraction::{extract, Extractor};
pub use pipeline::{NewsCrawlDocs, NewsCrawlPassages, RunStats};
