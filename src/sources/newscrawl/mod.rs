//! News Crawl archive utils.
//!
//! The document-split News Crawl releases are gzipped text files holding one document per line:
//!
//! ```text
//! <YYYYMMDD>\t<base64(sentence split text)>\t<base64(unsplit text)>
//! ```
//!
//! [archive::Archive] wraps a gzip decoder and implements [Iterator] over raw lines.
pub mod archive;
pub mod paths;

pub use archive::Archive;
pub use paths::{archive_paths, LazyFile, DEFAULT_ARCHIVE_PATTERN};
