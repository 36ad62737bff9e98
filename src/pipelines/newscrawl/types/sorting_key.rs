//! Sorting keys.
//!
//! A sorting key identifies a document across runs, and is the join key
//! between archives and deduplicated key lists:
//!
//! ```text
//! <YYYYMMDDHHMMSSffffff>\x00\x01<sha256 hex of the unsplit field>\x00\x01
//! ```
//!
//! The segment after the last separator is reserved and always empty.
//! It has to be kept for compatibility with existing key lists.
use chrono::NaiveDateTime;
use sha2::{Digest, Sha256};

pub const SORTING_KEY_DATE_FORMAT: &str = "%Y%m%d%H%M%S%6f";
pub const SORTING_KEY_FIELD_SEPARATOR: &str = "\x00\x01";

/// Builds the sorting key of a document published at `publication_dt`,
/// whose raw (still encoded) unsplit field is `unsplit`.
pub fn sorting_key(publication_dt: &NaiveDateTime, unsplit: &[u8]) -> String {
    let line_hash = format!("{:x}", Sha256::digest(unsplit));
    [
        publication_dt.format(SORTING_KEY_DATE_FORMAT).to_string(),
        line_hash,
        String::new(),
    ]
    .join(SORTING_KEY_FIELD_SEPARATOR)
}
