//! Fixtures shared by unit tests.
use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::{write::GzEncoder, Compression};

/// Gzip `content` in memory.
pub fn gzip(content: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(content).unwrap();
    enc.finish().unwrap()
}

/// Gzip `lines`, separated by `\n`, in memory.
pub fn gzip_lines(lines: &[Vec<u8>]) -> Vec<u8> {
    gzip(&lines.join(&b'\n'))
}

/// Builds a News Crawl archive line.
pub fn doc_line(date: &str, sentence_split: &str, unsplit: &str) -> Vec<u8> {
    [
        date.to_string(),
        STANDARD.encode(sentence_split),
        STANDARD.encode(unsplit),
    ]
    .join("\t")
    .into_bytes()
}
