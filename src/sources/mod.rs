//! Corpus sources.
pub mod newscrawl;
