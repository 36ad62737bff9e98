//! Passage chunking.
//!
//! Splits [Doc]s into sentences (see [crate::processing::sentence]) and groups them into
//! passages of [PASSAGE_NUM_SENTENCES] consecutive sentences. The last passage of a
//! document may be shorter.
//!
//! Passages optionally start with the publication date of their document:
//!
//! ```text
//! Thursday, January 1, 1970. First sentence. Second sentence.
//! ```
use std::fmt::Display;

use chrono::{Local, TimeZone};
use log::warn;

use crate::pipelines::newscrawl::types::{Doc, Passage};
use crate::processing::sentence::{sentences, SENTENCE_SEPARATOR};

pub const PASSAGE_NUM_SENTENCES: usize = 6;
const PASSAGE_DATE_PREFIX_FORMAT: &str = "%A, %B %-d, %Y";

/// Formats the date prefix of a passage, in the local timezone.
///
/// Publication timestamps are UTC midnights, so west of UTC the prefix
/// shows the day before the publication date.
/// Returns [None] for timestamps out of the supported range.
pub fn date_prefix(publication_ts: i64) -> Option<Vec<u8>> {
    date_prefix_in(&Local, publication_ts)
}

/// Formats the date prefix of a passage in the provided timezone.
pub fn date_prefix_in<Tz>(tz: &Tz, publication_ts: i64) -> Option<Vec<u8>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_opt(publication_ts, 0).single().map(|dt| {
        dt.format(PASSAGE_DATE_PREFIX_FORMAT)
            .to_string()
            .into_bytes()
    })
}

/// Sentences of the document currently being chunked.
struct Windows {
    sorting_key: String,
    prefix: Option<Vec<u8>>,
    sentences: Vec<Vec<u8>>,
    passage_idx: usize,
}

/// Lazy [Passage] iterator over a sequence of [Doc]s.
///
/// Only the sentences of the current document are kept in memory.
pub struct Chunker<I> {
    docs: I,
    prepend_date: bool,
    passage_size: usize,
    current: Option<Windows>,
}

impl<I> Chunker<I>
where
    I: Iterator<Item = Doc>,
{
    pub fn new<D>(docs: D, prepend_date: bool) -> Self
    where
        D: IntoIterator<IntoIter = I, Item = Doc>,
    {
        Self {
            docs: docs.into_iter(),
            prepend_date,
            passage_size: PASSAGE_NUM_SENTENCES,
            current: None,
        }
    }

    /// Use a custom number of sentences per passage.
    ///
    /// A size of 0 is ignored and the default is kept.
    pub fn with_passage_size(mut self, passage_size: usize) -> Self {
        if passage_size == 0 {
            warn!(
                "invalid passage size 0, keeping {}",
                PASSAGE_NUM_SENTENCES
            );
        } else {
            self.passage_size = passage_size;
        }
        self
    }

    pub fn passage_size(&self) -> usize {
        self.passage_size
    }

    fn windows(&self, doc: Doc) -> Windows {
        let prefix = if self.prepend_date {
            let prefix = date_prefix(doc.publication_ts());
            if prefix.is_none() {
                warn!(
                    "{:?}: publication timestamp {} out of range, no date prefix",
                    doc.sorting_key(),
                    doc.publication_ts()
                );
            }
            prefix
        } else {
            None
        };

        Windows {
            sentences: sentences(doc.text()),
            sorting_key: doc.sorting_key().to_string(),
            prefix,
            passage_idx: 0,
        }
    }
}

impl Windows {
    /// Builds the next passage, if any sentence is left.
    fn next_passage(&mut self, passage_size: usize) -> Option<Passage> {
        let chunk = self
            .sentences
            .chunks(passage_size)
            .nth(self.passage_idx)?;

        let mut passage = chunk.join(SENTENCE_SEPARATOR);
        passage.push(b'.');

        if let Some(prefix) = &self.prefix {
            passage = [prefix.as_slice(), passage.as_slice()].join(SENTENCE_SEPARATOR);
        }

        let id = Passage::id_for(&self.sorting_key, self.passage_idx);
        self.passage_idx += 1;
        Some(Passage::new(id, passage))
    }
}

impl<I> Iterator for Chunker<I>
where
    I: Iterator<Item = Doc>,
{
    type Item = Passage;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(windows) = &mut self.current {
                if let Some(passage) = windows.next_passage(self.passage_size) {
                    return Some(passage);
                }
            }

            let doc = self.docs.next()?;
            self.current = Some(self.windows(doc));
        }
    }
}

/// Returns a lazy iterator over the passages of `docs`.
///
/// Passages are yielded in document order, then passage order.
pub fn chunk<D>(docs: D, prepend_date: bool) -> Chunker<D::IntoIter>
where
    D: IntoIterator<Item = Doc>,
{
    Chunker::new(docs, prepend_date)
}
