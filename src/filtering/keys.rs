//! Deduplication set.
//!
//! Holds the sorting keys of the documents to keep.
//! Documents whose sorting key is not in the set are duplicates (or unlisted) and get filtered out.
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

use flate2::read::MultiGzDecoder;
use log::debug;

use super::Filter;
use crate::error::Error;
use crate::pipelines::newscrawl::types::Doc;
use crate::processing::bytes::strip;

#[derive(Debug, Default, Clone)]
pub struct SortingKeys {
    keys: HashSet<String>,
}

impl SortingKeys {
    /// Loads keys from a gzipped, newline delimited key list.
    ///
    /// Blank lines are ignored.
    pub fn from_gzip<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(MultiGzDecoder::new(reader)))
    }

    /// Loads keys from a decompressed, newline delimited key list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut keys = HashSet::new();
        for line in reader.split(b'\n') {
            let line = line?;
            let key = strip(&line);
            if key.is_empty() {
                continue;
            }
            let key = String::from_utf8(key.to_vec()).map_err(|e| {
                Error::MalformedRecord(format!("sorting key is not valid UTF-8: {}", e))
            })?;
            keys.insert(key);
        }

        debug!("loaded {} sorting keys", keys.len());
        Ok(Self { keys })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SortingKeys {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter<&str> for SortingKeys {
    fn detect(&self, key: &str) -> bool {
        self.contains(key)
    }
}

impl Filter<&Doc> for SortingKeys {
    fn detect(&self, doc: &Doc) -> bool {
        self.contains(doc.sorting_key())
    }
}
