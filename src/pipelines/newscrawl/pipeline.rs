//! News Crawl passage generation pipeline
//!
//! # Processing
//! 1. Archives are selected from the source folder (see [crate::sources::newscrawl::archive_paths]).
//! 1. The deduplicated key list is loaded.
//! 1. Each archive line is parsed into a [Doc], and kept if its sorting key is in the key list.
//! 1. Kept docs are split into sentences, chunked into passages and written
//!    into a gzipped JSON Lines file.
//!
//! Everything is sequential and streamed: only one document is held in memory at a time.
//! To scale, run one pipeline per archive (or group of archives).
use std::fs::File;
use std::path::PathBuf;

use itertools::process_results;
use log::{error, info};

use crate::error::Error;
use crate::io::{JsonlWriter, WriterTrait};
use crate::pipelines::newscrawl::chunking::{chunk, PASSAGE_NUM_SENTENCES};
use crate::pipelines::newscrawl::extraction::extract;
use crate::pipelines::newscrawl::types::{Doc, Passage};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::newscrawl::{archive_paths, LazyFile, DEFAULT_ARCHIVE_PATTERN};

/// Counts of a pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub nb_archives: usize,
    pub nb_docs: usize,
    pub nb_passages: usize,
}

/// Extraction then chunking, from archives to a passage file.
pub struct NewsCrawlPassages {
    src: PathBuf,
    keys: PathBuf,
    dst: PathBuf,
    pattern: String,
    prepend_date: bool,
    passage_size: usize,
}

impl NewsCrawlPassages {
    pub fn new(src: PathBuf, keys: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            keys,
            dst,
            pattern: DEFAULT_ARCHIVE_PATTERN.to_string(),
            prepend_date: true,
            passage_size: PASSAGE_NUM_SENTENCES,
        }
    }

    /// Glob pattern used to select archives when the source is a folder.
    pub fn with_pattern(mut self, pattern: String) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_prepend_date(mut self, prepend_date: bool) -> Self {
        self.prepend_date = prepend_date;
        self
    }

    pub fn with_passage_size(mut self, passage_size: usize) -> Self {
        self.passage_size = passage_size;
        self
    }
}

impl Pipeline<RunStats> for NewsCrawlPassages {
    fn run(&self) -> Result<RunStats, Error> {
        let archives = archive_paths(&self.src, &self.pattern)?;
        info!(
            "chunking {} archives from {:?} into {:?}",
            archives.len(),
            self.src,
            self.dst
        );
        let nb_archives = archives.len();

        let docs = extract(
            archives.into_iter().map(LazyFile::new),
            File::open(&self.keys)?,
        )?;

        let mut writer: JsonlWriter<Passage> = JsonlWriter::new(&self.dst)?;
        let mut nb_docs = 0;

        // stop at the first extraction error, propagating it.
        let written = process_results(docs, |docs| -> Result<(), Error> {
            let docs = docs.inspect(|_| nb_docs += 1);
            for passage in chunk(docs, self.prepend_date).with_passage_size(self.passage_size) {
                writer.write_single(&passage)?;
            }
            Ok(())
        });

        if let Err(e) = written.and_then(|res| res) {
            error!("passage generation failed: {}", e);
            return Err(e);
        }
        writer.close()?;

        let stats = RunStats {
            nb_archives,
            nb_docs,
            nb_passages: writer.nb_records(),
        };
        info!("done: {:?}", stats);
        Ok(stats)
    }
}

/// Extraction only, from archives to a document file.
pub struct NewsCrawlDocs {
    src: PathBuf,
    keys: PathBuf,
    dst: PathBuf,
    pattern: String,
}

impl NewsCrawlDocs {
    pub fn new(src: PathBuf, keys: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            keys,
            dst,
            pattern: DEFAULT_ARCHIVE_PATTERN.to_string(),
        }
    }

    pub fn with_pattern(mut self, pattern: String) -> Self {
        self.pattern = pattern;
        self
    }
}

impl Pipeline<RunStats> for NewsCrawlDocs {
    fn run(&self) -> Result<RunStats, Error> {
        let archives = archive_paths(&self.src, &self.pattern)?;
        info!(
            "extracting {} archives from {:?} into {:?}",
            archives.len(),
            self.src,
            self.dst
        );
        let nb_archives = archives.len();

        let docs = extract(
            archives.into_iter().map(LazyFile::new),
            File::open(&self.keys)?,
        )?;

        let mut writer: JsonlWriter<Doc> = JsonlWriter::new(&self.dst)?;
        for doc in docs {
            let doc = doc.map_err(|e| {
                error!("extraction failed: {}", e);
                e
            })?;
            writer.write_single(&doc)?;
        }
        writer.close()?;

        let stats = RunStats {
            nb_archives,
            nb_docs: writer.nb_records(),
            nb_passages: 0,
        };
        info!("done: {:?}", stats);
        Ok(stats)
    }
}
