/*! Gzipped JSON Lines writer.

Writes one serialized record per line into a single `.jsonl.gz` file.
Records holding bytes (such as [crate::pipelines::newscrawl::types::Passage]) are serialized with their text as a UTF-8 string.
This is lossy: invalid UTF-8 sequences are written as `U+FFFD`, with a warning for each affected record.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use flate2::{write::GzEncoder, Compression};
use log::{debug, warn};
use serde::Serialize;

use crate::error::Error;

use super::WriterTrait;

pub struct JsonlWriter<T> {
    path: PathBuf,
    handle: Option<GzEncoder<BufWriter<File>>>,
    nb_records: usize,
    _item: PhantomData<T>,
}

impl<T> JsonlWriter<T> {
    /// Number of records written so far.
    pub fn nb_records(&self) -> usize {
        self.nb_records
    }

    fn handle(&mut self) -> Result<&mut GzEncoder<BufWriter<File>>, Error> {
        match &mut self.handle {
            Some(handle) => Ok(handle),
            None => Err(Error::Custom(format!(
                "writing to closed file {:?}",
                self.path
            ))),
        }
    }
}

impl<T: Serialize> WriterTrait for JsonlWriter<T> {
    type Item = T;

    /// Create a new writer, truncating `dst` if it exists.
    fn new(dst: &Path) -> Result<Self, Error> {
        debug!("creating {:?}", dst);
        let file = File::create(dst)?;
        let handle = GzEncoder::new(BufWriter::new(file), Compression::default());
        Ok(Self {
            path: dst.to_path_buf(),
            handle: Some(handle),
            nb_records: 0,
            _item: PhantomData,
        })
    }

    fn write(&mut self, vals: Vec<T>) -> Result<(), Error> {
        let mut buf = Vec::new();
        for val in &vals {
            serde_json::to_writer(&mut buf, val)?;
            buf.push(b'\n');
        }
        self.handle()?.write_all(&buf)?;
        self.nb_records += vals.len();
        Ok(())
    }

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        let handle = self.handle()?;
        serde_json::to_writer(&mut *handle, val)?;
        handle.write_all(b"\n")?;
        self.nb_records += 1;
        Ok(())
    }

    /// Finishes the gzip stream and flushes the file.
    fn close(&mut self) -> Result<(), Error> {
        match self.handle.take() {
            Some(handle) => {
                let mut inner = handle.finish()?;
                inner.flush()?;
                debug!("closed {:?} ({} records)", self.path, self.nb_records);
            }
            None => warn!("trying to close an already closed writer {:?}", self.path),
        }
        Ok(())
    }
}
