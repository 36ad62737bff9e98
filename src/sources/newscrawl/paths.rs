//! Archive selection.
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;

/// Default pattern of News Crawl archives, eg. `news-docs.2019.en.filtered.gz`.
pub const DEFAULT_ARCHIVE_PATTERN: &str = "*.gz";

/// Lists the archives to process.
///
/// If `src` is a file, it is the only archive.
/// If `src` is a directory, archives are the files matching `pattern` in it, sorted by path.
pub fn archive_paths(src: &Path, pattern: &str) -> Result<Vec<PathBuf>, Error> {
    if src.is_file() {
        return Ok(vec![src.to_path_buf()]);
    }
    if !src.is_dir() {
        return Err(Error::Custom(format!("{:?} does not exist", src)));
    }

    let full_pattern = src.join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("{:?} is not valid unicode", full_pattern)))?;

    let mut paths = glob::glob(full_pattern)?
        .collect::<Result<Vec<PathBuf>, glob::GlobError>>()?
        .into_iter()
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    paths.sort();

    debug!("archives matching {:?}: {:#?}", full_pattern, paths);
    Ok(paths)
}

/// File that is only opened on first read.
///
/// Lets long archive lists be handed to [crate::pipelines::newscrawl::extract]
/// without holding every file descriptor at once.
#[derive(Debug)]
pub struct LazyFile {
    path: PathBuf,
    file: Option<File>,
}

impl LazyFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path, file: None }
    }
}

impl Read for LazyFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.file {
            Some(file) => file.read(buf),
            None => {
                debug!("opening {:?}", self.path);
                let mut file = File::open(&self.path)?;
                let n = file.read(buf)?;
                self.file = Some(file);
                Ok(n)
            }
        }
    }
}
