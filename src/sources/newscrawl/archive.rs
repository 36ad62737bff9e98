use std::io::{BufRead, BufReader, Read, Split};

use flate2::read::MultiGzDecoder;

use crate::error::Error;

/// News Crawl archive, generic over reader type.
///
/// Yields raw lines (without the trailing `\n`).
/// Lines are kept as bytes since the payloads are base64 and only the date
/// field has to be valid UTF-8.
///
/// News Crawl archives may be multi-member gzip files, so readers built from
/// compressed streams use a [MultiGzDecoder].
pub struct Archive<T> {
    lines: Split<T>,
}

/// Archive reader over any gzipped stream.
impl<R: Read> Archive<BufReader<MultiGzDecoder<R>>> {
    pub fn from_gzip(reader: R) -> Self {
        Self::new(BufReader::new(MultiGzDecoder::new(reader)))
    }
}

impl<T: BufRead> Archive<T> {
    pub fn new(reader: T) -> Self {
        Self {
            lines: reader.split(b'\n'),
        }
    }
}

impl<T: BufRead> Iterator for Archive<T> {
    type Item = Result<Vec<u8>, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| line.map_err(Error::Io))
    }
}
