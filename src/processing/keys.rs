/*! Key list generation

Builds a deduplicated sorting key list from archives, usable by [crate::pipelines::newscrawl::extract].

Documents are considered duplicates when they share a sorting key (same publication day, same unsplit content).
Only the first occurrence is kept, in archive then line order.
This currently only uses [runiq](https://github.com/whitfin/runiq) to check for identical keys.
!*/
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use flate2::{write::GzEncoder, Compression};
use log::{debug, info};
use runiq::filters::{DigestFilter, Filter};

use crate::error::Error;
use crate::pipelines::newscrawl::extraction::parse_line;
use crate::sources::newscrawl::{archive_paths, Archive, LazyFile};

/// Writes the first occurrence of each sorting key of `archives` into `dst`, one per line.
///
/// Returns the number of (unique keys, parsed lines).
pub fn write_unique_keys<A, R, W>(archives: A, dst: &mut W) -> Result<(usize, usize), Error>
where
    A: IntoIterator<Item = R>,
    R: Read,
    W: Write,
{
    let mut filter = DigestFilter::default();
    let mut nb_unique = 0;
    let mut nb_lines = 0;

    for (idx, archive) in archives.into_iter().enumerate() {
        debug!("reading keys of archive {}", idx);
        for line in Archive::from_gzip(archive) {
            let doc = parse_line(&line?)?;
            nb_lines += 1;
            if filter.detect(doc.sorting_key().as_bytes()) {
                dst.write_all(doc.sorting_key().as_bytes())?;
                dst.write_all(b"\n")?;
                nb_unique += 1;
            }
        }
    }

    Ok((nb_unique, nb_lines))
}

/// Builds the gzipped key list of the archives found in `src`.
pub fn build_key_list(src: &Path, pattern: &str, dst: &Path) -> Result<(), Error> {
    let archives = archive_paths(src, pattern)?;
    info!("building key list from {} archives", archives.len());

    let mut enc = GzEncoder::new(BufWriter::new(File::create(dst)?), Compression::default());
    let (nb_unique, nb_lines) =
        write_unique_keys(archives.into_iter().map(LazyFile::new), &mut enc)?;
    enc.finish()?.flush()?;

    info!(
        "wrote {} keys to {:?} ({} duplicates dropped)",
        nb_unique,
        dst,
        nb_lines - nb_unique
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::filtering::SortingKeys;
    use crate::test_utils::{doc_line, gzip, gzip_lines};

    fn line(date: &str, text: &str) -> Vec<u8> {
        doc_line(date, text, &text.replace(". ", " "))
    }

    #[test]
    fn test_unique_keys() {
        let archives = vec![
            gzip_lines(&[line("20190101", "a. b."), line("20190101", "c.")]),
            gzip_lines(&[
                // same content, same day
                line("20190101", "a. b."),
                // same content, another day
                line("20190102", "a. b."),
            ]),
        ];

        let mut dst: Vec<u8> = Vec::new();
        let (nb_unique, nb_lines) =
            write_unique_keys(archives.into_iter().map(Cursor::new), &mut dst).unwrap();
        assert_eq!((nb_unique, nb_lines), (3, 4));

        let keys = SortingKeys::from_reader(Cursor::new(dst)).unwrap();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_malformed() {
        let archives = vec![gzip(b"20190101\tonly two fields")];
        let res = write_unique_keys(archives.into_iter().map(Cursor::new), &mut Vec::<u8>::new());
        assert!(matches!(res, Err(Error::MalformedRecord(_))));
    }
}
