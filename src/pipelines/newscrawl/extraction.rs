//! Document extraction.
//!
//! Reads News Crawl archive lines, parses them into [Doc]s and keeps the ones
//! whose sorting key is listed in the deduplicated key list.
//!
//! Any error (I/O, malformed line, invalid base64) is fatal: it is yielded once,
//! then the iterator ends. Skipping bad lines would silently drop documents
//! that are expected by the key list.
use std::io::{BufReader, Read};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use flate2::read::MultiGzDecoder;
use log::{debug, info, trace};

use crate::error::Error;
use crate::filtering::{Filter, SortingKeys};
use crate::pipelines::newscrawl::types::{sorting_key, Doc};
use crate::processing::bytes::strip;
use crate::sources::newscrawl::Archive;

const EXTRACTION_FIELD_SEPARATOR: u8 = b'\t';
const EXTRACTION_DATE_FORMAT: &str = "%Y%m%d";

type GzArchive<R> = Archive<BufReader<MultiGzDecoder<R>>>;

/// Parses a single archive line into a [Doc].
///
/// Fails with [Error::MalformedRecord] if the line does not hold exactly three
/// tab-separated fields or if the date is not a valid `YYYYMMDD` date,
/// and with [Error::Decode] if one of the payloads is not valid base64.
pub fn parse_line(line: &[u8]) -> Result<Doc, Error> {
    let fields: Vec<&[u8]> = strip(line).split(|b| *b == EXTRACTION_FIELD_SEPARATOR).collect();
    let (publication_date, sentence_split, unsplit) = match fields.as_slice() {
        [date, sentence_split, unsplit] => (*date, *sentence_split, *unsplit),
        _ => {
            return Err(Error::MalformedRecord(format!(
                "expected 3 tab-separated fields, got {}",
                fields.len()
            )))
        }
    };

    let publication_date = parse_date(publication_date)?;
    let publication_dt = publication_date.and_time(NaiveTime::MIN);

    let sorting_key = sorting_key(&publication_dt, unsplit);
    let publication_ts = Utc.from_utc_datetime(&publication_dt).timestamp();

    // the unsplit field is only hashed, but it still has to be valid.
    STANDARD.decode(unsplit)?;
    let text = STANDARD.decode(sentence_split)?;

    Ok(Doc::new(sorting_key, publication_ts, text))
}

/// Parses a `YYYYMMDD` date field.
fn parse_date(field: &[u8]) -> Result<NaiveDate, Error> {
    let field = std::str::from_utf8(field)
        .map_err(|e| Error::MalformedRecord(format!("non UTF-8 date field: {}", e)))?;
    if field.len() != 8 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedRecord(format!(
            "invalid date field {:?}",
            field
        )));
    }

    NaiveDate::parse_from_str(field, EXTRACTION_DATE_FORMAT)
        .map_err(|e| Error::MalformedRecord(format!("invalid date {:?}: {}", field, e)))
}

/// Lazy, deduplicated [Doc] iterator over a sequence of gzipped archives.
///
/// Archives are opened one at a time, in the provided order.
pub struct Extractor<I, R>
where
    I: Iterator<Item = R>,
    R: Read,
{
    archives: I,
    current: Option<GzArchive<R>>,
    keys: SortingKeys,
    archive_idx: usize,
    nb_lines: usize,
    nb_kept: usize,
    done: bool,
}

impl<I, R> Extractor<I, R>
where
    I: Iterator<Item = R>,
    R: Read,
{
    /// Create a new extractor from already loaded keys.
    pub fn new<A>(archives: A, keys: SortingKeys) -> Self
    where
        A: IntoIterator<IntoIter = I, Item = R>,
    {
        Self {
            archives: archives.into_iter(),
            current: None,
            keys,
            archive_idx: 0,
            nb_lines: 0,
            nb_kept: 0,
            done: false,
        }
    }

    /// log counts of the current archive.
    fn close_current(&mut self) {
        if self.current.take().is_some() {
            info!(
                "archive {}: kept {}/{} documents",
                self.archive_idx, self.nb_kept, self.nb_lines
            );
            self.archive_idx += 1;
        }
    }

    /// Reads the next line of the current archive,
    /// moving on to the next archives when exhausted.
    fn next_line(&mut self) -> Option<Result<Vec<u8>, Error>> {
        loop {
            if let Some(archive) = &mut self.current {
                match archive.next() {
                    Some(line) => return Some(line),
                    None => self.close_current(),
                }
            }

            let archive = self.archives.next()?;
            debug!("opening archive {}", self.archive_idx);
            self.nb_lines = 0;
            self.nb_kept = 0;
            self.current = Some(Archive::from_gzip(archive));
        }
    }
}

impl<I, R> Iterator for Extractor<I, R>
where
    I: Iterator<Item = R>,
    R: Read,
{
    type Item = Result<Doc, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(line) = self.next_line() {
            self.nb_lines += 1;
            match line.and_then(|line| parse_line(&line)) {
                Ok(doc) if self.keys.detect(&doc) => {
                    self.nb_kept += 1;
                    return Some(Ok(doc));
                }
                Ok(doc) => trace!("dropping {:?}", doc.sorting_key()),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        self.done = true;
        None
    }
}

impl<I, R> std::iter::FusedIterator for Extractor<I, R>
where
    I: Iterator<Item = R>,
    R: Read,
{
}

/// Loads the gzipped key list, then returns a lazy iterator over the kept
/// documents of `archives`.
///
/// Documents are yielded in archive order, then line order.
pub fn extract<A, R, K>(archives: A, keys: K) -> Result<Extractor<A::IntoIter, R>, Error>
where
    A: IntoIterator<Item = R>,
    R: Read,
    K: Read,
{
    let keys = SortingKeys::from_gzip(keys)?;
    info!("loaded {} sorting keys", keys.len());
    Ok(Extractor::new(archives, keys))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::test_utils::{doc_line, gzip_lines as gzip};

    fn key_of(date: &str, sentence_split: &str, unsplit: &str) -> String {
        parse_line(&doc_line(date, sentence_split, unsplit))
            .unwrap()
            .sorting_key()
            .to_string()
    }

    #[test]
    fn test_parse_line() {
        let doc = parse_line(&doc_line("20190101", "sentence_split_1", "unsplit_1")).unwrap();

        assert_eq!(doc.publication_ts(), 1546300800);
        assert_eq!(doc.text(), b"sentence_split_1");
        assert_eq!(
            doc.sorting_key(),
            "20190101000000000000\x00\x01\
             1d377af8d421d226f274f12d31d4cc15e7c6f85e2e1eb2530e19b123d019d776\x00\x01"
        );
    }

    #[test]
    fn test_parse_line_trailing_whitespace() {
        let mut line = doc_line("20200103", "sentence_split_3", "unsplit_3");
        line.extend_from_slice(b" \r\n");
        let doc = parse_line(&line).unwrap();

        assert_eq!(doc.publication_ts(), 1578009600);
        assert!(doc.sorting_key().starts_with("20200103000000000000\x00\x01f86e1324"));
    }

    #[test]
    fn test_deterministic() {
        let a = parse_line(&doc_line("20190102", "one. two.", "one two")).unwrap();
        let b = parse_line(&doc_line("20190102", "one.\ntwo.", "one two")).unwrap();

        // the key only depends on the date and the unsplit field.
        assert_eq!(a.sorting_key(), b.sorting_key());
        assert_eq!(a.publication_ts(), b.publication_ts());
        assert_ne!(a.text(), b.text());
    }

    #[test]
    fn test_wrong_field_count() {
        for line in [
            b"20190101\tc2VudGVuY2U=".to_vec(),
            b"20190101\tYQ==\tYQ==\tYQ==".to_vec(),
            b"".to_vec(),
        ] {
            assert!(matches!(parse_line(&line), Err(Error::MalformedRecord(_))));
        }
    }

    #[test]
    fn test_invalid_date() {
        for date in ["2019011", "201901011", "20191301", "20190230", "2019-1-1", "abcdefgh"] {
            let line = doc_line(date, "a", "b");
            assert!(
                matches!(parse_line(&line), Err(Error::MalformedRecord(_))),
                "{} should be invalid",
                date
            );
        }
    }

    #[test]
    fn test_non_utf8_date() {
        let mut line = b"2019\xff\xfe01".to_vec();
        line.extend_from_slice(&doc_line("", "a", "b"));

        let err = parse_line(&line).unwrap_err();
        match err {
            Error::MalformedRecord(msg) => assert!(msg.contains("UTF-8"), "{}", msg),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_base64() {
        let line = b"20190101\tnot base64!\tYQ==".to_vec();
        assert!(matches!(parse_line(&line), Err(Error::Decode(_))));

        let line = b"20190101\tYQ==\tnot base64!".to_vec();
        assert!(matches!(parse_line(&line), Err(Error::Decode(_))));
    }

    #[test]
    fn test_extract_filters_and_orders() {
        let archives = vec![
            gzip(&[
                doc_line("20190101", "sentence_split_1", "unsplit_1"),
                doc_line("20190102", "sentence_split_2", "unsplit_2"),
            ]),
            gzip(&[
                doc_line("20200103", "sentence_split_3", "unsplit_3"),
                doc_line("20200103", "duplicate", "duplicate"),
            ]),
        ];
        let kept = [
            key_of("20200103", "sentence_split_3", "unsplit_3"),
            key_of("20190101", "sentence_split_1", "unsplit_1"),
        ];
        let keys = gzip(&kept.iter().map(|k| k.as_bytes().to_vec()).collect::<Vec<_>>());

        let docs: Vec<Doc> = extract(archives.into_iter().map(Cursor::new), Cursor::new(keys))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let texts: Vec<&[u8]> = docs.iter().map(Doc::text).collect();
        assert_eq!(texts, vec![&b"sentence_split_1"[..], b"sentence_split_3"]);
        assert_eq!(docs[1].publication_ts(), 1578009600);
    }

    #[test]
    fn test_extract_empty_keys() {
        let archives = vec![gzip(&[doc_line("20190101", "a", "b")])];
        let mut docs = extract(archives.into_iter().map(Cursor::new), Cursor::new(gzip(&[]))).unwrap();
        assert!(docs.next().is_none());
    }

    #[test]
    fn test_extract_stops_on_error() {
        let good = doc_line("20190101", "a", "b");
        let key = key_of("20190101", "a", "b");
        let archives = vec![
            gzip(&[good.clone(), b"garbage".to_vec(), good.clone()]),
            gzip(&[good]),
        ];

        let mut docs = extract(
            archives.into_iter().map(Cursor::new),
            Cursor::new(gzip(&[key.into_bytes()])),
        )
        .unwrap();

        assert!(docs.next().unwrap().is_ok());
        assert!(matches!(docs.next(), Some(Err(Error::MalformedRecord(_)))));
        assert!(docs.next().is_none());
        assert!(docs.next().is_none());
    }

    #[test]
    fn test_extract_corrupted_keys() {
        let res = extract(Vec::<Cursor<Vec<u8>>>::new(), Cursor::new(b"nope".to_vec()));
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
