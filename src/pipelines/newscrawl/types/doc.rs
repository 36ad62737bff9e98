use serde::Serialize;

use super::text::to_utf8_lossy;

/// A document extracted from a News Crawl archive line.
///
/// - `sorting_key` is derived from the publication date and the unsplit content (see [super::sorting_key()]).
/// - `publication_ts` is the publication day at midnight, as UTC timestamp seconds.
/// - `text` is the decoded, sentence split article.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(into = "DocSer")]
pub struct Doc {
    sorting_key: String,
    publication_ts: i64,
    text: Vec<u8>,
}

/// Serializable version of [Doc], with `text` as a (lossy) UTF-8 string.
#[derive(Serialize)]
struct DocSer {
    sorting_key: String,
    publication_ts: i64,
    text: String,
}

impl From<Doc> for DocSer {
    fn from(d: Doc) -> Self {
        Self {
            text: to_utf8_lossy(&d.sorting_key, d.text),
            sorting_key: d.sorting_key,
            publication_ts: d.publication_ts,
        }
    }
}

impl Doc {
    pub fn new(sorting_key: String, publication_ts: i64, text: Vec<u8>) -> Self {
        Self {
            sorting_key,
            publication_ts,
            text,
        }
    }

    /// Get a reference to the doc's sorting key.
    pub fn sorting_key(&self) -> &str {
        &self.sorting_key
    }

    /// Get the doc's publication timestamp.
    pub fn publication_ts(&self) -> i64 {
        self.publication_ts
    }

    /// Get a reference to the doc's text.
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::Doc;

    #[test]
    fn test_serialize() {
        let doc = Doc::new("key".to_string(), 0, b"caf\xc3\xa9. bar.".to_vec());
        let serialized = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            serialized,
            r#"{"sorting_key":"key","publication_ts":0,"text":"café. bar."}"#
        );
    }

    #[test]
    fn test_serialize_invalid_utf8() {
        let doc = Doc::new("key".to_string(), 0, b"caf\xe9.".to_vec());
        let serialized: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(serialized["text"], "caf\u{FFFD}.");
    }
}
