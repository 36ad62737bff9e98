//! Sentence segmentation.
//!
//! Sentences are separated by a literal `". "`.
//! The only normalization is rewriting `".\n"` into `". "`:
//! other end-of-sentence punctuation (`?`, `!`) never splits, and a newline that
//! does not follow a period is kept as a regular character.
use super::bytes::{split_on, strip};

/// Separator between sentences, both when splitting documents and joining passages.
pub const SENTENCE_SEPARATOR: &[u8] = b". ";

/// Appends a trailing space and rewrites every `".\n"` into `". "`.
///
/// The trailing space makes a final `"."` a detectable boundary.
pub fn normalize(text: &[u8]) -> Vec<u8> {
    let mut article = Vec::with_capacity(text.len() + 1);
    article.extend_from_slice(text);
    article.push(b' ');

    // only newlines are rewritten, so a preceding byte is never altered.
    for i in 1..article.len() {
        if article[i] == b'\n' && article[i - 1] == b'.' {
            article[i] = b' ';
        }
    }
    article
}

/// Splits a document into its non-empty, stripped sentences.
pub fn sentences(text: &[u8]) -> Vec<Vec<u8>> {
    let article = normalize(text);
    split_on(&article, SENTENCE_SEPARATOR)
        .map(strip)
        .filter(|sentence| !sentence.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strs(sentences: &[Vec<u8>]) -> Vec<&str> {
        sentences
            .iter()
            .map(|s| std::str::from_utf8(s).unwrap())
            .collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(b"1. 2.\n3."), b"1. 2. 3. ");
        assert_eq!(normalize(b"1\n2"), b"1\n2 ");
        assert_eq!(normalize(b".\n.\n"), b". .  ");
    }

    #[test]
    fn test_sentences() {
        let s = sentences(b"First one. Second one.\nThird one? Still third. ");
        assert_eq!(
            as_strs(&s),
            vec!["First one", "Second one", "Third one? Still third"]
        );
    }

    #[test]
    fn test_newline_inside_sentence() {
        let s = sentences(b"a line\nbreak. next");
        assert_eq!(as_strs(&s), vec!["a line\nbreak", "next"]);
    }

    #[test]
    fn test_newline_then_space() {
        let s = sentences(b"1. 2. 3. 4.\n 5.");
        assert_eq!(as_strs(&s), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_empty() {
        assert!(sentences(b"").is_empty());
        assert!(sentences(b"  \n\t ").is_empty());
        assert!(sentences(b". . .").is_empty());
    }

    #[test]
    fn test_no_separator() {
        let s = sentences(b"  just one sentence without period  ");
        assert_eq!(as_strs(&s), vec!["just one sentence without period"]);
    }

    #[test]
    fn test_normalize_idempotent() {
        let texts: [&[u8]; 4] = [
            b"1. 2.\n3.\n\n4",
            b"a.\nb.\n.\nc",
            b"",
            b"no boundaries at all\n",
        ];
        for text in texts {
            let once = normalize(text);
            // normalize appends a space, so compare segmentations.
            let twice = normalize(&once);
            let split_once: Vec<Vec<u8>> = split_on(&once, SENTENCE_SEPARATOR)
                .map(strip)
                .filter(|s| !s.is_empty())
                .map(<[u8]>::to_vec)
                .collect();
            let split_twice: Vec<Vec<u8>> = split_on(&twice, SENTENCE_SEPARATOR)
                .map(strip)
                .filter(|s| !s.is_empty())
                .map(<[u8]>::to_vec)
                .collect();
            assert_eq!(split_once, split_twice);
            assert_eq!(split_once, sentences(text));
        }
    }
}
