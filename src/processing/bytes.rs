//! Byte string helpers.
//!
//! News Crawl payloads are not guaranteed to be valid UTF-8,
//! so lines and sentences are handled as `&[u8]` throughout.

/// ASCII whitespace, including vertical tab.
#[inline]
fn is_space(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Removes leading and trailing ASCII whitespace.
pub fn strip(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|b| !is_space(b)).unwrap_or(s.len());
    let end = s.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    &s[start..end]
}

/// Splits `s` on every non-overlapping occurrence of `sep`, scanning left to right.
///
/// Like [str::split], `n` separators always yield `n + 1` (possibly empty) fragments.
pub fn split_on<'a>(s: &'a [u8], sep: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
    let mut rest = Some(s);
    std::iter::from_fn(move || {
        let cur = rest?;
        match find(cur, sep) {
            Some(idx) => {
                rest = Some(&cur[idx + sep.len()..]);
                Some(&cur[..idx])
            }
            None => {
                rest = None;
                Some(cur)
            }
        }
    })
}

/// Position of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
