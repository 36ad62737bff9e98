use log::warn;

/// Converts record bytes into a string for serialization.
///
/// Invalid UTF-8 sequences are replaced by `U+FFFD`, and a warning naming the record is logged.
pub(super) fn to_utf8_lossy(record_id: &str, text: Vec<u8>) -> String {
    match String::from_utf8(text) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "{:?}: invalid UTF-8 at byte {}, replacing invalid sequences",
                record_id,
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
