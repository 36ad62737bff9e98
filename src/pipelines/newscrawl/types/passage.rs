use serde::Serialize;

use super::text::to_utf8_lossy;

/// A chunk of consecutive sentences of a [super::Doc].
///
/// `id` is the doc sorting key, followed by `_` and the passage position in the doc.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(into = "PassageSer")]
pub struct Passage {
    id: String,
    text: Vec<u8>,
}

#[derive(Serialize)]
struct PassageSer {
    id: String,
    text: String,
}

impl From<Passage> for PassageSer {
    fn from(p: Passage) -> Self {
        Self {
            text: to_utf8_lossy(&p.id, p.text),
            id: p.id,
        }
    }
}

impl Passage {
    pub fn new(id: String, text: Vec<u8>) -> Self {
        Self { id, text }
    }

    /// Builds the passage id from a doc sorting key and a passage index.
    pub fn id_for(sorting_key: &str, passage_idx: usize) -> String {
        format!("{}_{}", sorting_key, passage_idx)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }
}
