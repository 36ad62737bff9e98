/*! # newsprint

Deduplicated, sentence-aligned passages from the News Crawl corpus.

```no_run
use std::fs::File;

use newsprint::pipelines::newscrawl::{chunk, extract};

# fn main() -> Result<(), newsprint::error::Error> {
let archives = vec![File::open("news-docs.2019.en.filtered.gz")?];
let keys = File::open("sorting_keys.txt.gz")?;

let docs = extract(archives, keys)?;
for doc in docs {
    for passage in chunk(vec![doc?], true) {
        println!("{}", passage.id());
    }
}
# Ok(())
# }
```
!*/
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod sources;

#[cfg(test)]
mod test_utils;
