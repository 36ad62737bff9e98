//! # newsprint
//!
//! Turns the document-split News Crawl archives into deduplicated,
//! sentence-aligned passages for retrieval.
//!
//! ## Getting started
//!
//! ```sh
//! newsprint 0.1.0
//! News Crawl passage generation tool.
//!
//! USAGE:
//!     newsprint <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     docs        Extract and deduplicate archives into documents
//!     help        Prints this message or the help of the given subcommand(s)
//!     keys        Build a deduplicated sorting key list from archives
//!     passages    Extract, deduplicate and chunk archives into passages
//! ```
//!
//! Logging is configured with `RUST_LOG` (eg. `RUST_LOG=info`).
use newsprint::error::Error;
use newsprint::pipelines::{NewsCrawlDocs, NewsCrawlPassages, Pipeline};
use newsprint::processing::keys::build_key_list;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Newsprint::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Newsprint::Passages(p) => {
            let pipeline = NewsCrawlPassages::new(p.src, p.keys, p.dst)
                .with_pattern(p.pattern)
                .with_prepend_date(!p.no_date)
                .with_passage_size(p.sentences);
            pipeline.run()?;
        }
        cli::Newsprint::Docs(d) => {
            let pipeline = NewsCrawlDocs::new(d.src, d.keys, d.dst).with_pattern(d.pattern);
            pipeline.run()?;
        }
        cli::Newsprint::Keys(k) => {
            build_key_list(&k.src, &k.pattern, &k.dst)?;
        }
    };
    Ok(())
}
