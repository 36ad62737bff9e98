//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "newsprint", about = "News Crawl passage generation tool.")]
/// Holds every command that is callable by the `newsprint` command.
pub enum Newsprint {
    #[structopt(about = "Extract, deduplicate and chunk archives into passages")]
    Passages(Passages),
    #[structopt(about = "Extract and deduplicate archives into documents")]
    Docs(Docs),
    #[structopt(about = "Build a deduplicated sorting key list from archives")]
    Keys(Keys),
}

#[derive(Debug, StructOpt)]
/// Passages command and parameters.
///
/// ```sh
/// newsprint-passages 0.1.0
/// Extract, deduplicate and chunk archives into passages
///
/// USAGE:
///     newsprint passages [FLAGS] [OPTIONS] <src> <keys> <dst>
///
/// FLAGS:
///     -h, --help       Prints help information
///         --no-date    do not prepend the publication date to passages
///
/// OPTIONS:
///     -p, --pattern <pattern>        archive glob pattern, when src is a folder [default: *.gz]
///     -s, --sentences <sentences>    number of sentences per passage [default: 6]
///
/// ARGS:
///     <src>     archive file, or folder containing archives
///     <keys>    gzipped list of sorting keys to keep
///     <dst>     destination file (.jsonl.gz)
/// ```
pub struct Passages {
    #[structopt(parse(from_os_str), help = "archive file, or folder containing archives")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "gzipped list of sorting keys to keep")]
    pub keys: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file (.jsonl.gz)")]
    pub dst: PathBuf,
    #[structopt(
        short = "p",
        long = "pattern",
        help = "archive glob pattern, when src is a folder",
        default_value = "*.gz"
    )]
    pub pattern: String,
    #[structopt(long = "no-date", help = "do not prepend the publication date to passages")]
    pub no_date: bool,
    #[structopt(
        short = "s",
        long = "sentences",
        help = "number of sentences per passage",
        default_value = "6"
    )]
    pub sentences: usize,
}

#[derive(Debug, StructOpt)]
/// Docs command and parameters.
pub struct Docs {
    #[structopt(parse(from_os_str), help = "archive file, or folder containing archives")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "gzipped list of sorting keys to keep")]
    pub keys: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file (.jsonl.gz)")]
    pub dst: PathBuf,
    #[structopt(
        short = "p",
        long = "pattern",
        help = "archive glob pattern, when src is a folder",
        default_value = "*.gz"
    )]
    pub pattern: String,
}

#[derive(Debug, StructOpt)]
/// Keys command and parameters.
pub struct Keys {
    #[structopt(parse(from_os_str), help = "archive file, or folder containing archives")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination key list (.gz)")]
    pub dst: PathBuf,
    #[structopt(
        short = "p",
        long = "pattern",
        help = "archive glob pattern, when src is a folder",
        default_value = "*.gz"
    )]
    pub pattern: String,
}
