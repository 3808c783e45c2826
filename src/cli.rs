//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "convogen", about = "dialogue corpus generation tool.")]
/// Holds every command that is callable by the `convogen` command.
pub enum Convogen {
    #[structopt(about = "Extract dialogue turns from conversation sources")]
    Extract(Extract),
    #[structopt(about = "Build vocabulary files from conversation sources")]
    Vocab(Vocab),
    #[structopt(about = "Index a turns file with a persisted vocabulary mapping")]
    Tokenize(Tokenize),
    #[structopt(about = "Split a tokenized corpus into train/val/test")]
    Split(Split),
    #[structopt(about = "Report counts over conversation sources")]
    Stats(Stats),
    #[structopt(about = "Run the whole pipeline")]
    Pipeline(PipelineCmd),
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
///
/// Appends to `dst`, so several invocations over different sources
/// accumulate into one corpus. Turn ids restart at 1 per invocation:
/// clear `dst` between unrelated runs.
pub struct Extract {
    #[structopt(parse(from_os_str), help = "destination turns file (appended to)")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), long = "qa", help = "Q&A corpus (json)")]
    pub qa: Option<PathBuf>,
    #[structopt(parse(from_os_str), long = "threads", help = "thread corpus (json)")]
    pub threads: Option<PathBuf>,
    #[structopt(
        long = "keep-empty",
        help = "keep empty thread messages as empty-response turns"
    )]
    pub keep_empty: bool,
}

#[derive(Debug, StructOpt)]
/// Vocab command and parameters.
pub struct Vocab {
    #[structopt(parse(from_os_str), help = "destination directory")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), long = "qa", help = "Q&A corpus (json)")]
    pub qa: Option<PathBuf>,
    #[structopt(parse(from_os_str), long = "threads", help = "thread corpus (json)")]
    pub threads: Option<PathBuf>,
    #[structopt(
        long = "prefix",
        default_value = "data",
        help = "output file name prefix"
    )]
    pub prefix: String,
}

#[derive(Debug, StructOpt)]
/// Tokenize command and parameters.
pub struct Tokenize {
    #[structopt(parse(from_os_str), help = "source turns file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "persisted word_to_idx mapping (json)")]
    pub mapping: PathBuf,
    #[structopt(parse(from_os_str), help = "destination tokenized file")]
    pub tokenized_dst: PathBuf,
    #[structopt(parse(from_os_str), help = "destination parallel sentence file")]
    pub sentences_dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
pub struct Split {
    #[structopt(parse(from_os_str), help = "corpus directory")]
    pub dir: PathBuf,
    #[structopt(help = "corpus file name prefix", default_value = "data")]
    pub prefix: String,
    #[structopt(long = "train", default_value = "0.8", help = "train proportion")]
    pub train: f64,
    #[structopt(long = "val", default_value = "0.1", help = "validation proportion")]
    pub val: f64,
    #[structopt(long = "test", default_value = "0.1", help = "test proportion")]
    pub test: f64,
    #[structopt(long = "seed", help = "seed for a reproducible split")]
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(parse(from_os_str), long = "qa", help = "Q&A corpus (json)")]
    pub qa: Option<PathBuf>,
    #[structopt(parse(from_os_str), long = "threads", help = "thread corpus (json)")]
    pub threads: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct PipelineCmd {
    #[structopt(parse(from_os_str), help = "destination directory")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), long = "qa", help = "Q&A corpus (json)")]
    pub qa: Option<PathBuf>,
    #[structopt(parse(from_os_str), long = "threads", help = "thread corpus (json)")]
    pub threads: Option<PathBuf>,
    #[structopt(
        long = "prefix",
        default_value = "data",
        help = "output file name prefix"
    )]
    pub prefix: String,
    #[structopt(long = "train", default_value = "0.8", help = "train proportion")]
    pub train: f64,
    #[structopt(long = "val", default_value = "0.1", help = "validation proportion")]
    pub val: f64,
    #[structopt(long = "test", default_value = "0.1", help = "test proportion")]
    pub test: f64,
    #[structopt(long = "seed", help = "seed for a reproducible split")]
    pub seed: Option<u64>,
    #[structopt(
        long = "keep-empty",
        help = "keep empty thread messages as empty-response turns"
    )]
    pub keep_empty: bool,
}
