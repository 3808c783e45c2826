//! # Convogen
//!
//! Convogen builds seq2seq dialogue training corpora out of
//! Stack-Overflow-style Q&A dumps and mailing-list thread dumps.
//!
//! The pipeline flattens nested conversations into (context, response)
//! turns, builds a word-level vocabulary with reserved end-of-sequence
//! and unknown-word entries, indexes the corpus against it and cuts
//! train/validation/test splits.
//!
//! ## Getting started
//!
//! ```sh
//! convogen 0.1.0
//! dialogue corpus generation tool.
//!
//! USAGE:
//!     convogen <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     extract     Extract dialogue turns from conversation sources
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Run the whole pipeline
//!     split       Split a tokenized corpus into train/val/test
//!     stats       Report counts over conversation sources
//!     tokenize    Index a turns file with a persisted vocabulary mapping
//!     vocab       Build vocabulary files from conversation sources
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use convogen::error::Error;
use convogen::extract::RunState;
use convogen::io::TurnWriter;
use convogen::pipelines::{DialogueCorpus, Pipeline};
use convogen::processing::stats::{QaStats, ThreadStats};
use convogen::processing::{split_corpus, tokenize_corpus, SplitRatios};
use convogen::sources::{read_questions, read_threads};
use convogen::vocab::{Vocabulary, VocabularyBuilder};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Convogen::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Convogen::Extract(e) => {
            if e.qa.is_none() && e.threads.is_none() {
                return Err(Error::Custom("no source given".to_string()));
            }
            let mut state =
                RunState::new(TurnWriter::append(&e.dst)?).keep_empty(e.keep_empty);
            let mut turns = 0;
            if let Some(qa) = &e.qa {
                turns += state.extract_questions(&read_questions(qa)?)?;
            }
            if let Some(threads) = &e.threads {
                turns += state.extract_threads(&read_threads(threads)?)?;
            }
            state.into_inner().flush()?;
            info!("extracted {} turns to {:?}", turns, e.dst);
        }

        cli::Convogen::Vocab(v) => {
            if v.qa.is_none() && v.threads.is_none() {
                return Err(Error::Custom("no source given".to_string()));
            }
            std::fs::create_dir_all(&v.dst)?;
            let path = |suffix: &str| v.dst.join(format!("{}_{}", v.prefix, suffix));

            let mut combined = VocabularyBuilder::new();
            if let Some(qa) = &v.qa {
                let mut builder = VocabularyBuilder::new();
                for question in &read_questions(qa)? {
                    builder.add_question(question);
                }
                builder.clone().finalize().write_table(&path("qa_vocab.txt"))?;
                combined.merge(builder);
            }
            if let Some(threads) = &v.threads {
                let mut builder = VocabularyBuilder::new();
                builder.add_threads(&read_threads(threads)?);
                builder
                    .clone()
                    .finalize()
                    .write_table(&path("threads_vocab.txt"))?;
                combined.merge(builder);
            }

            let vocabulary = combined.finalize();
            vocabulary.write_table(&path("vocab.txt"))?;
            vocabulary.save(&path("word_to_idx.json"))?;
            info!("wrote vocabulary ({} entries) to {:?}", vocabulary.len(), v.dst);
        }

        cli::Convogen::Tokenize(t) => {
            let vocabulary = Vocabulary::load(&t.mapping)?;
            tokenize_corpus(&t.src, &vocabulary, &t.tokenized_dst, &t.sentences_dst)?;
        }

        cli::Convogen::Split(s) => {
            let ratios = SplitRatios::new(s.train, s.val, s.test)?;
            split_corpus(&s.dir, &s.prefix, &ratios, s.seed)?;
        }

        cli::Convogen::Stats(s) => {
            if let Some(qa) = &s.qa {
                println!("{}", QaStats::collect(&read_questions(qa)?));
            }
            if let Some(threads) = &s.threads {
                println!("{}", ThreadStats::collect(&read_threads(threads)?));
            }
        }

        cli::Convogen::Pipeline(p) => {
            let ratios = SplitRatios::new(p.train, p.val, p.test)?;
            let pipeline = DialogueCorpus::new(
                p.qa, p.threads, p.dst, p.prefix, ratios, p.seed, p.keep_empty,
            );
            let summary = pipeline.run()?;
            info!("pipeline done: {:?}", summary);
        }
    };
    Ok(())
}
