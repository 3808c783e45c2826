//! Full dialogue corpus generation pipeline.
//!
//! # Processing
//! 1. Read the configured sources (Q&A corpus, thread corpus, or both).
//! 1. Build per-source vocabularies plus the combined one; write the
//!    vocabulary tables and persist the combined mapping as JSON.
//! 1. Extract dialogue turns from every conversation into the turns file.
//! 1. Index the turns file with the combined vocabulary into the
//!    tokenized/sentence file pair.
//! 1. Split the pair into train/val/test file pairs.
//!
//! Each stage only starts once the previous stage's files are flushed.
//! The destination directory is expected to be clean: outputs from an
//! earlier run are overwritten, not appended to.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::extract::RunState;
use crate::io::TurnWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{split_corpus, tokenize_corpus, SplitRatios};
use crate::sources::{read_questions, read_threads};
use crate::vocab::VocabularyBuilder;

/// What a pipeline run produced, for logging and tests.
#[derive(Debug, PartialEq, Eq)]
pub struct PipelineSummary {
    pub turns: u64,
    pub vocabulary_size: usize,
    pub train: usize,
    pub val: usize,
    pub test: usize,
}

pub struct DialogueCorpus {
    qa_src: Option<PathBuf>,
    thread_src: Option<PathBuf>,
    dst: PathBuf,
    prefix: String,
    ratios: SplitRatios,
    seed: Option<u64>,
    keep_empty: bool,
}

impl DialogueCorpus {
    pub fn new(
        qa_src: Option<PathBuf>,
        thread_src: Option<PathBuf>,
        dst: PathBuf,
        prefix: String,
        ratios: SplitRatios,
        seed: Option<u64>,
        keep_empty: bool,
    ) -> Self {
        Self {
            qa_src,
            thread_src,
            dst,
            prefix,
            ratios,
            seed,
            keep_empty,
        }
    }

    fn path(&self, suffix: &str) -> PathBuf {
        self.dst.join(format!("{}_{}", self.prefix, suffix))
    }
}

impl Pipeline<PipelineSummary> for DialogueCorpus {
    fn run(&self) -> Result<PipelineSummary, Error> {
        if self.qa_src.is_none() && self.thread_src.is_none() {
            return Err(Error::Custom(
                "no source given: need a Q&A corpus, a thread corpus, or both".to_string(),
            ));
        }
        std::fs::create_dir_all(&self.dst)?;

        let questions = match &self.qa_src {
            Some(src) => Some(read_questions(src)?),
            None => None,
        };
        let threads = match &self.thread_src {
            Some(src) => Some(read_threads(src)?),
            None => None,
        };

        // vocabularies: one per source, plus the combined one used for
        // indexing. The combined mapping is finalized exactly once and
        // reused below.
        let mut combined = VocabularyBuilder::new();
        if let Some(questions) = &questions {
            let mut builder = VocabularyBuilder::new();
            for question in questions {
                builder.add_question(question);
            }
            info!("qa vocabulary: {} tokens", builder.unique_tokens());
            builder
                .clone()
                .finalize()
                .write_table(&self.path("qa_vocab.txt"))?;
            combined.merge(builder);
        }
        if let Some(threads) = &threads {
            let mut builder = VocabularyBuilder::new();
            builder.add_threads(threads);
            info!("thread vocabulary: {} tokens", builder.unique_tokens());
            builder
                .clone()
                .finalize()
                .write_table(&self.path("threads_vocab.txt"))?;
            combined.merge(builder);
        }

        let vocabulary = combined.finalize();
        info!("combined vocabulary: {} entries", vocabulary.len());
        vocabulary.write_table(&self.path("vocab.txt"))?;
        vocabulary.save(&self.path("word_to_idx.json"))?;

        // extraction: one id counter across both sources
        let turns_path = self.path("sentences.txt");
        let mut state =
            RunState::new(TurnWriter::create(&turns_path)?).keep_empty(self.keep_empty);
        let mut turns = 0;
        if let Some(questions) = &questions {
            turns += state.extract_questions(questions)?;
        }
        if let Some(threads) = &threads {
            turns += state.extract_threads(threads)?;
        }
        state.into_inner().flush()?;
        info!("extracted {} turns to {:?}", turns, turns_path);

        tokenize_corpus(
            &turns_path,
            &vocabulary,
            &self.path("tok.txt"),
            &self.path("sent.txt"),
        )?;

        let (train, val, test) = split_corpus(&self.dst, &self.prefix, &self.ratios, self.seed)?;

        Ok(PipelineSummary {
            turns,
            vocabulary_size: vocabulary.len(),
            train,
            val,
            test,
        })
    }
}
