//! Corpus indexing.
//!
//! Streams the turns file and writes two line-aligned outputs: token
//! indices for training, raw lowercase tokens for inspection. The
//! vocabulary must already be finalized; it is taken as an input and
//! never regenerated here, so file and indices cannot desynchronize.
use std::path::Path;

use log::info;

use crate::cleaning::tokenize;
use crate::error::Error;
use crate::io::{ExamplePairWriter, TurnReader};
use crate::vocab::Vocabulary;

/// Tokenize and index every turn of `src`. Returns the number of
/// examples written.
pub fn tokenize_corpus(
    src: &Path,
    vocab: &Vocabulary,
    tokenized_dst: &Path,
    sentences_dst: &Path,
) -> Result<u64, Error> {
    let reader = TurnReader::new(src)?;
    let mut writer = ExamplePairWriter::create(tokenized_dst, sentences_dst)?;

    let mut examples = 0;
    for turn in reader {
        let turn = turn?;
        let target = tokenize(&turn.response);
        let source = tokenize(&turn.context);
        writer.write_example(turn.id, &target, &source, vocab)?;
        examples += 1;
    }
    writer.flush()?;

    info!("indexed {} examples from {:?}", examples, src);
    Ok(examples)
}
