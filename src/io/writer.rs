//! Corpus file writing.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::vocab::Vocabulary;

/// Append-mode sink for the turns file.
///
/// Append semantics let several extraction passes (one per source)
/// accumulate into one corpus. The id counter lives in the caller's
/// `RunState`, so appending to a file left over from a previous run
/// produces colliding ids: clearing the destination between runs is the
/// caller's contract.
pub struct TurnWriter {
    handle: BufWriter<File>,
}

impl TurnWriter {
    pub fn append(dst: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new().create(true).append(true).open(dst)?;
        Ok(Self {
            handle: BufWriter::new(file),
        })
    }

    /// Truncating variant for single-shot pipeline runs.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            handle: BufWriter::new(File::create(dst)?),
        })
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }
}

impl Write for TurnWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.handle.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.handle.flush()
    }
}

/// Writes the tokenized file and its parallel sentence file in lockstep.
///
/// Per line: `id\t`, one `{token} ` write per target token, `\t`, one per
/// source token, `\n`. The trailing space before each tab comes from the
/// per-token writes and is part of the file format.
pub struct ExamplePairWriter {
    tokenized: BufWriter<File>,
    sentences: BufWriter<File>,
}

impl ExamplePairWriter {
    pub fn create(tokenized_dst: &Path, sentences_dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            tokenized: BufWriter::new(File::create(tokenized_dst)?),
            sentences: BufWriter::new(File::create(sentences_dst)?),
        })
    }

    /// Write one example to both files. Out-of-vocabulary tokens get the
    /// unknown-word index, uniformly.
    pub fn write_example(
        &mut self,
        id: u64,
        target: &[String],
        source: &[String],
        vocab: &Vocabulary,
    ) -> Result<(), Error> {
        write!(self.tokenized, "{}\t", id)?;
        write!(self.sentences, "{}\t", id)?;

        for token in target {
            write!(self.tokenized, "{} ", vocab.lookup_or_unknown(token))?;
            write!(self.sentences, "{} ", token)?;
        }
        write!(self.tokenized, "\t")?;
        write!(self.sentences, "\t")?;

        for token in source {
            write!(self.tokenized, "{} ", vocab.lookup_or_unknown(token))?;
            write!(self.sentences, "{} ", token)?;
        }
        writeln!(self.tokenized)?;
        writeln!(self.sentences)?;

        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.tokenized.flush()?;
        self.sentences.flush()?;
        Ok(())
    }
}
