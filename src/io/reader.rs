//! Turns file reading.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};

use crate::error::Error;

/// One line of the turns file, fields still untokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTurn {
    pub id: u64,
    pub response: String,
    pub context: String,
}

/// Iterator over `id\tresponse\tcontext` lines.
///
/// Yields an [Error::MalformedRecord] naming the file on the first line
/// that does not have the three tab-separated fields.
pub struct TurnReader<T> {
    path: PathBuf,
    lines: Lines<BufReader<T>>,
}

impl TurnReader<File> {
    pub fn new(src: &Path) -> Result<Self, Error> {
        let file = File::open(src)?;
        Ok(Self {
            path: src.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }
}

impl<T: Read> TurnReader<T> {
    fn parse(&self, line: &str) -> Result<RawTurn, Error> {
        let mut fields = line.splitn(3, '\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(response), Some(context)) => {
                let id = id.parse::<u64>().map_err(|_| {
                    Error::malformed(&self.path, format!("non-numeric turn id {:?}", id))
                })?;
                Ok(RawTurn {
                    id,
                    response: response.to_string(),
                    context: context.to_string(),
                })
            }
            _ => Err(Error::malformed(
                &self.path,
                format!("expected id\\tresponse\\tcontext, got {:?}", line),
            )),
        }
    }
}

impl<T: Read> Iterator for TurnReader<T> {
    type Item = Result<RawTurn, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(self.parse(&line)),
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}
