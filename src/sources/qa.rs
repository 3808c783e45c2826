//! Q&A corpus reading.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// An answer to a [Question], with its own comment list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub comments: Vec<String>,
}

/// One question record: body, question-level comments and answers.
///
/// All fields are required. Deserialization fails on records that miss
/// one, which aborts the whole read (see [read_questions]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub body: String,
    pub comments: Vec<String>,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Questions without any comment or answer can't form a dialogue.
    pub fn has_replies(&self) -> bool {
        !self.comments.is_empty() || !self.answers.is_empty()
    }
}

/// Read a question corpus from a JSON array.
///
/// Some corpus dumps double-encode records (an array of JSON *strings*,
/// each holding a question object); both that shape and a plain array of
/// objects are accepted, element by element.
pub fn read_questions(src: &Path) -> Result<Vec<Question>, Error> {
    let file = File::open(src)?;
    let records: Vec<Value> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::malformed(src, format!("invalid question corpus: {}", e)))?;

    let mut questions = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let question = match record {
            Value::String(inner) => serde_json::from_str(&inner),
            other => serde_json::from_value(other),
        };
        questions.push(question.map_err(|e| {
            Error::malformed(src, format!("question record {}: {}", i, e))
        })?);
    }

    debug!("{:?}: {} questions", src, questions.len());
    Ok(questions)
}
