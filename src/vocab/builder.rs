//! Corpus-wide token accumulation.
use std::collections::{BTreeMap, BTreeSet};

use crate::cleaning::{clean_text, tokenize};
use crate::sources::{Question, ThreadCorpus};
use crate::vocab::Vocabulary;

/// Accumulates unique tokens and token frequencies over one or more
/// corpora, then freezes them into a [Vocabulary].
///
/// Sorted containers make index assignment lexicographic, so the
/// vocabulary file is reproducible across runs on the same input.
#[derive(Debug, Default, Clone)]
pub struct VocabularyBuilder {
    tokens: BTreeSet<String>,
    frequencies: BTreeMap<String, u64>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean, tokenize and accumulate one text field.
    pub fn add_text(&mut self, raw: &str) {
        for token in tokenize(&clean_text(raw)) {
            *self.frequencies.entry(token.clone()).or_insert(0) += 1;
            self.tokens.insert(token);
        }
    }

    /// Accumulate every text field of a question: body, comments,
    /// answers and answer comments. Answerless questions still count,
    /// their body feeds the vocabulary even though extraction skips them.
    pub fn add_question(&mut self, question: &Question) {
        self.add_text(&question.body);
        for comment in &question.comments {
            self.add_text(comment);
        }
        for answer in &question.answers {
            self.add_text(&answer.text);
            for comment in &answer.comments {
                self.add_text(comment);
            }
        }
    }

    /// Accumulate every message of every thread.
    pub fn add_threads(&mut self, threads: &ThreadCorpus) {
        for messages in threads.values() {
            for message in messages {
                self.add_text(message);
            }
        }
    }

    /// Fold another builder into this one (used to combine per-source
    /// vocabularies into the full one).
    pub fn merge(&mut self, other: VocabularyBuilder) {
        for (token, count) in other.frequencies {
            *self.frequencies.entry(token).or_insert(0) += count;
        }
        self.tokens.extend(other.tokens);
    }

    /// Number of occurrences of `token` seen so far.
    pub fn frequency(&self, token: &str) -> u64 {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    /// Number of unique tokens seen so far (reserved markers excluded).
    pub fn unique_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Freeze into an indexed vocabulary. Indices 0 and 1 go to the
    /// reserved markers, the rest follows lexicographic token order.
    pub fn finalize(self) -> Vocabulary {
        Vocabulary::from_tokens(self.tokens)
    }
}
