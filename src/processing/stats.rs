//! Source corpus statistics.
//!
//! Count reports over the raw sources: how many questions, answers and
//! comments there are, and how replies distribute over conversations.
//! Purely informative, nothing downstream depends on this.
use std::collections::BTreeMap;
use std::fmt;

use crate::sources::{Question, ThreadCorpus};

/// Counts over a Q&A corpus.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QaStats {
    pub questions: usize,
    pub answers: usize,
    /// Question-level and answer-level comments combined.
    pub comments: usize,
    /// answers-per-question -> number of questions with that many answers
    pub answers_histogram: BTreeMap<usize, usize>,
    /// comments-per-question -> number of questions with that many comments
    pub comments_histogram: BTreeMap<usize, usize>,
}

impl QaStats {
    pub fn collect(questions: &[Question]) -> Self {
        let mut stats = Self {
            questions: questions.len(),
            ..Self::default()
        };

        for question in questions {
            let answers = question.answers.len();
            let comments = question.comments.len()
                + question
                    .answers
                    .iter()
                    .map(|a| a.comments.len())
                    .sum::<usize>();

            stats.answers += answers;
            stats.comments += comments;
            *stats.answers_histogram.entry(answers).or_insert(0) += 1;
            *stats.comments_histogram.entry(comments).or_insert(0) += 1;
        }

        stats
    }
}

impl fmt::Display for QaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "questions: {}, answers: {}, comments: {}",
            self.questions, self.answers, self.comments
        )?;
        writeln!(f, "answers per question: {:?}", self.answers_histogram)?;
        write!(f, "comments per question: {:?}", self.comments_histogram)
    }
}

/// Counts over a thread corpus.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ThreadStats {
    pub threads: usize,
    /// replies-per-thread -> number of threads with that many replies
    /// (the opening message is not a reply)
    pub replies_histogram: BTreeMap<usize, usize>,
}

impl ThreadStats {
    pub fn collect(threads: &ThreadCorpus) -> Self {
        let mut stats = Self {
            threads: threads.len(),
            ..Self::default()
        };

        for messages in threads.values() {
            let replies = messages.len().saturating_sub(1);
            *stats.replies_histogram.entry(replies).or_insert(0) += 1;
        }

        stats
    }
}

impl fmt::Display for ThreadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "threads: {}", self.threads)?;
        write!(f, "replies per thread: {:?}", self.replies_histogram)
    }
}
