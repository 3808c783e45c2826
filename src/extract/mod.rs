/*! Dialogue turn extraction

Walks conversation structures and flattens them into ordered
`(id, response, context)` turns, the training examples of the corpus.

Two conversation shapes exist, held by [ConversationSource]:
- Q&A trees: question -> comments, question -> answers -> answer comments,
- threads: a flat ordered message list, first message opening the thread.

One [RunState] spans a whole extraction run: it owns the turn id counter
(starting at 1, +1 per emitted turn, shared across every conversation and
both shapes) and the output sink. Turns are appended to the sink as they
are produced; re-running over the same sink without clearing it first
concatenates runs with restarting ids, so callers clear state between runs.
!*/
use std::io::Write;

use log::debug;

use crate::cleaning::clean_text;
use crate::error::Error;
use crate::sources::{Question, ThreadCorpus};

/// A conversation to flatten, tagged by shape.
#[derive(Debug, Clone)]
pub enum ConversationSource {
    Qa(Question),
    Thread(Vec<String>),
}

/// State of one extraction run: id counter plus output sink.
///
/// Generic over [Write] so tests can extract into a buffer.
pub struct RunState<W: Write> {
    next_id: u64,
    sink: W,
    keep_empty: bool,
}

impl<W: Write> RunState<W> {
    pub fn new(sink: W) -> Self {
        Self {
            next_id: 1,
            sink,
            keep_empty: false,
        }
    }

    /// Keep thread messages whose cleaned text is empty as (valid,
    /// empty-response) turns instead of skipping them. Off by default.
    pub fn keep_empty(mut self, keep: bool) -> Self {
        self.keep_empty = keep;
        self
    }

    /// Id the next emitted turn will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Flatten one conversation, appending its turns to the sink.
    /// Returns the number of turns emitted.
    pub fn extract(&mut self, source: &ConversationSource) -> Result<u64, Error> {
        match source {
            ConversationSource::Qa(question) => self.extract_question(question),
            ConversationSource::Thread(messages) => self.extract_thread(messages),
        }
    }

    /// One `id\tresponse\tcontext` line per turn, response first.
    fn emit(&mut self, response: &str, context: &str) -> Result<(), Error> {
        writeln!(self.sink, "{}\t{}\t{}", self.next_id, response, context)?;
        self.next_id += 1;
        Ok(())
    }

    /// Q&A tree traversal. Three independent chains per question:
    /// question comments, answers, and per-answer comments, each
    /// accumulating its own context.
    fn extract_question(&mut self, question: &Question) -> Result<u64, Error> {
        if !question.has_replies() {
            debug!("question without replies, skipped");
            return Ok(0);
        }

        let body = clean_text(&question.body);
        let mut emitted = 0;

        // (Q, C_1), (Q+C_1, C_2), ...
        let mut prior_comments = String::new();
        for comment in &question.comments {
            let comment = clean_text(comment);
            self.emit(&comment, &format!("{}{}", body, prior_comments))?;
            prior_comments.push(' ');
            prior_comments.push_str(&comment);
            emitted += 1;
        }

        // (Q, A_1), (Q+A_1, A_2), ...
        let mut prior_answers = String::new();
        for answer in &question.answers {
            let text = clean_text(&answer.text);
            self.emit(&text, &format!("{}{}", body, prior_answers))?;
            prior_answers.push(' ');
            prior_answers.push_str(&text);
            emitted += 1;

            // (A_j, C_1j), (A_j+C_1j, C_2j), ... scoped to this answer
            let mut prior_answer_comments = String::new();
            for comment in &answer.comments {
                let comment = clean_text(comment);
                self.emit(&comment, &format!("{}{}", text, prior_answer_comments))?;
                prior_answer_comments.push(' ');
                prior_answer_comments.push_str(&comment);
                emitted += 1;
            }
        }

        Ok(emitted)
    }

    /// Thread traversal: message 0 opens the context, every later
    /// message responds to the opening plus all prior replies.
    fn extract_thread(&mut self, messages: &[String]) -> Result<u64, Error> {
        // a lone message has nothing responding to it
        if messages.len() <= 1 {
            debug!("thread without replies, skipped");
            return Ok(0);
        }

        let opening = clean_text(&messages[0]);
        let mut prior_replies = String::new();
        let mut emitted = 0;

        for message in &messages[1..] {
            let message = clean_text(message);
            if message.is_empty() && !self.keep_empty {
                continue;
            }
            self.emit(&message, &format!("{}{}", opening, prior_replies))?;
            prior_replies.push(' ');
            prior_replies.push_str(&message);
            emitted += 1;
        }

        Ok(emitted)
    }

    /// Extract a full thread corpus, thread by thread in title order.
    pub fn extract_threads(&mut self, threads: &ThreadCorpus) -> Result<u64, Error> {
        let mut emitted = 0;
        for messages in threads.values() {
            emitted += self.extract_thread(messages)?;
        }
        Ok(emitted)
    }

    /// Extract a full question corpus in record order.
    pub fn extract_questions(&mut self, questions: &[Question]) -> Result<u64, Error> {
        let mut emitted = 0;
        for question in questions {
            emitted += self.extract_question(question)?;
        }
        Ok(emitted)
    }
}
