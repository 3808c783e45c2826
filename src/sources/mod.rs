/*! Conversation sources

Input corpora the pipeline knows how to read:
- [qa]: Stack-Overflow-style question/answer/comment trees,
- [threads]: mailing-list threads (title -> ordered messages).

Both are static, local JSON files. A record missing an expected field is a
fatal error: downstream turn numbering depends on a complete traversal, so
there is no partial recovery.
!*/
pub mod qa;
pub mod threads;

pub use qa::{read_questions, Answer, Question};
pub use threads::{read_threads, ThreadCorpus};
