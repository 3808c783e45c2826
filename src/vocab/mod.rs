/*! Vocabulary building and indexing

[builder::VocabularyBuilder] accumulates tokens over whole corpora;
finalizing it yields a frozen [vocabulary::Vocabulary] that maps each token
to a stable index. Index 0 and 1 are reserved (end-of-sequence and
unknown-word markers), whatever the corpus contains.

The finalized mapping is the single source of truth: it is written to the
vocabulary file *and* reused as-is to index the corpus. It is never
regenerated in between, otherwise indices would desynchronize.
!*/
pub mod builder;
pub mod vocabulary;

pub use builder::VocabularyBuilder;
pub use vocabulary::{Vocabulary, EOS, EOS_INDEX, UNKNOWN, UNKNOWN_INDEX};
