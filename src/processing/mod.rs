/*! Corpus processing stages

Everything that runs after extraction:
- [tokenize]: turns file + frozen vocabulary -> tokenized/sentence file pair,
- [split]: tokenized/sentence pair -> train/val/test file pairs,
- [stats]: source corpora -> count reports.
!*/
pub mod split;
pub mod stats;
pub mod tokenize;

pub use split::{split_corpus, SplitRatios};
pub use tokenize::tokenize_corpus;
