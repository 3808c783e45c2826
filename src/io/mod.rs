/*! Corpus file I/O

Readers and writers for the intermediate corpus files:
- the turns file (`id\tresponse\tcontext` lines) written during extraction
  and read back by the indexing step,
- the tokenized/sentence file pair written by the indexing step.

Writers flush on every exit path; later pipeline stages assume earlier
output files are complete. Aborted runs may leave partial files behind, so
a re-run should start from a clean destination.
!*/
pub mod reader;
pub mod writer;

pub use reader::{RawTurn, TurnReader};
pub use writer::{ExamplePairWriter, TurnWriter};
