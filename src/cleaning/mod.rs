/*! Text cleaning utilities

Two stages, always applied in this order:
- [normalize::clean_text] strips markup markers and control characters from raw source text.
- [tokenize::tokenize] cuts cleaned text into lowercased tokens.
!*/
mod normalize;
mod tokenize;

pub use normalize::clean_text;
pub use tokenize::{token_set, tokenize};
