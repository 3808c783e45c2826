//! Frozen token -> index mapping.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// End-of-sequence marker, always index 0.
pub const EOS: &str = "eos";
/// Unknown-word marker, always index 1.
pub const UNKNOWN: &str = "<unk>";

pub const EOS_INDEX: usize = 0;
pub const UNKNOWN_INDEX: usize = 1;

/// Immutable token <-> index table with two reserved entries.
///
/// Built once per corpus version (see [super::VocabularyBuilder]) and
/// treated as read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vocabulary {
    word_to_idx: HashMap<String, usize>,
    words: Vec<String>,
}

impl Vocabulary {
    /// Build from corpus tokens, in iteration order, after the two
    /// reserved entries. Tokens spelled like a reserved marker (or
    /// repeated) are already bound and get no fresh index.
    pub(crate) fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut words = vec![EOS.to_string(), UNKNOWN.to_string()];
        let mut word_to_idx = HashMap::new();
        word_to_idx.insert(EOS.to_string(), EOS_INDEX);
        word_to_idx.insert(UNKNOWN.to_string(), UNKNOWN_INDEX);

        for token in tokens {
            if word_to_idx.contains_key(&token) {
                continue;
            }
            word_to_idx.insert(token.clone(), words.len());
            words.push(token);
        }

        Self { word_to_idx, words }
    }

    /// Index of `token`, if known.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.word_to_idx.get(token).copied()
    }

    /// Index of `token`, falling back on [UNKNOWN_INDEX] for
    /// out-of-vocabulary tokens. This is the only lookup the corpus
    /// indexing step is allowed to use.
    pub fn lookup_or_unknown(&self, token: &str) -> usize {
        self.get(token).unwrap_or(UNKNOWN_INDEX)
    }

    /// Token bound to `index`, if any.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Number of entries, reserved markers included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        // two reserved entries are always present
        self.words.len() <= 2
    }

    /// Write the human-readable vocabulary file: one `index\ttoken` line
    /// per entry, starting with the two reserved ones.
    pub fn write_table(&self, dst: &Path) -> Result<(), Error> {
        let mut out = BufWriter::new(File::create(dst)?);
        for (idx, token) in self.words.iter().enumerate() {
            writeln!(out, "{}\t{}", idx, token)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Persist the mapping as JSON for later reuse by the indexing step.
    pub fn save(&self, dst: &Path) -> Result<(), Error> {
        let out = BufWriter::new(File::create(dst)?);
        serde_json::to_writer(out, self)?;
        Ok(())
    }

    /// Reload a mapping persisted with [Vocabulary::save].
    pub fn load(src: &Path) -> Result<Self, Error> {
        let file = BufReader::new(File::open(src)?);
        Ok(serde_json::from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn reserved_indices() {
        let v = Vocabulary::from_tokens(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(v.get(EOS), Some(EOS_INDEX));
        assert_eq!(v.get(UNKNOWN), Some(UNKNOWN_INDEX));
        assert_eq!(v.get("b"), Some(2));
        assert_eq!(v.get("a"), Some(3));
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn reserved_spelling_in_corpus_keeps_index_zero() {
        let v = Vocabulary::from_tokens(vec!["eos".to_string(), "x".to_string()]);
        assert_eq!(v.get("eos"), Some(EOS_INDEX));
        assert_eq!(v.get("x"), Some(2));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn unknown_lookup() {
        let v = Vocabulary::from_tokens(vec!["known".to_string()]);
        assert_eq!(v.lookup_or_unknown("known"), 2);
        assert_eq!(v.lookup_or_unknown("never seen"), UNKNOWN_INDEX);
    }

    #[test]
    fn index_roundtrip() {
        let v = Vocabulary::from_tokens(vec!["a".to_string(), "b".to_string()]);
        for token in ["a", "b", EOS, UNKNOWN] {
            let idx = v.get(token).unwrap();
            assert_eq!(v.token(idx), Some(token));
        }
    }

    #[test]
    fn table_format() {
        let v = Vocabulary::from_tokens(vec!["hello".to_string()]);
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("vocab.txt");
        v.write_table(&dst).unwrap();

        let content = fs::read_to_string(&dst).unwrap();
        assert_eq!(content, "0\teos\n1\t<unk>\n2\thello\n");
    }

    #[test]
    fn save_load_roundtrip() {
        let v = Vocabulary::from_tokens(vec!["a".to_string(), "b".to_string()]);
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("word_to_idx.json");
        v.save(&dst).unwrap();
        assert_eq!(Vocabulary::load(&dst).unwrap(), v);
    }
}
