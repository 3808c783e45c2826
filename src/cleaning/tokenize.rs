//! Word-level tokenization.
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One token per match: a run of word characters, or a single
    /// punctuation character from the closed set below. Anything else
    /// (emoji, exotic symbols) is dropped.
    static ref TOKEN: Regex =
        Regex::new(r#"<|>|[\w]+|,|\?|\.|\(|\)|\\|"|/|;|\#|&|\$|%|@|\{|\}|\+|-|:"#).unwrap();
}

/// Cut cleaned text into an ordered list of lowercased tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Like [tokenize], but also returns the set of unique tokens.
///
/// Both views are needed downstream: the set feeds vocabulary building,
/// the list feeds corpus indexing.
pub fn token_set(text: &str) -> (HashSet<String>, Vec<String>) {
    let tokens = tokenize(text);
    let set = tokens.iter().cloned().collect();
    (set, tokens)
}
