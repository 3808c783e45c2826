//! Mailing-list thread corpus reading.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Thread title -> ordered list of messages (first message opens the thread).
///
/// A [BTreeMap] keeps thread iteration order stable across runs, so turn
/// ids assigned while walking the corpus are reproducible.
pub type ThreadCorpus = BTreeMap<String, Vec<String>>;

/// Read a thread corpus from a JSON object of `title: [messages]`.
pub fn read_threads(src: &Path) -> Result<ThreadCorpus, Error> {
    let file = File::open(src)?;
    let threads: ThreadCorpus = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::malformed(src, format!("invalid thread corpus: {}", e)))?;

    debug!("{:?}: {} threads", src, threads.len());
    Ok(threads)
}
