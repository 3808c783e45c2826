//! Train/validation/test splitting.
//!
//! One random permutation of the example positions drives the whole
//! split; the permutation is cut into three contiguous slices whose
//! sizes follow the configured proportions. The tokenized file and the
//! parallel sentence file are streamed in lockstep (paired by line
//! position, not by turn id) and routed line-pair by line-pair.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::Error;

/// Split proportions. Must sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct SplitRatios {
    train: f64,
    val: f64,
    test: f64,
}

impl SplitRatios {
    pub fn new(train: f64, val: f64, test: f64) -> Result<Self, Error> {
        let sum = train + val + test;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(Error::Custom(format!(
                "split proportions must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(Self { train, val, test })
    }

    /// Cut points into a permutation of length `n`.
    ///
    /// Rounding leftovers land in the last (test) slice; that tie-break
    /// is deliberate, not an error.
    fn cuts(&self, n: usize) -> (usize, usize) {
        let first = (n as f64 * self.train).round() as usize;
        let second = (n as f64 * (self.train + self.val)).round() as usize;
        (first.min(n), second.min(n).max(first.min(n)))
    }
}

impl Default for SplitRatios {
    /// 80/10/10.
    fn default() -> Self {
        Self {
            train: 0.8,
            val: 0.1,
            test: 0.1,
        }
    }
}

/// Which slice each zero-based line position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Subset {
    Train,
    Val,
    Test,
}

/// Materialized split: position -> subset, for every position in 0..n.
struct Assignment {
    subsets: Vec<Subset>,
}

impl Assignment {
    /// Shuffle 0..n (seeded when reproducibility matters) and cut.
    fn new(n: usize, ratios: &SplitRatios, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut permutation: Vec<usize> = (0..n).collect();
        permutation.shuffle(&mut rng);

        let (first, second) = ratios.cuts(n);
        let mut subsets = vec![Subset::Test; n];
        for &position in &permutation[..first] {
            subsets[position] = Subset::Train;
        }
        for &position in &permutation[first..second] {
            subsets[position] = Subset::Val;
        }
        Self { subsets }
    }

    fn subset(&self, position: usize) -> Subset {
        self.subsets[position]
    }

    fn sizes(&self) -> (usize, usize, usize) {
        let counts = self.subsets.iter().counts();
        (
            counts.get(&Subset::Train).copied().unwrap_or(0),
            counts.get(&Subset::Val).copied().unwrap_or(0),
            counts.get(&Subset::Test).copied().unwrap_or(0),
        )
    }
}

/// The six output files of a split, named
/// `{prefix}_{train,val,test}_{tok,sent}.txt`.
struct SplitFiles {
    train: (BufWriter<File>, BufWriter<File>),
    val: (BufWriter<File>, BufWriter<File>),
    test: (BufWriter<File>, BufWriter<File>),
}

impl SplitFiles {
    fn create(dir: &Path, prefix: &str) -> Result<Self, Error> {
        let open = |subset: &str| -> Result<(BufWriter<File>, BufWriter<File>), Error> {
            let tok = File::create(dir.join(format!("{}_{}_tok.txt", prefix, subset)))?;
            let sent = File::create(dir.join(format!("{}_{}_sent.txt", prefix, subset)))?;
            Ok((BufWriter::new(tok), BufWriter::new(sent)))
        };
        Ok(Self {
            train: open("train")?,
            val: open("val")?,
            test: open("test")?,
        })
    }

    fn pair_mut(&mut self, subset: Subset) -> &mut (BufWriter<File>, BufWriter<File>) {
        match subset {
            Subset::Train => &mut self.train,
            Subset::Val => &mut self.val,
            Subset::Test => &mut self.test,
        }
    }

    fn flush(&mut self) -> Result<(), Error> {
        for pair in [&mut self.train, &mut self.val, &mut self.test] {
            pair.0.flush()?;
            pair.1.flush()?;
        }
        Ok(())
    }
}

fn count_lines(path: &Path) -> Result<usize, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut n = 0;
    for line in reader.lines() {
        line?;
        n += 1;
    }
    Ok(n)
}

/// Split the corpus under `dir` with the given `prefix`.
///
/// Reads `{prefix}_tok.txt` and `{prefix}_sent.txt`, routes each aligned
/// line pair into exactly one of the train/val/test file pairs, and
/// returns the (train, val, test) example counts, which always sum to
/// the input line count.
pub fn split_corpus(
    dir: &Path,
    prefix: &str,
    ratios: &SplitRatios,
    seed: Option<u64>,
) -> Result<(usize, usize, usize), Error> {
    let tokenized_path = dir.join(format!("{}_tok.txt", prefix));
    let sentences_path = dir.join(format!("{}_sent.txt", prefix));

    let total = count_lines(&tokenized_path)?;
    let assignment = Assignment::new(total, ratios, seed);
    debug!("splitting {} examples with {:?}", total, ratios);

    let mut files = SplitFiles::create(dir, prefix)?;

    let tokenized = BufReader::new(File::open(&tokenized_path)?).lines();
    let mut sentences = BufReader::new(File::open(&sentences_path)?).lines();

    for (position, tokenized_line) in tokenized.enumerate() {
        let tokenized_line = tokenized_line?;
        let sentence_line = match sentences.next() {
            Some(line) => line?,
            None => {
                return Err(misaligned(&sentences_path, position));
            }
        };

        let (tok_file, sent_file) = files.pair_mut(assignment.subset(position));
        writeln!(tok_file, "{}", tokenized_line)?;
        writeln!(sent_file, "{}", sentence_line)?;
    }
    if sentences.next().is_some() {
        return Err(misaligned(&sentences_path, total));
    }
    files.flush()?;

    let (train, val, test) = assignment.sizes();
    info!(
        "split {}: {} train / {} val / {} test",
        prefix, train, val, test
    );
    Ok((train, val, test))
}

fn misaligned(sentences_path: &Path, position: usize) -> Error {
    Error::malformed(
        sentences_path,
        format!(
            "sentence file out of step with tokenized file at line {}",
            position
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;

    use super::*;

    #[test]
    fn ratios_must_sum_to_one() {
        assert!(SplitRatios::new(0.8, 0.1, 0.1).is_ok());
        assert!(SplitRatios::new(0.5, 0.2, 0.2).is_err());
    }

    #[test]
    fn cut_sizes_round() {
        let ratios = SplitRatios::new(0.8, 0.1, 0.1).unwrap();
        assert_eq!(ratios.cuts(10), (8, 9));

        // leftovers from rounding go to test
        let ratios = SplitRatios::new(0.6, 0.2, 0.2).unwrap();
        assert_eq!(ratios.cuts(7), (4, 6));
    }

    #[test]
    fn assignment_is_complete_and_disjoint() {
        let ratios = SplitRatios::default();
        for n in [0, 1, 9, 10, 97] {
            let assignment = Assignment::new(n, &ratios, Some(42));
            let (train, val, test) = assignment.sizes();
            assert_eq!(train + val + test, n);
            // every position has exactly one subset by construction
            assert_eq!(assignment.subsets.len(), n);
        }
    }

    #[test]
    fn assignment_is_reproducible_with_seed() {
        let ratios = SplitRatios::default();
        let a = Assignment::new(50, &ratios, Some(7)).subsets;
        let b = Assignment::new(50, &ratios, Some(7)).subsets;
        assert_eq!(a, b);
    }

    fn write_corpus(dir: &Path, prefix: &str, n: usize) {
        let tok: String = (0..n).map(|i| format!("{}\t{} \t{} \n", i + 1, i, i)).collect();
        let sent: String = (0..n)
            .map(|i| format!("{}\tword{} \tword{} \n", i + 1, i, i))
            .collect();
        fs::write(dir.join(format!("{}_tok.txt", prefix)), tok).unwrap();
        fs::write(dir.join(format!("{}_sent.txt", prefix)), sent).unwrap();
    }

    #[test]
    fn split_routes_every_line_once() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path(), "data", 10);

        let ratios = SplitRatios::new(0.8, 0.1, 0.1).unwrap();
        let (train, val, test) = split_corpus(dir.path(), "data", &ratios, Some(1)).unwrap();
        assert_eq!((train, val, test), (8, 1, 1));

        // collect ids back from the six files; each id must appear once,
        // and tok/sent files must stay line-aligned per subset
        let mut seen = BTreeSet::new();
        for subset in ["train", "val", "test"] {
            let tok =
                fs::read_to_string(dir.path().join(format!("data_{}_tok.txt", subset))).unwrap();
            let sent =
                fs::read_to_string(dir.path().join(format!("data_{}_sent.txt", subset))).unwrap();
            assert_eq!(tok.lines().count(), sent.lines().count());

            for (tok_line, sent_line) in tok.lines().zip(sent.lines()) {
                let id = tok_line.split('\t').next().unwrap().to_string();
                assert_eq!(sent_line.split('\t').next().unwrap(), id);
                assert!(seen.insert(id), "duplicated line");
            }
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn misaligned_pair_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path(), "data", 3);
        // drop one sentence line
        let sent_path = dir.path().join("data_sent.txt");
        let sent = fs::read_to_string(&sent_path).unwrap();
        let truncated: String = sent.lines().take(2).map(|l| format!("{}\n", l)).collect();
        fs::write(&sent_path, truncated).unwrap();

        let result = split_corpus(dir.path(), "data", &SplitRatios::default(), Some(1));
        assert!(matches!(result, Err(Error::MalformedRecord { .. })));
    }
}
