//! End-to-end pipeline runs over small handwritten corpora.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::json;

use convogen::pipelines::{DialogueCorpus, Pipeline};
use convogen::processing::SplitRatios;

fn write_qa(dir: &Path) -> std::path::PathBuf {
    let corpus = json!([
        {
            "body": "how do i do X?",
            "comments": ["try Y", "also try Z"],
            "answers": []
        },
        {
            "body": "<p>what about sorting?</p>",
            "comments": [],
            "answers": [
                {"text": "use <code>sort()</code>", "comments": ["thanks"]}
            ]
        },
        {
            "body": "nobody ever answered this",
            "comments": [],
            "answers": []
        }
    ]);
    let path = dir.join("questions.json");
    fs::write(&path, corpus.to_string()).unwrap();
    path
}

fn write_threads(dir: &Path) -> std::path::PathBuf {
    let corpus = json!({
        "how thread": ["Q: how?", "A: like this", "B: or like that"],
        "lonely thread": ["nobody ever replied"]
    });
    let path = dir.join("threads.json");
    fs::write(&path, corpus.to_string()).unwrap();
    path
}

fn run_pipeline(dir: &Path) -> convogen::pipelines::PipelineSummary {
    let qa = write_qa(dir);
    let threads = write_threads(dir);
    let pipeline = DialogueCorpus::new(
        Some(qa),
        Some(threads),
        dir.to_path_buf(),
        "data".to_string(),
        SplitRatios::default(),
        Some(42),
        false,
    );
    pipeline.run().unwrap()
}

#[test]
fn turns_file_content() {
    let dir = tempfile::tempdir().unwrap();
    run_pipeline(dir.path());

    let turns = fs::read_to_string(dir.path().join("data_sentences.txt")).unwrap();
    let expected = "\
1\ttry Y\thow do i do X?
2\talso try Z\thow do i do X? try Y
3\tuse sort()>\twhat about sorting?
4\tthanks\tuse sort()>
5\tA: like this\tQ: how?
6\tB: or like that\tQ: how? A: like this
";
    assert_eq!(turns, expected);
}

#[test]
fn sentence_file_is_tokenized_and_lowercased() {
    let dir = tempfile::tempdir().unwrap();
    run_pipeline(dir.path());

    let sentences = fs::read_to_string(dir.path().join("data_sent.txt")).unwrap();
    let lines: Vec<&str> = sentences.lines().collect();

    assert_eq!(lines[0], "1\ttry y \thow do i do x ? ");
    assert_eq!(lines[1], "2\talso try z \thow do i do x ? try y ");
    assert_eq!(lines[4], "5\ta : like this \tq : how ? ");
    assert_eq!(lines[5], "6\tb : or like that \tq : how ? a : like this ");
}

#[test]
fn vocabulary_table_head_and_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    run_pipeline(dir.path());

    let table = fs::read_to_string(dir.path().join("data_vocab.txt")).unwrap();
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("0\teos"));
    assert_eq!(lines.next(), Some("1\t<unk>"));

    // index -> token, from the file itself
    let mut by_index = HashMap::new();
    for line in table.lines() {
        let (idx, token) = line.split_once('\t').unwrap();
        by_index.insert(idx.parse::<usize>().unwrap(), token.to_string());
    }

    // every index written to the tokenized file must map back to the
    // token at the same place in the sentence file
    let tokenized = fs::read_to_string(dir.path().join("data_tok.txt")).unwrap();
    let sentences = fs::read_to_string(dir.path().join("data_sent.txt")).unwrap();
    for (tok_line, sent_line) in tokenized.lines().zip(sentences.lines()) {
        let indices: Vec<&str> = tok_line.split(|c| c == '\t' || c == ' ').skip(1).collect();
        let tokens: Vec<&str> = sent_line.split(|c| c == '\t' || c == ' ').skip(1).collect();
        assert_eq!(indices.len(), tokens.len());
        for (idx, token) in indices.iter().zip(tokens.iter()) {
            if idx.is_empty() {
                continue;
            }
            let idx: usize = idx.parse().unwrap();
            assert_eq!(by_index[&idx], *token);
        }
    }
}

#[test]
fn per_source_vocabularies_are_written() {
    let dir = tempfile::tempdir().unwrap();
    run_pipeline(dir.path());

    for name in ["data_qa_vocab.txt", "data_threads_vocab.txt"] {
        let table = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(table.starts_with("0\teos\n1\t<unk>\n"), "{} head", name);
    }
}

#[test]
fn split_files_partition_the_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let summary = run_pipeline(dir.path());
    assert_eq!(summary.turns, 6);
    assert_eq!(summary.train + summary.val + summary.test, 6);

    let mut seen = Vec::new();
    for subset in ["train", "val", "test"] {
        let tok =
            fs::read_to_string(dir.path().join(format!("data_{}_tok.txt", subset))).unwrap();
        let sent =
            fs::read_to_string(dir.path().join(format!("data_{}_sent.txt", subset))).unwrap();
        assert_eq!(tok.lines().count(), sent.lines().count());
        for line in tok.lines() {
            seen.push(line.split('\t').next().unwrap().to_string());
        }
    }
    seen.sort();
    assert_eq!(seen, vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn split_is_reproducible_with_same_seed() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    run_pipeline(dir_a.path());
    run_pipeline(dir_b.path());

    for name in ["data_train_tok.txt", "data_val_tok.txt", "data_test_tok.txt"] {
        let a = fs::read_to_string(dir_a.path().join(name)).unwrap();
        let b = fs::read_to_string(dir_b.path().join(name)).unwrap();
        assert_eq!(a, b, "{} differs between seeded runs", name);
    }
}

#[test]
fn qa_only_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let qa = write_qa(dir.path());
    let pipeline = DialogueCorpus::new(
        Some(qa),
        None,
        dir.path().to_path_buf(),
        "qa".to_string(),
        SplitRatios::default(),
        Some(1),
        false,
    );
    let summary = pipeline.run().unwrap();

    // 2 question comments + 1 answer + 1 answer comment
    assert_eq!(summary.turns, 4);
    assert!(dir.path().join("qa_vocab.txt").exists());
    assert!(!dir.path().join("qa_threads_vocab.txt").exists());
}

#[test]
fn no_sources_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = DialogueCorpus::new(
        None,
        None,
        dir.path().to_path_buf(),
        "data".to_string(),
        SplitRatios::default(),
        None,
        false,
    );
    assert!(pipeline.run().is_err());
}
