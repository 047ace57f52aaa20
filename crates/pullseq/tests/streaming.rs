#![allow(missing_docs)]

use std::{fs, path::PathBuf};

use pullseq::{Cursor, open_lines};
use tempdir::TempDir;

const CORPUS: &str = "alpha one\nbeta two\ngamma three\ndelta four\n";

fn corpus_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new("pullseq-test").expect("Failed to create temp dir");
    let path = dir.path().join("corpus.txt");
    fs::write(&path, CORPUS).expect("Failed to write corpus");
    (dir, path)
}

#[test]
fn file_lines_stream_in_order() {
    let (_dir, path) = corpus_file();

    let mut seq = open_lines(&path).expect("Failed to open corpus");
    assert_eq!(
        seq.to_vec(),
        vec!["alpha one", "beta two", "gamma three", "delta four"]
    );
}

#[test]
fn replaying_a_file_reopens_it() {
    let (_dir, path) = corpus_file();

    // A spent sequence stays spent; each pass over the data is a fresh
    // sequence over a fresh reader.
    for _epoch in 0..3 {
        let mut seq = open_lines(&path).expect("Failed to open corpus");

        let mut count = 0;
        for line in &mut seq {
            assert!(!line.is_empty());
            count += 1;
        }
        assert_eq!(count, 4);
        assert!(seq.generator().fault().is_none());
    }
}

#[test]
fn draining_releases_the_reader() {
    let (_dir, path) = corpus_file();

    let mut seq = open_lines(&path).expect("Failed to open corpus");
    let drained: Vec<String> = (&mut seq).into_iter().collect();

    assert_eq!(drained.len(), 4);
    assert!(seq.generator().is_released());
}

#[test]
fn line_records_feed_a_consumer() {
    struct Record {
        index: usize,
        text: String,
    }

    let (_dir, path) = corpus_file();

    let mut index = 0;
    let mut records = open_lines(&path)
        .expect("Failed to open corpus")
        .map(move |text| {
            index += 1;
            Record { index, text }
        });

    let batch = records.to_vec();
    assert_eq!(batch.len(), 4);
    assert_eq!(batch[0].index, 1);
    assert_eq!(batch[0].text, "alpha one");
    assert_eq!(batch[3].index, 4);
    assert_eq!(batch[3].text, "delta four");
}

#[test]
fn cursor_walks_file_lines() {
    let (_dir, path) = corpus_file();

    let mut seq = open_lines(&path).expect("Failed to open corpus");
    let mut cur = seq.cursor();

    let mut words = 0;
    while cur != Cursor::done() {
        words += cur.current().split_whitespace().count();
        cur.advance();
    }
    assert_eq!(words, 8);
}

#[test]
fn partial_consumption_then_handoff() {
    let (_dir, path) = corpus_file();

    let mut seq = open_lines(&path).expect("Failed to open corpus");
    assert_eq!(seq.pull().as_deref(), Some("alpha one"));
    assert_eq!(seq.pull().as_deref(), Some("beta two"));

    // The mapped sequence picks up exactly where the pulls stopped.
    let mut rest = seq.map(|line| line.split(' ').next().unwrap_or_default().to_string());
    assert_eq!(rest.to_vec(), vec!["gamma", "delta"]);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = TempDir::new("pullseq-test").expect("Failed to create temp dir");
    let path = dir.path().join("absent.txt");

    let err = open_lines(&path).err().expect("open should fail");
    assert!(err.to_string().contains("absent.txt"));
}
