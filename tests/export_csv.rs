// tests/export_csv.rs
//
// Exporter: header, quoting, overwrite, unwritable paths.
//
use std::fs;

use mo3jam_scrape::config::options::ExportOptions;
use mo3jam_scrape::file::export_records;
use mo3jam_scrape::{ Error, Record };

fn rec(harf: char, words: &str, explin: &str) -> Record {
    Record {
        harf,
        words: words.to_string(),
        explin: explin.to_string(),
        dialect: "Algerian".to_string(),
        link: format!("https://ar.mo3jam.com/term/{words}#Algerian"),
    }
}

#[test]
fn rows_follow_insertion_order_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(dir.path().join("nested/out.csv"));

    let records = vec![rec('ب', "بزاف", "كثير"), rec('ا', "اش", "ماذا\nسؤال")];
    let path = export_records(&export, &records).unwrap();

    let s = fs::read_to_string(&path).unwrap();
    let expected = "harf,words,explin,dialect,link\n\
        ب,بزاف,كثير,Algerian,https://ar.mo3jam.com/term/بزاف#Algerian\n\
        ا,اش,\"ماذا\nسؤال\",Algerian,https://ar.mo3jam.com/term/اش#Algerian\n";
    assert_eq!(s, expected);
}

#[test]
fn existing_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("words.csv");
    fs::write(&target, "old,content\nmore,rows\nand,more\n").unwrap();

    let mut export = ExportOptions::default();
    export.set_path(&target);
    export_records(&export, &[rec('ا', "اه", "")]).unwrap();

    let s = fs::read_to_string(&target).unwrap();
    assert!(!s.contains("old"));
    assert_eq!(s.lines().count(), 2);
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let mut export = ExportOptions::default();
    export.set_path(blocker.join("words.csv"));
    match export_records(&export, &[]) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("not_a_dir/words.csv")),
        other => panic!("expected Io error, got {other:?}"),
    }
}
