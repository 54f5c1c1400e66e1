// tests/unit_links.rs
//! Tests for reading link lists from disk.

use std::fs;
use tempfile::tempdir;
use wikinet_core::links::read_links;
use wikinet_core::{LinkGraph, WikinetError};

#[test]
fn test_read_and_build() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.tsv");
    fs::write(&path, "History\tRome\nRome\tItaly\nHistory\tRome\n").unwrap();

    let links = read_links(&path).unwrap();
    assert_eq!(links.len(), 3);

    let graph = LinkGraph::from_links(links);
    assert_eq!(graph.titles(), vec!["History", "Rome", "Italy"]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.friends_by_depth("History", 3).map(|f| f.len()), Some(3));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.tsv");
    let err = read_links(&missing).unwrap_err();
    assert!(matches!(err, WikinetError::Io { ref path, .. } if *path == missing));
}

#[test]
fn test_malformed_line_names_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.tsv");
    fs::write(&path, "A\tB\nno tab here\n").unwrap();

    match read_links(&path) {
        Err(WikinetError::MalformedLink { path: p, line }) => {
            assert_eq!(p, path);
            assert_eq!(line, 2);
        }
        other => panic!("expected MalformedLink, got {other:?}"),
    }
}
