//! Flat-file backend behavior: format details, skip-on-bad-line loads, and
//! the full-rewrite mutation operations.

mod common;

use std::fs;

use common::sample_record;
use hwinv::inventory::{
    Backend, FILE_HEADER, FileBackend, MemoryBackend, RecordList, StoreError, encode_record,
};

fn list_of(records: Vec<hwinv::inventory::AssetRecord>) -> RecordList {
    let mut list = RecordList::new();
    for record in records {
        list.push(record);
    }
    list
}

#[test]
fn test_missing_file_loads_empty() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = FileBackend::new(dir.path().join("absent.csv"));
    assert!(backend.load_all()?.is_empty());
    Ok(())
}

#[test]
fn test_save_writes_header_then_one_line_per_record() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    let backend = FileBackend::new(&path);

    let records = vec![sample_record(1), sample_record(2)];
    backend.save_all(&list_of(records.clone()))?;

    let content = fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.first().copied(), Some(FILE_HEADER));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.get(1).copied(), Some(encode_record(&sample_record(1)).as_str()));

    assert_eq!(backend.load_all()?, records);
    Ok(())
}

#[test]
fn test_save_replaces_previous_contents() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = FileBackend::new(dir.path().join("inventory.csv"));

    backend.save_all(&list_of(vec![sample_record(1), sample_record(2)]))?;
    backend.save_all(&list_of(vec![sample_record(3)]))?;

    let reloaded = backend.load_all()?;
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.first().map(|r| r.id), Some(3));
    Ok(())
}

#[test]
fn test_load_skips_blank_and_malformed_lines() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");

    let content = format!(
        "{FILE_HEADER}\n{}\n\n   \nnot;a;record\n{}\n",
        encode_record(&sample_record(1)),
        encode_record(&sample_record(2)),
    );
    fs::write(&path, content)?;

    let backend = FileBackend::new(&path);
    let loaded = backend.load_all()?;
    let ids: Vec<u32> = loaded.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    Ok(())
}

#[test]
fn test_header_line_is_not_parsed_as_a_record() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    // A header-only file is an empty inventory.
    fs::write(&path, format!("{FILE_HEADER}\n"))?;
    assert!(FileBackend::new(&path).load_all()?.is_empty());
    Ok(())
}

#[test]
fn test_add_one_appends_and_creates_the_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = FileBackend::new(dir.path().join("fresh.csv"));

    backend.add_one(&sample_record(1))?;
    backend.add_one(&sample_record(2))?;

    let ids: Vec<u32> = backend.load_all()?.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    Ok(())
}

#[test]
fn test_update_one_replaces_matching_id() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = FileBackend::new(dir.path().join("inventory.csv"));
    backend.save_all(&list_of(vec![sample_record(1), sample_record(2)]))?;

    let mut changed = sample_record(2);
    changed.name = "renamed".to_string();
    backend.update_one(&changed)?;

    assert_eq!(
        backend.find_by_id(2)?.map(|r| r.name),
        Some("renamed".to_string())
    );
    assert_eq!(backend.load_all()?.len(), 2);

    assert!(matches!(
        backend.update_one(&sample_record(9)),
        Err(StoreError::NotFound(9))
    ));
    Ok(())
}

#[test]
fn test_remove_one_rewrites_without_the_record() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = FileBackend::new(dir.path().join("inventory.csv"));
    backend.save_all(&list_of(vec![sample_record(1), sample_record(2)]))?;

    backend.remove_one(1)?;
    let ids: Vec<u32> = backend.load_all()?.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);

    assert!(matches!(
        backend.remove_one(1),
        Err(StoreError::NotFound(1))
    ));
    Ok(())
}

#[test]
fn test_find_by_id_returns_a_detached_copy() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = FileBackend::new(dir.path().join("inventory.csv"));
    backend.save_all(&list_of(vec![sample_record(1)]))?;

    let mut copy = backend.find_by_id(1)?.ok_or_else(|| anyhow::anyhow!("missing"))?;
    copy.name = "scribbled on".to_string();

    // Mutating the copy never touches the medium.
    assert_eq!(
        backend.find_by_id(1)?.map(|r| r.name),
        Some(sample_record(1).name)
    );
    assert!(backend.find_by_id(42)?.is_none());
    Ok(())
}

#[test]
fn test_memory_backend_supports_the_full_capability_set() -> anyhow::Result<()> {
    let backend = MemoryBackend::new();

    backend.add_one(&sample_record(1))?;
    backend.add_one(&sample_record(2))?;

    let mut changed = sample_record(1);
    changed.manufacturer = "Refurb Inc".to_string();
    backend.update_one(&changed)?;
    assert_eq!(
        backend.find_by_id(1)?.map(|r| r.manufacturer),
        Some("Refurb Inc".to_string())
    );

    backend.remove_one(2)?;
    assert!(matches!(
        backend.remove_one(2),
        Err(StoreError::NotFound(2))
    ));

    backend.save_all(&list_of(vec![sample_record(5)]))?;
    let ids: Vec<u32> = backend.load_all()?.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5]);

    backend.shutdown();
    Ok(())
}
