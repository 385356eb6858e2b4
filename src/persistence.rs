// src/persistence.rs
use crate::core::catalog::Catalog;
use crate::core::types::ShlokaRecord;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog snapshot is unreadable: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Loads the catalog from the JSON array the offline extraction step
/// produces (`[{ "text": ..., "nextChar": ... }, ...]`).
///
/// Fields are whitespace-trimmed and rows with a blank text or next
/// char are dropped, mirroring the extraction script's own filtering.
pub fn load_catalog_json(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let raw: Vec<ShlokaRecord> = serde_json::from_reader(reader)?;
    let records = raw
        .into_iter()
        .map(|r| ShlokaRecord {
            text: r.text.trim().to_string(),
            next_char: r.next_char.trim().to_string(),
        })
        .filter(|r| !r.text.is_empty() && !r.next_char.is_empty())
        .collect();
    Ok(Catalog::from_records(records))
}

/// Writes a compact binary snapshot of the parsed catalog. The write
/// goes through a temp file in the target directory and is persisted
/// atomically, so a crash never leaves a truncated snapshot behind.
pub fn save_snapshot(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, catalog)?;

    temp_file.persist(path).map_err(|e| CatalogError::Io(e.error))?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_JSON: &str = r#"[
        { "text": "रघुवंशम् प्रथम", "nextChar": "क" },
        { "text": "  रघुवंशम् द्वितीय  ", "nextChar": " ख " },
        { "text": "", "nextChar": "ग" },
        { "text": "धर्मक्षेत्रे", "nextChar": "" }
    ]"#;

    #[test]
    fn json_load_trims_and_skips_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        File::create(&path)
            .unwrap()
            .write_all(SAMPLE_JSON.as_bytes())
            .unwrap();

        let catalog = load_catalog_json(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().text, "रघुवंशम् द्वितीय");
        assert_eq!(catalog.get(1).unwrap().next_char, "ख");
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("catalog.json");
        File::create(&json_path)
            .unwrap()
            .write_all(SAMPLE_JSON.as_bytes())
            .unwrap();
        let catalog = load_catalog_json(&json_path).unwrap();

        let snap_path = dir.path().join("cache").join("catalog.bin");
        save_snapshot(&catalog, &snap_path).unwrap();
        let reloaded = load_snapshot(&snap_path).unwrap();

        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(reloaded.get(0).unwrap(), catalog.get(0).unwrap());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        File::create(&path).unwrap().write_all(b"{ not json").unwrap();
        assert!(matches!(
            load_catalog_json(&path),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let missing = Path::new("does/not/exist.json");
        assert!(matches!(load_catalog_json(missing), Err(CatalogError::Io(_))));
        assert!(matches!(load_snapshot(missing), Err(CatalogError::Io(_))));
    }
}
