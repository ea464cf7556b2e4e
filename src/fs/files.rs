//! File, JSON, YAML and JSONL helpers.
//!
//! Thin wrappers over `std::fs` and serde, shaped for batch payloads:
//! load/dump a whole document, or one JSON document per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::FileError;

/// Deletes a regular file, best-effort.
///
/// A missing path or a non-file target logs a `warn` and is otherwise
/// ignored, as is a failing unlink; deletion here is cleanup, never a result
/// the caller depends on.
pub fn delete(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if path.is_file() {
        if let Err(err) = std::fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "failed to delete file");
        }
    } else {
        warn!(path = %path.display(), "can't delete: not a regular file");
    }
}

/// Loads a JSON document.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FileError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Dumps a value as a JSON document, pretty-printed when `pretty` is set.
pub fn dump_json<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
    pretty: bool,
) -> Result<(), FileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads a YAML document.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FileError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_yaml::from_reader(reader)?)
}

/// Dumps a value as a YAML document.
pub fn dump_yaml<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), FileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Loads a JSON-lines file, skipping blank lines.
pub fn load_jsonl<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, FileError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            records.push(serde_json::from_str(line)?);
        }
    }
    Ok(records)
}

/// Dumps records as a JSON-lines file, one compact document per line.
pub fn dump_jsonl<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> Result<(), FileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    fn sample(n: u32) -> Record {
        Record {
            name: format!("rec-{n}"),
            count: n,
        }
    }

    #[test]
    fn test_json_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        dump_json(&path, &sample(3), true).unwrap();
        let loaded: Record = load_json(&path).unwrap();
        assert_eq!(loaded, sample(3));
    }

    #[test]
    fn test_yaml_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yaml");
        dump_yaml(&path, &sample(5)).unwrap();
        let loaded: Record = load_yaml(&path).unwrap();
        assert_eq!(loaded, sample(5));
    }

    #[test]
    fn test_jsonl_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        std::fs::write(
            &path,
            "{\"name\":\"rec-1\",\"count\":1}\n\n{\"name\":\"rec-2\",\"count\":2}\n",
        )
        .unwrap();
        let loaded: Vec<Record> = load_jsonl(&path).unwrap();
        assert_eq!(loaded, vec![sample(1), sample(2)]);
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let records: Vec<Record> = (0..4).map(sample).collect();
        dump_jsonl(&path, &records).unwrap();
        let loaded: Vec<Record> = load_jsonl(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let err = load_json::<Record>("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }

    #[test]
    fn test_delete_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("victim.txt");
        std::fs::write(&path, "bye").unwrap();
        delete(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_file_is_silent() {
        delete("/definitely/not/here.txt");
    }
}
