// src/replay/loader.rs
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0} does not exist")]
    Missing(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} holds no records")]
    Empty(PathBuf),
    #[error("{0} contains a null record")]
    NullRecord(PathBuf),
}

/// Reads a JSON array of records. Empty files, empty arrays and arrays with a
/// `null` entry are all rejected so the step can be skipped as a whole.
pub async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::Missing(path.to_path_buf()));
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if raw.trim().is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let records: Vec<Option<T>> = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if records.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    records
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| LoadError::NullRecord(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::records::CatalogRecord;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_a_list_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "c.json", r#"[{"Id":1,"Name":"Main"},{"id":2,"name":"News"}]"#);
        let records: Vec<CatalogRecord> = load_records(&path).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "News");
    }

    #[tokio::test]
    async fn rejects_missing_empty_and_null_inputs() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_records::<CatalogRecord>(&dir.path().join("none.json")).await;
        assert!(matches!(missing, Err(LoadError::Missing(_))));

        let blank = write_file(&dir, "blank.json", "  ");
        assert!(matches!(
            load_records::<CatalogRecord>(&blank).await,
            Err(LoadError::Empty(_))
        ));

        let empty = write_file(&dir, "empty.json", "[]");
        assert!(matches!(
            load_records::<CatalogRecord>(&empty).await,
            Err(LoadError::Empty(_))
        ));

        let nulls = write_file(&dir, "nulls.json", r#"[{"Id":1,"Name":"Main"},null]"#);
        assert!(matches!(
            load_records::<CatalogRecord>(&nulls).await,
            Err(LoadError::NullRecord(_))
        ));

        let broken = write_file(&dir, "broken.json", "{not json");
        assert!(matches!(
            load_records::<CatalogRecord>(&broken).await,
            Err(LoadError::Parse { .. })
        ));
    }
}
