use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use super::{PersistenceAdapter, PersistenceError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes land in a uniquely named temp file that is renamed over the
/// target, so readers never observe a half-written value. An advisory
/// lock on `<dir>/.lock` serializes writers from different processes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn lock(&self) -> Result<File, PersistenceError> {
        let path = self.dir.join(".lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| PersistenceError::Write {
                path: path.clone(),
                source,
            })?;
        file.lock_exclusive()
            .map_err(|source| PersistenceError::Write { path, source })?;
        Ok(file)
    }
}

impl PersistenceAdapter for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Read { path, source }),
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir).map_err(|source| PersistenceError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let lock = self.lock()?;

        let target = self.path_for(key);
        let temp = self
            .dir
            .join(format!(".{}.{}.tmp", key, uuid::Uuid::new_v4()));

        let write_result = File::create(&temp)
            .and_then(|mut file| {
                file.write_all(value.as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&temp, &target));

        if let Err(source) = write_result {
            let _ = fs::remove_file(&temp);
            return Err(PersistenceError::Write {
                path: target,
                source,
            });
        }

        let _ = lock.unlock();
        debug!(path = %target.display(), bytes = value.len(), "persisted value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        assert_eq!(store.load("bookmarks").unwrap(), None);
    }

    #[test]
    fn test_store_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested").join("data"));

        store.store("bookmarks", "[]").unwrap();

        assert!(store.dir().join("bookmarks.json").exists());
        assert_eq!(store.load("bookmarks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_store_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.store("bookmarks", r#"[{"id":"a"}]"#).unwrap();
        store.store("bookmarks", "[]").unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
        assert_eq!(store.load("bookmarks").unwrap().as_deref(), Some("[]"));
    }
}
