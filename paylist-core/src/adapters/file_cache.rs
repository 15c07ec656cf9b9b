//! JSON file contacts cache
//!
//! Stores the last successful contacts fetch as `contacts-cache.json`.
//! Writers take an exclusive lock on a sidecar `.lock` file and replace the
//! cache atomically, so readers never observe a half-written file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::Contact;
use crate::ports::ContactsCache;

/// Default cache filename inside the paylist directory
pub const CONTACTS_CACHE_FILENAME: &str = "contacts-cache.json";

/// On-disk layout
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheFile {
    pub saved_at: DateTime<Utc>,
    pub contacts: Vec<Contact>,
}

/// Contacts cache backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileContactsCache {
    path: PathBuf,
}

impl JsonFileContactsCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache stored in `dir` under the default filename
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CONTACTS_CACHE_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn open_lock(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        Ok(file)
    }

    /// Blocking write, used from `spawn_blocking`
    pub fn write_blocking(&self, contacts: &[Contact]) -> Result<()> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            let file = CacheFile {
                saved_at: Utc::now(),
                contacts: contacts.to_vec(),
            };
            serde_json::to_writer(&mut writer, &file)?;
            writer.flush()?;
        }
        tmp.persist(&self.path)
            .map_err(|e| Error::cache(format!("failed to replace cache file: {}", e)))?;

        lock.unlock()?;
        debug!(path = %self.path.display(), count = contacts.len(), "contacts cache written");
        Ok(())
    }

    /// Blocking read, used from `spawn_blocking`
    pub fn read_blocking(&self) -> Result<CacheFile> {
        let lock = self.open_lock()?;
        lock.lock_shared()?;
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::unavailable("no cached contacts yet"));
            }
            Err(e) => return Err(e.into()),
        };
        let parsed: CacheFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::cache(format!("corrupt contacts cache: {}", e)))?;
        lock.unlock()?;

        Ok(parsed)
    }

    /// Delete the cache file, returning whether one existed
    ///
    /// The `.lock` sidecar stays so concurrent users keep locking the same file.
    pub fn clear(&self) -> Result<bool> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;
        let existed = match std::fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        lock.unlock()?;
        Ok(existed)
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::cache(format!("cache task failed: {}", e)))?
}

#[async_trait]
impl ContactsCache for JsonFileContactsCache {
    async fn save(&self, contacts: &[Contact]) -> Result<()> {
        let cache = self.clone();
        let contacts = contacts.to_vec();
        run_blocking(move || cache.write_blocking(&contacts)).await
    }

    async fn load(&self) -> Result<Vec<Contact>> {
        let cache = self.clone();
        run_blocking(move || cache.read_blocking().map(|f| f.contacts)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let cache = JsonFileContactsCache::in_dir(temp_dir.path());
        assert!(cache.load().await.unwrap_err().is_unavailable());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let cache = JsonFileContactsCache::in_dir(temp_dir.path());
        let contacts = vec![
            Contact::new("Alice", "+1 555 0100"),
            Contact::new("Bob", "+1 555 0101"),
        ];

        cache.save(&contacts).await.unwrap();
        assert_eq!(cache.load().await.unwrap(), contacts);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let cache = JsonFileContactsCache::in_dir(&temp_dir.path().join("nested"));
        cache.save(&[Contact::new("Alice", "1")]).await.unwrap();
        assert!(cache.path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_cache_error() {
        let temp_dir = TempDir::new().unwrap();
        let cache = JsonFileContactsCache::in_dir(temp_dir.path());
        std::fs::write(cache.path(), "not json").unwrap();

        let err = cache.load().await.unwrap_err();
        assert!(matches!(err, Error::Cache(_)));
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let cache = JsonFileContactsCache::in_dir(temp_dir.path());
        assert!(!cache.clear().unwrap());

        cache.write_blocking(&[Contact::new("Alice", "1")]).unwrap();
        assert!(cache.clear().unwrap());
        assert!(!cache.path().exists());
    }

    #[test]
    fn test_read_after_clear_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let cache = JsonFileContactsCache::in_dir(temp_dir.path());
        cache.write_blocking(&[Contact::new("Alice", "1")]).unwrap();
        cache.clear().unwrap();

        assert!(cache.read_blocking().unwrap_err().is_unavailable());
    }
}
