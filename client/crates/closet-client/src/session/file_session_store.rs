use crate::session::{SessionStore, StorageError, StorageKey, StorageResult};

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session values persisted as a small JSON object on disk.
///
/// Writes go through a temp file + fsync + rename so a crash mid-write never
/// leaves a half-written session behind.
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored map. A missing file is an empty session.
    async fn read_map(&self) -> StorageResult<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::file_read(self.path.clone(), e)),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StorageError::corrupted(self.path.clone(), e.to_string()))
    }

    /// Like `read_map`, but a corrupted file is moved aside and treated as empty.
    async fn read_map_for_write(&self) -> StorageResult<BTreeMap<String, String>> {
        match self.read_map().await {
            Err(StorageError::Corrupted { message, .. }) => {
                warn!("Session file corrupted at {:?}: {message}", self.path);
                self.backup_corrupted().await?;
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self
            .path
            .with_extension(format!("json.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(map)?;

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::atomic_rename(temp_path, self.path.clone(), e));
        }

        Ok(())
    }

    /// Renames a corrupted session file to `<name>.corrupted.<timestamp>`.
    pub async fn backup_corrupted(&self) -> StorageResult<Option<PathBuf>> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(None);
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"));
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .path
            .with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .await
            .map_err(|e| StorageError::atomic_rename(self.path.clone(), backup_path.clone(), e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        let _guard = self.write_lock.lock().await;
        let map = self.read_map().await?;
        Ok(map.get(key.as_str()).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map_for_write().await?;
        map.insert(key.as_str().to_string(), value.to_string());
        self.write_map(&map).await?;
        debug!("Stored session key '{key}'");
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map_for_write().await?;
        if map.remove(key.as_str()).is_some() {
            self.write_map(&map).await?;
            debug!("Removed session key '{key}'");
        }
        Ok(())
    }
}
