use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{FavoritesRepository, RepositoryError};

/// Favorites kept as a pretty-printed JSON array of strings.
///
/// Each append holds an exclusive OS lock on a sidecar `<file>.lock` for the
/// whole read-modify-write, so handles in other processes (or other handles
/// in this one) never interleave. The new array lands via a uniquely named
/// temp file in the same directory plus rename, so readers only ever see a
/// complete array.
pub struct JsonFileFavoritesRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileFavoritesRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl FavoritesRepository for JsonFileFavoritesRepository {
    async fn append(&self, entry: String) -> Result<(), RepositoryError> {
        // Keeps this handle's own appends off the blocking pool while one
        // of them waits on the file lock.
        let _guard = self.write_lock.lock().await;

        let path = self.path.clone();
        let total = tokio::task::spawn_blocking(move || append_locked(&path, entry))
            .await
            .map_err(|error| RepositoryError::Io(std::io::Error::other(error)))??;

        info!(
            event_name = "favorites.saved",
            path = %self.path.display(),
            total,
            "favorite outfit saved"
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, RepositoryError> {
        let favorites = match fs::read_to_string(&self.path).await {
            Ok(raw) => decode(&self.path, &raw)?,
            Err(error) if error.kind() == ErrorKind::NotFound => Vec::new(),
            Err(error) => return Err(error.into()),
        };
        debug!(
            event_name = "favorites.listed",
            path = %self.path.display(),
            total = favorites.len(),
            "favorites loaded"
        );
        Ok(favorites)
    }
}

fn append_locked(path: &Path, entry: String) -> Result<usize, RepositoryError> {
    let dir = parent_dir(path);
    std::fs::create_dir_all(&dir)?;

    let lock = OpenOptions::new().read(true).write(true).create(true).open(lock_path(path))?;
    lock.lock_exclusive()?;
    let result = rewrite(path, &dir, entry);
    FileExt::unlock(&lock)?;
    result
}

fn rewrite(path: &Path, dir: &Path, entry: String) -> Result<usize, RepositoryError> {
    let mut favorites = read_existing(path)?;
    favorites.push(entry);

    let encoded = serde_json::to_string_pretty(&favorites)
        .map_err(|error| RepositoryError::Decode(error.to_string()))?;
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(encoded.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|error| error.error)?;
    Ok(favorites.len())
}

fn read_existing(path: &Path) -> Result<Vec<String>, RepositoryError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => decode(path, &raw),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(error) => Err(error.into()),
    }
}

fn decode(path: &Path, raw: &str) -> Result<Vec<String>, RepositoryError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(raw).map_err(|error| {
        RepositoryError::Decode(format!("`{}` is not a JSON string array: {error}", path.display()))
    })
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}
