use std::{fs, io::ErrorKind, path::PathBuf};

use anyhow::Result;
use parking_lot::RwLock;

const SELECTION_FILE: &str = "network";

/// Durable storage for the user's network selection.
///
/// The registry treats the store as best-effort: a failed `save` is logged,
/// never surfaced to the selecting view.
pub trait SelectionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, name: &str) -> Result<()>;
}

/// Selection persisted as a single file under the data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn path(&self) -> PathBuf {
        self.data_dir.join(SELECTION_FILE)
    }
}

impl SelectionStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.path()) {
            Ok(contents) => {
                let name = contents.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, name: &str) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.path(), name)?;
        Ok(())
    }
}

/// In-memory store; selections do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    selection: RwLock<Option<String>>,
}

impl MemoryStore {
    /// A store that already holds a persisted selection.
    pub fn with_selection(name: &str) -> Self {
        Self {
            selection: RwLock::new(Some(name.to_string())),
        }
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.selection.read().clone())
    }

    fn save(&self, name: &str) -> Result<()> {
        *self.selection.write() = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn file_store_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("lab"));

        assert_eq!(store.load().unwrap(), None);

        store.save("sepolia").unwrap();
        assert_eq!(store.load().unwrap(), Some("sepolia".to_string()));

        store.save("mainnet").unwrap();
        assert_eq!(store.load().unwrap(), Some("mainnet".to_string()));
    }

    #[test]
    fn file_store_ignores_blank_contents() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        fs::write(temp_dir.path().join(SELECTION_FILE), "  \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), None);

        store.save("holesky").unwrap();
        assert_eq!(store.load().unwrap(), Some("holesky".to_string()));

        let seeded = MemoryStore::with_selection("sepolia");
        assert_eq!(seeded.load().unwrap(), Some("sepolia".to_string()));
    }
}
