//! File-based Tour Flag Store
//!
//! Persists the "guided tour shown" flag as a marker file. Absence of the
//! file means the tour has not been shown; read failures degrade the same
//! way so a broken store only re-shows the tour.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{TourFlagError, TourFlagStore};

const FLAG_FILE_NAME: &str = "tour_shown";

/// Tour flag stored as a marker file under a base directory.
#[derive(Debug, Clone)]
pub struct FileTourFlagStore {
    base_path: PathBuf,
}

impl FileTourFlagStore {
    /// Creates a store rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn flag_path(&self) -> PathBuf {
        self.base_path.join(FLAG_FILE_NAME)
    }
}

#[async_trait]
impl TourFlagStore for FileTourFlagStore {
    async fn was_shown(&self) -> bool {
        fs::try_exists(self.flag_path()).await.unwrap_or(false)
    }

    async fn mark_shown(&self) -> Result<(), TourFlagError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| TourFlagError::IoError(e.to_string()))?;
        fs::write(self.flag_path(), b"1")
            .await
            .map_err(|e| TourFlagError::IoError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn flag_defaults_to_not_shown() {
        let dir = tempdir().unwrap();
        let store = FileTourFlagStore::new(dir.path());
        assert!(!store.was_shown().await);
    }

    #[tokio::test]
    async fn mark_shown_persists_across_instances() {
        let dir = tempdir().unwrap();
        let store = FileTourFlagStore::new(dir.path());
        store.mark_shown().await.unwrap();
        assert!(store.was_shown().await);

        let reopened = FileTourFlagStore::new(dir.path());
        assert!(reopened.was_shown().await);
    }

    #[tokio::test]
    async fn mark_shown_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("client").join("state");
        let store = FileTourFlagStore::new(&nested);
        store.mark_shown().await.unwrap();
        assert!(store.was_shown().await);
    }

    #[tokio::test]
    async fn marking_twice_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileTourFlagStore::new(dir.path());
        store.mark_shown().await.unwrap();
        store.mark_shown().await.unwrap();
        assert!(store.was_shown().await);
    }
}
