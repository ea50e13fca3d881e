use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::warn;

use crate::{error::AppError, models::document::Document};

/// Storage key carried over from the browser edition of the app, so that
/// documents exported from it keep a recognizable name.
const DOCUMENT_FILE: &str = "travel_expense_app_v2.json";

/// One durable slot holding the whole JSON document. Reads never fail:
/// a missing or corrupt slot degrades to an empty document, and the cause
/// is only logged. Writes always overwrite the full slot.
#[derive(Clone)]
pub struct StorageService {
    root: Arc<PathBuf>,
}

impl StorageService {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self) -> PathBuf {
        self.root().join(DOCUMENT_FILE)
    }

    pub fn load_document(&self) -> Document {
        let path = self.document_path();
        if !path.exists() {
            return Document::default();
        }
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("unreadable document at {}: {err}", path.display());
                return Document::default();
            }
        };
        if raw.is_empty() {
            return Document::default();
        }
        match serde_json::from_slice(&raw) {
            Ok(document) => document,
            Err(err) => {
                warn!("corrupt document at {}: {err}", path.display());
                Document::default()
            }
        }
    }

    pub fn save_document(&self, document: &Document) -> Result<(), AppError> {
        fs::create_dir_all(self.root())?;
        let data = serde_json::to_vec_pretty(document).map_err(|err| AppError::Other(err.into()))?;
        fs::write(self.document_path(), data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::Trip;
    use tempfile::TempDir;

    #[test]
    fn missing_slot_loads_empty_document() {
        let root = TempDir::new().unwrap();
        let storage = StorageService::new(root.path().to_path_buf());
        let doc = storage.load_document();
        assert!(doc.trips.is_empty());
        assert!(doc.current_trip_id.is_none());
    }

    #[test]
    fn corrupt_slot_loads_empty_document() {
        let root = TempDir::new().unwrap();
        let storage = StorageService::new(root.path().to_path_buf());
        fs::create_dir_all(root.path()).unwrap();
        fs::write(storage.document_path(), b"{not json").unwrap();
        let doc = storage.load_document();
        assert!(doc.trips.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let root = TempDir::new().unwrap();
        let storage = StorageService::new(root.path().join("nested"));
        let mut doc = Document::default();
        let trip = Trip::new("京都", "2024-05-01");
        doc.current_trip_id = Some(trip.id.clone());
        doc.trips.push(trip);
        storage.save_document(&doc).unwrap();

        let loaded = storage.load_document();
        assert_eq!(loaded.trips.len(), 1);
        assert_eq!(loaded.trips[0].title, "京都");
        assert_eq!(loaded.current_trip_id, doc.current_trip_id);
    }
}
