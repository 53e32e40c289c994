use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::core::serialization::{load_state_from_path, save_state_to_path, SaveState};
use crate::persistence::{LedgerRepository, PersistenceError};

/// Pretty-printed JSON file, rewritten wholesale on every save.
///
/// Saves are serialized: the temp file and the rename belong to one writer
/// at a time.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

impl LedgerRepository for JsonFileStore {
    fn load(&self) -> Result<SaveState, PersistenceError> {
        load_state_from_path(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => PersistenceError::NotFound(self.path.display().to_string()),
            ErrorKind::InvalidData => PersistenceError::InvalidData(err.to_string()),
            _ => PersistenceError::Io(err),
        })
    }

    fn save(&self, state: &SaveState) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        save_state_to_path(state, &self.path).map_err(PersistenceError::Io)
    }
}
