pub mod json;

pub use json::JsonFileStore;

use tracing::{info, warn};

use crate::core::serialization::SaveState;

#[derive(Debug)]
pub enum PersistenceError {
    NotFound(String),
    Io(std::io::Error),
    InvalidData(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::NotFound(path) => write!(f, "no save file at {}", path),
            PersistenceError::Io(err) => write!(f, "io error: {}", err),
            PersistenceError::InvalidData(message) => write!(f, "invalid save data: {}", message),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Durable home of the ledger between runs.
pub trait LedgerRepository: Send + Sync {
    fn load(&self) -> Result<SaveState, PersistenceError>;
    fn save(&self, state: &SaveState) -> Result<(), PersistenceError>;
}

/// Best-effort startup load: any failure yields an empty ledger.
pub fn load_or_default(repo: &dyn LedgerRepository) -> SaveState {
    match repo.load() {
        Ok(state) => {
            info!(participants = state.len(), "loaded ledger");
            state
        }
        Err(PersistenceError::NotFound(path)) => {
            info!(path = %path, "no saved ledger yet; starting empty");
            SaveState::default()
        }
        Err(err) => {
            warn!(err = %err, "failed to load ledger; starting empty");
            SaveState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Broken;

    impl LedgerRepository for Broken {
        fn load(&self) -> Result<SaveState, PersistenceError> {
            Err(PersistenceError::InvalidData("truncated".to_string()))
        }

        fn save(&self, _state: &SaveState) -> Result<(), PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("disk full")))
        }
    }

    struct Memory(Mutex<Option<SaveState>>);

    impl LedgerRepository for Memory {
        fn load(&self) -> Result<SaveState, PersistenceError> {
            self.0
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| PersistenceError::NotFound("memory".to_string()))
        }

        fn save(&self, state: &SaveState) -> Result<(), PersistenceError> {
            *self.0.lock().unwrap() = Some(state.clone());
            Ok(())
        }
    }

    #[test]
    fn broken_store_starts_empty() {
        assert!(load_or_default(&Broken).is_empty());
    }

    #[test]
    fn missing_store_starts_empty() {
        let store = Memory(Mutex::new(None));
        assert!(load_or_default(&store).is_empty());
    }

    #[test]
    fn saved_state_comes_back() {
        let store = Memory(Mutex::new(None));
        let mut state = SaveState::default();
        state.participants.insert(
            "a".to_string(),
            crate::core::serialization::SavedParticipant {
                uid: "a".to_string(),
                treats: Vec::new(),
                max_combo: 2,
            },
        );
        store.save(&state).unwrap();
        assert_eq!(load_or_default(&store), state);
    }
}
