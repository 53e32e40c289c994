use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::components::treat::Treat;

/// Save state for the whole ledger: identity -> participant record.
///
/// Only durable progress is captured. The tricked gate and the running combo
/// are per-process and always start cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveState {
    pub participants: BTreeMap<String, SavedParticipant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedParticipant {
    pub uid: String,
    #[serde(default)]
    pub treats: Vec<Treat>,
    #[serde(default)]
    pub max_combo: u32,
}

impl SaveState {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Serialize a save state into JSON for persistence.
pub fn save_state_to_json(state: &SaveState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

/// Deserialize JSON back into a save state.
pub fn load_state_from_json(data: &str) -> serde_json::Result<SaveState> {
    serde_json::from_str(data)
}

/// Write a save state to a file path, replacing it atomically.
pub fn save_state_to_path<P: AsRef<Path>>(state: &SaveState, path: P) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = save_state_to_json(state).map_err(std::io::Error::other)?;
    let tmp = temp_path_for(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)
}

/// `<path>.tmp`, keeping whatever extension the save file already has.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Read a save state from a file path.
pub fn load_state_from_path<P: AsRef<Path>>(path: P) -> std::io::Result<SaveState> {
    let data = fs::read_to_string(&path)?;
    load_state_from_json(&data).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_is_identity_map() {
        let mut state = SaveState::default();
        state.participants.insert(
            "42".to_string(),
            SavedParticipant {
                uid: "42".to_string(),
                treats: vec![Treat::new(2, "fun", "expired", "Snickers")],
                max_combo: 3,
            },
        );
        let json = save_state_to_json(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["42"]["max_combo"], 3);
        assert_eq!(value["42"]["treats"][0]["condition"], "expired");
    }

    #[test]
    fn temp_file_appends_to_full_name() {
        assert_eq!(
            temp_path_for(Path::new("state.txt")),
            PathBuf::from("state.txt.tmp")
        );
        assert_eq!(
            temp_path_for(Path::new("data/halloween.json")),
            PathBuf::from("data/halloween.json.tmp")
        );
        assert_eq!(temp_path_for(Path::new("ledger")), PathBuf::from("ledger.tmp"));
    }

    #[test]
    fn legacy_records_load() {
        let raw = r#"{
          "7": {
            "uid": "7",
            "treats": [{"quantity": 1, "state": "golden", "size": "baby", "name": "Nerds"}],
            "tricked": true
          }
        }"#;
        let state = load_state_from_json(raw).unwrap();
        let saved = &state.participants["7"];
        assert_eq!(saved.max_combo, 0);
        assert_eq!(saved.treats[0].condition, "golden");
    }
}
