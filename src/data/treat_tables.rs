use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_QUANTITY: u32 = 20;

const SIZES: &[&str] = &[
    "full", "fun", "family", "kid", "baby", "American", "industrial", "elephant", "decent",
];

const CONDITIONS: &[&str] = &[
    "prized",
    "golden",
    "limited-edition",
    "clean",
    "fresh",
    "mint-condition",
    "moldy",
    "expired",
    "suspicious-looking",
    "old",
    "suspect",
    "ok-looking",
    "meh",
    "strange-smelling",
    "musty",
];

const NAMES: &[&str] = &[
    "Snickers",
    "Milky ways",
    "Mars bars",
    "Pods",
    "Bountys",
    "Cadburys",
    "Freddo Frogs",
    "Caramello Koalas",
    "Aero bars",
    "Nerds",
    "Sour worms",
    "Sour Skittles",
    "Skittles",
    "Warheads",
    "Wizz Fizzes",
    "Minties",
    "5 gum",
    "Grapes",
    "Apples",
    "Toothbrushes",
    "Life-lessons",
];

/// The three word lists a treat is assembled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatTables {
    pub sizes: Vec<String>,
    pub conditions: Vec<String>,
    pub names: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for TreatTables {
    fn default() -> Self {
        Self {
            sizes: owned(SIZES),
            conditions: owned(CONDITIONS),
            names: owned(NAMES),
        }
    }
}

#[derive(Debug)]
pub enum TableError {
    Io { path: String, source: std::io::Error },
    Json { path: String, source: serde_json::Error },
    Validation(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Io { path, source } => write!(f, "failed to read {}: {}", path, source),
            TableError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
            TableError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for TableError {}

pub fn load_treat_tables(path: impl AsRef<Path>) -> Result<TreatTables, TableError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let tables: TreatTables = serde_json::from_str(&raw).map_err(|source| TableError::Json {
        path: path.display().to_string(),
        source,
    })?;
    tables.validate()?;
    Ok(tables)
}

impl TreatTables {
    pub fn validate(&self) -> Result<(), TableError> {
        for (label, list) in [
            ("sizes", &self.sizes),
            ("conditions", &self.conditions),
            ("names", &self.names),
        ] {
            if list.is_empty() {
                return Err(TableError::Validation(format!(
                    "treat table {} cannot be empty",
                    label
                )));
            }
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(TableError::Validation(format!(
                    "treat table {} has a blank entry",
                    label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let tables = TreatTables::default();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.sizes.len(), 9);
        assert_eq!(tables.conditions.len(), 15);
        assert_eq!(tables.names.len(), 21);
    }

    #[test]
    fn empty_list_is_rejected() {
        let tables = TreatTables {
            names: Vec::new(),
            ..TreatTables::default()
        };
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("names"));
    }

    #[test]
    fn blank_entry_is_rejected() {
        let mut tables = TreatTables::default();
        tables.sizes.push("  ".to_string());
        assert!(matches!(tables.validate(), Err(TableError::Validation(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_treat_tables("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
