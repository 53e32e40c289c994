pub mod treat_tables;

pub use treat_tables::{load_treat_tables, TableError, TreatTables, DEFAULT_MAX_QUANTITY};
