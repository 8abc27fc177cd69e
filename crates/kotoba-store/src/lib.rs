//! SQLite-backed vocabulary table and the bulk CSV import that seeds it.

mod csv;
mod error;
mod sqlite;

pub use csv::{CSV_COLUMNS, ParsedCsv, parse_vocabulary_csv};
pub use error::{DbError, DbResult};
pub use sqlite::{ImportSummary, SqliteVocabularyStore};
