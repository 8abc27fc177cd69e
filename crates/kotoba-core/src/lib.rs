pub mod catalog;
pub mod store;
pub mod types;

pub use catalog::{CatalogEvent, LoadError, VocabularyCatalog};
pub use store::{InMemoryStore, StoreError, VocabularyStore};
pub use types::{VocabularyEntry, VocabularyRow};
