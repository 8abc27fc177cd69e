use crate::types::VocabularyRow;

/// Flat vocabulary table read wholesale
pub trait VocabularyStore: Send + Sync {
    /// Read every row of the table
    fn read_all(&self) -> Result<Vec<VocabularyRow>, StoreError>;
}

/// Store backed by a plain vector, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rows: Vec<VocabularyRow>,
}

impl InMemoryStore {
    pub fn new(rows: Vec<VocabularyRow>) -> Self {
        Self { rows }
    }

    /// Insert a row unless its romaji key already exists.
    ///
    /// Returns whether the row was inserted.
    pub fn insert_or_ignore(&mut self, row: VocabularyRow) -> bool {
        if self.rows.iter().any(|r| r.romaji == row.romaji) {
            return false;
        }
        self.rows.push(row);
        true
    }
}

impl VocabularyStore for InMemoryStore {
    fn read_all(&self) -> Result<Vec<VocabularyRow>, StoreError> {
        Ok(self.rows.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }
}
