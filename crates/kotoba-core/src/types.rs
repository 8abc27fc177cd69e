use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the vocabulary table as the store hands it out.
///
/// Only `romaji` (primary key) and `kana` are required columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRow {
    pub romaji: String,
    pub kana: String,
    pub kanji: Option<String>,
    pub chinese: Option<String>,
    pub english: Option<String>,
    pub example: Option<String>,
    pub cn_meaning: Option<String>,
    pub jp_meaning: Option<String>,
    pub scene: Option<String>,
}

/// In-memory vocabulary entry
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyEntry {
    /// Synthetic per-load identifier for list rendering
    pub id: Uuid,
    pub romaji: String,
    pub kana: String,
    pub kanji: String,
    pub chinese: String,
    pub english: String,
    pub example: String,
    pub cn_meaning: String,
    pub jp_meaning: String,
    pub scene: String,
}

impl From<VocabularyRow> for VocabularyEntry {
    fn from(row: VocabularyRow) -> Self {
        Self {
            id: Uuid::new_v4(),
            romaji: row.romaji,
            kana: row.kana,
            kanji: row.kanji.unwrap_or_default(),
            chinese: row.chinese.unwrap_or_default(),
            english: row.english.unwrap_or_default(),
            example: row.example.unwrap_or_default(),
            cn_meaning: row.cn_meaning.unwrap_or_default(),
            jp_meaning: row.jp_meaning.unwrap_or_default(),
            scene: row.scene.unwrap_or_default(),
        }
    }
}

impl VocabularyEntry {
    /// Kanji form if present, otherwise kana
    pub fn headword(&self) -> &str {
        if self.kanji.is_empty() {
            &self.kana
        } else {
            &self.kanji
        }
    }
}
