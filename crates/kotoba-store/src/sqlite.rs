use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use kotoba_core::{StoreError, VocabularyRow, VocabularyStore};
use rusqlite::{Connection, Row, params};

use crate::csv::parse_vocabulary_csv;
use crate::error::{DbError, DbResult};

const CREATE_VOCABULARY_SQL: &str = "CREATE TABLE IF NOT EXISTS vocabulary (
    romaji TEXT PRIMARY KEY NOT NULL,
    kana TEXT NOT NULL,
    kanji TEXT,
    chinese TEXT,
    english TEXT,
    example TEXT,
    cn_meaning TEXT,
    jp_meaning TEXT,
    scene TEXT
)";

const SELECT_VOCABULARY_SQL: &str = "SELECT
    romaji, kana, kanji, chinese, english, example, cn_meaning, jp_meaning, scene
FROM vocabulary";

const INSERT_OR_IGNORE_SQL: &str = "INSERT OR IGNORE INTO vocabulary
    (romaji, kana, kanji, chinese, english, example, cn_meaning, jp_meaning, scene)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

/// Outcome of a bulk CSV import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub parsed: usize,
    pub inserted: usize,
    /// Rows whose romaji already existed
    pub duplicates: usize,
    pub short_lines: usize,
}

/// Vocabulary table in a SQLite file, keyed by `romaji`
pub struct SqliteVocabularyStore {
    conn: Mutex<Connection>,
}

impl SqliteVocabularyStore {
    /// Open (or create) the database file and ensure the table exists
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        tracing::info!("Opening vocabulary database at {}", path.display());
        Self::bootstrap(Connection::open(path)?)
    }

    pub fn open_in_memory() -> DbResult<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> DbResult<Self> {
        conn.execute(CREATE_VOCABULARY_SQL, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| DbError::Poisoned)
    }

    pub fn count(&self) -> DbResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM vocabulary", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Insert rows in one transaction, ignoring existing primary keys.
    ///
    /// Returns how many rows were actually inserted.
    pub fn insert_or_ignore(&self, rows: &[VocabularyRow]) -> DbResult<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(INSERT_OR_IGNORE_SQL)?;
            for row in rows {
                inserted += stmt.execute(params![
                    row.romaji,
                    row.kana,
                    row.kanji,
                    row.chinese,
                    row.english,
                    row.example,
                    row.cn_meaning,
                    row.jp_meaning,
                    row.scene,
                ])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    /// Parse CSV text and insert its rows
    pub fn import_csv(&self, text: &str) -> DbResult<ImportSummary> {
        let started_at = Instant::now();
        let parsed = parse_vocabulary_csv(text);
        let inserted = self.insert_or_ignore(&parsed.rows)?;

        let summary = ImportSummary {
            parsed: parsed.rows.len(),
            inserted,
            duplicates: parsed.rows.len() - inserted,
            short_lines: parsed.short_lines,
        };
        tracing::info!(
            "CSV import: {} inserted, {} duplicates, {} short lines skipped in {}ms",
            summary.inserted,
            summary.duplicates,
            summary.short_lines,
            started_at.elapsed().as_millis()
        );
        Ok(summary)
    }

    pub fn import_csv_file(&self, path: impl AsRef<Path>) -> DbResult<ImportSummary> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_csv(&text)
    }

    /// Import `path` only while the table is still empty.
    ///
    /// Returns `None` when the table already holds data.
    pub fn import_csv_if_empty(&self, path: impl AsRef<Path>) -> DbResult<Option<ImportSummary>> {
        if self.count()? > 0 {
            tracing::debug!("Vocabulary table already populated, skipping CSV import");
            return Ok(None);
        }
        self.import_csv_file(path).map(Some)
    }

    fn read_rows(&self) -> DbResult<Vec<VocabularyRow>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_VOCABULARY_SQL)?;
        let rows = stmt
            .query_map([], map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl VocabularyStore for SqliteVocabularyStore {
    fn read_all(&self) -> Result<Vec<VocabularyRow>, StoreError> {
        self.read_rows().map_err(StoreError::backend)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<VocabularyRow> {
    Ok(VocabularyRow {
        romaji: row.get(0)?,
        kana: row.get(1)?,
        kanji: row.get(2)?,
        chinese: row.get(3)?,
        english: row.get(4)?,
        example: row.get(5)?,
        cn_meaning: row.get(6)?,
        jp_meaning: row.get(7)?,
        scene: row.get(8)?,
    })
}
