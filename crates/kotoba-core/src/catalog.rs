use std::collections::BTreeSet;

use crate::store::{StoreError, VocabularyStore};
use crate::types::VocabularyEntry;

/// State change reported to the registered hook after each mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    Loaded { entries: usize, scenes: usize },
    LoadFailed,
    Filtered { query: String, visible: usize },
}

pub type ChangeHook = Box<dyn FnMut(&CatalogEvent) + Send + Sync>;

/// In-memory vocabulary list with a prefix-filtered view and scene index.
///
/// `load` is the only way entries change. Filtering never drops entries,
/// it only narrows what `visible` returns.
#[derive(Default)]
pub struct VocabularyCatalog {
    entries: Vec<VocabularyEntry>,
    /// Indices into `entries`; `None` means everything is visible
    visible: Option<Vec<usize>>,
    scenes: Vec<String>,
    on_change: Option<ChangeHook>,
}

impl VocabularyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the hook invoked after `load` and `search_by_prefix`
    pub fn on_change<F>(&mut self, hook: F)
    where
        F: FnMut(&CatalogEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(hook));
    }

    /// Replace the catalog with every row of `store`.
    ///
    /// A failed read leaves the catalog empty, never half-loaded.
    pub fn load<S>(&mut self, store: &S) -> Result<usize, LoadError>
    where
        S: VocabularyStore + ?Sized,
    {
        match store.read_all() {
            Ok(rows) => {
                self.entries = rows.into_iter().map(VocabularyEntry::from).collect();
                self.visible = None;
                self.scenes = collect_scenes(&self.entries);

                tracing::info!(
                    "Loaded {} vocabulary entries in {} scenes",
                    self.entries.len(),
                    self.scenes.len()
                );
                self.notify(CatalogEvent::Loaded {
                    entries: self.entries.len(),
                    scenes: self.scenes.len(),
                });

                Ok(self.entries.len())
            }
            Err(e) => {
                tracing::warn!("Vocabulary load failed, catalog reset: {}", e);
                self.entries.clear();
                self.visible = None;
                self.scenes.clear();
                self.notify(CatalogEvent::LoadFailed);

                Err(LoadError::Store(e))
            }
        }
    }

    /// Narrow the visible view to entries with a field starting with `query`.
    ///
    /// Romaji and English compare case-insensitively, kana/kanji/chinese
    /// compare literally. A blank query shows everything again.
    pub fn search_by_prefix(&mut self, query: &str) {
        let query = query.trim();

        if query.is_empty() {
            self.visible = None;
        } else {
            let folded = query.to_lowercase();
            let matched = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| matches_prefix(entry, query, &folded))
                .map(|(idx, _)| idx)
                .collect();
            self.visible = Some(matched);
        }

        let visible = self.visible_len();
        tracing::debug!("Prefix '{}' -> {} visible entries", query, visible);
        self.notify(CatalogEvent::Filtered {
            query: query.to_string(),
            visible,
        });
    }

    /// Every entry whose scene is exactly `scene`, ignoring the current filter
    pub fn entries_for_scene(&self, scene: &str) -> Vec<&VocabularyEntry> {
        self.entries.iter().filter(|e| e.scene == scene).collect()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn visible(&self) -> Vec<&VocabularyEntry> {
        match &self.visible {
            None => self.entries.iter().collect(),
            Some(indices) => indices.iter().map(|&idx| &self.entries[idx]).collect(),
        }
    }

    pub fn visible_len(&self) -> usize {
        self.visible
            .as_ref()
            .map_or(self.entries.len(), |indices| indices.len())
    }

    /// Distinct non-empty scenes, sorted
    pub fn scenes(&self) -> &[String] {
        &self.scenes
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn notify(&mut self, event: CatalogEvent) {
        if let Some(hook) = self.on_change.as_mut() {
            hook(&event);
        }
    }
}

fn matches_prefix(entry: &VocabularyEntry, query: &str, folded: &str) -> bool {
    entry.kana.starts_with(query)
        || entry.kanji.starts_with(query)
        || entry.romaji.to_lowercase().starts_with(folded)
        || entry.chinese.starts_with(query)
        || entry.english.to_lowercase().starts_with(folded)
}

fn collect_scenes(entries: &[VocabularyEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| !e.scene.is_empty())
        .map(|e| e.scene.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read vocabulary table: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::store::InMemoryStore;
    use crate::types::VocabularyRow;

    struct BrokenStore;

    impl VocabularyStore for BrokenStore {
        fn read_all(&self) -> Result<Vec<crate::types::VocabularyRow>, StoreError> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }
    }

    fn row(romaji: &str, kana: &str, english: &str, scene: &str) -> VocabularyRow {
        VocabularyRow {
            romaji: romaji.to_string(),
            kana: kana.to_string(),
            english: Some(english.to_string()),
            scene: Some(scene.to_string()),
            ..VocabularyRow::default()
        }
    }

    #[test]
    fn missing_columns_become_empty_strings() {
        let store = InMemoryStore::new(vec![VocabularyRow {
            romaji: "sushi".to_string(),
            kana: "すし".to_string(),
            ..VocabularyRow::default()
        }]);
        let mut catalog = VocabularyCatalog::new();
        catalog.load(&store).unwrap();

        let entry = &catalog.entries()[0];
        assert_eq!(entry.kanji, "");
        assert_eq!(entry.scene, "");
        assert_eq!(entry.headword(), "すし");
        assert!(catalog.scenes().is_empty());
    }

    #[test]
    fn scenes_are_sorted_and_deduplicated() {
        let store = InMemoryStore::new(vec![
            row("eki", "えき", "station", "travel"),
            row("mizu", "みず", "water", "restaurant"),
            row("kippu", "きっぷ", "ticket", "travel"),
            row("hai", "はい", "yes", ""),
        ]);
        let mut catalog = VocabularyCatalog::new();
        catalog.load(&store).unwrap();

        assert_eq!(catalog.scenes(), ["restaurant", "travel"]);
    }

    #[test]
    fn failed_load_resets_previous_state() {
        let mut catalog = VocabularyCatalog::new();
        catalog
            .load(&InMemoryStore::new(vec![row("eki", "えき", "station", "travel")]))
            .unwrap();
        catalog.search_by_prefix("e");

        let result = catalog.load(&BrokenStore);

        assert!(matches!(result, Err(LoadError::Store(_))));
        assert!(catalog.is_empty());
        assert!(catalog.visible().is_empty());
        assert!(catalog.scenes().is_empty());
    }

    #[test]
    fn hook_sees_every_mutation() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let mut catalog = VocabularyCatalog::new();
        catalog.on_change(move |event| sink.lock().unwrap().push(event.clone()));

        catalog
            .load(&InMemoryStore::new(vec![row("eki", "えき", "station", "travel")]))
            .unwrap();
        catalog.search_by_prefix("  sta ");
        let _ = catalog.load(&BrokenStore);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                CatalogEvent::Loaded {
                    entries: 1,
                    scenes: 1
                },
                CatalogEvent::Filtered {
                    query: "sta".to_string(),
                    visible: 1
                },
                CatalogEvent::LoadFailed,
            ]
        );
    }

    #[test]
    fn scene_query_ignores_active_filter() {
        let store = InMemoryStore::new(vec![
            row("eki", "えき", "station", "travel"),
            row("kippu", "きっぷ", "ticket", "travel"),
        ]);
        let mut catalog = VocabularyCatalog::new();
        catalog.load(&store).unwrap();
        catalog.search_by_prefix("ticket");

        assert_eq!(catalog.visible_len(), 1);
        assert_eq!(catalog.entries_for_scene("travel").len(), 2);
        assert!(catalog.entries_for_scene("Travel").is_empty());
    }
}
