use std::sync::{Arc, Mutex};

use kotoba_core::{CatalogEvent, InMemoryStore, StoreError, VocabularyRow, VocabularyStore};

use crate::state::load_catalog;

struct OfflineStore;

impl VocabularyStore for OfflineStore {
    fn read_all(&self) -> Result<Vec<VocabularyRow>, StoreError> {
        Err(StoreError::Unavailable("disk gone".to_string()))
    }
}

fn recorder() -> (
    Arc<Mutex<Vec<CatalogEvent>>>,
    impl FnMut(&CatalogEvent) + Send + Sync + 'static,
) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |event: &CatalogEvent| {
        sink.lock().unwrap().push(event.clone())
    })
}

#[test]
fn hook_sees_the_startup_load() {
    let store = InMemoryStore::new(vec![VocabularyRow {
        romaji: "neko".to_string(),
        kana: "ねこ".to_string(),
        scene: Some("animals".to_string()),
        ..VocabularyRow::default()
    }]);
    let (seen, hook) = recorder();

    let catalog = load_catalog(&store, hook);

    assert_eq!(catalog.entries().len(), 1);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![CatalogEvent::Loaded {
            entries: 1,
            scenes: 1
        }]
    );
}

#[test]
fn failed_startup_load_is_reported_and_leaves_catalog_empty() {
    let (seen, hook) = recorder();

    let catalog = load_catalog(&OfflineStore, hook);

    assert!(catalog.is_empty());
    assert_eq!(*seen.lock().unwrap(), vec![CatalogEvent::LoadFailed]);
}
