use kotoba_config::Config;
use kotoba_core::{CatalogEvent, VocabularyCatalog, VocabularyStore};
use kotoba_lookup::LookupSession;

/// Everything the shell's event loop mutates
pub struct AppState {
    pub config: Config,
    pub catalog: VocabularyCatalog,
    pub session: LookupSession,
}

impl AppState {
    pub fn new(config: Config, catalog: VocabularyCatalog) -> Self {
        let session = LookupSession::new(config.lookup.cooldown());

        Self {
            config,
            catalog,
            session,
        }
    }
}

pub fn log_catalog_event(event: &CatalogEvent) {
    tracing::debug!("Catalog changed: {:?}", event);
}

/// Build a catalog with `hook` attached, then load it from `store`.
///
/// A failed load leaves an empty catalog; the shell still works for lookups.
pub fn load_catalog<S, F>(store: &S, hook: F) -> VocabularyCatalog
where
    S: VocabularyStore + ?Sized,
    F: FnMut(&CatalogEvent) + Send + Sync + 'static,
{
    let mut catalog = VocabularyCatalog::new();
    catalog.on_change(hook);

    match catalog.load(store) {
        Ok(count) => tracing::info!("Catalog ready with {} words", count),
        Err(e) => tracing::error!("Failed to load vocabulary: {}", e),
    }
    catalog
}
