use kanal::AsyncSender;
use kotoba_core::VocabularyCatalog;

use crate::state::AppState;
use crate::ui::UiUpdate;

/// Filter the catalog and describe what is now visible
pub fn prefix_search_update(catalog: &mut VocabularyCatalog, query: &str) -> UiUpdate {
    catalog.search_by_prefix(query);

    let entries: Vec<_> = catalog.visible().into_iter().cloned().collect();
    tracing::debug!("Prefix '{}': {} entries", query.trim(), entries.len());

    let title = if query.trim().is_empty() {
        "All words".to_string()
    } else {
        format!("Words starting with '{}'", query.trim())
    };
    UiUpdate::Entries { title, entries }
}

pub fn scenes_update(catalog: &VocabularyCatalog) -> UiUpdate {
    let scenes = catalog
        .scenes()
        .iter()
        .map(|scene| (scene.clone(), catalog.entries_for_scene(scene).len()))
        .collect();

    UiUpdate::Scenes(scenes)
}

pub fn scene_update(catalog: &VocabularyCatalog, scene: &str) -> UiUpdate {
    let entries: Vec<_> = catalog
        .entries_for_scene(scene)
        .into_iter()
        .cloned()
        .collect();

    if entries.is_empty() {
        UiUpdate::Message(format!("No words in scene '{scene}'"))
    } else {
        UiUpdate::Entries {
            title: format!("Scene '{scene}'"),
            entries,
        }
    }
}

pub async fn handle_prefix_search(
    state: &mut AppState,
    query: &str,
    app_to_ui_tx: &AsyncSender<UiUpdate>,
) -> anyhow::Result<()> {
    let update = prefix_search_update(&mut state.catalog, query);
    app_to_ui_tx.send(update).await?;
    Ok(())
}

pub async fn handle_scenes(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<UiUpdate>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(scenes_update(&state.catalog)).await?;
    Ok(())
}

pub async fn handle_scene(
    state: &AppState,
    scene: &str,
    app_to_ui_tx: &AsyncSender<UiUpdate>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(scene_update(&state.catalog, scene)).await?;
    Ok(())
}
