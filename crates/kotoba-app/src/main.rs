use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kotoba_config::Config;
use kotoba_core::VocabularyCatalog;
use kotoba_lookup::{JishoClient, LookupSession};
use kotoba_store::SqliteVocabularyStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub mod cards;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod speech;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::local_search::{prefix_search_update, scene_update, scenes_update};
use self::speech::{CommandSpeaker, Speaker, speaker_from_config};
use self::state::AppState;
use self::ui::{UiUpdate, render};

#[derive(Parser)]
#[command(name = "kotoba", version, about = "Japanese vocabulary by scene, with online lookup")]
struct Cli {
    /// JSON config file; environment variables are used when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Import a vocabulary CSV into the database
    Import {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Local words whose romaji, kana, kanji, Chinese or English start with PREFIX
    Search { prefix: String },
    /// List scenes with their word counts
    Scenes,
    /// Words of one scene
    Scene { name: String },
    /// Search the online dictionary
    Lookup { keyword: String },
    /// Read text aloud
    Speak {
        text: String,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Interactive shell (default)
    Shell,
    /// Print the effective configuration as JSON
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = profile::load_config(cli.config.as_deref())?;
    init_tracing(config.log_json);
    match &cli.config {
        Some(path) => tracing::info!("Config loaded from {}", path.display()),
        None => tracing::debug!("Config taken from the environment"),
    }

    match cli.command.unwrap_or(Command::Shell) {
        Command::Import { csv } => import(&config, csv.as_deref()),
        Command::Search { prefix } => {
            let mut catalog = load_catalog(&config)?;
            print(&prefix_search_update(&mut catalog, &prefix));
            Ok(())
        }
        Command::Scenes => {
            let catalog = load_catalog(&config)?;
            print(&scenes_update(&catalog));
            Ok(())
        }
        Command::Scene { name } => {
            let catalog = load_catalog(&config)?;
            print(&scene_update(&catalog, &name));
            Ok(())
        }
        Command::Lookup { keyword } => lookup(&config, &keyword).await,
        Command::Speak { text, lang } => {
            let language = lang.unwrap_or_else(|| config.speech.language.clone());
            CommandSpeaker::from_config(&config.speech)
                .speak_blocking(&text, &language)
                .await
                .with_context(|| format!("speaking with {}", config.speech.program))
        }
        Command::Shell => shell(config).await,
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stderr keeps stdout for cards
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print(update: &UiUpdate) {
    let text = render(update);
    if !text.is_empty() {
        println!("{text}");
    }
}

fn open_store(config: &Config) -> anyhow::Result<SqliteVocabularyStore> {
    SqliteVocabularyStore::open(&config.store.db_path)
        .with_context(|| format!("opening database {}", config.store.db_path))
}

/// Open the database, seeding it from the bundled CSV the first time
fn open_seeded_store(config: &Config) -> anyhow::Result<SqliteVocabularyStore> {
    let store = open_store(config)?;

    if let Some(csv_path) = &config.store.csv_path {
        if Path::new(csv_path).exists() {
            match store.import_csv_if_empty(csv_path) {
                Ok(Some(summary)) => {
                    tracing::info!("Seeded {} words from {}", summary.inserted, csv_path)
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Startup import of {} failed: {}", csv_path, e),
            }
        } else {
            tracing::debug!("No CSV at {}, skipping startup import", csv_path);
        }
    }

    Ok(store)
}

fn load_catalog(config: &Config) -> anyhow::Result<VocabularyCatalog> {
    let store = open_seeded_store(config)?;
    Ok(state::load_catalog(&store, state::log_catalog_event))
}

fn import(config: &Config, csv: Option<&Path>) -> anyhow::Result<()> {
    let path = match csv {
        Some(path) => path.to_path_buf(),
        None => config
            .store
            .csv_path
            .as_ref()
            .map(PathBuf::from)
            .context("no CSV given and no csv_path configured")?,
    };

    let store = open_store(config)?;
    let summary = store
        .import_csv_file(&path)
        .with_context(|| format!("importing {}", path.display()))?;

    println!(
        "Imported {} words from {} ({} already present, {} short lines skipped)",
        summary.inserted,
        path.display(),
        summary.duplicates,
        summary.short_lines
    );
    Ok(())
}

async fn lookup(config: &Config, keyword: &str) -> anyhow::Result<()> {
    let client = JishoClient::new(config.lookup.clone());
    let mut session = LookupSession::new(config.lookup.cooldown());

    session.submit(&client, keyword).await;

    print(&UiUpdate::RemoteResults {
        words: session.ranked().into_iter().cloned().collect(),
        message: session.error_message().map(str::to_string),
    });
    Ok(())
}

async fn shell(config: Config) -> anyhow::Result<()> {
    let catalog = load_catalog(&config)?;
    let client = Arc::new(JishoClient::new(config.lookup.clone()));
    let speaker: Arc<dyn Speaker> = Arc::from(speaker_from_config(&config.speech));
    let interactive = atty::is(atty::Stream::Stdin);

    if interactive {
        println!("{}", events::HELP);
    }

    let controller = AppController::new();
    let state = AppState::new(config, catalog);
    let mut tasks = controller.spawn_tasks(
        state,
        client,
        speaker,
        BufReader::new(std::io::stdin()),
        interactive,
    )?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            log_task_exit(result);
        }
    }
    controller.shutdown();

    while let Some(result) = tasks.join_next().await {
        log_task_exit(result);
    }
    Ok(())
}

fn log_task_exit(result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => tracing::debug!("Task exited"),
        Ok(Err(e)) => tracing::error!("Task failed: {:#}", e),
        Err(e) => tracing::error!("Task panicked: {}", e),
    }
}
