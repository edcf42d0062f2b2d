// src/main.rs

//! The census entry point: opens the registry, heals the user collection,
//! and prints an inventory/compliance summary per ministry. With
//! `--export <dir>` it also writes the two dated CSV export files.

use anyhow::{Context, Result};
use chrono::Utc;
use patrimoine::config::Config;
use patrimoine::core::catalog::{AssetCatalog, compliance, valuation};
use patrimoine::core::contacts::ContactRegistry;
use patrimoine::core::directory::UserDirectory;
use patrimoine::core::storage::FileRecordStore;
use patrimoine::core::tabular;
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "patrimoine.toml";

#[tokio::main]
async fn main() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--version".to_string()) {
        println!("Patrimoine version {VERSION}");
        return Ok(());
    }

    // An explicit --config path must exist; the default path falls back to
    // built-in defaults when the file is absent.
    let config = match args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
    {
        Some(path) => match Config::from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load configuration from \"{path}\": {e}");
                std::process::exit(1);
            }
        },
        None => match Config::from_file(DEFAULT_CONFIG_PATH) {
            Ok(cfg) => cfg,
            Err(_) => Config::default(),
        },
    };

    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .compact()
        .with_ansi(true)
        .init();

    let export_dir = args
        .iter()
        .position(|arg| arg == "--export")
        .and_then(|i| args.get(i + 1))
        .cloned();

    if let Err(e) = run_census(config, export_dir).await {
        error!("Census run failed: {}", e);
        return Err(e);
    }
    Ok(())
}

async fn run_census(config: Config, export_dir: Option<String>) -> Result<()> {
    let store = Arc::new(FileRecordStore::open(&config.data_dir).await?);
    let today = Utc::now().date_naive();

    let directory = UserDirectory::open(store.clone()).await?;
    let contacts = ContactRegistry::open(store.clone()).await?;
    let catalog = AssetCatalog::open(store.clone()).await?;

    info!(
        "Registry opened: {} user(s), {} ministry contact(s), {} declared asset(s).",
        directory.users().len(),
        contacts.contacts().len(),
        catalog.assets().len()
    );

    let total_value: f64 = catalog.assets().iter().map(|a| a.value).sum();
    let live_value: f64 = catalog
        .assets()
        .iter()
        .map(|a| valuation::compute_current_value(a, today))
        .sum();
    info!(
        "Acquisition value {:.0} MRU, depreciated value {:.0} MRU as of {}.",
        total_value, live_value, today
    );

    for contact in contacts.contacts() {
        let (status, last) = compliance::ministry_compliance(catalog.assets(), &contact.id, today);
        let owned = catalog
            .assets()
            .iter()
            .filter(|a| a.ministry_id == contact.id)
            .count();
        info!(
            "{}: {} asset(s), status {}, last submission {}",
            contact.name.fr,
            owned,
            status,
            last.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
        );
    }

    if let Some(dir) = export_dir {
        let dir = Path::new(&dir);
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create export directory '{}'", dir.display()))?;

        let assets_path = dir.join(tabular::export_file_name("patrimoine_biens_export", today));
        tokio::fs::write(&assets_path, tabular::assets_to_csv(catalog.assets())).await?;
        info!("Asset export written to {}", assets_path.display());

        let contacts_path =
            dir.join(tabular::export_file_name("annuaire_contacts_export", today));
        tokio::fs::write(&contacts_path, tabular::contacts_to_csv(contacts.contacts())).await?;
        info!("Contact export written to {}", contacts_path.display());
    }

    Ok(())
}
