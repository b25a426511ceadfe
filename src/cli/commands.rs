use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{EditorFlavor, ProviderConfig};
use crate::models::RecordKind;
use crate::provider::{RecentFoldersProvider, SearchProvider};
use crate::session::CancellationToken;
use crate::store::HistoryStoreReader;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "code-recents-provider")]
#[command(version)]
#[command(about = "Search a code editor's recently opened folders", long_about = None)]
pub struct Cli {
    /// Editor build whose history is searched (code, code-insiders, code-oss, codium)
    #[arg(long, global = true, default_value = "code")]
    pub editor: EditorFlavor,

    /// Use this directory instead of the platform config directory
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recently opened folders, as the desktop shell would
    Search {
        /// Substrings to look for in folder labels and uris (any may match)
        terms: Vec<String>,

        /// Maximum number of results to show
        #[arg(long, default_value_t = 10)]
        max: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a folder in the editor
    Open {
        /// Folder uri or path, as printed by `search`
        uri: String,
    },
    /// Show where the history store is and whether it can be read
    Doctor,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ProviderConfig::new(cli.editor);
    if let Some(dir) = &cli.config_dir {
        config = config.with_config_dir(dir);
    }

    match cli.command {
        Some(Commands::Search { terms, max, json }) => search(&config, terms, max, json)?,
        Some(Commands::Open { uri }) => open(&config, &uri)?,
        Some(Commands::Doctor) => doctor(&config)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn search(config: &ProviderConfig, terms: Vec<String>, max: usize, json: bool) -> Result<()> {
    let provider = RecentFoldersProvider::from_config(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let metas = runtime.block_on(async {
        let cancel = CancellationToken::new();
        let ids = provider.get_initial_result_set(terms, cancel.clone()).await;
        let ids = provider.filter_results(ids, max);
        provider.get_result_metas(ids, cancel).await
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metas).context("Failed to serialize results")?);
        return Ok(());
    }

    if metas.is_empty() {
        println!("No matching folders");
        return Ok(());
    }

    for meta in &metas {
        println!("{}", meta.name);
        println!("  {}", meta.description);
    }

    Ok(())
}

fn open(config: &ProviderConfig, uri: &str) -> Result<()> {
    let provider = RecentFoldersProvider::from_config(config)?;
    provider.activate_result(uri, &[]);
    Ok(())
}

fn doctor(config: &ProviderConfig) -> Result<()> {
    let store_path = config.store_path()?;
    let reader = HistoryStoreReader::new(&store_path);

    println!("Editor: {}", config.editor);
    println!("History store: {}", format_path_with_tilde(&store_path));

    match reader.read_records() {
        Ok(records) => {
            let folders =
                records.iter().filter(|r| matches!(r.kind(), RecordKind::Folder(_))).count();
            println!("Records: {}", records.len());
            println!("  Folders: {}", folders);
            println!("  Other (files, workspaces): {}", records.len() - folders);
        }
        Err(e) => {
            println!("Store not readable: {}", e);
        }
    }

    Ok(())
}
