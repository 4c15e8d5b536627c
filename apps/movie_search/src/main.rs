use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    config::{load_settings, DEFAULT_CONFIG_PATH},
    CatalogClient, Dispatch, SearchController, SearchStore, StalePolicy,
};
use shared::state::SearchEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(about = "Search the movie catalog")]
struct Args {
    /// Movie name to search for. Starts an interactive prompt when omitted.
    query: Vec<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long)]
    api_key: Option<String>,
    /// Drop results of searches superseded by a newer one.
    #[arg(long)]
    latest_only: bool,
}

struct Session {
    store: Arc<SearchStore>,
    controller: SearchController,
    image_base: String,
}

impl Session {
    fn show(&self) {
        println!("{}", render::render(&self.store.snapshot(), &self.image_base));
    }

    async fn submit(&self, text: &str) {
        self.store.dispatch(SearchEvent::InputChanged(text.to_string()));
        let query = self.store.snapshot().query;
        let search = self.controller.search(&query);
        self.show();
        search.await;
        self.show();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config);
    if let Some(api_key) = args.api_key {
        settings.api_key = api_key;
    }
    if settings.api_key.is_empty() {
        tracing::warn!("no catalog api key configured; requests will likely be rejected");
    }

    let client = CatalogClient::new(&settings).context("failed to set up catalog client")?;
    tracing::debug!(endpoint = %client.endpoint(), "catalog client ready");

    let policy = if args.latest_only {
        StalePolicy::LatestIssued
    } else {
        StalePolicy::LastSettled
    };
    let store = Arc::new(SearchStore::new());
    let session = Session {
        controller: SearchController::new(Arc::new(client), store.clone())
            .with_stale_policy(policy),
        store,
        image_base: settings.image_base_url,
    };

    if !args.query.is_empty() {
        session.submit(&args.query.join(" ")).await;
        return Ok(());
    }

    session.show();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        session.submit(line).await;
    }

    Ok(())
}
