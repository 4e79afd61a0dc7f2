use fuzzy_sentence_search::api;
use fuzzy_sentence_search::cache::lru::ResultCache;
use fuzzy_sentence_search::config::{Cli, ServiceConfig};
use fuzzy_sentence_search::search::engine::FuzzyMatcher;
use fuzzy_sentence_search::search::pipeline::SearchPipeline;
use fuzzy_sentence_search::storage::memory::DocumentStore;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServiceConfig::from(Cli::parse());
    tracing::info!(
        "Cache capacity {} MiB, result limit {:?}, empty queries: {:?}",
        config.cache_capacity_mb,
        config.matcher.limit,
        config.matcher.empty_query
    );

    // 1. Shared services:
    let store = Arc::new(DocumentStore::new());
    let cache = Arc::new(ResultCache::new(config.cache_capacity_bytes()));
    let matcher = Arc::new(FuzzyMatcher::new(config.matcher.clone()));
    let pipeline = SearchPipeline::new(store, cache, matcher);

    // 2. HTTP Router:
    let app = api::router(pipeline, config.max_upload_bytes());

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
