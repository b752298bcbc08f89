use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tour_search::catalog::client::GraphqlCatalogClient;
use tour_search::config::Config;
use tour_search::search::handlers::{handle_index_status, handle_reindex, handle_search};
use tour_search::search::service::IndexService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::load(&args)?;

    tracing::info!("Catalog endpoint: {}", config.graphql_endpoint);
    tracing::info!(
        "Catalog locale: {}, index TTL: {:?}",
        config.locale,
        config.index_ttl
    );

    // 1. Catalog client + index service:
    let client = GraphqlCatalogClient::new(config.graphql_endpoint.clone(), config.locale.clone());
    let service = Arc::new(IndexService::with_ttl(client, config.index_ttl));

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api/search", get(handle_search::<GraphqlCatalogClient>))
        .route("/internal/reindex", post(handle_reindex::<GraphqlCatalogClient>))
        .route(
            "/internal/index/status",
            get(handle_index_status::<GraphqlCatalogClient>),
        )
        .layer(Extension(service));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
