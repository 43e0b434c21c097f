use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};

use super::BlogSchema;
use crate::config::ServerSettings;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn router(schema: BlogSchema, playground: bool) -> Router {
    let route = if playground {
        get(graphiql).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };
    Router::new().route(GRAPHQL_PATH, route)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

/// Serves the schema over HTTP until Ctrl-C.
pub async fn run_server(schema: BlogSchema, settings: &ServerSettings) -> std::io::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, playground = settings.playground, "GraphQL server listening");

    axum::serve(listener, router(schema, settings.playground))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
