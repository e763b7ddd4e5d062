use graphql_resource::config::{load_config, Config};
use graphql_resource::error::{GraphqlResourceError, Result};
use axum::{routing::get, routing::post, Router};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>) -> Result<()> {
    let config = if Path::new(&config_path).exists() {
        tracing::info!("📖 Loading configuration from {}", config_path);
        load_config(&config_path)?
    } else {
        tracing::warn!("Config file {} not found, using defaults", config_path);
        Config::default()
    };

    let server_port = port.unwrap_or(config.server.port);

    tracing::info!("🔧 Building GraphQL schema...");

    let schema = super::demo_schema_config(config.pagination)?.finish()?;

    tracing::info!("✅ Schema built successfully");
    tracing::info!("🚀 GraphQL server running on http://localhost:{}", server_port);
    tracing::info!("📊 Playground: http://localhost:{}/graphql", server_port);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    start_http_server(schema, &config.server.bind, server_port).await
}

async fn start_http_server(
    schema: async_graphql::dynamic::Schema,
    bind: &str,
    port: u16,
) -> Result<()> {
    let schema = Arc::new(schema);

    let app = Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .route("/health", get(health_check))
        .with_state(schema)
        .layer(CorsLayer::permissive());

    let ip: IpAddr = bind.parse().map_err(|e| {
        GraphqlResourceError::Config(format!("Invalid bind address '{}': {}", bind, e))
    })?;
    let addr = SocketAddr::new(ip, port);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        GraphqlResourceError::Config(format!(
            "Failed to bind to port {}: {}. Port may be in use.",
            port, e
        ))
    })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| GraphqlResourceError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn graphql_handler(
    axum::extract::State(schema): axum::extract::State<Arc<async_graphql::dynamic::Schema>>,
    axum::Json(request): axum::Json<async_graphql::Request>,
) -> axum::Json<async_graphql::Response> {
    axum::Json(schema.execute(request).await)
}

async fn graphql_playground() -> axum::response::Html<String> {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
