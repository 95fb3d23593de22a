use std::future::Future;
use std::net::SocketAddr;

use user_directory_lib::graphql;
use user_directory_lib::{SchemaError, StoreError, UserStore};

pub mod config;
pub mod http;
pub mod logging;

pub use config::ServerConfig;
pub use http::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid listen host `{0}`: expected an IP address")]
    InvalidAddress(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("executable schema does not satisfy schema.graphqls: {0}")]
    Schema(#[from] SchemaError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/**
 * Builds the schema over `store`, checks it against the SDL contract, binds
 * the configured address and serves GraphQL until `shutdown` resolves.
 */
pub async fn serve<F>(config: &ServerConfig, store: UserStore, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let schema = graphql::schema();
    graphql::verify_schema(&schema)?;

    let addr = config.bind_addr()?;
    let users = store.len();
    let app = http::router(AppState::new(schema, store));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, users, "server ready at http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
