//! Entry point for the `mailbin-gateway` HTTP server.

use std::sync::Arc;

use mailbin_gateway::{
    config::Config,
    routes::{create_router, AppState},
};
use mailbin_store::{InboxService, InboxStore, MemoryStore, SqliteStore};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn InboxStore> = match &config.db_path {
        Some(path) => match SqliteStore::open(path).await {
            Ok(s) => Arc::new(s),
            Err(e) => {
                tracing::error!(db = %path.display(), error = %e, "failed to open store");
                std::process::exit(1);
            }
        },
        None => {
            info!("MAILBIN_DB not set, inboxes are held in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let service = InboxService::new(store, config.domains.clone());
    let app = create_router(Arc::new(AppState {
        service,
        api_key: config.api_key.clone(),
    }));

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "mailbin-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
