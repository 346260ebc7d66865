pub mod handlers;
pub mod types;
pub mod views;

use crate::{
    Result,
    config::{Config, ServerConfig},
    inventory::InventoryStore,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

/// Routes for the JSON API and the HTML pages.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/add-item", get(handlers::add_item_form))
        .route(
            "/inventory",
            get(handlers::list_inventory).post(handlers::create_item),
        )
        .route(
            "/inventory/:id",
            put(handlers::update_item).delete(handlers::delete_item),
        )
        .route("/inventory/:id/update", post(handlers::update_item_redirect))
        .with_state(state)
}

/// [`router`] plus static assets and the HTTP layers configured for `server`.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    let mut app = router(state)
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .layer(TraceLayer::new_for_http());

    if server.cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

pub async fn run(config: Config) -> Result<()> {
    let store = InventoryStore::open(&config.storage.path).await?;
    let app = app(AppState::new(store), &config.server);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
