use decks::{build_router, AppState, Catalog, Config, InMemoryDeckRepository};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decks=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting deck server");

    // Configuration problems are fatal: nothing is served with a partial setup
    let config_path = Config::path_from_env();
    let config = match Config::from_path(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %config_path.display(), error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::new(&config.decks) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "Bad deck configuration");
            std::process::exit(1);
        }
    };
    info!(card_count = catalog.len(), "Card catalog built");

    let deck_repository = Arc::new(InMemoryDeckRepository::new());
    let app_state = AppState::new(deck_repository, Arc::new(catalog));

    let app = build_router(app_state);

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    info!("Server running on http://{}", address);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server stopped with error");
        std::process::exit(1);
    }
}
