use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::deck;
use crate::shared::AppState;

/// Builds the HTTP router for the deck API
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/deck", post(deck::create_deck))
        .route("/deck/:id/open", get(deck::open_deck))
        .route("/deck/:id/draw-cards", post(deck::draw_cards))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
