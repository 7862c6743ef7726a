use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::deck::{catalog::Catalog, errors::DeckError, repository::DeckRepository};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub deck_repository: Arc<dyn DeckRepository + Send + Sync>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(
        deck_repository: Arc<dyn DeckRepository + Send + Sync>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            deck_repository,
            catalog,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("invalid parameter {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },
}

impl IntoResponse for AppError {
    /// Every failure is reported as 500 with an `{"error": ...}` body,
    /// whether the caller or the server is at fault.
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
