// Library crate for the deck service
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod deck;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::build_router;
pub use config::{Config, ConfigError};
pub use deck::{
    repository::{DeckRepository, InMemoryDeckRepository},
    Card, Catalog, DeckError, DeckService,
};
pub use shared::{AppError, AppState};
