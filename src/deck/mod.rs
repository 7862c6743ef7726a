// Public API - what other modules can use
pub use catalog::{Card, Catalog};
pub use errors::DeckError;
pub use handlers::{create_deck, draw_cards, open_deck};
pub use service::DeckService;

// Internal modules
pub mod catalog;
pub mod errors;
mod handlers;
pub mod models;
pub mod repository;
mod service;
pub mod types;
