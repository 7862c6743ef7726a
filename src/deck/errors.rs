use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeckError {
    #[error("error parsing id: {0}")]
    InvalidId(String),

    #[error("data not found for id: {0}")]
    NotFound(String),

    #[error("no cards remaining in deck id: {0}")]
    EmptyDeck(String),

    #[error("{requested} card(s) requested, but deck id {id} has only {available} card(s) left")]
    InsufficientCards {
        requested: u8,
        available: usize,
        id: String,
    },

    #[error("invalid card code: {0}")]
    InvalidCardCode(String),
}
