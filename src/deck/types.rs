use serde::{Deserialize, Serialize};

/// Raw query string as ordered key/value pairs. Repeated keys are kept, so
/// extraction never fails on a duplicate.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`; later repeats are ignored
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Query parameters for `POST /deck`
///
/// Kept as raw strings so malformed values are reported by the handler.
#[derive(Debug, Default, PartialEq)]
pub struct CreateDeckParams {
    pub shuffle: Option<String>,
    pub cards: Option<String>,
}

impl CreateDeckParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            shuffle: first_value(pairs, "shuffle"),
            cards: first_value(pairs, "cards"),
        }
    }
}

/// Query parameters for `POST /deck/{id}/draw-cards`
#[derive(Debug, Default, PartialEq)]
pub struct DrawCardsParams {
    pub draw: Option<String>,
}

impl DrawCardsParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            draw: first_value(pairs, "draw"),
        }
    }
}

/// A card resolved to its display names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardResponse {
    pub suit: String,  // Full suit name
    pub value: String, // Full value name
    pub code: String,  // Value code followed by suit code
}

/// Response for deck creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

/// Response for opening a deck, listing the cards not drawn yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenDeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<CardResponse>,
}

/// Response for drawing cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawCardsResponse {
    pub cards: Vec<CardResponse>,
}
