use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{
    catalog::{Card, Catalog},
    errors::DeckError,
    models::DeckModel,
    repository::DeckRepository,
    types::{CardResponse, CreateDeckResponse, DrawCardsResponse, OpenDeckResponse},
};

/// Service for handling deck business logic
///
/// Holds no deck state of its own: every call reads from the repository and
/// writes back through it. A draw is a get followed by a put, so concurrent
/// draws on the same deck can overwrite each other's update.
pub struct DeckService {
    repository: Arc<dyn DeckRepository + Send + Sync>,
    catalog: Arc<Catalog>,
}

impl DeckService {
    pub fn new(repository: Arc<dyn DeckRepository + Send + Sync>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Creates a new deck from the requested cards.
    ///
    /// Requested cards are matched against the catalog and kept in catalog
    /// order, once each. When nothing is requested, or nothing requested is a
    /// known card, the deck gets the whole catalog.
    #[instrument(skip(self, cards), fields(requested = cards.len()))]
    pub async fn create_deck(
        &self,
        shuffle: bool,
        cards: &[Card],
    ) -> Result<CreateDeckResponse, DeckError> {
        let mut selected = self.catalog.intersect(cards);
        if selected.is_empty() {
            debug!("No known cards requested, using full catalog");
            selected = self.catalog.cards().to_vec();
        }

        if shuffle {
            selected.shuffle(&mut rand::rng());
        }

        let deck = DeckModel::new(selected, shuffle);
        let deck_id = self.repository.create_deck(&deck).await?;

        info!(deck_id = %deck_id, shuffled = shuffle, remaining = deck.remaining, "Deck created");

        Ok(CreateDeckResponse {
            deck_id: deck_id.to_string(),
            shuffled: deck.shuffled,
            remaining: deck.remaining,
        })
    }

    /// Opens a deck, listing the cards that have not been drawn yet
    #[instrument(skip(self))]
    pub async fn open_deck(&self, deck_id: &str) -> Result<OpenDeckResponse, DeckError> {
        let id = parse_deck_id(deck_id)?;
        let deck = self.repository.get_deck(id).await?;

        if deck.is_empty() {
            warn!(deck_id = %id, "Deck has no cards remaining");
            return Err(DeckError::EmptyDeck(deck_id.to_string()));
        }

        Ok(OpenDeckResponse {
            deck_id: deck.id.to_string(),
            shuffled: deck.shuffled,
            remaining: deck.remaining,
            cards: self.describe(deck.remaining_cards()),
        })
    }

    /// Draws `count` cards off the top of the deck. Drawn cards never return.
    #[instrument(skip(self))]
    pub async fn draw_cards(
        &self,
        deck_id: &str,
        count: u8,
    ) -> Result<DrawCardsResponse, DeckError> {
        let id = parse_deck_id(deck_id)?;
        let mut deck = self.repository.get_deck(id).await?;

        let drawn = match deck.draw(usize::from(count)) {
            Some(drawn) => drawn,
            None => {
                warn!(deck_id = %id, requested = count, available = deck.remaining, "Not enough cards to draw");
                return Err(DeckError::InsufficientCards {
                    requested: count,
                    available: deck.remaining,
                    id: deck_id.to_string(),
                });
            }
        };

        self.repository.put_deck(&deck).await?;

        info!(deck_id = %id, drawn = drawn.len(), remaining = deck.remaining, "Cards drawn");

        Ok(DrawCardsResponse {
            cards: self.describe(&drawn),
        })
    }

    /// Resolves cards to their display names
    fn describe(&self, cards: &[Card]) -> Vec<CardResponse> {
        cards
            .iter()
            .map(|card| CardResponse {
                suit: self.catalog.suit_name(card.suit).unwrap_or_default().to_string(),
                value: self.catalog.value_name(card.value).unwrap_or_default().to_string(),
                code: card.code(),
            })
            .collect()
    }
}

fn parse_deck_id(deck_id: &str) -> Result<Uuid, DeckError> {
    Uuid::parse_str(deck_id).map_err(|_| DeckError::InvalidId(deck_id.to_string()))
}
