use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{errors::DeckError, models::DeckModel};

/// Trait for deck repository operations
///
/// Every call returns or stores a copy, so callers never alias stored state.
/// Individual calls are atomic; a get followed by a put is not.
#[async_trait]
pub trait DeckRepository {
    /// Stores a copy of `deck` under a freshly generated id and returns that id
    async fn create_deck(&self, deck: &DeckModel) -> Result<Uuid, DeckError>;
    async fn get_deck(&self, deck_id: Uuid) -> Result<DeckModel, DeckError>;
    /// Overwrites (or inserts) the deck stored under `deck.id`
    async fn put_deck(&self, deck: &DeckModel) -> Result<(), DeckError>;
    async fn delete_deck(&self, deck_id: Uuid) -> Result<(), DeckError>;
}

/// In-memory implementation of DeckRepository
///
/// A single read/write lock guards the whole map. Data is lost when the
/// process exits.
pub struct InMemoryDeckRepository {
    decks: RwLock<HashMap<Uuid, DeckModel>>,
}

impl Default for InMemoryDeckRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDeckRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            decks: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the current number of stored decks
    pub async fn deck_count(&self) -> usize {
        self.decks.read().await.len()
    }
}

#[async_trait]
impl DeckRepository for InMemoryDeckRepository {
    #[instrument(skip(self, deck))]
    async fn create_deck(&self, deck: &DeckModel) -> Result<Uuid, DeckError> {
        let mut decks = self.decks.write().await;

        // v4 collisions are practically impossible, but an issued id must never be reused
        let mut id = Uuid::new_v4();
        while decks.contains_key(&id) {
            warn!(deck_id = %id, "Generated deck id already in use, regenerating");
            id = Uuid::new_v4();
        }

        let mut stored = deck.clone();
        stored.id = id;
        decks.insert(id, stored);

        debug!(deck_id = %id, card_count = deck.cards.len(), "Deck created in memory");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_deck(&self, deck_id: Uuid) -> Result<DeckModel, DeckError> {
        let decks = self.decks.read().await;

        match decks.get(&deck_id) {
            Some(deck) => {
                debug!(deck_id = %deck_id, remaining = deck.remaining, "Deck found in memory");
                Ok(deck.clone())
            }
            None => {
                debug!(deck_id = %deck_id, "Deck not found in memory");
                Err(DeckError::NotFound(deck_id.to_string()))
            }
        }
    }

    #[instrument(skip(self, deck))]
    async fn put_deck(&self, deck: &DeckModel) -> Result<(), DeckError> {
        let mut decks = self.decks.write().await;
        decks.insert(deck.id, deck.clone());

        debug!(deck_id = %deck.id, remaining = deck.remaining, "Deck stored in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_deck(&self, deck_id: Uuid) -> Result<(), DeckError> {
        let mut decks = self.decks.write().await;
        if decks.remove(&deck_id).is_none() {
            warn!(deck_id = %deck_id, "Deck not found for deletion in memory");
            return Err(DeckError::NotFound(deck_id.to_string()));
        }

        debug!(deck_id = %deck_id, "Deck deleted from memory");
        Ok(())
    }
}
