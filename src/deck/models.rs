use uuid::Uuid;

use super::catalog::Card;

/// Stored state of a deck
///
/// `cards` is fixed at creation. Drawing never touches it; instead `remaining`
/// shrinks, and the cards still in the deck are always the last `remaining`
/// entries of `cards`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckModel {
    pub id: Uuid,         // Assigned by the repository on create
    pub cards: Vec<Card>, // Full sequence in draw order
    pub shuffled: bool,   // Whether shuffling was requested at creation
    pub remaining: usize, // Number of cards not drawn yet
}

impl DeckModel {
    /// Creates an undrawn deck. The id stays nil until the deck is stored.
    pub fn new(cards: Vec<Card>, shuffled: bool) -> Self {
        let remaining = cards.len();
        Self {
            id: Uuid::nil(),
            cards,
            shuffled,
            remaining,
        }
    }

    /// Number of cards already drawn from the front
    pub fn drawn_count(&self) -> usize {
        self.cards.len() - self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// The undrawn suffix, next card to be drawn first
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.drawn_count()..]
    }

    /// Draws `count` cards off the top.
    ///
    /// Returns `None` and leaves the deck untouched if fewer than `count` cards remain.
    pub fn draw(&mut self, count: usize) -> Option<Vec<Card>> {
        if count > self.remaining {
            return None;
        }
        let skip = self.drawn_count();
        let drawn = self.cards[skip..skip + count].to_vec();
        self.remaining -= count;
        Some(drawn)
    }
}
