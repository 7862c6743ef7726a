use std::collections::{HashMap, HashSet};
use std::fmt;

use super::errors::DeckError;
use crate::config::{ConfigError, DecksConfig};

/// A card identified by its value code and suit code, e.g. `AS` for the ace of spades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub value: char,
    pub suit: char,
}

impl Card {
    pub fn new(value: char, suit: char) -> Self {
        Self { value, suit }
    }

    /// Two-character code, value first
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl TryFrom<&str> for Card {
    type Error = DeckError;

    /// Parses a code of exactly two characters. Whether the card exists is up to the catalog.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(value), Some(suit), None) => Ok(Card::new(value, suit)),
            _ => Err(DeckError::InvalidCardCode(s.to_string())),
        }
    }
}

/// The immutable universe of valid cards, derived once from configuration
#[derive(Debug, Clone)]
pub struct Catalog {
    suits: HashMap<char, String>,
    values: HashMap<char, String>,
    cards: Vec<Card>,
}

impl Catalog {
    /// Builds the catalog, keying every suit and value by the first character of its name.
    ///
    /// Cards are laid out suit-major in configuration order: every value of the
    /// first suit, then every value of the second, and so on.
    pub fn new(config: &DecksConfig) -> Result<Self, ConfigError> {
        let (suits, suit_codes) = index_by_code("suit", &config.suits)?;
        let (values, value_codes) = index_by_code("value", &config.values)?;

        let cards = suit_codes
            .iter()
            .flat_map(|&suit| value_codes.iter().map(move |&value| Card::new(value, suit)))
            .collect();

        Ok(Self {
            suits,
            values,
            cards,
        })
    }

    /// All valid cards in canonical new-deck order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.suits.contains_key(&card.suit) && self.values.contains_key(&card.value)
    }

    pub fn suit_name(&self, code: char) -> Option<&str> {
        self.suits.get(&code).map(String::as_str)
    }

    pub fn value_name(&self, code: char) -> Option<&str> {
        self.values.get(&code).map(String::as_str)
    }

    /// Returns the catalog cards that appear in `selected`, in catalog order and without duplicates.
    /// Unknown cards in `selected` are ignored.
    pub fn intersect(&self, selected: &[Card]) -> Vec<Card> {
        let wanted: HashSet<&Card> = selected.iter().collect();
        self.cards
            .iter()
            .filter(|card| wanted.contains(card))
            .copied()
            .collect()
    }
}

/// Maps the first character of each name to the name, keeping the codes in input order
fn index_by_code(
    group: &'static str,
    names: &[String],
) -> Result<(HashMap<char, String>, Vec<char>), ConfigError> {
    let mut by_code: HashMap<char, String> = HashMap::with_capacity(names.len());
    let mut codes = Vec::with_capacity(names.len());

    for name in names {
        let code = name
            .chars()
            .next()
            .ok_or_else(|| ConfigError::Invalid(format!("empty {group} name")))?;

        if let Some(existing) = by_code.get(&code) {
            return Err(ConfigError::AmbiguousCode {
                group,
                code,
                first: existing.clone(),
                second: name.clone(),
            });
        }

        by_code.insert(code, name.clone());
        codes.push(code);
    }

    Ok((by_code, codes))
}
