use color_eyre::eyre::{WrapErr, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A single flashcard.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    /// Stable identifier, unique within the deck.
    pub id: String,
    /// Prompt side.
    pub front: String,
    /// Answer side.
    pub back: String,
    /// Relative selection weight. Defaults to 1.0.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Free-form labels, shown in the card view.
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_weight() -> f64 {
    1.0
}

/// A deck of flashcards loaded from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    pub title: String,
    pub cards: Vec<Card>,
    /// Id to position lookup, built after deserialization.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Deck {
    /// Loads and validates a deck from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> color_eyre::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read deck file {}", path.display()))?;
        let mut deck: Deck = serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse deck file {}", path.display()))?;
        deck.validate()?;
        deck.build_index();
        info!("Loaded deck '{}' with {} cards", deck.title, deck.cards.len());
        Ok(deck)
    }

    /// Builds a deck from already-materialized cards, with the same
    /// validation as a file load.
    pub fn from_cards(title: impl Into<String>, cards: Vec<Card>) -> color_eyre::Result<Self> {
        let mut deck = Deck {
            title: title.into(),
            cards,
            index: HashMap::new(),
        };
        deck.validate()?;
        deck.build_index();
        Ok(deck)
    }

    fn validate(&self) -> color_eyre::Result<()> {
        if self.cards.is_empty() {
            bail!("deck '{}' contains no cards", self.title);
        }
        let mut seen = HashMap::new();
        for (position, card) in self.cards.iter().enumerate() {
            if card.id.is_empty() {
                bail!("card at position {} has an empty id", position);
            }
            if let Some(first) = seen.insert(card.id.as_str(), position) {
                bail!(
                    "duplicate card id '{}' (positions {} and {})",
                    card.id,
                    first,
                    position
                );
            }
            if !card.weight.is_finite() || card.weight <= 0.0 {
                bail!("card '{}' has invalid weight {}", card.id, card.weight);
            }
        }
        Ok(())
    }

    fn build_index(&mut self) {
        self.index = self
            .cards
            .iter()
            .enumerate()
            .map(|(position, card)| (card.id.clone(), position))
            .collect();
    }

    /// Looks a card up by id.
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&position| &self.cards[position])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
