//! The standard 78-card tarot deck.
//!
//! 22 major arcana trumps (0-21) followed by 14 ranked cards for each of the
//! four suits, in suit order Wands, Cups, Swords, Pentacles. The deck is
//! built once at startup and shared by reference; draws always operate on a
//! shuffled copy.

use crate::card::{Arcana, Card, Suit};
use crate::image::ImageSource;

/// The 22 major arcana trumps, in numeric order.
pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Minor arcana rank names, Ace (1) through King (14).
pub const MINOR_RANKS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

/// The full card catalog.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a standard deck.
    pub const SIZE: usize = 78;

    /// Build the standard deck, deriving face image URLs from `images`.
    ///
    /// Deterministic in content: the same catalog comes back every time, in
    /// the same order. Only [`crate::draw`] introduces randomness.
    pub fn standard(images: &ImageSource) -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);

        for (index, name) in MAJOR_ARCANA.iter().enumerate() {
            let number = index as u8;
            cards.push(Card {
                id: format!("major-{index}"),
                name: (*name).to_string(),
                short_name: (*name).to_string(),
                suit: Suit::None,
                number,
                arcana: Arcana::Major,
                meaning_upright: "Major life lesson, karma, spiritual path.".to_string(),
                meaning_reversed: "Major life lesson, karma, spiritual path.".to_string(),
                description: format!(
                    "The {name} represents a significant archetype in the journey of life."
                ),
                image: Some(images.major_image(number, name)),
            });
        }

        for suit in Suit::all() {
            for (index, rank) in MINOR_RANKS.iter().enumerate() {
                let number = (index + 1) as u8;
                cards.push(Card {
                    id: format!("minor-{suit}-{number}"),
                    name: format!("{rank} of {suit}"),
                    short_name: format!("{rank} {suit}"),
                    suit: *suit,
                    number,
                    arcana: Arcana::Minor,
                    meaning_upright: format!("Energy of {suit} in the form of {rank}."),
                    meaning_reversed: format!("Energy of {suit} in the form of {rank}."),
                    description: format!(
                        "The {rank} of {suit} pertains to everyday life aspects associated with {suit}."
                    ),
                    image: Some(images.minor_image(*suit, number)),
                });
            }
        }

        Self { cards }
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty. A standard deck never is.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a card by its stable catalog id.
    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard(&ImageSource::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_78_cards() {
        let deck = Deck::default();
        assert_eq!(deck.len(), Deck::SIZE);
        assert!(!deck.is_empty());
    }

    #[test]
    fn all_ids_distinct() {
        let deck = Deck::default();
        let ids: HashSet<&str> = deck.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), Deck::SIZE);
    }

    #[test]
    fn twenty_two_majors_numbered_in_order() {
        let deck = Deck::default();
        let majors: Vec<&Card> = deck.cards().iter().filter(|c| c.is_major()).collect();
        assert_eq!(majors.len(), 22);
        for (i, card) in majors.iter().enumerate() {
            assert_eq!(card.number as usize, i);
            assert_eq!(card.suit, Suit::None);
            assert_eq!(card.name, MAJOR_ARCANA[i]);
        }
    }

    #[test]
    fn fourteen_cards_per_suit() {
        let deck = Deck::default();
        for suit in Suit::all() {
            let ranks: Vec<u8> = deck
                .cards()
                .iter()
                .filter(|c| c.suit == *suit)
                .map(|c| c.number)
                .collect();
            assert_eq!(ranks, (1..=14).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn minor_naming() {
        let deck = Deck::default();
        let ace = deck.find("minor-Wands-1").unwrap();
        assert_eq!(ace.name, "Ace of Wands");
        assert_eq!(ace.short_name, "Ace Wands");
        let king = deck.find("minor-Pentacles-14").unwrap();
        assert_eq!(king.name, "King of Pentacles");
    }

    #[test]
    fn every_card_has_an_image_and_meanings() {
        let deck = Deck::default();
        for card in deck.cards() {
            assert!(card.image.is_some(), "{} has no image", card.id);
            assert!(!card.meaning_upright.is_empty());
            assert!(!card.description.is_empty());
        }
    }

    #[test]
    fn upright_equals_reversed_under_house_ruleset() {
        let deck = Deck::default();
        for card in deck.cards() {
            assert_eq!(card.meaning_upright, card.meaning_reversed);
        }
    }

    #[test]
    fn content_deterministic_across_builds() {
        let a = Deck::default();
        let b = Deck::default();
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn custom_source_changes_images_only() {
        let classic = Deck::standard(&ImageSource::classic());
        let custom = Deck::standard(&ImageSource::custom("https://cards.example/deck"));
        for (a, b) in classic.cards().iter().zip(custom.cards()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_ne!(a.image, b.image);
        }
        assert_eq!(
            custom.find("major-0").unwrap().image.as_deref(),
            Some("https://cards.example/deck/00-TheFool.png?v=2")
        );
    }
}
