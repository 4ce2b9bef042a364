//! Tarot card types.

use serde::{Deserialize, Serialize};

/// The suit of a minor arcana card. Major arcana cards carry [`Suit::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Fire: will, action, ambition.
    Wands,
    /// Water: emotion, intuition, relationships.
    Cups,
    /// Air: thought, conflict, truth.
    Swords,
    /// Earth: material life, work, the body.
    Pentacles,
    /// No suit — the card is a major arcana.
    None,
}

impl Suit {
    /// The four actual suits, in deck order.
    pub fn all() -> &'static [Suit] {
        &[Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles]
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Whether a card belongs to the major or minor arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    /// The 22 trumps, numbered 0-21.
    Major,
    /// The 56 suited cards, Ace through King.
    Minor,
}

/// One entry in the card catalog.
///
/// Cards are constructed once, as part of [`crate::Deck::standard`], and are
/// never mutated afterwards. A card embedded in a persisted reading is a
/// snapshot of the catalog entry at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable catalog key, e.g. `major-0` or `minor-Cups-3`.
    pub id: String,
    /// Full display name, e.g. "The Tower" or "Ace of Wands".
    pub name: String,
    /// Compact name for tight layouts, e.g. "Ace Wands".
    pub short_name: String,
    /// The card's suit, or [`Suit::None`] for major arcana.
    pub suit: Suit,
    /// Major: 0-21. Minor: 1 (Ace) through 14 (King).
    pub number: u8,
    /// Major or minor arcana.
    pub arcana: Arcana,
    /// Meaning when the card falls upright.
    pub meaning_upright: String,
    /// Meaning when the card falls reversed.
    pub meaning_reversed: String,
    /// A short description of the card's archetype.
    pub description: String,
    /// Face image URL, if the configured image source provides one.
    ///
    /// Absence is not an error — callers render a textual card face instead.
    pub image: Option<String>,
}

impl Card {
    /// Whether this card is a major arcana trump.
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }
}

/// A card bound to its context within one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// Snapshot of the drawn catalog card.
    pub card: Card,
    /// Whether the card fell reversed.
    ///
    /// The current ruleset reads every card upright, so this is always
    /// `false`; the field stays so a future ruleset only has to change the
    /// draw step.
    pub is_reversed: bool,
    /// The spread position this card landed on, e.g. "The Past".
    pub position: String,
}
