//! The spread catalog.
//!
//! A spread maps a name to an ordered list of position labels and a credit
//! cost. The set of spreads is closed: adding one means adding an enum
//! variant, and every match over [`SpreadKind`] is exhaustive, so an
//! unhandled spread is a compile error rather than a runtime lookup failure.

use serde::{Deserialize, Serialize};

/// The spreads a reading can be drawn under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpreadKind {
    /// A single free insight card.
    OneCard,
    /// Past, Present, Future.
    ThreeCard,
    /// The ten-position Celtic Cross.
    CelticCross,
    /// Four-card relationship spread.
    Love,
    /// Five-card career path spread.
    Career,
}

/// Static configuration for one spread kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadDefinition {
    /// Human-facing spread name.
    pub display_name: &'static str,
    /// Ordered position labels; the length is the number of cards drawn.
    pub positions: &'static [&'static str],
    /// Credit cost to run this spread.
    pub cost: u32,
}

const ONE_CARD: SpreadDefinition = SpreadDefinition {
    display_name: "Daily Insight",
    positions: &["Insight"],
    cost: 0,
};

const THREE_CARD: SpreadDefinition = SpreadDefinition {
    display_name: "Past, Present, Future",
    positions: &["Past", "Present", "Future"],
    cost: 1,
};

const LOVE: SpreadDefinition = SpreadDefinition {
    display_name: "Relationship Spread",
    positions: &["You", "Them", "Dynamic", "Outcome"],
    cost: 2,
};

const CAREER: SpreadDefinition = SpreadDefinition {
    display_name: "Career Path",
    positions: &[
        "Current Situation",
        "Obstacles",
        "Hidden Influences",
        "Advice",
        "Outcome",
    ],
    cost: 2,
};

const CELTIC_CROSS: SpreadDefinition = SpreadDefinition {
    display_name: "Celtic Cross",
    positions: &[
        "Present",
        "Challenge",
        "Past",
        "Future",
        "Above",
        "Below",
        "Advice",
        "External",
        "Hopes/Fears",
        "Outcome",
    ],
    cost: 5,
};

impl SpreadKind {
    /// All spread kinds, cheapest first.
    pub fn all() -> &'static [SpreadKind] {
        &[
            Self::OneCard,
            Self::ThreeCard,
            Self::Love,
            Self::Career,
            Self::CelticCross,
        ]
    }

    /// The static configuration for this spread.
    pub fn definition(self) -> &'static SpreadDefinition {
        match self {
            Self::OneCard => &ONE_CARD,
            Self::ThreeCard => &THREE_CARD,
            Self::CelticCross => &CELTIC_CROSS,
            Self::Love => &LOVE,
            Self::Career => &CAREER,
        }
    }

    /// Number of cards this spread draws.
    pub fn card_count(self) -> usize {
        self.definition().positions.len()
    }

    /// Credit cost of this spread.
    pub fn cost(self) -> u32 {
        self.definition().cost
    }

    /// Parse a spread from a user-supplied name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "one" | "one card" | "daily" | "daily insight" => Some(Self::OneCard),
            "three" | "three card" | "past present future" => Some(Self::ThreeCard),
            "celtic" | "celtic cross" => Some(Self::CelticCross),
            "love" | "relationship" | "relationship spread" => Some(Self::Love),
            "career" | "career path" => Some(Self::Career),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.definition().display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_spreads() {
        assert_eq!(SpreadKind::all().len(), 5);
    }

    #[test]
    fn position_counts() {
        assert_eq!(SpreadKind::OneCard.card_count(), 1);
        assert_eq!(SpreadKind::ThreeCard.card_count(), 3);
        assert_eq!(SpreadKind::Love.card_count(), 4);
        assert_eq!(SpreadKind::Career.card_count(), 5);
        assert_eq!(SpreadKind::CelticCross.card_count(), 10);
    }

    #[test]
    fn costs() {
        assert_eq!(SpreadKind::OneCard.cost(), 0);
        assert_eq!(SpreadKind::ThreeCard.cost(), 1);
        assert_eq!(SpreadKind::Love.cost(), 2);
        assert_eq!(SpreadKind::Career.cost(), 2);
        assert_eq!(SpreadKind::CelticCross.cost(), 5);
    }

    #[test]
    fn three_card_positions_in_order() {
        assert_eq!(
            SpreadKind::ThreeCard.definition().positions,
            &["Past", "Present", "Future"]
        );
    }

    #[test]
    fn celtic_cross_ends_with_outcome() {
        let positions = SpreadKind::CelticCross.definition().positions;
        assert_eq!(positions.first(), Some(&"Present"));
        assert_eq!(positions.last(), Some(&"Outcome"));
    }

    #[test]
    fn parse_variants() {
        assert_eq!(SpreadKind::parse("celtic-cross"), Some(SpreadKind::CelticCross));
        assert_eq!(SpreadKind::parse("THREE"), Some(SpreadKind::ThreeCard));
        assert_eq!(SpreadKind::parse("relationship"), Some(SpreadKind::Love));
        assert_eq!(SpreadKind::parse("daily insight"), Some(SpreadKind::OneCard));
        assert_eq!(SpreadKind::parse("career_path"), Some(SpreadKind::Career));
        assert_eq!(SpreadKind::parse("gibberish"), None);
    }

    #[test]
    fn display_uses_catalog_name() {
        assert_eq!(SpreadKind::ThreeCard.to_string(), "Past, Present, Future");
        assert_eq!(SpreadKind::CelticCross.to_string(), "Celtic Cross");
    }

    #[test]
    fn serde_roundtrip() {
        for kind in SpreadKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            let back: SpreadKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }
}
