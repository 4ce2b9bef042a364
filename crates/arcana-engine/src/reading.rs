//! Durable reading records.

use arcana_core::{DrawnCard, SpreadKind};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed reading: immutable once created, appended to history and
/// never edited or removed by normal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique record id.
    pub id: Uuid,
    /// When the reading completed.
    pub created_at: DateTime<Utc>,
    /// The spread it was drawn under.
    pub spread: SpreadKind,
    /// The querent's question.
    pub question: String,
    /// The drawn cards, in spread-position order.
    pub cards: Vec<DrawnCard>,
    /// The interpretation text (possibly a gateway fallback).
    pub interpretation: String,
}

impl Reading {
    /// Create a reading record stamped with a fresh id and the current time.
    pub fn new(
        spread: SpreadKind,
        question: impl Into<String>,
        cards: Vec<DrawnCard>,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            spread,
            question: question.into(),
            cards,
            interpretation: interpretation.into(),
        }
    }
}

/// The cached daily single-card reading.
///
/// At most one exists per calendar day; a stored value whose date is not
/// today means today's card has not been drawn yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReading {
    /// The calendar day this reading belongs to.
    pub date: NaiveDate,
    /// The single drawn card.
    pub card: DrawnCard,
    /// The interpretation text (possibly a gateway fallback).
    pub interpretation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{Deck, draw};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_cards(count: usize) -> Vec<DrawnCard> {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(5);
        draw(&deck, count, &["Past", "Present", "Future"], &mut rng).unwrap()
    }

    #[test]
    fn new_reading_snapshots_cards() {
        let cards = sample_cards(3);
        let reading = Reading::new(
            SpreadKind::ThreeCard,
            "What does today hold?",
            cards.clone(),
            "Change is coming.",
        );
        assert_eq!(reading.cards, cards);
        assert_eq!(reading.spread, SpreadKind::ThreeCard);
        assert_eq!(reading.interpretation, "Change is coming.");
    }

    #[test]
    fn distinct_ids_per_reading() {
        let a = Reading::new(SpreadKind::OneCard, "q", sample_cards(1), "t");
        let b = Reading::new(SpreadKind::OneCard, "q", sample_cards(1), "t");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn reading_serde_roundtrip() {
        let reading = Reading::new(
            SpreadKind::CelticCross,
            "Should I move?",
            sample_cards(10),
            "The cards counsel patience.",
        );
        let json = serde_json::to_string(&reading).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn daily_reading_serde_roundtrip() {
        let daily = DailyReading {
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            card: sample_cards(1).remove(0),
            interpretation: "A quiet day for reflection.".to_string(),
        };
        let json = serde_json::to_string(&daily).unwrap();
        let back: DailyReading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, daily);
    }
}
