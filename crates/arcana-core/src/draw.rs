//! Shuffling and drawing cards.
//!
//! A draw shuffles a fresh copy of the full deck and takes the first `count`
//! cards, so a single draw can never contain duplicates. The shared catalog
//! is never mutated.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, DrawnCard};
use crate::deck::Deck;
use crate::error::{DrawError, DrawResult};

/// Return a uniformly random permutation of `cards`.
///
/// Fisher-Yates via [`SliceRandom::shuffle`], applied to a copy.
pub fn shuffle(cards: &[Card], rng: &mut StdRng) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Draw `count` cards from a shuffled copy of `deck`, binding each to its
/// position label by index.
///
/// `positions` should supply at least `count` labels; a missing label falls
/// back to a synthetic `Position N`. Requesting zero cards or more cards
/// than the deck holds is a [`DrawError`].
pub fn draw(
    deck: &Deck,
    count: usize,
    positions: &[&str],
    rng: &mut StdRng,
) -> DrawResult<Vec<DrawnCard>> {
    if count == 0 {
        return Err(DrawError::EmptyDraw);
    }
    if count > deck.len() {
        return Err(DrawError::NotEnoughCards {
            requested: count,
            available: deck.len(),
        });
    }

    let shuffled = shuffle(deck.cards(), rng);
    let drawn = shuffled
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, card)| DrawnCard {
            card,
            // House ruleset: every card is read upright.
            is_reversed: false,
            position: positions
                .get(i)
                .map(|label| (*label).to_string())
                .unwrap_or_else(|| format!("Position {}", i + 1)),
        })
        .collect();

    Ok(drawn)
}
