//! Core types for Arcana: the tarot deck, spreads, and card draws.
//!
//! This crate is pure and synchronous — it knows nothing about persistence
//! or interpretation. You can build a [`Deck`], look up a [`SpreadKind`]'s
//! configuration, and [`draw`] cards from a shuffled copy of the deck.

/// Card types: suits, arcana, catalog entries, and per-draw bindings.
pub mod card;
/// The standard 78-card deck.
pub mod deck;
/// Shuffling and drawing without replacement.
pub mod draw;
/// Error types used throughout the crate.
pub mod error;
/// Card image URL conventions.
pub mod image;
/// The spread catalog: position labels and credit costs per spread.
pub mod spread;

/// Re-export card types.
pub use card::{Arcana, Card, DrawnCard, Suit};
/// Re-export the deck.
pub use deck::Deck;
/// Re-export draw operations.
pub use draw::{draw, shuffle};
/// Re-export error types.
pub use error::{DrawError, DrawResult};
/// Re-export image source configuration.
pub use image::ImageSource;
/// Re-export spread types.
pub use spread::{SpreadDefinition, SpreadKind};
