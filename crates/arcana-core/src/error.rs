/// Alias for `Result<T, DrawError>`.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors that can occur when drawing cards.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// A draw must request at least one card.
    #[error("cannot draw zero cards")]
    EmptyDraw,

    /// More cards were requested than the deck holds.
    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards {
        /// Cards the caller asked for.
        requested: usize,
        /// Cards actually in the deck.
        available: usize,
    },
}
