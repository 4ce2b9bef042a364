//! The reading session state machine.
//!
//! A session drives exactly one reading: pick a spread, capture the
//! question (paying the spread's cost), draw, reveal the cards strictly in
//! order, then make the single awaited interpretation call and record the
//! result. Misuse — revealing out of order, interpreting early, operating
//! in the wrong phase — is either a reported no-op or a recoverable error,
//! never a panic. The card-zoom overlay is an orthogonal sub-state over the
//! revealing and result phases and returns to whichever phase it was opened
//! from.

use arcana_core::{Deck, DrawnCard, SpreadKind, draw};
use rand::rngs::StdRng;

use crate::error::{EngineError, EngineResult};
use crate::gateway::{InterpretationGateway, InterpretationRequest};
use crate::ledger::Profile;
use crate::reading::Reading;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing a spread from the catalog.
    SelectingSpread,
    /// Entering the question the cards should speak to.
    CapturingQuestion,
    /// Credits are paid; the deck is about to be dealt.
    Shuffling,
    /// Cards are dealt face down and revealed one at a time.
    Revealing,
    /// The interpretation request is in flight.
    Interpreting,
    /// The reading is complete.
    Result,
}

impl Phase {
    /// Human-readable phase name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::SelectingSpread => "selecting a spread",
            Self::CapturingQuestion => "capturing the question",
            Self::Shuffling => "shuffling",
            Self::Revealing => "revealing cards",
            Self::Interpreting => "interpreting",
            Self::Result => "showing the result",
        }
    }
}

/// What a reveal attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The card at `index` was turned face up.
    Revealed {
        /// Index of the card that was revealed.
        index: usize,
        /// Whether that was the last face-down card.
        all_revealed: bool,
    },
    /// The card was already face up; the zoom overlay opened on it instead.
    Zoomed {
        /// Index of the card being inspected.
        index: usize,
    },
    /// The index was not the next in sequence; nothing changed.
    OutOfOrder,
}

/// A single reading in progress.
pub struct ReadingSession<'a> {
    deck: &'a Deck,
    rng: StdRng,
    phase: Phase,
    spread: Option<SpreadKind>,
    question: String,
    cards: Vec<DrawnCard>,
    revealed: usize,
    zoomed: Option<usize>,
}

impl<'a> ReadingSession<'a> {
    /// Start a fresh session over `deck`, shuffling with `rng`.
    pub fn new(deck: &'a Deck, rng: StdRng) -> Self {
        Self {
            deck,
            rng,
            phase: Phase::SelectingSpread,
            spread: None,
            question: String::new(),
            cards: Vec::new(),
            revealed: 0,
            zoomed: None,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The selected spread, once one is chosen.
    pub fn spread(&self) -> Option<SpreadKind> {
        self.spread
    }

    /// The submitted question.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The dealt cards, in spread-position order.
    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    /// How many cards are face up.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Whether every dealt card is face up.
    pub fn all_revealed(&self) -> bool {
        !self.cards.is_empty() && self.revealed == self.cards.len()
    }

    /// The card currently under the zoom overlay, if open.
    pub fn zoomed(&self) -> Option<&DrawnCard> {
        self.zoomed.and_then(|index| self.cards.get(index))
    }

    fn require(&self, expected: Phase, operation: &'static str) -> EngineResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase {
                operation,
                phase: self.phase.name(),
            })
        }
    }

    fn selected(&self) -> EngineResult<SpreadKind> {
        self.spread.ok_or(EngineError::InvalidPhase {
            operation: "continue without a spread",
            phase: self.phase.name(),
        })
    }

    /// Choose a spread.
    ///
    /// Affordability is checked here defensively even though the UI may
    /// already disable spreads over budget; the binding check happens again
    /// at question submit.
    pub fn select_spread(&mut self, profile: &Profile, kind: SpreadKind) -> EngineResult<()> {
        self.require(Phase::SelectingSpread, "select a spread")?;
        let cost = kind.cost();
        if cost > profile.credits() {
            return Err(EngineError::InsufficientCredits {
                needed: cost,
                available: profile.credits(),
            });
        }
        self.spread = Some(kind);
        self.phase = Phase::CapturingQuestion;
        Ok(())
    }

    /// Return from question capture to spread selection.
    pub fn back_to_selection(&mut self) -> EngineResult<()> {
        self.require(Phase::CapturingQuestion, "go back to spread selection")?;
        self.spread = None;
        self.phase = Phase::SelectingSpread;
        Ok(())
    }

    /// Submit the question and pay for the spread.
    ///
    /// The balance is re-checked atomically here, not just at selection
    /// time. On failure the session stays in question capture and nothing
    /// is deducted.
    pub fn submit_question(&mut self, profile: &mut Profile, text: &str) -> EngineResult<()> {
        self.require(Phase::CapturingQuestion, "submit a question")?;
        let question = text.trim();
        if question.is_empty() {
            return Err(EngineError::EmptyQuestion);
        }
        let spread = self.selected()?;
        if !profile.deduct(spread.cost())? {
            return Err(EngineError::InsufficientCredits {
                needed: spread.cost(),
                available: profile.credits(),
            });
        }
        self.question = question.to_string();
        self.phase = Phase::Shuffling;
        Ok(())
    }

    /// Deal the cards for the selected spread.
    ///
    /// Moves from shuffling to revealing. The shuffle pause the user sees
    /// is presentation pacing; the engine deals immediately.
    pub fn deal(&mut self) -> EngineResult<&[DrawnCard]> {
        self.require(Phase::Shuffling, "deal the cards")?;
        let spread = self.selected()?;
        let definition = spread.definition();
        self.cards = draw(
            self.deck,
            definition.positions.len(),
            definition.positions,
            &mut self.rng,
        )?;
        self.revealed = 0;
        self.phase = Phase::Revealing;
        Ok(&self.cards)
    }

    /// Attempt to reveal the card at `index`.
    ///
    /// Cards reveal strictly in index order: only the next unrevealed index
    /// turns a card over. Re-tapping a face-up card opens the zoom overlay
    /// on it; anything else is a no-op reported as
    /// [`RevealOutcome::OutOfOrder`].
    pub fn reveal(&mut self, index: usize) -> EngineResult<RevealOutcome> {
        self.require(Phase::Revealing, "reveal a card")?;
        if index >= self.cards.len() {
            return Ok(RevealOutcome::OutOfOrder);
        }
        if index < self.revealed {
            self.zoomed = Some(index);
            return Ok(RevealOutcome::Zoomed { index });
        }
        if index == self.revealed {
            self.revealed += 1;
            return Ok(RevealOutcome::Revealed {
                index,
                all_revealed: self.revealed == self.cards.len(),
            });
        }
        Ok(RevealOutcome::OutOfOrder)
    }

    /// Open the zoom overlay on a visible card.
    ///
    /// Allowed over the revealing phase (face-up cards only) and the result
    /// phase (any card).
    pub fn zoom(&mut self, index: usize) -> EngineResult<()> {
        match self.phase {
            Phase::Revealing => {
                if index >= self.cards.len() {
                    Err(EngineError::NoSuchCard(index))
                } else if index >= self.revealed {
                    Err(EngineError::HiddenCard(index))
                } else {
                    self.zoomed = Some(index);
                    Ok(())
                }
            }
            Phase::Result => {
                if index >= self.cards.len() {
                    Err(EngineError::NoSuchCard(index))
                } else {
                    self.zoomed = Some(index);
                    Ok(())
                }
            }
            _ => Err(EngineError::InvalidPhase {
                operation: "inspect a card",
                phase: self.phase.name(),
            }),
        }
    }

    /// Close the zoom overlay, returning to the underlying phase.
    pub fn close_zoom(&mut self) {
        self.zoomed = None;
    }

    /// Make the interpretation call and record the completed reading.
    ///
    /// Only legal once every card is revealed. The session sits in
    /// [`Phase::Interpreting`] while the call is in flight, which blocks a
    /// second interpretation request for the same reading. The gateway
    /// always resolves — on provider failure the reading is recorded with
    /// the gateway's fallback text — and the reading is durably appended to
    /// history before the session shows the result.
    pub async fn interpret(
        &mut self,
        profile: &mut Profile,
        gateway: &InterpretationGateway,
    ) -> EngineResult<Reading> {
        self.require(Phase::Revealing, "interpret the reading")?;
        if self.revealed < self.cards.len() {
            return Err(EngineError::RevealIncomplete {
                revealed: self.revealed,
                total: self.cards.len(),
            });
        }
        let spread = self.selected()?;
        self.phase = Phase::Interpreting;
        self.zoomed = None;

        let request =
            InterpretationRequest::from_drawn(spread, self.question.clone(), &self.cards, false);
        let interpretation = gateway.interpret(&request).await;

        let reading = Reading::new(spread, self.question.clone(), self.cards.clone(), interpretation);
        profile.append_reading(reading.clone())?;
        self.phase = Phase::Result;
        Ok(reading)
    }

    /// Start over: clear the in-memory reading and return to spread
    /// selection. Persisted history is untouched.
    pub fn reset(&mut self) -> EngineResult<()> {
        self.require(Phase::Result, "start a new reading")?;
        self.spread = None;
        self.question.clear();
        self.cards.clear();
        self.revealed = 0;
        self.zoomed = None;
        self.phase = Phase::SelectingSpread;
        Ok(())
    }
}
