//! Reading engine for Arcana.
//!
//! This crate drives a tarot reading end to end: the session state machine
//! ([`ReadingSession`]) walks spread selection, question capture, the draw,
//! strictly-ordered reveals, and the single awaited interpretation call; the
//! [`Profile`] owns the persisted user aggregate (credits, reading history,
//! cached daily card) and writes a full snapshot after every mutation; the
//! [`InterpretationGateway`] turns a fallible text-generation provider into
//! a call that always produces text.

/// The date-scoped daily draw.
pub mod daily;
/// Error types used throughout the crate.
pub mod error;
/// The interpretation gateway and its provider port.
pub mod gateway;
/// The user ledger: credits, history, and the daily cache.
pub mod ledger;
/// Prompt assembly for the interpretation provider.
pub mod prompt;
/// Durable reading records.
pub mod reading;
/// The reading session state machine.
pub mod session;
/// Blob persistence for the user aggregate.
pub mod store;

/// Re-export the daily draw entry point.
pub use daily::draw_daily;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export gateway types.
pub use gateway::{
    FALLBACK_EMPTY_RESPONSE, FALLBACK_PROVIDER_ERROR, InterpretationGateway,
    InterpretationProvider, InterpretationRequest, PlacedCard, ProviderError,
    UnconfiguredProvider,
};
/// Re-export the ledger.
pub use ledger::{Profile, UserState};
/// Re-export record types.
pub use reading::{DailyReading, Reading};
/// Re-export session types.
pub use session::{Phase, ReadingSession, RevealOutcome};
/// Re-export persistence types.
pub use store::{FileStore, MemoryStore, StateStore, StoreError};
