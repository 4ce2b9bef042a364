//! The user ledger: credits, reading history, and the daily cache.
//!
//! Exactly one [`UserState`] exists per installation. It is loaded once at
//! startup, held in memory as the single source of truth, and written back
//! through the [`StateStore`] after every mutation — persistence completes
//! before a mutation counts as done.

use serde::{Deserialize, Serialize};

use crate::reading::{DailyReading, Reading};
use crate::store::{StateStore, StoreError};

/// Credits a fresh installation starts with.
pub const STARTING_CREDITS: u32 = 3;

/// Credits restored by the demo top-up action.
pub const DEMO_CREDITS: u32 = 5;

/// The persisted user aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    /// Spendable credit balance. Never negative.
    pub credits: u32,
    /// Completed readings, newest first.
    pub readings: Vec<Reading>,
    /// Today's cached single-card reading, if drawn.
    pub daily_reading: Option<DailyReading>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            credits: STARTING_CREDITS,
            readings: Vec::new(),
            daily_reading: None,
        }
    }
}

/// The owning context for the user aggregate.
///
/// Wraps the in-memory [`UserState`] together with its [`StateStore`] and is
/// passed by reference to whichever component needs the ledger, the history,
/// or the daily cache.
pub struct Profile {
    state: UserState,
    store: Box<dyn StateStore>,
}

impl Profile {
    /// Load the profile from `store`.
    ///
    /// An absent blob starts a fresh profile; a malformed or unreadable one
    /// is replaced by defaults with a warning. Loading never fails.
    pub fn load(store: Box<dyn StateStore>) -> Self {
        let state = match store.load() {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(state) => state,
                Err(err) => {
                    tracing::warn!(%err, "persisted profile is malformed, starting fresh");
                    UserState::default()
                }
            },
            Ok(None) => UserState::default(),
            Err(err) => {
                tracing::warn!(%err, "persisted profile is unreadable, starting fresh");
                UserState::default()
            }
        };
        Self { state, store }
    }

    /// Current credit balance.
    pub fn credits(&self) -> u32 {
        self.state.credits
    }

    /// Completed readings, newest first.
    pub fn readings(&self) -> &[Reading] {
        &self.state.readings
    }

    /// The cached daily reading, if any.
    pub fn daily_reading(&self) -> Option<&DailyReading> {
        self.state.daily_reading.as_ref()
    }

    /// A snapshot of the full aggregate.
    pub fn state(&self) -> &UserState {
        &self.state
    }

    /// Atomically check and spend `amount` credits.
    ///
    /// Returns `true` and persists when the balance covers the amount;
    /// otherwise leaves the state untouched and returns `false`. The balance
    /// can never go negative.
    pub fn deduct(&mut self, amount: u32) -> Result<bool, StoreError> {
        if self.state.credits < amount {
            return Ok(false);
        }
        self.state.credits -= amount;
        self.persist()?;
        Ok(true)
    }

    /// Prepend a completed reading to the history.
    pub fn append_reading(&mut self, reading: Reading) -> Result<(), StoreError> {
        self.state.readings.insert(0, reading);
        self.persist()
    }

    /// Replace the cached daily reading.
    pub fn save_daily(&mut self, daily: DailyReading) -> Result<(), StoreError> {
        self.state.daily_reading = Some(daily);
        self.persist()
    }

    /// Demo-only top-up: restore the balance to [`DEMO_CREDITS`].
    pub fn reset_credits(&mut self) -> Result<(), StoreError> {
        self.state.credits = DEMO_CREDITS;
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string_pretty(&self.state)?;
        self.store.save(&blob)
    }
}
