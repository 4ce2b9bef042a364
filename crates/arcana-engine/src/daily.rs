//! The date-scoped daily draw.
//!
//! One free single-card reading per calendar day. The completed result is
//! cached on the profile keyed by date; re-entering the flow on the same
//! day returns the cache without drawing or consulting the provider again.

use arcana_core::{Deck, SpreadKind, draw};
use chrono::NaiveDate;
use rand::rngs::StdRng;

use crate::error::{EngineError, EngineResult};
use crate::gateway::{InterpretationGateway, InterpretationRequest};
use crate::ledger::Profile;
use crate::reading::DailyReading;

/// The standing question put to the cards each morning.
pub const DAILY_QUESTION: &str = "What energy should I carry through today?";

/// Draw (or recall) today's card.
///
/// Free of charge and independent of the general reading history. If the
/// profile already holds a daily reading dated `today`, that cached value
/// comes back untouched; otherwise one card is drawn under the
/// [`SpreadKind::OneCard`] spread, interpreted with the daily variant, and
/// cached durably before being returned.
pub async fn draw_daily(
    profile: &mut Profile,
    deck: &Deck,
    gateway: &InterpretationGateway,
    rng: &mut StdRng,
    today: NaiveDate,
) -> EngineResult<DailyReading> {
    if let Some(cached) = profile.daily_reading() {
        if cached.date == today {
            return Ok(cached.clone());
        }
    }

    let definition = SpreadKind::OneCard.definition();
    let mut drawn = draw(deck, definition.positions.len(), definition.positions, rng)?;
    let Some(card) = drawn.pop() else {
        return Err(EngineError::Draw(arcana_core::DrawError::EmptyDraw));
    };

    let request =
        InterpretationRequest::from_drawn(SpreadKind::OneCard, DAILY_QUESTION, &[card.clone()], true);
    let interpretation = gateway.interpret(&request).await;

    let daily = DailyReading {
        date: today,
        card,
        interpretation,
    };
    profile.save_daily(daily.clone())?;
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use rand::SeedableRng;

    use super::*;
    use crate::gateway::testing::{Script, ScriptedProvider};
    use crate::gateway::FALLBACK_PROVIDER_ERROR;
    use crate::store::MemoryStore;

    fn profile() -> Profile {
        Profile::load(Box::new(MemoryStore::new()))
    }

    fn gateway(script: Script) -> (Arc<ScriptedProvider>, InterpretationGateway) {
        let provider = Arc::new(ScriptedProvider::new(script));
        let gateway = InterpretationGateway::new(Box::new(Arc::clone(&provider)));
        (provider, gateway)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[tokio::test]
    async fn first_draw_of_the_day_is_cached() {
        let deck = Deck::default();
        let mut profile = profile();
        let (provider, gw) = gateway(Script::Text("A steady day."));
        let mut rng = StdRng::seed_from_u64(1);

        let daily = draw_daily(&mut profile, &deck, &gw, &mut rng, day(6)).await.unwrap();
        assert_eq!(daily.date, day(6));
        assert_eq!(daily.card.position, "Insight");
        assert_eq!(daily.interpretation, "A steady day.");
        assert_eq!(provider.calls(), 1);
        assert_eq!(profile.daily_reading(), Some(&daily));
    }

    #[tokio::test]
    async fn same_day_reentry_short_circuits_to_the_cache() {
        let deck = Deck::default();
        let mut profile = profile();
        let (provider, gw) = gateway(Script::Text("A steady day."));
        let mut rng = StdRng::seed_from_u64(1);

        let first = draw_daily(&mut profile, &deck, &gw, &mut rng, day(6)).await.unwrap();
        let second = draw_daily(&mut profile, &deck, &gw, &mut rng, day(6)).await.unwrap();

        assert_eq!(first, second);
        // No second draw, no second provider call.
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn a_new_day_invalidates_the_cache() {
        let deck = Deck::default();
        let mut profile = profile();
        let (provider, gw) = gateway(Script::Text("Fresh winds."));
        let mut rng = StdRng::seed_from_u64(1);

        let yesterday = draw_daily(&mut profile, &deck, &gw, &mut rng, day(5)).await.unwrap();
        let today = draw_daily(&mut profile, &deck, &gw, &mut rng, day(6)).await.unwrap();

        assert_eq!(provider.calls(), 2);
        assert_ne!(yesterday.date, today.date);
        assert_eq!(profile.daily_reading(), Some(&today));
    }

    #[tokio::test]
    async fn daily_draw_is_free_and_off_the_history() {
        let deck = Deck::default();
        let mut profile = profile();
        let (_, gw) = gateway(Script::Text("Free."));
        let mut rng = StdRng::seed_from_u64(1);
        let credits_before = profile.credits();

        draw_daily(&mut profile, &deck, &gw, &mut rng, day(6)).await.unwrap();

        assert_eq!(profile.credits(), credits_before);
        assert!(profile.readings().is_empty());
    }

    #[tokio::test]
    async fn provider_outage_still_caches_a_daily_with_fallback_text() {
        let deck = Deck::default();
        let mut profile = profile();
        let (_, gw) = gateway(Script::Fail);
        let mut rng = StdRng::seed_from_u64(1);

        let daily = draw_daily(&mut profile, &deck, &gw, &mut rng, day(6)).await.unwrap();
        assert_eq!(daily.interpretation, FALLBACK_PROVIDER_ERROR);
        assert_eq!(profile.daily_reading(), Some(&daily));
    }
}
