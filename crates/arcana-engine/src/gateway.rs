//! The interpretation gateway and its provider port.
//!
//! The gateway is the engine's only external collaborator with real latency.
//! Providers implement [`InterpretationProvider`] and are allowed to fail;
//! the [`InterpretationGateway`] is not. Every failure mode is converted
//! into one of two fixed fallback strings, so callers always get text and
//! can only distinguish a degraded reading by its content. That weak
//! contract is deliberate and documented on the constants.

use async_trait::async_trait;

use arcana_core::{DrawnCard, SpreadKind};

/// Fixed text used when the provider answered but said nothing.
pub const FALLBACK_EMPTY_RESPONSE: &str =
    "The mists are too thick to see clearly right now. Please try again later.";

/// Fixed text used when the provider call failed outright.
pub const FALLBACK_PROVIDER_ERROR: &str =
    "The connection to the ether is disrupted. Please check your connection and try again.";

/// Errors a provider may surface. None of them escape the gateway.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not be reached or the transport failed mid-call.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with an error of its own.
    #[error("provider error: {0}")]
    Provider(String),
}

/// One card as the provider sees it: position label, name, orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCard {
    /// The spread position the card landed on.
    pub position: String,
    /// The card's full name.
    pub card_name: String,
    /// Whether the card fell reversed.
    pub is_reversed: bool,
}

/// Everything the provider needs to interpret one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretationRequest {
    /// The spread the cards were drawn under.
    pub spread: SpreadKind,
    /// The querent's question.
    pub question: String,
    /// The drawn cards, in spread-position order.
    pub cards: Vec<PlacedCard>,
    /// Whether this is the short daily single-card variant.
    pub daily: bool,
}

impl InterpretationRequest {
    /// Build a request from the session's drawn cards.
    pub fn from_drawn(
        spread: SpreadKind,
        question: impl Into<String>,
        cards: &[DrawnCard],
        daily: bool,
    ) -> Self {
        Self {
            spread,
            question: question.into(),
            cards: cards
                .iter()
                .map(|drawn| PlacedCard {
                    position: drawn.position.clone(),
                    card_name: drawn.card.name.clone(),
                    is_reversed: drawn.is_reversed,
                })
                .collect(),
            daily,
        }
    }
}

/// The text-generation port. Implementations live outside the engine.
#[async_trait]
pub trait InterpretationProvider: Send + Sync {
    /// Generate interpretation text for a request.
    async fn generate(&self, request: &InterpretationRequest) -> Result<String, ProviderError>;
}

#[async_trait]
impl<T> InterpretationProvider for std::sync::Arc<T>
where
    T: InterpretationProvider + ?Sized,
{
    async fn generate(&self, request: &InterpretationRequest) -> Result<String, ProviderError> {
        (**self).generate(request).await
    }
}

/// Provider used when no backend is configured.
///
/// Always fails, so the gateway's transport fallback applies and every flow
/// still terminates normally.
#[derive(Debug, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl InterpretationProvider for UnconfiguredProvider {
    async fn generate(&self, _request: &InterpretationRequest) -> Result<String, ProviderError> {
        Err(ProviderError::Transport(
            "no interpretation provider configured".to_string(),
        ))
    }
}

/// Wraps a provider so that interpretation can never fail.
pub struct InterpretationGateway {
    provider: Box<dyn InterpretationProvider>,
}

impl InterpretationGateway {
    /// Build a gateway over `provider`.
    pub fn new(provider: Box<dyn InterpretationProvider>) -> Self {
        Self { provider }
    }

    /// Interpret a reading.
    ///
    /// Resolves with provider text on success, [`FALLBACK_EMPTY_RESPONSE`]
    /// when the provider answered with nothing usable, and
    /// [`FALLBACK_PROVIDER_ERROR`] when the call failed. Never errors, never
    /// retries.
    pub async fn interpret(&self, request: &InterpretationRequest) -> String {
        match self.provider.generate(request).await {
            Ok(text) => {
                let cleaned = clean_interpretation(&text);
                if cleaned.is_empty() {
                    tracing::warn!(spread = %request.spread, "provider returned an empty interpretation");
                    FALLBACK_EMPTY_RESPONSE.to_string()
                } else {
                    cleaned
                }
            }
            Err(err) => {
                tracing::warn!(spread = %request.spread, %err, "interpretation call failed");
                FALLBACK_PROVIDER_ERROR.to_string()
            }
        }
    }
}

/// Strip markdown emphasis and surrounding quotes from provider output.
///
/// The persona asks for plain text, but models decorate anyway.
fn clean_interpretation(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| *c != '*' && *c != '#').collect();
    let mut cleaned = stripped.trim();
    cleaned = cleaned.strip_prefix(['"', '\'']).unwrap_or(cleaned);
    cleaned = cleaned.strip_suffix(['"', '\'']).unwrap_or(cleaned);
    cleaned.trim().to_string()
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::testing::{Script, ScriptedProvider};
    use super::*;
    use arcana_core::{Deck, draw};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn request() -> InterpretationRequest {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(3);
        let cards = draw(&deck, 3, &["Past", "Present", "Future"], &mut rng).unwrap();
        InterpretationRequest::from_drawn(SpreadKind::ThreeCard, "Where am I headed?", &cards, false)
    }

    #[test]
    fn request_from_drawn_keeps_order_and_orientation() {
        let req = request();
        assert_eq!(req.cards.len(), 3);
        assert_eq!(req.cards[0].position, "Past");
        assert_eq!(req.cards[2].position, "Future");
        assert!(req.cards.iter().all(|c| !c.is_reversed));
    }

    #[tokio::test]
    async fn successful_interpretation_passes_through_cleaned() {
        let provider = Arc::new(ScriptedProvider::new(Script::Text("**The Energy**: \"change\"")));
        let gateway = InterpretationGateway::new(Box::new(Arc::clone(&provider)));
        let text = gateway.interpret(&request()).await;
        assert_eq!(text, "The Energy: \"change");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn empty_response_maps_to_its_own_fallback() {
        let gateway = InterpretationGateway::new(Box::new(ScriptedProvider::new(Script::Empty)));
        assert_eq!(gateway.interpret(&request()).await, FALLBACK_EMPTY_RESPONSE);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_transport_fallback() {
        let gateway = InterpretationGateway::new(Box::new(ScriptedProvider::new(Script::Fail)));
        assert_eq!(gateway.interpret(&request()).await, FALLBACK_PROVIDER_ERROR);
    }

    #[tokio::test]
    async fn unconfigured_provider_degrades_not_fails() {
        let gateway = InterpretationGateway::new(Box::new(UnconfiguredProvider));
        assert_eq!(gateway.interpret(&request()).await, FALLBACK_PROVIDER_ERROR);
    }

    #[test]
    fn fallback_strings_are_distinct() {
        assert_ne!(FALLBACK_EMPTY_RESPONSE, FALLBACK_PROVIDER_ERROR);
    }

    #[test]
    fn clean_strips_markup_and_outer_quotes() {
        assert_eq!(clean_interpretation("## Title\n*bold*"), "Title\nbold");
        assert_eq!(clean_interpretation("\"quoted\""), "quoted");
        assert_eq!(clean_interpretation("  plain  "), "plain");
    }
}
