//! Prompt assembly for the interpretation provider.
//!
//! The persona and the card listing format are the whole contract with the
//! text-generation backend; everything else about the response is free-form
//! prose. Daily single-card draws get a shorter length guidance than full
//! spreads.

use crate::gateway::InterpretationRequest;

/// System instruction establishing the reader persona and its ethics.
pub const SYSTEM_INSTRUCTION: &str = "\
You are Arcana, an intuitive tarot reader and teacher.
Your style is mystical, minimalist, and deeply empowering.
You teach intuitive reading, focusing on the querent's own intuition alongside the fundamentals.
You DO NOT use reversed meanings; you interpret every card upright, focusing on the energy present.
Your ethics are strict: you do not predict fixed fates, death, or medical diagnoses. You offer guidance to empower the querent to make their own choices.

Structure your response:
1. The Energy: a brief intuitive feel of the card(s).
2. The Guidance: practical and spiritual advice based on the position in the spread.
3. Intuitive Prompt: a question that triggers the querent's own intuition.

Keep the tone calm and soft. Respond in plain text without markdown markup.";

/// Build the user-turn prompt for a request.
pub fn build_user_prompt(request: &InterpretationRequest) -> String {
    let mut cards_description = String::new();
    for (index, placed) in request.cards.iter().enumerate() {
        let orientation = if placed.is_reversed {
            "Reversed"
        } else {
            "Upright"
        };
        cards_description.push_str(&format!(
            "{}. {}: {} ({orientation})\n",
            index + 1,
            placed.position,
            placed.card_name,
        ));
    }

    let guidance = if request.daily {
        "This is a single-card daily insight. Keep the interpretation to a few short sentences."
    } else {
        "Please provide an interpretation of these cards in the context of the question and the position they fell in."
    };

    format!(
        "Reading Type: {}\nQuerent's Question: \"{}\"\n\nCards Drawn:\n{}\n{}",
        request.spread, request.question, cards_description, guidance
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::PlacedCard;
    use arcana_core::SpreadKind;

    fn request() -> InterpretationRequest {
        InterpretationRequest {
            spread: SpreadKind::ThreeCard,
            question: "What does today hold?".to_string(),
            cards: vec![
                PlacedCard {
                    position: "Past".to_string(),
                    card_name: "The Tower".to_string(),
                    is_reversed: false,
                },
                PlacedCard {
                    position: "Present".to_string(),
                    card_name: "The Star".to_string(),
                    is_reversed: false,
                },
            ],
            daily: false,
        }
    }

    #[test]
    fn prompt_lists_cards_in_position_order() {
        let prompt = build_user_prompt(&request());
        assert!(prompt.contains("1. Past: The Tower (Upright)"));
        assert!(prompt.contains("2. Present: The Star (Upright)"));
        let past = prompt.find("Past: The Tower").unwrap();
        let present = prompt.find("Present: The Star").unwrap();
        assert!(past < present);
    }

    #[test]
    fn prompt_carries_spread_and_question() {
        let prompt = build_user_prompt(&request());
        assert!(prompt.contains("Reading Type: Past, Present, Future"));
        assert!(prompt.contains("Querent's Question: \"What does today hold?\""));
    }

    #[test]
    fn daily_requests_get_short_guidance() {
        let mut req = request();
        req.daily = true;
        let prompt = build_user_prompt(&req);
        assert!(prompt.contains("daily insight"));
        assert!(!build_user_prompt(&request()).contains("daily insight"));
    }

    #[test]
    fn reversed_flag_would_change_orientation_text() {
        let mut req = request();
        req.cards[0].is_reversed = true;
        let prompt = build_user_prompt(&req);
        assert!(prompt.contains("The Tower (Reversed)"));
    }

    #[test]
    fn persona_reads_upright_only() {
        assert!(SYSTEM_INSTRUCTION.contains("every card upright"));
    }
}
