//! The interactive reading flow.
//!
//! Walks the session state machine end to end: spread selection, question,
//! a cosmetic shuffle pause, the strictly-ordered reveal loop, the
//! interpretation call, and a closing card-inspection loop over the result.

use std::time::Duration;

use colored::Colorize;

use arcana_core::{Deck, SpreadKind};
use arcana_engine::{Profile, ReadingSession, RevealOutcome};

use crate::config::Config;

/// Presentation pause while "shuffling"; the engine deals instantly.
const SHUFFLE_PAUSE: Duration = Duration::from_secs(2);

/// Pause between the last reveal and the interpretation call.
const INTERPRET_PAUSE: Duration = Duration::from_millis(1500);

pub async fn run(
    config: &Config,
    spread: Option<&str>,
    question: Option<&str>,
    seed: Option<u64>,
) -> Result<(), String> {
    let deck = Deck::standard(&config.deck_images);
    let mut profile = super::open_profile(config);
    let gateway = super::gateway(config);
    let mut session = ReadingSession::new(&deck, super::shuffle_rng(seed));

    let kind = match spread {
        Some(name) => SpreadKind::parse(name).ok_or_else(|| {
            format!("unknown spread \"{name}\". Use: one, three, love, career, celtic")
        })?,
        None => choose_spread(&profile)?,
    };
    session
        .select_spread(&profile, kind)
        .map_err(|e| e.to_string())?;

    let definition = kind.definition();
    println!(
        "  {} {} — {} cards, {} credits",
        "Spread:".bold(),
        definition.display_name,
        definition.positions.len(),
        definition.cost
    );

    let question = match question {
        Some(q) => q.to_string(),
        None => {
            super::prompt("  Your question: ")?;
            super::read_line()?.unwrap_or_default()
        }
    };
    session
        .submit_question(&mut profile, &question)
        .map_err(|e| e.to_string())?;
    println!("  {} credits remain.\n", profile.credits());

    println!("  Shuffling the deck... focus on your question.");
    tokio::time::sleep(SHUFFLE_PAUSE).await;
    session.deal().map_err(|e| e.to_string())?;

    let total = session.cards().len();
    println!("\n  The cards are laid out. Press Enter to reveal each one.\n");
    for index in 0..total {
        super::prompt(&format!("  [{} of {total}] ", index + 1))?;
        super::read_line()?;
        if let RevealOutcome::Revealed { index, .. } =
            session.reveal(index).map_err(|e| e.to_string())?
        {
            let card = &session.cards()[index];
            println!("  {} — {}", card.position.bold(), card.card.name);
            println!("    {}\n", card.card.meaning_upright.italic());
        }
    }

    println!("  {} Interpreting the symbols and their connections...", "Consulting the cards.".bold());
    tokio::time::sleep(INTERPRET_PAUSE).await;
    let reading = session
        .interpret(&mut profile, &gateway)
        .await
        .map_err(|e| e.to_string())?;

    println!("\n  {} \"{}\"", reading.spread.to_string().bold(), reading.question);
    println!("\n  {}\n", "Interpretation".bold());
    for line in reading.interpretation.lines() {
        println!("    {line}");
    }

    inspect_cards(&mut session)?;
    println!("\n  The reading has been saved to your history.");
    Ok(())
}

/// Interactive spread selection over the catalog.
fn choose_spread(profile: &Profile) -> Result<SpreadKind, String> {
    println!("  Choose a spread:\n");
    for (index, kind) in SpreadKind::all().iter().enumerate() {
        let definition = kind.definition();
        let note = if definition.cost > profile.credits() {
            " (not enough credits)".to_string()
        } else {
            String::new()
        };
        println!(
            "  {}. {} — {} cards, {} credits{}",
            index + 1,
            definition.display_name,
            definition.positions.len(),
            definition.cost,
            note.yellow()
        );
    }
    super::prompt("\n  > ")?;
    let line = super::read_line()?.unwrap_or_default();

    if let Ok(number) = line.parse::<usize>() {
        if let Some(kind) = number.checked_sub(1).and_then(|i| SpreadKind::all().get(i)) {
            return Ok(*kind);
        }
    }
    SpreadKind::parse(&line)
        .ok_or_else(|| format!("unknown spread \"{line}\". Use: one, three, love, career, celtic"))
}

/// Let the user zoom into cards on the finished reading.
fn inspect_cards(session: &mut ReadingSession<'_>) -> Result<(), String> {
    let total = session.cards().len();
    println!("\n  Type a card number (1-{total}) to inspect it, or press Enter to finish.");
    loop {
        super::prompt("  > ")?;
        let Some(line) = super::read_line()? else {
            return Ok(());
        };
        if line.is_empty() {
            return Ok(());
        }
        let Some(index) = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            println!("  Not a card number.");
            continue;
        };
        match session.zoom(index) {
            Ok(()) => {
                if let Some(card) = session.zoomed() {
                    println!("\n  {} — {}", card.card.name.bold(), card.position);
                    println!("    {}\n", card.card.description.italic());
                }
                session.close_zoom();
            }
            Err(e) => println!("  {}", e.to_string().yellow()),
        }
    }
}
