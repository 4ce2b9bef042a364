//! The daily single-card draw.

use colored::Colorize;

use arcana_core::Deck;
use arcana_engine::draw_daily;

use crate::config::Config;

pub async fn run(config: &Config, seed: Option<u64>) -> Result<(), String> {
    let deck = Deck::standard(&config.deck_images);
    let mut profile = super::open_profile(config);
    let gateway = super::gateway(config);
    let mut rng = super::shuffle_rng(seed);
    let today = chrono::Local::now().date_naive();

    let already_drawn = profile
        .daily_reading()
        .is_some_and(|daily| daily.date == today);

    if already_drawn {
        println!(
            "  {} The stars have spoken for today; here is your card again.",
            "Note:".bold()
        );
    } else {
        super::prompt("  Focus on your intention for the day, then press Enter to reveal. ")?;
        super::read_line()?;
    }

    let daily = draw_daily(&mut profile, &deck, &gateway, &mut rng, today)
        .await
        .map_err(|e| e.to_string())?;

    println!("\n  {} — {}", daily.card.position.bold(), daily.card.card.name);
    println!("    {}", daily.card.card.meaning_upright.italic());
    println!("\n  {}\n", "Daily Insight".bold());
    for line in daily.interpretation.lines() {
        println!("    {line}");
    }
    Ok(())
}
