//! Reading history listing.

use comfy_table::{ContentArrangement, Table};

use crate::config::Config;

pub fn run(config: &Config, limit: usize, full: bool) -> Result<(), String> {
    let profile = super::open_profile(config);

    if profile.readings().is_empty() {
        println!("  No readings yet. Start one with: arcana read");
        return Ok(());
    }

    let shown = profile.readings().iter().take(limit);

    if full {
        for reading in shown {
            println!("--- {} ---", reading.created_at.format("%Y-%m-%d %H:%M"));
            println!("Spread: {}", reading.spread);
            println!("Question: {}", reading.question);
            for card in &reading.cards {
                println!("  {}: {}", card.position, card.card.name);
            }
            println!("\n{}\n", reading.interpretation);
        }
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Date", "Spread", "Cards", "Question"]);

        for reading in shown {
            table.add_row(vec![
                reading.created_at.format("%Y-%m-%d %H:%M").to_string(),
                reading.spread.to_string(),
                reading.cards.len().to_string(),
                truncate(&reading.question, 42),
            ]);
        }
        println!("{table}");
    }

    let total = profile.readings().len();
    println!(
        "  {} of {total} reading{} shown.",
        limit.min(total),
        if total == 1 { "" } else { "s" }
    );
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
