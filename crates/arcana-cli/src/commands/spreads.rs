//! Spread catalog listing.

use comfy_table::{ContentArrangement, Table};

use arcana_core::SpreadKind;

use crate::config::Config;

pub fn run(config: &Config) -> Result<(), String> {
    let profile = super::open_profile(config);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spread", "Cards", "Cost", ""]);

    for kind in SpreadKind::all() {
        let definition = kind.definition();
        let note = if definition.cost > profile.credits() {
            "needs more credits"
        } else {
            ""
        };
        table.add_row(vec![
            definition.display_name.to_string(),
            definition.positions.len().to_string(),
            definition.cost.to_string(),
            note.to_string(),
        ]);
    }

    println!("{table}");
    println!("  Balance: {} credits", profile.credits());
    Ok(())
}
