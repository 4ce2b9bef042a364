//! Credit balance display and the demo top-up.

use colored::Colorize;

use crate::config::Config;

pub fn run(config: &Config, reset: bool) -> Result<(), String> {
    let mut profile = super::open_profile(config);

    if reset {
        profile.reset_credits().map_err(|e| e.to_string())?;
        println!(
            "  {} Balance restored to {} credits.",
            "Reset:".bold(),
            profile.credits()
        );
    } else {
        println!("  Balance: {} credits", profile.credits());
    }
    Ok(())
}
