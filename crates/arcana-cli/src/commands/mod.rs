pub mod credits;
pub mod daily;
pub mod history;
pub mod read;
pub mod spreads;

use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use arcana_engine::{FileStore, InterpretationGateway, Profile, UnconfiguredProvider};
use arcana_openai::OpenAiProvider;

use crate::config::Config;

/// Open the persisted profile under the configured data directory.
pub fn open_profile(config: &Config) -> Profile {
    Profile::load(Box::new(FileStore::new(config.profile_path())))
}

/// Build the interpretation gateway from configuration.
///
/// Without an API key the unconfigured provider is used: readings still
/// complete, carrying the gateway's fallback text instead of failing.
pub fn gateway(config: &Config) -> InterpretationGateway {
    match &config.api_key {
        Some(key) => InterpretationGateway::new(Box::new(OpenAiProvider::new(
            key,
            config.model.clone(),
        ))),
        None => InterpretationGateway::new(Box::new(UnconfiguredProvider)),
    }
}

/// RNG for shuffles: seeded for a reproducible draw, system entropy
/// otherwise.
pub fn shuffle_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Read one trimmed line from stdin. `None` on end of input, which
/// interactive flows treat as "just continue".
pub fn read_line() -> Result<Option<String>, String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

/// Print `prompt` without a newline and flush it out.
pub fn prompt(text: &str) -> Result<(), String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())
}
