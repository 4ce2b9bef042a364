//! Environment-based configuration.
//!
//! All configuration is read from environment variables at startup; a
//! `.env` file is honored as a development convenience. Nothing here is
//! required: without an API key the interpretation provider degrades to the
//! gateway's fallback text and every command still works.

use std::path::PathBuf;

use arcana_core::ImageSource;

/// A configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value we cannot use.
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key, if interpretations should be generated for real.
    pub api_key: Option<String>,
    /// Model the provider generates with.
    pub model: String,
    /// Directory holding the persisted profile.
    pub data_dir: PathBuf,
    /// Where card face images are served from.
    pub deck_images: ImageSource,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        dotenvy::dotenv().ok();

        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model = std::env::var("ARCANA_MODEL")
            .unwrap_or_else(|_| arcana_openai::DEFAULT_MODEL.to_string());

        let data_dir = std::env::var("ARCANA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".arcana"));

        let deck_images = match std::env::var("ARCANA_DECK").as_deref() {
            Ok("custom") => {
                let base_url = std::env::var("ARCANA_DECK_URL").map_err(|_| {
                    ConfigError::InvalidValue(
                        "ARCANA_DECK".to_string(),
                        "a custom deck requires ARCANA_DECK_URL".to_string(),
                    )
                })?;
                ImageSource::custom(base_url)
            }
            Ok("classic") | Err(_) => ImageSource::classic(),
            Ok(other) => {
                return Err(ConfigError::InvalidValue(
                    "ARCANA_DECK".to_string(),
                    format!("unknown deck source \"{other}\", use: classic, custom"),
                ));
            }
        };

        Ok(Self {
            api_key,
            model,
            data_dir,
            deck_images,
        })
    }

    /// The file the persisted profile lives in.
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join("profile.json")
    }
}
