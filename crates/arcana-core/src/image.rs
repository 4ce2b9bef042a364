//! Card image URL conventions.
//!
//! Two deck image sources are supported, selected by static configuration.
//! The classic source serves Rider-Waite scans under `ar{NN}.jpg` /
//! `{suit-prefix}{NN}.jpg`; the custom source follows the self-hosted
//! `{NN}-{Name}.png` / `{Suit}{NN}.png` convention with a cache-busting
//! version suffix. This is configuration, not logic: a wrong or missing
//! image never fails a draw, callers fall back to a textual card face.

use crate::card::Suit;

const CLASSIC_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/ekelen/tarot-api/static/images/cards";
const CLASSIC_CARD_BACK: &str = "https://i.imgur.com/P7qJjqM.png";

/// Where card face images are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Rider-Waite scans: `ar00.jpg` for majors, `cu01.jpg` for minors.
    Classic {
        /// Base URL the file names are appended to.
        base_url: String,
    },
    /// Self-hosted deck: `00-TheFool.png?v=2` for majors,
    /// `Cups01.png?v=2` for minors.
    Custom {
        /// Base URL the file names are appended to.
        base_url: String,
    },
}

impl ImageSource {
    /// The classic public deck at its default CDN location.
    pub fn classic() -> Self {
        Self::Classic {
            base_url: CLASSIC_BASE_URL.to_string(),
        }
    }

    /// A custom deck rooted at `base_url`.
    pub fn custom(base_url: impl Into<String>) -> Self {
        Self::Custom {
            base_url: base_url.into(),
        }
    }

    /// Face image URL for a major arcana card numbered 0-21.
    pub fn major_image(&self, number: u8, name: &str) -> String {
        match self {
            Self::Classic { base_url } => format!("{base_url}/ar{number:02}.jpg"),
            Self::Custom { base_url } => {
                let file_name: String = name.chars().filter(|c| !c.is_whitespace()).collect();
                format!("{base_url}/{number:02}-{file_name}.png?v=2")
            }
        }
    }

    /// Face image URL for a minor arcana card, rank 1 (Ace) through 14 (King).
    pub fn minor_image(&self, suit: Suit, number: u8) -> String {
        match self {
            Self::Classic { base_url } => {
                let prefix = match suit {
                    Suit::Wands => "wa",
                    Suit::Cups => "cu",
                    Suit::Swords => "sw",
                    Suit::Pentacles => "pe",
                    Suit::None => "",
                };
                format!("{base_url}/{prefix}{number:02}.jpg")
            }
            Self::Custom { base_url } => format!("{base_url}/{suit}{number:02}.png?v=2"),
        }
    }

    /// URL of the shared card-back image.
    pub fn card_back(&self) -> String {
        match self {
            Self::Classic { .. } => CLASSIC_CARD_BACK.to_string(),
            Self::Custom { base_url } => format!("{base_url}/CardsBack.png?v=2"),
        }
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_major_convention() {
        let source = ImageSource::classic();
        assert_eq!(
            source.major_image(0, "The Fool"),
            format!("{CLASSIC_BASE_URL}/ar00.jpg")
        );
        assert_eq!(
            source.major_image(21, "The World"),
            format!("{CLASSIC_BASE_URL}/ar21.jpg")
        );
    }

    #[test]
    fn classic_minor_convention() {
        let source = ImageSource::classic();
        assert_eq!(
            source.minor_image(Suit::Wands, 1),
            format!("{CLASSIC_BASE_URL}/wa01.jpg")
        );
        assert_eq!(
            source.minor_image(Suit::Pentacles, 14),
            format!("{CLASSIC_BASE_URL}/pe14.jpg")
        );
    }

    #[test]
    fn custom_major_strips_spaces_and_pads() {
        let source = ImageSource::custom("https://cards.example/deck");
        assert_eq!(
            source.major_image(16, "The Tower"),
            "https://cards.example/deck/16-TheTower.png?v=2"
        );
        assert_eq!(
            source.major_image(0, "The Fool"),
            "https://cards.example/deck/00-TheFool.png?v=2"
        );
    }

    #[test]
    fn custom_minor_uses_full_suit_name() {
        let source = ImageSource::custom("https://cards.example/deck");
        assert_eq!(
            source.minor_image(Suit::Cups, 1),
            "https://cards.example/deck/Cups01.png?v=2"
        );
        assert_eq!(
            source.minor_image(Suit::Swords, 12),
            "https://cards.example/deck/Swords12.png?v=2"
        );
    }

    #[test]
    fn card_back_per_source() {
        assert_eq!(ImageSource::classic().card_back(), CLASSIC_CARD_BACK);
        assert_eq!(
            ImageSource::custom("https://cards.example/deck").card_back(),
            "https://cards.example/deck/CardsBack.png?v=2"
        );
    }

    #[test]
    fn default_is_classic() {
        assert_eq!(ImageSource::default(), ImageSource::classic());
    }
}
