//! Display language tags.

use serde::{Deserialize, Serialize};

/// A display language. Content is authored in [`Language::HOME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    pub const HOME: Language = Language::Pt;

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// English name used when instructing the translator.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Pt => "Portuguese",
            Language::En => "English",
            Language::Es => "Spanish",
        }
    }

    pub fn is_home(&self) -> bool {
        *self == Self::HOME
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip_tags() {
        for lang in [Language::Pt, Language::En, Language::Es] {
            assert_eq!(Language::from_str(lang.as_str()), Some(lang));
        }
        assert_eq!(Language::from_str("EN"), Some(Language::En));
        assert_eq!(Language::from_str("fr"), None);
    }

    #[test]
    fn test_home_language() {
        assert!(Language::Pt.is_home());
        assert!(!Language::En.is_home());
        assert_eq!(Language::default(), Language::HOME);
    }
}
