use crate::ModelError;
use std::fmt;
use std::str::FromStr;

/// A Wikipedia edition that can be forced with the language override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// en.wikipedia.org
    #[default]
    En,
    /// it.wikipedia.org
    It,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::It];

    /// ISO 639-1 code, also the wiki subdomain.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
        }
    }

    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|l| l.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| ModelError::UnsupportedLanguage(s.to_string()))
    }
}
