//! Languages a commit message can be written in.

use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    EnUs,
    PtBr,
    EsEs,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::EnUs, Language::PtBr, Language::EsEs];

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidLanguage(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::EnUs => "en_US",
            Language::PtBr => "pt_BR",
            Language::EsEs => "es_ES",
        }
    }

    /// Human label, also substituted into the prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::EnUs => "English (United States)",
            Language::PtBr => "Portuguese (Brazil)",
            Language::EsEs => "Spanish (Spain)",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
