use std::fmt;
use std::str::FromStr;

use crate::{
    error::CodegenError,
    gen_kotlin::KotlinGenerator,
    gen_swift::SwiftGenerator,
    traits::Generator,
};

/// Selector values accepted on the command line.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["kotlin", "swift"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Kotlin,
    Swift,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::Swift  => "swift",
        }
    }

    /// Extension of the source files this language is written in.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Kotlin => "kt",
            Language::Swift  => "swift",
        }
    }

    pub fn generator(&self) -> &'static dyn Generator {
        match self {
            Language::Kotlin => &KotlinGenerator,
            Language::Swift  => &SwiftGenerator,
        }
    }
}

impl FromStr for Language {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kotlin" => Ok(Language::Kotlin),
            "swift"  => Ok(Language::Swift),
            other    => Err(CodegenError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
