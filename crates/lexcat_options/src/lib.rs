//! lexcat_options: Registry configuration.
//!
//! Decides which reserved words a token registry is built with. The list is
//! either one of the language-edition presets or given explicitly, and can
//! be extended with additional spellings. Options are read from camelCase
//! JSON, e.g. `{"ecmaVersion": "es5", "extraKeywords": ["let"]}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reserved words of the ES5 grammar, in registration order.
pub const ES5_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "continue", "debugger", "default", "do", "else", "finally", "for",
    "function", "if", "return", "switch", "throw", "try", "var", "while", "with", "null", "true",
    "false", "instanceof", "typeof", "void", "delete", "new", "in", "this",
];

/// Reserved words added by ES2015.
pub const ES2015_ADDITIONS: &[&str] = &[
    "let", "const", "class", "extends", "export", "import", "yield", "super",
];

/// Language edition selecting a keyword preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcmaVersion {
    Es5,
    #[default]
    Es2015,
}

impl EcmaVersion {
    /// The ordered reserved-word list for this edition.
    pub fn keywords(self) -> Vec<&'static str> {
        match self {
            EcmaVersion::Es5 => ES5_KEYWORDS.to_vec(),
            EcmaVersion::Es2015 => ES5_KEYWORDS
                .iter()
                .chain(ES2015_ADDITIONS)
                .copied()
                .collect(),
        }
    }
}

/// Options controlling how a token registry is populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryOptions {
    /// Edition preset, used when `keywords` is absent.
    pub ecma_version: Option<EcmaVersion>,
    /// Explicit ordered keyword list; replaces the preset entirely.
    pub keywords: Option<Vec<String>>,
    /// Spellings appended after the preset or explicit list.
    pub extra_keywords: Option<Vec<String>>,
}

impl RegistryOptions {
    pub fn for_version(version: EcmaVersion) -> Self {
        Self {
            ecma_version: Some(version),
            ..Self::default()
        }
    }

    /// The final ordered list of reserved-word spellings.
    ///
    /// Duplicates are passed through untouched; rejecting them is the
    /// registry's job.
    pub fn keyword_list(&self) -> Vec<String> {
        let mut list: Vec<String> = match &self.keywords {
            Some(explicit) => explicit.clone(),
            None => self
                .ecma_version
                .unwrap_or_default()
                .keywords()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        };
        if let Some(extra) = &self.extra_keywords {
            list.extend(extra.iter().cloned());
        }
        list
    }
}

/// Errors raised while loading registry options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid registry options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read registry options: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse registry options from a JSON string.
pub fn parse_options(content: &str) -> Result<RegistryOptions, OptionsError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse registry options from a JSON file.
pub fn parse_options_file(path: &str) -> Result<RegistryOptions, OptionsError> {
    let content = std::fs::read_to_string(path)?;
    parse_options(&content)
}
