//! The combined, read-only token registry.

use std::ops::Index;
use std::sync::OnceLock;

use lexcat_options::RegistryOptions;
use tracing::debug;

use crate::catalog::Catalog;
use crate::descriptor::{TokenDescriptor, TokenOptions, TokenType};
use crate::error::RegistryError;
use crate::keywords::{keyword_options, KeywordRegistry};
use crate::kind::TokenKind;

/// Catalog and keyword index, built together and then only read.
///
/// Scanners and parsers take a `&TokenRegistry`; [`TokenRegistry::standard`]
/// provides a shared one for the default keyword set.
#[derive(Debug)]
pub struct TokenRegistry {
    catalog: Catalog,
    keywords: KeywordRegistry,
}

impl TokenRegistry {
    /// A registry with every non-keyword kind and no keywords yet.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            keywords: KeywordRegistry::new(),
        }
    }

    /// Build a registry from an ordered list of reserved-word spellings,
    /// taking each keyword's attributes from the grammar table.
    pub fn with_keywords<I, S>(spellings: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for spelling in spellings {
            let spelling = spelling.as_ref();
            registry.register_keyword(spelling, keyword_options(spelling))?;
        }
        debug!(
            tokens = registry.catalog.len(),
            keywords = registry.keywords.len(),
            "token registry initialised"
        );
        Ok(registry)
    }

    pub fn from_options(options: &RegistryOptions) -> Result<Self, RegistryError> {
        Self::with_keywords(options.keyword_list())
    }

    /// The process-wide registry for the default options.
    ///
    /// # Panics
    ///
    /// If the default keyword list cannot be registered. That list is fixed,
    /// so this only happens when the built-in tables are broken.
    pub fn standard() -> &'static TokenRegistry {
        static STANDARD: OnceLock<TokenRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            TokenRegistry::from_options(&RegistryOptions::default())
                .unwrap_or_else(|err| panic!("default token registry is inconsistent: {err}"))
        })
    }

    pub fn register_keyword(
        &mut self,
        spelling: &str,
        options: TokenOptions,
    ) -> Result<TokenType, RegistryError> {
        self.keywords
            .register_keyword(&mut self.catalog, spelling, options)
    }

    /// The keyword spelled `word`, if `word` is reserved.
    #[inline]
    pub fn keyword(&self, word: &str) -> Option<TokenType> {
        self.keywords.get(word)
    }

    #[inline]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Handle registered under a symbolic name such as `"parenL"` or `"_if"`.
    pub fn token_type(&self, name: &str) -> Option<TokenType> {
        self.catalog.token_type(name)
    }

    #[inline]
    pub fn kind(&self, kind: TokenKind) -> TokenType {
        kind.token_type()
    }

    pub fn descriptor(&self, ty: TokenType) -> Option<&TokenDescriptor> {
        self.catalog.descriptor(ty)
    }

    /// Whether a `/` starts a regular expression given the previous
    /// significant token. At the start of input it does.
    pub fn slash_starts_regex(&self, prev: Option<TokenType>) -> bool {
        match prev {
            None => true,
            Some(ty) => self.catalog.descriptor(ty).map_or(false, |d| d.before_expr()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn keywords(&self) -> &KeywordRegistry {
        &self.keywords
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// # Panics
///
/// If `ty` belongs to a registry with more token types than this one. Use
/// [`TokenRegistry::descriptor`] for a lookup that returns `None` instead.
impl Index<TokenType> for TokenRegistry {
    type Output = TokenDescriptor;

    fn index(&self, ty: TokenType) -> &TokenDescriptor {
        &self.catalog[ty]
    }
}

impl Index<TokenKind> for TokenRegistry {
    type Output = TokenDescriptor;

    fn index(&self, kind: TokenKind) -> &TokenDescriptor {
        &self.catalog[kind]
    }
}
