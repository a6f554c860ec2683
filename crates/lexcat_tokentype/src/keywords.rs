//! Reserved words: their grammar attributes and the spelling index.

use lexcat_core::FxMap;
use tracing::{trace, warn};

use crate::catalog::Catalog;
use crate::descriptor::{TokenOptions, TokenType};
use crate::error::RegistryError;
use crate::precedence;

/// Catalog key of a keyword. The prefix keeps keywords apart from the
/// non-keyword names.
pub fn keyword_name(spelling: &str) -> String {
    format!("_{spelling}")
}

/// The attributes the grammar gives a reserved word.
///
/// Spellings not listed here carry no flags.
pub fn keyword_options(spelling: &str) -> TokenOptions {
    let o = TokenOptions::new();
    match spelling {
        "case" | "default" | "else" | "return" | "throw" | "extends" => o.before_expr(),
        "do" => o.is_loop().before_expr(),
        "for" | "while" => o.is_loop(),
        "function" | "this" | "super" | "null" | "true" | "false" => o.starts_expr(),
        "new" | "yield" => o.before_expr().starts_expr(),
        "in" | "instanceof" => o.before_expr().binop(precedence::RELATIONAL),
        "typeof" | "void" | "delete" => o.before_expr().prefix().starts_expr(),
        _ => o,
    }
}

/// Index from reserved-word spelling to the keyword's catalog entry.
#[derive(Debug, Default)]
pub struct KeywordRegistry {
    by_spelling: FxMap<String, TokenType>,
    order: Vec<TokenType>,
}

impl KeywordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `spelling` as a keyword in `catalog` and index it.
    ///
    /// Fails without touching either table if the spelling is empty, already
    /// registered, or its catalog name is taken.
    pub fn register_keyword(
        &mut self,
        catalog: &mut Catalog,
        spelling: &str,
        options: TokenOptions,
    ) -> Result<TokenType, RegistryError> {
        if spelling.is_empty() || spelling.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidKeyword {
                spelling: spelling.to_string(),
            });
        }
        if self.by_spelling.contains_key(spelling) {
            warn!(spelling, "duplicate reserved word");
            return Err(RegistryError::DuplicateKeyword {
                spelling: spelling.to_string(),
            });
        }
        let ty = catalog.define(&keyword_name(spelling), spelling, Some(spelling), options)?;
        self.by_spelling.insert(spelling.to_string(), ty);
        self.order.push(ty);
        trace!(spelling, index = ty.index(), "registered keyword");
        Ok(ty)
    }

    /// The keyword spelled `spelling`. A miss means the word is a plain
    /// identifier.
    #[inline]
    pub fn get(&self, spelling: &str) -> Option<TokenType> {
        self.by_spelling.get(spelling).copied()
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.by_spelling.contains_key(spelling)
    }

    /// Keyword handles in registration order.
    pub fn types(&self) -> &[TokenType] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TokenFlags;

    #[test]
    fn test_register_shares_catalog_entry() {
        let mut catalog = Catalog::new();
        let mut keywords = KeywordRegistry::new();
        let ty = keywords
            .register_keyword(&mut catalog, "while", keyword_options("while"))
            .unwrap();
        assert_eq!(keywords.get("while"), Some(ty));
        assert_eq!(catalog.token_type("_while"), Some(ty));
        assert_eq!(catalog[ty].keyword(), Some("while"));
        assert_eq!(catalog[ty].label(), "while");
        assert!(catalog[ty].is_loop());
    }

    #[test]
    fn test_duplicate_spelling_leaves_tables_unchanged() {
        let mut catalog = Catalog::new();
        let mut keywords = KeywordRegistry::new();
        keywords
            .register_keyword(&mut catalog, "if", TokenOptions::new())
            .unwrap();
        let before = catalog.len();
        let err = keywords
            .register_keyword(&mut catalog, "if", TokenOptions::new())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKeyword {
                spelling: "if".to_string()
            }
        );
        assert_eq!(catalog.len(), before);
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_catalog_name_clash_is_reported() {
        let mut catalog = Catalog::new();
        catalog
            .define_token("_of", "of", TokenOptions::new())
            .unwrap();
        let mut keywords = KeywordRegistry::new();
        let err = keywords
            .register_keyword(&mut catalog, "of", TokenOptions::new())
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
        assert!(!keywords.contains("of"));
    }

    #[test]
    fn test_invalid_spellings() {
        let mut catalog = Catalog::new();
        let mut keywords = KeywordRegistry::new();
        for spelling in ["", "for each"] {
            let err = keywords
                .register_keyword(&mut catalog, spelling, TokenOptions::new())
                .unwrap_err();
            assert!(matches!(err, RegistryError::InvalidKeyword { .. }));
        }
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_grammar_table() {
        assert_eq!(
            keyword_options("do").flags,
            TokenFlags::IS_LOOP | TokenFlags::BEFORE_EXPR
        );
        assert_eq!(keyword_options("instanceof").binop, Some(7));
        assert_eq!(
            keyword_options("typeof").flags,
            TokenFlags::BEFORE_EXPR | TokenFlags::PREFIX | TokenFlags::STARTS_EXPR
        );
        assert_eq!(keyword_options("return").flags, TokenFlags::BEFORE_EXPR);
        assert_eq!(keyword_options("var"), TokenOptions::new());
        assert_eq!(keyword_options("unknown"), TokenOptions::new());
    }
}
