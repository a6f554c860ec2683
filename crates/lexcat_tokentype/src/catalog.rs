//! The token type catalog: one descriptor per symbolic name.

use std::ops::Index;

use lexcat_core::OrderedMap;
use tracing::{trace, warn};

use crate::descriptor::{TokenDescriptor, TokenFlags, TokenOptions, TokenType};
use crate::error::RegistryError;
use crate::kind::TokenKind;

/// Every token descriptor, keyed by symbolic name in definition order.
///
/// A new catalog already holds all [`TokenKind`]s. Keywords and any other
/// kinds are appended after them.
#[derive(Debug)]
pub struct Catalog {
    names: OrderedMap<String, TokenType>,
    descriptors: Vec<TokenDescriptor>,
    right_associative: Option<TokenType>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            names: OrderedMap::with_capacity(TokenKind::COUNT * 2),
            descriptors: Vec::with_capacity(TokenKind::COUNT * 2),
            right_associative: None,
        };
        for kind in TokenKind::ALL {
            let defined = match kind.binary_precedence() {
                Some(precedence) => {
                    catalog.define_binary_operator(kind.name(), kind.label(), precedence)
                }
                None => catalog.define_token(kind.name(), kind.label(), kind.options()),
            };
            // The built-in table is fixed; a fault here is a bug in it.
            match defined {
                Ok(ty) => debug_assert_eq!(ty, kind.token_type()),
                Err(err) => panic!("built-in token table is inconsistent: {err}"),
            }
        }
        catalog
    }

    /// Define a binary operator: `before_expr` with the given precedence.
    pub fn define_binary_operator(
        &mut self,
        name: &str,
        label: &str,
        precedence: u8,
    ) -> Result<TokenType, RegistryError> {
        self.define_token(name, label, TokenOptions::new().before_expr().binop(precedence))
    }

    /// Define a token kind under `name`.
    ///
    /// Nothing is added when the name is taken or the options contradict
    /// each other.
    pub fn define_token(
        &mut self,
        name: &str,
        label: &str,
        options: TokenOptions,
    ) -> Result<TokenType, RegistryError> {
        self.define(name, label, None, options)
    }

    pub(crate) fn define(
        &mut self,
        name: &str,
        label: &str,
        keyword: Option<&str>,
        options: TokenOptions,
    ) -> Result<TokenType, RegistryError> {
        if let Err(err) = self.check(name, keyword, options) {
            warn!(name, %err, "rejected token type definition");
            return Err(err);
        }
        let raw =
            u16::try_from(self.descriptors.len()).map_err(|_| RegistryError::TooManyTokens {
                name: name.to_string(),
            })?;
        let ty = TokenType(raw);
        if self.names.try_insert(name.to_string(), ty).is_err() {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.descriptors.push(TokenDescriptor::new(
            ty,
            label.to_string(),
            keyword.map(str::to_string),
            options,
        ));
        if options.flags.contains(TokenFlags::RIGHT_ASSOCIATIVE) {
            self.right_associative = Some(ty);
        }
        trace!(name, label, index = raw, "defined token type");
        Ok(ty)
    }

    fn check(
        &self,
        name: &str,
        keyword: Option<&str>,
        options: TokenOptions,
    ) -> Result<(), RegistryError> {
        let inconsistent = |reason| RegistryError::InconsistentFlags {
            name: name.to_string(),
            reason,
        };
        if self.names.contains_key(name) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        let flags = options.flags;
        if let Some(precedence) = options.binop {
            if precedence == 0 {
                return Err(RegistryError::InvalidPrecedence {
                    name: name.to_string(),
                    precedence,
                });
            }
            if !flags.contains(TokenFlags::BEFORE_EXPR) {
                return Err(inconsistent("binary operator must allow an expression after it"));
            }
            if flags.contains(TokenFlags::IS_ASSIGN) {
                return Err(inconsistent(
                    "assignment has its own tier and takes no binary precedence",
                ));
            }
        }
        if flags.contains(TokenFlags::RIGHT_ASSOCIATIVE) {
            if options.binop.is_none() {
                return Err(inconsistent("right associativity requires a binary precedence"));
            }
            if self.right_associative.is_some() {
                return Err(inconsistent("only exponentiation is right-associative"));
            }
        }
        if flags.intersects(TokenFlags::PREFIX | TokenFlags::POSTFIX)
            && !flags.contains(TokenFlags::STARTS_EXPR)
        {
            return Err(inconsistent("unary operator must be able to start an expression"));
        }
        if flags.contains(TokenFlags::IS_LOOP) && keyword.is_none() {
            return Err(inconsistent("only keywords open loops"));
        }
        Ok(())
    }

    /// Descriptor registered under a symbolic name.
    pub fn get(&self, name: &str) -> Option<&TokenDescriptor> {
        self.token_type(name).map(|ty| &self.descriptors[ty.index()])
    }

    pub fn token_type(&self, name: &str) -> Option<TokenType> {
        self.names.get(name).copied()
    }

    /// Descriptor behind a handle, or `None` if the handle belongs to a
    /// larger catalog.
    pub fn descriptor(&self, ty: TokenType) -> Option<&TokenDescriptor> {
        self.descriptors.get(ty.index())
    }

    /// Symbolic name of a handle.
    pub fn name_of(&self, ty: TokenType) -> Option<&str> {
        self.names.get_index(ty.index()).map(|(name, _)| name.as_str())
    }

    /// `(name, descriptor)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenDescriptor)> {
        self.names
            .iter()
            .map(|(name, ty)| (name.as_str(), &self.descriptors[ty.index()]))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// # Panics
///
/// If `ty` was handed out by a larger catalog, e.g. a keyword handle from
/// [`TokenRegistry::standard`](crate::TokenRegistry::standard) used on a
/// registry with fewer keywords. Use [`Catalog::descriptor`] to get `None`
/// instead.
impl Index<TokenType> for Catalog {
    type Output = TokenDescriptor;

    fn index(&self, ty: TokenType) -> &TokenDescriptor {
        &self.descriptors[ty.index()]
    }
}

impl Index<TokenKind> for Catalog {
    type Output = TokenDescriptor;

    fn index(&self, kind: TokenKind) -> &TokenDescriptor {
        &self.descriptors[kind.token_type().index()]
    }
}
