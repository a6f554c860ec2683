//! Token descriptors and the handles that identify them.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::RegistryError;

/// Handle to a descriptor in a [`Catalog`](crate::Catalog).
///
/// Two handles from the same catalog are equal exactly when they name the
/// same descriptor, so comparing token kinds is an integer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenType(pub(crate) u16);

impl TokenType {
    /// Position of the descriptor in its catalog.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Boolean attributes of a token kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        const NONE              = 0;
        /// An expression may follow. A `/` after such a token starts a regexp.
        const BEFORE_EXPR       = 1 << 0;
        /// The token may begin an expression.
        const STARTS_EXPR       = 1 << 1;
        const RIGHT_ASSOCIATIVE = 1 << 2;
        /// Keyword opening a loop; a labeled `continue` may target it.
        const IS_LOOP           = 1 << 3;
        /// Plain or compound assignment.
        const IS_ASSIGN         = 1 << 4;
        const PREFIX            = 1 << 5;
        const POSTFIX           = 1 << 6;
    }
}

/// The attribute set a descriptor is created from.
///
/// Anything not set defaults to false / absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenOptions {
    pub flags: TokenFlags,
    pub binop: Option<u8>,
}

impl TokenOptions {
    pub const fn new() -> Self {
        Self {
            flags: TokenFlags::NONE,
            binop: None,
        }
    }

    const fn with(self, flag: TokenFlags) -> Self {
        Self {
            flags: self.flags.union(flag),
            binop: self.binop,
        }
    }

    pub const fn before_expr(self) -> Self {
        self.with(TokenFlags::BEFORE_EXPR)
    }

    pub const fn starts_expr(self) -> Self {
        self.with(TokenFlags::STARTS_EXPR)
    }

    pub const fn right_associative(self) -> Self {
        self.with(TokenFlags::RIGHT_ASSOCIATIVE)
    }

    pub const fn is_loop(self) -> Self {
        self.with(TokenFlags::IS_LOOP)
    }

    pub const fn is_assign(self) -> Self {
        self.with(TokenFlags::IS_ASSIGN)
    }

    pub const fn prefix(self) -> Self {
        self.with(TokenFlags::PREFIX)
    }

    pub const fn postfix(self) -> Self {
        self.with(TokenFlags::POSTFIX)
    }

    pub const fn binop(self, precedence: u8) -> Self {
        Self {
            flags: self.flags,
            binop: Some(precedence),
        }
    }
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook run by the context tracker when a token of some kind is consumed.
///
/// The registry never installs or calls hooks. The collaborator that
/// tracks brace and template nesting owns them and decides what `state`
/// is.
pub trait ContextHook: Send + Sync {
    fn update_context(&self, state: &mut dyn Any, prev: Option<TokenType>);
}

/// The immutable attribute bundle of one token kind.
pub struct TokenDescriptor {
    ty: TokenType,
    label: String,
    keyword: Option<String>,
    flags: TokenFlags,
    binop: Option<u8>,
    update_context: OnceLock<Arc<dyn ContextHook>>,
}

impl TokenDescriptor {
    pub(crate) fn new(
        ty: TokenType,
        label: String,
        keyword: Option<String>,
        options: TokenOptions,
    ) -> Self {
        Self {
            ty,
            label,
            keyword,
            flags: options.flags,
            binop: options.binop,
            update_context: OnceLock::new(),
        }
    }

    /// The handle of this descriptor in its catalog.
    #[inline]
    pub fn token_type(&self) -> TokenType {
        self.ty
    }

    /// Diagnostic tag, usually the punctuation spelling.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The reserved-word spelling, for keyword descriptors only.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    #[inline]
    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    #[inline]
    pub fn before_expr(&self) -> bool {
        self.flags.contains(TokenFlags::BEFORE_EXPR)
    }

    #[inline]
    pub fn starts_expr(&self) -> bool {
        self.flags.contains(TokenFlags::STARTS_EXPR)
    }

    #[inline]
    pub fn right_associative(&self) -> bool {
        self.flags.contains(TokenFlags::RIGHT_ASSOCIATIVE)
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.flags.contains(TokenFlags::IS_LOOP)
    }

    #[inline]
    pub fn is_assign(&self) -> bool {
        self.flags.contains(TokenFlags::IS_ASSIGN)
    }

    #[inline]
    pub fn prefix(&self) -> bool {
        self.flags.contains(TokenFlags::PREFIX)
    }

    #[inline]
    pub fn postfix(&self) -> bool {
        self.flags.contains(TokenFlags::POSTFIX)
    }

    /// Binary precedence; higher binds tighter.
    #[inline]
    pub fn binop(&self) -> Option<u8> {
        self.binop
    }

    /// The context hook, if the context tracker attached one.
    pub fn update_context(&self) -> Option<&Arc<dyn ContextHook>> {
        self.update_context.get()
    }

    /// Attach the context hook for this kind. Each descriptor takes at
    /// most one hook.
    pub fn attach_update_context(&self, hook: Arc<dyn ContextHook>) -> Result<(), RegistryError> {
        self.update_context
            .set(hook)
            .map_err(|_| RegistryError::ContextAlreadyAttached {
                label: self.label.clone(),
            })
    }
}

impl fmt::Debug for TokenDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenDescriptor")
            .field("ty", &self.ty)
            .field("label", &self.label)
            .field("keyword", &self.keyword)
            .field("flags", &self.flags)
            .field("binop", &self.binop)
            .field("update_context", &self.update_context.get().is_some())
            .finish()
    }
}

impl fmt::Display for TokenDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.keyword {
            Some(keyword) => write!(f, "keyword '{}'", keyword),
            None => write!(f, "'{}'", self.label),
        }
    }
}
