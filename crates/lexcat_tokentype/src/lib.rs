//! lexcat_tokentype: Token kinds, keywords and operator precedence.
//!
//! Every token kind the scanner can produce is described once by a
//! [`TokenDescriptor`] held in a [`Catalog`]. Reserved words are registered
//! into the same catalog and indexed by spelling in a [`KeywordRegistry`],
//! so a keyword looked up by spelling and by symbolic name yields the same
//! [`TokenType`] handle. Handles compare as plain integers.
//!
//! A [`TokenRegistry`] bundles both tables. It is built once and then only
//! read, so it can be shared between any number of scanners and parsers.

mod catalog;
mod descriptor;
mod error;
mod keywords;
mod kind;
pub mod precedence;
mod registry;

pub use catalog::Catalog;
pub use descriptor::{ContextHook, TokenDescriptor, TokenFlags, TokenOptions, TokenType};
pub use error::RegistryError;
pub use keywords::{keyword_name, keyword_options, KeywordRegistry};
pub use kind::TokenKind;
pub use registry::TokenRegistry;
