//! lexcat_core: Core utilities shared by the lexcat crates.
//!
//! Provides the insertion-ordered map the token catalog is stored in, plus
//! the FxHash map alias used for the other internal tables.

pub mod collections;

// Re-export commonly used types
pub use collections::{FxMap, OrderedMap};
