//! Operator precedence for binary operators.
//!
//! Binary operators carry a numeric precedence in their descriptor. Plain
//! and compound assignment do not: they form a separate tier below every
//! numeric level, selected by the `is_assign` flag. [`operator_tier`] puts
//! both on one ordered scale for precedence climbing.

use crate::descriptor::TokenDescriptor;

pub const LOGICAL_OR: u8 = 1;
pub const LOGICAL_AND: u8 = 2;
pub const BITWISE_OR: u8 = 3;
pub const BITWISE_XOR: u8 = 4;
pub const BITWISE_AND: u8 = 5;
pub const EQUALITY: u8 = 6;
/// Also `in` and `instanceof`.
pub const RELATIONAL: u8 = 7;
pub const SHIFT: u8 = 8;
pub const ADDITIVE: u8 = 9;
pub const MULTIPLICATIVE: u8 = 10;
pub const EXPONENT: u8 = 11;

/// Binding tier of an infix operator, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperatorTier {
    Assignment,
    Binary(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// The tier a token occupies as an infix operator, or `None` if it is not
/// one.
pub fn operator_tier(desc: &TokenDescriptor) -> Option<OperatorTier> {
    if desc.is_assign() {
        return Some(OperatorTier::Assignment);
    }
    desc.binop().map(OperatorTier::Binary)
}

/// Assignment and exponentiation group to the right, every other infix
/// operator to the left.
pub fn associativity(desc: &TokenDescriptor) -> Option<Associativity> {
    match operator_tier(desc)? {
        OperatorTier::Assignment => Some(Associativity::Right),
        OperatorTier::Binary(_) if desc.right_associative() => Some(Associativity::Right),
        OperatorTier::Binary(_) => Some(Associativity::Left),
    }
}
