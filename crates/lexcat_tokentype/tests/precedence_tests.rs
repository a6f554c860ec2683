//! Precedence climbing over registry descriptors.
//!
//! A minimal infix parser drives [`operator_tier`] and [`associativity`] the
//! way an expression parser would and prints the resulting tree with full
//! parentheses, so grouping can be checked directly.

use lexcat_tokentype::precedence::{associativity, operator_tier, Associativity, OperatorTier};
use lexcat_tokentype::{TokenKind, TokenRegistry, TokenType};

#[derive(Debug, Clone)]
enum Item {
    Operand(String),
    Operator(TokenType, String),
}

/// Helper: split whitespace-separated source into operands and operators.
fn lex(registry: &TokenRegistry, source: &str) -> Vec<Item> {
    source
        .split_whitespace()
        .map(|word| {
            let ty = TokenKind::from_punctuator(word)
                .map(TokenKind::token_type)
                .or_else(|| registry.keyword(word));
            match ty {
                Some(ty) if operator_tier(&registry[ty]).is_some() => {
                    Item::Operator(ty, word.to_string())
                }
                _ => Item::Operand(word.to_string()),
            }
        })
        .collect()
}

struct Climber<'r> {
    registry: &'r TokenRegistry,
    items: Vec<Item>,
    pos: usize,
}

impl<'r> Climber<'r> {
    fn operand(&mut self) -> String {
        match &self.items[self.pos] {
            Item::Operand(text) => {
                self.pos += 1;
                text.clone()
            }
            Item::Operator(_, text) => panic!("expected operand, found {}", text),
        }
    }

    fn parse(&mut self, min: Option<OperatorTier>) -> String {
        let mut left = self.operand();
        while let Some(Item::Operator(ty, text)) = self.items.get(self.pos).cloned() {
            let desc = &self.registry[ty];
            let tier = operator_tier(desc).unwrap();
            if min.map_or(false, |min| tier <= min) {
                break;
            }
            self.pos += 1;
            let next_min = match associativity(desc).unwrap() {
                Associativity::Left => Some(tier),
                Associativity::Right => lower(tier),
            };
            let right = self.parse(next_min);
            left = format!("({} {} {})", left, text, right);
        }
        left
    }
}

/// The tier just below `tier`, so an operator of the same tier on the right
/// still binds.
fn lower(tier: OperatorTier) -> Option<OperatorTier> {
    match tier {
        OperatorTier::Assignment => None,
        OperatorTier::Binary(1) => Some(OperatorTier::Assignment),
        OperatorTier::Binary(n) => Some(OperatorTier::Binary(n - 1)),
    }
}

/// Helper: parse and fully parenthesize.
fn group(source: &str) -> String {
    let registry = TokenRegistry::standard();
    let mut climber = Climber {
        registry,
        items: lex(registry, source),
        pos: 0,
    };
    let out = climber.parse(None);
    assert_eq!(climber.pos, climber.items.len(), "trailing input in {:?}", source);
    out
}

#[test]
fn test_same_tier_is_left_associative() {
    assert_eq!(group("a - b + c"), "((a - b) + c)");
    assert_eq!(group("a * b / c % d"), "(((a * b) / c) % d)");
    assert_eq!(group("a < b instanceof C in d"), "(((a < b) instanceof C) in d)");
}

#[test]
fn test_tighter_tier_binds_first() {
    assert_eq!(group("a + b * c"), "(a + (b * c))");
    assert_eq!(group("a || b && c | d ^ e & f"), "(a || (b && (c | (d ^ (e & f)))))");
    assert_eq!(group("a == b << c"), "(a == (b << c))");
}

#[test]
fn test_exponent_is_right_associative() {
    assert_eq!(group("a ** b ** c"), "(a ** (b ** c))");
    assert_eq!(group("a * b ** c"), "(a * (b ** c))");
}

#[test]
fn test_chained_assignment_is_right_associative() {
    assert_eq!(group("a = b = c"), "(a = (b = c))");
    assert_eq!(group("a += b -= c"), "(a += (b -= c))");
}

#[test]
fn test_assignment_is_below_every_binary_tier() {
    assert_eq!(group("a = b || c"), "(a = (b || c))");
    assert_eq!(group("a = b + c * d"), "(a = (b + (c * d)))");
}

#[test]
fn test_non_operators_have_no_tier() {
    let registry = TokenRegistry::standard();
    for kind in [TokenKind::Comma, TokenKind::Prefix, TokenKind::IncDec, TokenKind::Arrow] {
        assert_eq!(operator_tier(&registry[kind]), None, "{}", kind);
        assert_eq!(associativity(&registry[kind]), None, "{}", kind);
    }
    let typeof_ = registry.keyword("typeof").unwrap();
    assert_eq!(operator_tier(&registry[typeof_]), None);
}
