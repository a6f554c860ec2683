//! TokenKind enum - every token kind that is not a reserved word.

use crate::descriptor::{TokenOptions, TokenType};
use crate::precedence;

/// A non-keyword token kind.
///
/// The discriminant is also the kind's [`TokenType`] handle: a catalog
/// defines these kinds first, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum TokenKind {
    // ========================================================================
    // Literal categories and structural markers
    // ========================================================================
    Num = 0,
    Regexp = 1,
    String = 2,
    Name = 3,
    Eof = 4,

    // ========================================================================
    // Punctuation
    // ========================================================================
    BracketL = 5,
    BracketR = 6,
    BraceL = 7,
    BraceR = 8,
    ParenL = 9,
    ParenR = 10,
    Comma = 11,
    Semi = 12,
    Colon = 13,
    DoubleColon = 14,
    Dot = 15,
    Question = 16,
    Arrow = 17,
    Template = 18,
    Ellipsis = 19,
    BackQuote = 20,
    DollarBraceL = 21,
    At = 22,

    // ========================================================================
    // Operators
    // ========================================================================
    Eq = 23,
    Assign = 24,
    IncDec = 25,
    Prefix = 26,
    LogicalOr = 27,
    LogicalAnd = 28,
    BitwiseOr = 29,
    BitwiseXor = 30,
    BitwiseAnd = 31,
    Equality = 32,
    Relational = 33,
    BitShift = 34,
    PlusMin = 35,
    Modulo = 36,
    Star = 37,
    Slash = 38,
    Exponent = 39,
}

impl TokenKind {
    pub const COUNT: usize = 40;

    /// Every kind, in handle order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::Num,
        TokenKind::Regexp,
        TokenKind::String,
        TokenKind::Name,
        TokenKind::Eof,
        TokenKind::BracketL,
        TokenKind::BracketR,
        TokenKind::BraceL,
        TokenKind::BraceR,
        TokenKind::ParenL,
        TokenKind::ParenR,
        TokenKind::Comma,
        TokenKind::Semi,
        TokenKind::Colon,
        TokenKind::DoubleColon,
        TokenKind::Dot,
        TokenKind::Question,
        TokenKind::Arrow,
        TokenKind::Template,
        TokenKind::Ellipsis,
        TokenKind::BackQuote,
        TokenKind::DollarBraceL,
        TokenKind::At,
        TokenKind::Eq,
        TokenKind::Assign,
        TokenKind::IncDec,
        TokenKind::Prefix,
        TokenKind::LogicalOr,
        TokenKind::LogicalAnd,
        TokenKind::BitwiseOr,
        TokenKind::BitwiseXor,
        TokenKind::BitwiseAnd,
        TokenKind::Equality,
        TokenKind::Relational,
        TokenKind::BitShift,
        TokenKind::PlusMin,
        TokenKind::Modulo,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Exponent,
    ];

    /// The handle this kind occupies in every catalog.
    #[inline]
    pub fn token_type(self) -> TokenType {
        TokenType(self as u16)
    }

    /// The catalog key for this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Num => "num",
            TokenKind::Regexp => "regexp",
            TokenKind::String => "string",
            TokenKind::Name => "name",
            TokenKind::Eof => "eof",
            TokenKind::BracketL => "bracketL",
            TokenKind::BracketR => "bracketR",
            TokenKind::BraceL => "braceL",
            TokenKind::BraceR => "braceR",
            TokenKind::ParenL => "parenL",
            TokenKind::ParenR => "parenR",
            TokenKind::Comma => "comma",
            TokenKind::Semi => "semi",
            TokenKind::Colon => "colon",
            TokenKind::DoubleColon => "doubleColon",
            TokenKind::Dot => "dot",
            TokenKind::Question => "question",
            TokenKind::Arrow => "arrow",
            TokenKind::Template => "template",
            TokenKind::Ellipsis => "ellipsis",
            TokenKind::BackQuote => "backQuote",
            TokenKind::DollarBraceL => "dollarBraceL",
            TokenKind::At => "at",
            TokenKind::Eq => "eq",
            TokenKind::Assign => "assign",
            TokenKind::IncDec => "incDec",
            TokenKind::Prefix => "prefix",
            TokenKind::LogicalOr => "logicalOR",
            TokenKind::LogicalAnd => "logicalAND",
            TokenKind::BitwiseOr => "bitwiseOR",
            TokenKind::BitwiseXor => "bitwiseXOR",
            TokenKind::BitwiseAnd => "bitwiseAND",
            TokenKind::Equality => "equality",
            TokenKind::Relational => "relational",
            TokenKind::BitShift => "bitShift",
            TokenKind::PlusMin => "plusMin",
            TokenKind::Modulo => "modulo",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Exponent => "exponent",
        }
    }

    /// Diagnostic label. Kinds covering several lexemes list them
    /// separated by `/`.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Num => "num",
            TokenKind::Regexp => "regexp",
            TokenKind::String => "string",
            TokenKind::Name => "name",
            TokenKind::Eof => "eof",
            TokenKind::BracketL => "[",
            TokenKind::BracketR => "]",
            TokenKind::BraceL => "{",
            TokenKind::BraceR => "}",
            TokenKind::ParenL => "(",
            TokenKind::ParenR => ")",
            TokenKind::Comma => ",",
            TokenKind::Semi => ";",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Dot => ".",
            TokenKind::Question => "?",
            TokenKind::Arrow => "=>",
            TokenKind::Template => "template",
            TokenKind::Ellipsis => "...",
            TokenKind::BackQuote => "`",
            TokenKind::DollarBraceL => "${",
            TokenKind::At => "@",
            TokenKind::Eq => "=",
            TokenKind::Assign => "_=",
            TokenKind::IncDec => "++/--",
            TokenKind::Prefix => "!/~",
            TokenKind::LogicalOr => "||",
            TokenKind::LogicalAnd => "&&",
            TokenKind::BitwiseOr => "|",
            TokenKind::BitwiseXor => "^",
            TokenKind::BitwiseAnd => "&",
            TokenKind::Equality => "==/!=/===/!==",
            TokenKind::Relational => "</>/<=/>=",
            TokenKind::BitShift => "<</>>/>>>",
            TokenKind::PlusMin => "+/-",
            TokenKind::Modulo => "%",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Exponent => "**",
        }
    }

    /// Attributes for kinds that are not plain binary operators.
    ///
    /// Plain binary operators are defined through their precedence instead;
    /// see [`TokenKind::binary_precedence`].
    pub(crate) fn options(self) -> TokenOptions {
        let o = TokenOptions::new();
        match self {
            TokenKind::Num | TokenKind::Regexp | TokenKind::String | TokenKind::Name => {
                o.starts_expr()
            }
            TokenKind::BracketL | TokenKind::BraceL | TokenKind::ParenL | TokenKind::DollarBraceL => {
                o.before_expr().starts_expr()
            }
            TokenKind::Comma
            | TokenKind::Semi
            | TokenKind::Colon
            | TokenKind::DoubleColon
            | TokenKind::Question
            | TokenKind::Arrow
            | TokenKind::Ellipsis => o.before_expr(),
            TokenKind::BackQuote => o.starts_expr(),
            TokenKind::Eq | TokenKind::Assign => o.before_expr().is_assign(),
            TokenKind::IncDec => o.prefix().postfix().starts_expr(),
            TokenKind::Prefix => o.before_expr().prefix().starts_expr(),
            // Unary plus and minus share the lexeme.
            TokenKind::PlusMin => o
                .before_expr()
                .binop(precedence::ADDITIVE)
                .prefix()
                .starts_expr(),
            TokenKind::Exponent => o
                .before_expr()
                .binop(precedence::EXPONENT)
                .right_associative(),
            _ => o,
        }
    }

    /// Precedence of the kinds built with the plain binary-operator
    /// constructor.
    pub(crate) fn binary_precedence(self) -> Option<u8> {
        match self {
            TokenKind::LogicalOr => Some(precedence::LOGICAL_OR),
            TokenKind::LogicalAnd => Some(precedence::LOGICAL_AND),
            TokenKind::BitwiseOr => Some(precedence::BITWISE_OR),
            TokenKind::BitwiseXor => Some(precedence::BITWISE_XOR),
            TokenKind::BitwiseAnd => Some(precedence::BITWISE_AND),
            TokenKind::Equality => Some(precedence::EQUALITY),
            TokenKind::Relational => Some(precedence::RELATIONAL),
            TokenKind::BitShift => Some(precedence::SHIFT),
            TokenKind::Modulo | TokenKind::Star | TokenKind::Slash => {
                Some(precedence::MULTIPLICATIVE)
            }
            _ => None,
        }
    }

    /// Look up a kind by its catalog key.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// The kind a scanned punctuator or operator lexeme belongs to.
    pub fn from_punctuator(text: &str) -> Option<TokenKind> {
        match text {
            "[" => Some(TokenKind::BracketL),
            "]" => Some(TokenKind::BracketR),
            "{" => Some(TokenKind::BraceL),
            "}" => Some(TokenKind::BraceR),
            "(" => Some(TokenKind::ParenL),
            ")" => Some(TokenKind::ParenR),
            "," => Some(TokenKind::Comma),
            ";" => Some(TokenKind::Semi),
            ":" => Some(TokenKind::Colon),
            "::" => Some(TokenKind::DoubleColon),
            "." => Some(TokenKind::Dot),
            "?" => Some(TokenKind::Question),
            "=>" => Some(TokenKind::Arrow),
            "..." => Some(TokenKind::Ellipsis),
            "`" => Some(TokenKind::BackQuote),
            "${" => Some(TokenKind::DollarBraceL),
            "@" => Some(TokenKind::At),
            "=" => Some(TokenKind::Eq),
            "+=" | "-=" | "*=" | "/=" | "%=" | "**=" | "<<=" | ">>=" | ">>>=" | "&=" | "|="
            | "^=" => Some(TokenKind::Assign),
            "++" | "--" => Some(TokenKind::IncDec),
            "!" | "~" => Some(TokenKind::Prefix),
            "||" => Some(TokenKind::LogicalOr),
            "&&" => Some(TokenKind::LogicalAnd),
            "|" => Some(TokenKind::BitwiseOr),
            "^" => Some(TokenKind::BitwiseXor),
            "&" => Some(TokenKind::BitwiseAnd),
            "==" | "!=" | "===" | "!==" => Some(TokenKind::Equality),
            "<" | ">" | "<=" | ">=" => Some(TokenKind::Relational),
            "<<" | ">>" | ">>>" => Some(TokenKind::BitShift),
            "+" | "-" => Some(TokenKind::PlusMin),
            "%" => Some(TokenKind::Modulo),
            "*" => Some(TokenKind::Star),
            "/" => Some(TokenKind::Slash),
            "**" => Some(TokenKind::Exponent),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
