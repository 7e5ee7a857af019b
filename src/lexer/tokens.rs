use std::fmt::Display;

use crate::Span;

pub const KEYWORDS: [&str; 10] = [
    "case", "return", "break", "void", "if", "int", "float", "do", "else", "while",
];

pub const OPERATORS: [&str; 32] = [
    "++", "--", "+", "+=", "-", "-=", "*", "*=", "/", "/=", "%", "%=", "=", "==", "!", "!=", "<",
    "<=", ">", ">=", "&&", "||", "^", "^=", "<<", "<<=", ">>", ">>=", "&=", "|=", "&", "|",
];

pub const PUNCTUATORS: [char; 11] = ['(', ')', '[', ']', '{', '}', '.', ',', ';', ':', '#'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Constant,
    Literal,
    Punctuator,

    // Consumed by the scanner, never emitted
    Whitespace,
    Comment,
}

impl TokenKind {
    /// The kinds that can appear in a token stream, in report order.
    pub const EMITTED: [TokenKind; 6] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Constant,
        TokenKind::Literal,
        TokenKind::Punctuator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Literal => "LITERAL",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
        }
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Slot of an emitted kind inside a [`TokenTable`](super::table::TokenTable).
    pub(crate) fn index(&self) -> Option<usize> {
        TokenKind::EMITTED.iter().position(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} @ {}", self.kind, self.value, self.span)
    }
}
