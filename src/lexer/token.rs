use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub text: String,
}

impl Token {
    /// Creates a new token with the given kind and lexeme
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.text)
    }
}

/// All token kinds the scanner can produce
///
/// The language reserves `[`, `]`, `,`, `.` and the keywords `then`/`endif`
/// for future grammar extensions. The scanner has no rule that emits them,
/// so they are deliberately not variants here; extending the grammar means
/// adding the variant and the matching scanner rule together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal
    Integer,
    /// Identifier
    Identifier,

    // Keywords
    /// IF keyword
    If,
    /// ELSE keyword
    Else,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Multiplication operator (*)
    Star,
    /// Division operator (/)
    Slash,
    /// Assignment operator (=)
    Assign,
    /// Less than operator (<)
    LessThan,

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
}

impl TokenKind {
    /// Get keyword kind from an identifier spelling, if it is one
    ///
    /// Matching is exact: `"ifx"` is an identifier, not `if` plus `x`.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            _ => None,
        }
    }

    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::If | TokenKind::Else)
    }

    /// Display name used in token dumps and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Identifier => "ID",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::RightBrace => "RBRACE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
