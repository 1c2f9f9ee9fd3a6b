use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for implang source text
///
/// Walks the source in a single left-to-right pass and accumulates tokens.
/// The first unclassifiable character aborts the scan; no partial token
/// sequence is returned.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        tracing::debug!(tokens = self.tokens.len(), "scan complete");

        Ok(self.tokens.clone())
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            // Whitespace (ignore)
            c if c.is_whitespace() => {}

            // Operators
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '*' => self.add_token(TokenKind::Star),
            '/' => self.add_token(TokenKind::Slash),
            '=' => self.add_token(TokenKind::Assign),
            // `<` is always a single-character token; `<=` lexes as `<` `=`
            '<' => self.add_token(TokenKind::LessThan),

            // Delimiters
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),

            // Numbers
            c if c.is_ascii_digit() => self.scan_number(),

            // Identifiers and keywords
            c if c.is_alphabetic() => self.scan_identifier_or_keyword(),

            _ => {
                return Err(Error::InvalidCharacter {
                    character: c,
                    position: self.start,
                });
            }
        }

        Ok(())
    }

    /// Consume a maximal run of digits
    ///
    /// The literal is kept as text; it is never converted to a machine
    /// integer at this stage.
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        self.add_token(TokenKind::Integer);
    }

    /// Consume a maximal letter-led run of letters, digits and underscores
    fn scan_identifier_or_keyword(&mut self) {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);

        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let text: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, text));
    }
}
