use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent recognizer for the implang grammar
///
/// ```text
/// Program    := Statement*
/// Statement  := Assignment
///             | "if" "(" Expression ")" "{" Statement "}" [ "else" "{" Statement "}" ]
/// Assignment := ID "=" Expression
/// Expression := Term ( ("+" | "-" | "<") Term )*
/// Term       := Factor ( ("*" | "/") Factor )*
/// Factor     := INT | ID | "(" Expression ")" | "-" Factor
/// ```
///
/// Each production is a method advancing a single cursor over the token
/// sequence; one token of lookahead decides every choice point. The first
/// violation aborts recognition with the offending token. No syntax tree is
/// built: success means the full sequence matches the grammar, nothing more.
pub struct Recognizer {
    tokens: Vec<Token>,
    current: usize,
}

impl Recognizer {
    /// Creates a new recognizer over a scanned token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Recognizer { tokens, current: 0 }
    }

    /// Validates the token sequence against the grammar
    ///
    /// An empty sequence is a valid (zero-statement) program.
    pub fn recognize(&mut self) -> Result<()> {
        while !self.is_at_end() {
            self.statement()?;
        }

        tracing::debug!("recognition complete");

        Ok(())
    }

    /// Statement dispatches on its first token: an identifier commits to an
    /// assignment, `if` commits to a conditional, anything else is an error
    /// citing that token.
    fn statement(&mut self) -> Result<()> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Identifier) => self.assignment(),
            Some(TokenKind::If) => {
                self.advance();
                self.expect(TokenKind::LeftParen)?;
                self.expression()?;
                self.expect(TokenKind::RightParen)?;
                self.expect(TokenKind::LeftBrace)?;
                self.statement()?;
                self.expect(TokenKind::RightBrace)?;

                if self.take(&[TokenKind::Else]).is_some() {
                    self.expect(TokenKind::LeftBrace)?;
                    self.statement()?;
                    self.expect(TokenKind::RightBrace)?;
                }

                Ok(())
            }
            Some(_) => Err(self.unexpected()),
            None => Err(Error::UnexpectedEndOfInput),
        }
    }

    /// Assignment := ID "=" Expression
    fn assignment(&mut self) -> Result<()> {
        self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Assign)?;
        self.expression()
    }

    /// Expression := Term ( ("+" | "-" | "<") Term )*
    ///
    /// `<` sits in the same layer as the additive operators, left-associative
    /// with them rather than below them.
    fn expression(&mut self) -> Result<()> {
        self.term()?;

        while self
            .take(&[TokenKind::Plus, TokenKind::Minus, TokenKind::LessThan])
            .is_some()
        {
            self.term()?;
        }

        Ok(())
    }

    /// Term := Factor ( ("*" | "/") Factor )*
    fn term(&mut self) -> Result<()> {
        self.factor()?;

        while self.take(&[TokenKind::Star, TokenKind::Slash]).is_some() {
            self.factor()?;
        }

        Ok(())
    }

    /// Factor := INT | ID | "(" Expression ")" | "-" Factor
    fn factor(&mut self) -> Result<()> {
        if self
            .take(&[TokenKind::Integer, TokenKind::Identifier])
            .is_some()
        {
            Ok(())
        } else if self.take(&[TokenKind::LeftParen]).is_some() {
            self.expression()?;
            self.expect(TokenKind::RightParen)?;
            Ok(())
        } else if self.take(&[TokenKind::Minus]).is_some() {
            self.factor()
        } else {
            Err(self.unexpected())
        }
    }

    // Cursor helpers

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    /// Consume the current token iff its kind is in `kinds`
    fn take(&mut self, kinds: &[TokenKind]) -> Option<&Token> {
        let matched = matches!(self.peek(), Some(t) if kinds.contains(&t.kind));

        if matched {
            self.advance();
            Some(&self.tokens[self.current - 1])
        } else {
            None
        }
    }

    /// Consume the current token, which must be of `kind`
    fn expect(&mut self, kind: TokenKind) -> Result<&Token> {
        if matches!(self.peek(), Some(t) if t.kind == kind) {
            self.advance();
            Ok(&self.tokens[self.current - 1])
        } else {
            Err(self.unexpected())
        }
    }

    /// Error citing the current unconsumed token, or end of input when the
    /// cursor has run past the sequence
    fn unexpected(&self) -> Error {
        match self.peek() {
            Some(token) => Error::UnexpectedToken {
                token: token.clone(),
            },
            None => Error::UnexpectedEndOfInput,
        }
    }
}
