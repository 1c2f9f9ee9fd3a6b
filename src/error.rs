//! Error types for the implang front end

use crate::lexer::Token;
use thiserror::Error;

/// Errors raised by the scanner and the recognizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Character the scanner cannot classify
    ///
    /// **Triggered by:** any character outside whitespace, digits, letters,
    /// identifier underscores, and the operator/punctuation set
    /// **Example:** `x = #3` (the `#` has no lexical category)
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The unclassifiable character
        character: char,
        /// Char index into the source text where it was found
        position: usize,
    },

    /// A mandatory grammar element is missing at the current token
    ///
    /// **Triggered by:** a token sequence that does not conform to the grammar
    /// **Example:** `12ab = 3` (a statement may only start with an identifier or `if`)
    #[error("Syntax error at token: {token}")]
    UnexpectedToken {
        /// The offending token, left unconsumed by the recognizer
        token: Token,
    },

    /// The token sequence ended while a production still required input
    ///
    /// **Example:** `x = 1 +` (an operand must follow the trailing `+`)
    #[error("Syntax error: unexpected end of input")]
    UnexpectedEndOfInput,
}

/// Result type for implang operations
pub type Result<T> = std::result::Result<T, Error>;
