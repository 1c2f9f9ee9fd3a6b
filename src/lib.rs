//! # implang
//!
//! A two-stage front end for a minimal imperative language with integer
//! arithmetic, assignment, comparison, and `if`/`else` blocks. The crate
//! recognizes and validates programs; it does not build syntax trees and it
//! does not evaluate anything.
//!
//! ## Quick Start
//!
//! ```rust
//! use implang::{Recognizer, Scanner};
//!
//! # fn main() -> implang::Result<()> {
//! let source = r#"
//!     age = 10 * (2 + 3)
//!     if (age < 30) {
//!         val = 3
//!     } else {
//!         val = 5
//!     }
//! "#;
//!
//! // Tokenize (scan)
//! let mut scanner = Scanner::new(source);
//! let tokens = scanner.scan_tokens()?;
//!
//! // Validate against the grammar
//! let mut recognizer = Recognizer::new(tokens);
//! recognizer.recognize()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Recognizer → accept / reject
//! ```
//!
//! Data flows one way. The [`Scanner`] makes a single left-to-right pass
//! over the source text and produces an ordered sequence of
//! [`Token`] values; the [`Recognizer`] walks that sequence once with one
//! token of lookahead and either accepts it or reports the first violation.
//! Neither component performs I/O, and both are plain synchronous calls
//! with no shared state, so independent inputs can be processed on
//! independent threads without coordination.
//!
//! ## Grammar
//!
//! ```text
//! Program    := Statement*
//! Statement  := Assignment
//!             | "if" "(" Expression ")" "{" Statement "}" [ "else" "{" Statement "}" ]
//! Assignment := ID "=" Expression
//! Expression := Term ( ("+" | "-" | "<") Term )*
//! Term       := Factor ( ("*" | "/") Factor )*
//! Factor     := INT | ID | "(" Expression ")" | "-" Factor
//! ```
//!
//! ## Error Handling
//!
//! Both passes return typed errors instead of terminating the process, so
//! the crate stays embeddable and unit-testable; mapping failures to exit
//! codes is the caller's decision.
//!
//! ```rust
//! use implang::{Recognizer, Scanner};
//!
//! let mut scanner = Scanner::new("12ab = 3");
//! let tokens = scanner.scan_tokens().unwrap();
//!
//! let mut recognizer = Recognizer::new(tokens);
//! match recognizer.recognize() {
//!     Ok(()) => panic!("should have failed"),
//!     Err(e) => {
//!         // A statement may only start with an identifier or `if`
//!         assert!(e.to_string().contains("Syntax error"));
//!     }
//! }
//! ```

/// Version of the implang front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::Recognizer;
