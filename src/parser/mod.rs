//! Grammar recognition for implang
//!
//! Walks a token sequence with a fixed set of mutually recursive productions
//! and reports whether the whole sequence conforms to the grammar.

mod recognizer;

pub use recognizer::Recognizer;
