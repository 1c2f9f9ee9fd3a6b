//! Property-based fuzzing tests for the implang scanner and recognizer
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The scanner never panics on arbitrary input
//! 2. The recognizer never panics on any token sequence the scanner produces
//! 3. Generated well-formed programs are always accepted

use implang::{Recognizer, Scanner, TokenKind};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the scanner
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,200}").unwrap()
}

/// Generate identifiers that are not keywords
fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("keywords are not identifiers", |s| {
        s != "if" && s != "else"
    })
}

/// Generate integer literals
fn integer() -> impl Strategy<Value = String> {
    (0u64..1_000_000).prop_map(|n| n.to_string())
}

/// Generate expressions: leaves are literals and identifiers, recursion adds
/// binary operators, parentheses, and unary minus
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![integer(), identifier()];

    leaf.prop_recursive(3, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), binary_operator(), inner.clone())
                .prop_map(|(a, op, b)| format!("{} {} {}", a, op, b)),
            inner.clone().prop_map(|e| format!("({})", e)),
            inner.prop_map(|e| format!("-{}", e)),
        ]
    })
}

fn binary_operator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("<".to_string()),
    ]
}

/// Generate assignment statements
fn assignment() -> impl Strategy<Value = String> {
    (identifier(), expression()).prop_map(|(id, e)| format!("{} = {}", id, e))
}

/// Generate single statements: assignments and if/else blocks
fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        assignment(),
        (expression(), assignment()).prop_map(|(cond, body)| {
            format!("if ({}) {{ {} }}", cond, body)
        }),
        (expression(), assignment(), assignment()).prop_map(|(cond, then, alt)| {
            format!("if ({}) {{ {} }} else {{ {} }}", cond, then, alt)
        }),
    ]
}

/// Generate well-formed programs
fn valid_program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 0..8).prop_map(|stmts| stmts.join("\n"))
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn scanner_never_panics(source in arbitrary_source_string()) {
        let mut scanner = Scanner::new(&source);
        let _ = scanner.scan_tokens();
    }

    #[test]
    fn recognizer_never_panics_on_scanner_output(source in arbitrary_source_string()) {
        let mut scanner = Scanner::new(&source);
        if let Ok(tokens) = scanner.scan_tokens() {
            let mut recognizer = Recognizer::new(tokens);
            let _ = recognizer.recognize();
        }
    }

    #[test]
    fn scanning_is_deterministic(source in arbitrary_source_string()) {
        let mut first = Scanner::new(&source);
        let mut second = Scanner::new(&source);
        prop_assert_eq!(first.scan_tokens(), second.scan_tokens());
    }

    #[test]
    fn digit_run_is_one_integer_token(digits in "[0-9]{1,12}") {
        let mut scanner = Scanner::new(&digits);
        let tokens = scanner.scan_tokens().unwrap();

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(&tokens[0].text, &digits);
    }

    #[test]
    fn letter_led_run_is_one_token(word in "[a-z][a-z0-9_]{0,12}") {
        let mut scanner = Scanner::new(&word);
        let tokens = scanner.scan_tokens().unwrap();

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].text, &word);
    }

    #[test]
    fn token_text_never_empty(source in arbitrary_source_string()) {
        let mut scanner = Scanner::new(&source);
        if let Ok(tokens) = scanner.scan_tokens() {
            for token in tokens {
                prop_assert!(!token.text.is_empty());
            }
        }
    }

    #[test]
    fn generated_programs_are_accepted(program in valid_program()) {
        let mut scanner = Scanner::new(&program);
        let tokens = scanner.scan_tokens().unwrap();
        let mut recognizer = Recognizer::new(tokens);
        recognizer.recognize().unwrap();
    }

    #[test]
    fn recognition_is_deterministic(program in valid_program()) {
        let mut scanner = Scanner::new(&program);
        let tokens = scanner.scan_tokens().unwrap();

        let mut first = Recognizer::new(tokens.clone());
        let mut second = Recognizer::new(tokens);
        prop_assert_eq!(first.recognize(), second.recognize());
    }
}
