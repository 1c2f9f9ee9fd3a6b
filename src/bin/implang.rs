use std::env;
use std::fs;
use std::process;

use implang::{Recognizer, Scanner};

const SAMPLE_PROGRAM: &str = r#"
    age = 10 * (2 + 3)
    if (age < 30) {
        val = 3
    } else {
        val = 5
    }
"#;

fn main() {
    let source = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Cannot read {}: {}", path, e);
                process::exit(1);
            }
        },
        None => SAMPLE_PROGRAM.to_string(),
    };

    let mut scanner = Scanner::new(&source);
    let tokens = match scanner.scan_tokens() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!("Tokens:");
    for token in &tokens {
        println!("{}", token);
    }

    let mut recognizer = Recognizer::new(tokens);
    if let Err(e) = recognizer.recognize() {
        eprintln!("{}", e);
        process::exit(1);
    }

    println!("Parsing successful.");
}
