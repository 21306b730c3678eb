//! Tokenization of raw infix expression text.
//!
//! The lexical grammar is deliberately tiny: digit runs, letter runs, the
//! four symbol operators, and parentheses. Anything else (whitespace,
//! commas, ...) is dropped without complaint — `max(3,4)` relies on the
//! comma vanishing so that the stream reads as `max ( 3 4 )`.

use crate::operators;

/// A lexical unit of the infix dialect.
///
/// `max` is lexically identifier-shaped but is reserved: the tokenizer
/// promotes it to `Operator` before identifier classification, so the
/// compiler never has to re-check the text of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of ASCII digits.
    Literal(String),
    /// A run of ASCII letters that is not a reserved word.
    Identifier(String),
    /// An operator symbol from the metadata table.
    Operator(&'static str),
    OpenParen,
    CloseParen,
}

/// Splits `input` into tokens, left to right.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut run = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                run.push(d);
                chars.next();
            }
            tokens.push(Token::Literal(run));
        } else if c.is_ascii_alphabetic() {
            let mut word = String::new();
            while let Some(&a) = chars.peek() {
                if !a.is_ascii_alphabetic() {
                    break;
                }
                word.push(a);
                chars.next();
            }
            match operators::lookup(&word) {
                Some(def) => tokens.push(Token::Operator(def.symbol)),
                None => tokens.push(Token::Identifier(word)),
            }
        } else {
            chars.next();
            match c {
                '+' => tokens.push(Token::Operator("+")),
                '-' => tokens.push(Token::Operator("-")),
                '*' => tokens.push(Token::Operator("*")),
                '/' => tokens.push(Token::Operator("/")),
                '(' => tokens.push(Token::OpenParen),
                ')' => tokens.push(Token::CloseParen),
                // Unrecognized characters are skipped, not errors.
                _ => {}
            }
        }
    }

    tokens
}
