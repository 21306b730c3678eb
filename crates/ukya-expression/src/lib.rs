//! Infix expression engine for the UKYA configuration dialect.
//!
//! # Overview
//!
//! Arithmetic embedded in a document is written in infix notation with
//! named references to previously declared constants. This crate compiles
//! such text to a canonical prefix form — `^{op left right}`, with
//! operands that are literals, identifiers, or nested applications — and
//! evaluates the prefix form against a constant environment.
//!
//! # Example
//!
//! ```
//! use ukya_expression::{compile_and_eval, ConstEnv};
//!
//! let mut env = ConstEnv::new();
//! env.define("x", serde_json::json!(5));
//!
//! let (prefix, value) = compile_and_eval("x + 4 * 2", &env).unwrap();
//!
//! assert_eq!(prefix, "^{+ x ^{* 4 2}}");
//! assert_eq!(value, 13.0);
//! ```

pub mod compile;
pub mod env;
pub mod error;
pub mod eval;
pub mod operators;
pub mod token;

pub use compile::to_prefix;
pub use env::ConstEnv;
pub use error::ExprError;
pub use eval::evaluate_prefix;
pub use token::{tokenize, Token};

/// Compiles raw infix text and evaluates the result in one step.
///
/// `raw` is the expression body with any outer `^{`/`}` wrapper already
/// stripped by the caller. Returns the canonical prefix string together
/// with its numeric value; deterministic for fixed inputs.
pub fn compile_and_eval(raw: &str, env: &ConstEnv) -> Result<(String, f64), ExprError> {
    let tokens = token::tokenize(raw);
    let prefix = compile::to_prefix(&tokens)?;
    let value = eval::evaluate_prefix(&prefix, env)?;
    Ok((prefix, value))
}
