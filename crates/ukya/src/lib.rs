//! JSON → UKYA configuration converter.
//!
//! # Overview
//!
//! UKYA is a flat, line-oriented configuration dialect. A structured
//! JSON document maps onto it as follows:
//!
//! - nested objects become `$[ ... ]` blocks;
//! - integers and plain strings under identifier-shaped keys become
//!   `global name = value` constant declarations;
//! - string values wrapped in `^{ ... }` are infix arithmetic: they are
//!   compiled to prefix form and evaluated against the constants
//!   declared so far, emitting `^{op left right} = result`;
//! - keys starting with `//` or wrapped in `/* ... */` carry comments.
//!
//! The expression engine itself lives in the `ukya-expression` crate.
//!
//! # Example
//!
//! ```
//! let doc = serde_json::json!({
//!     "value": 42,
//!     "name": "example",
//!     "expression": "^{3 + 4}"
//! });
//!
//! let out = ukya::translate(&doc).unwrap();
//!
//! assert_eq!(out, "global value = 42\nglobal name = 'example'\n^{+ 3 4} = 7");
//! ```

pub mod cli;
pub mod comment;
pub mod error;
pub mod translate;

pub use error::TranslateError;
pub use translate::translate;
