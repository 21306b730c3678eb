//! Comment-line detection.
//!
//! UKYA comments are declared through the document's keys, not its
//! values: a key beginning with `//` carries a single-line comment and a
//! key wrapped in `/*` ... `*/` carries a block comment. In both cases
//! the comment text is the entry's value.

use crate::error::TranslateError;
use serde_json::Value;

/// Renders `key`/`value` as a UKYA comment fragment, or returns `None`
/// when the key is not comment-shaped.
pub fn detect(key: &str, value: &Value) -> Result<Option<String>, TranslateError> {
    if key.starts_with("//") {
        let text = comment_text(key, value)?;
        return Ok(Some(format!("C {}", text.trim())));
    }
    if key.starts_with("/*") && key.ends_with("*/") {
        let text = comment_text(key, value)?;
        return Ok(Some(format!("=begin\n{}\n=end", text.trim())));
    }
    Ok(None)
}

fn comment_text<'a>(key: &str, value: &'a Value) -> Result<&'a str, TranslateError> {
    value
        .as_str()
        .ok_or_else(|| TranslateError::BadComment(key.to_string()))
}
