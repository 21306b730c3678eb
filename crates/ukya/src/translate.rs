//! JSON-tree → UKYA translation.
//!
//! The walk visits object entries in document order (key order is
//! preserved by the parser) and emits one line-oriented fragment per
//! entry. Integer and plain-string values bound to identifier-shaped
//! keys become `global` constant declarations and are registered in the
//! constant environment before any later entry is processed, so an
//! expression may reference every constant declared above it and none
//! declared below.

use crate::comment;
use crate::error::TranslateError;
use regex::Regex;
use serde_json::{Map, Value};
use ukya_expression::{compile_and_eval, ConstEnv};

fn ident_key_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[_a-zA-Z]+$").expect("identifier key pattern"))
}

fn is_ident_key(key: &str) -> bool {
    ident_key_regex().is_match(key)
}

/// Translates a parsed document to UKYA text.
///
/// The document root must be an object; its entries become top-level
/// fragments joined by newlines.
pub fn translate(doc: &Value) -> Result<String, TranslateError> {
    let root = doc
        .as_object()
        .ok_or(TranslateError::UnsupportedValue("non-object document root"))?;
    let mut env = ConstEnv::new();
    translate_object(root, &mut env)
}

fn translate_object(
    map: &Map<String, Value>,
    env: &mut ConstEnv,
) -> Result<String, TranslateError> {
    let mut fragments = Vec::with_capacity(map.len());
    for (key, value) in map {
        match comment::detect(key, value)? {
            Some(line) => fragments.push(line),
            None => fragments.push(translate_value(key, value, env)?),
        }
    }
    Ok(fragments.join("\n"))
}

fn translate_value(
    key: &str,
    value: &Value,
    env: &mut ConstEnv,
) -> Result<String, TranslateError> {
    match value {
        Value::Object(map) => {
            let inner = translate_object(map, env)?;
            Ok(format!("$[\n{}\n]", inner))
        }
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            if is_ident_key(key) {
                env.define(key, value.clone());
                Ok(format!("global {} = {}", key, n))
            } else {
                Ok(n.to_string())
            }
        }
        Value::String(s) if !s.contains('^') => {
            if is_ident_key(key) {
                env.define(key, value.clone());
                Ok(format!("global {} = '{}'", key, s))
            } else {
                Ok(s.clone())
            }
        }
        Value::String(s) => match s.strip_prefix("^{").and_then(|r| r.strip_suffix('}')) {
            Some(raw) => {
                let (prefix, result) =
                    compile_and_eval(raw, env).map_err(|source| TranslateError::Expr {
                        expression: s.clone(),
                        source,
                    })?;
                Ok(format!("{} = {}", prefix, result))
            }
            // A `^` outside the expression wrapper passes through verbatim.
            None => Ok(s.clone()),
        },
        Value::Number(_) => Err(TranslateError::UnsupportedValue("non-integer number")),
        Value::Bool(_) => Err(TranslateError::UnsupportedValue("boolean")),
        Value::Array(_) => Err(TranslateError::UnsupportedValue("array")),
        Value::Null => Err(TranslateError::UnsupportedValue("null")),
    }
}
