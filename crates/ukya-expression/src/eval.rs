//! Evaluation of compiled prefix expressions.
//!
//! The prefix string is flattened back into bare tokens (the `^`, `{` and
//! `}` markers carry no information once the expression is fully
//! composed) and scanned in reverse with a single operand stack. Under
//! the reversed scan the first pop is the left operand, so `^{- 10 3}`
//! folds as `10 - 3`.

use crate::env::ConstEnv;
use crate::error::ExprError;
use crate::operators;

/// Evaluates a prefix expression string against `env`.
///
/// The expression must reduce to exactly one value; leftover or missing
/// operands mean the input was not a well-formed compiler artifact.
pub fn evaluate_prefix(expression: &str, env: &ConstEnv) -> Result<f64, ExprError> {
    let stripped: String = expression
        .chars()
        .filter(|c| !matches!(c, '^' | '{' | '}'))
        .collect();
    let tokens: Vec<&str> = stripped.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ExprError::MalformedExpression(
            "empty expression".to_string(),
        ));
    }

    let mut stack: Vec<f64> = Vec::new();
    for token in tokens.iter().rev() {
        if token.chars().all(|c| c.is_ascii_digit()) {
            let n: f64 = token
                .parse()
                .map_err(|_| ExprError::MalformedExpression(format!("bad literal '{}'", token)))?;
            stack.push(n);
        } else if let Some(def) = operators::lookup(token) {
            let left = stack.pop().ok_or_else(|| underflow(def.symbol))?;
            let right = stack.pop().ok_or_else(|| underflow(def.symbol))?;
            stack.push((def.apply_fn)(left, right)?);
        } else if token.chars().all(|c| c.is_ascii_alphabetic()) {
            stack.push(env.numeric(token)?);
        } else {
            return Err(ExprError::MalformedExpression(format!(
                "unrecognized token '{}'",
                token
            )));
        }
    }

    let result = stack.pop().ok_or_else(|| {
        ExprError::MalformedExpression("no result after evaluation".to_string())
    })?;
    if !stack.is_empty() {
        return Err(ExprError::MalformedExpression(
            "operands left over after evaluation".to_string(),
        ));
    }
    Ok(result)
}

fn underflow(symbol: &str) -> ExprError {
    ExprError::MalformedExpression(format!("operator '{}' is missing an operand", symbol))
}
