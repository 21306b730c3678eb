//! The operator metadata table.
//!
//! One fixed, read-only table drives both halves of the engine: the
//! compiler reads `precedence` to order reductions, the evaluator calls
//! `apply_fn` to fold operands. Higher precedence binds tighter.

use crate::error::ExprError;

/// The type of a binary operator application.
pub type ApplyFn = fn(f64, f64) -> Result<f64, ExprError>;

/// A single operator: its symbol, precedence rank, and fold function.
pub struct OperatorDefinition {
    pub symbol: &'static str,
    pub precedence: u8,
    pub apply_fn: ApplyFn,
}

fn add(left: f64, right: f64) -> Result<f64, ExprError> {
    Ok(left + right)
}

fn subtract(left: f64, right: f64) -> Result<f64, ExprError> {
    Ok(left - right)
}

fn multiply(left: f64, right: f64) -> Result<f64, ExprError> {
    Ok(left * right)
}

fn divide(left: f64, right: f64) -> Result<f64, ExprError> {
    if right == 0.0 {
        return Err(ExprError::DivisionByZero);
    }
    Ok(left / right)
}

fn max_of(left: f64, right: f64) -> Result<f64, ExprError> {
    Ok(left.max(right))
}

/// Every operator of the dialect. `+`/`-` bind loosest, `max` tightest.
pub static OPERATORS: &[OperatorDefinition] = &[
    OperatorDefinition { symbol: "+", precedence: 1, apply_fn: add },
    OperatorDefinition { symbol: "-", precedence: 1, apply_fn: subtract },
    OperatorDefinition { symbol: "*", precedence: 2, apply_fn: multiply },
    OperatorDefinition { symbol: "/", precedence: 2, apply_fn: divide },
    OperatorDefinition { symbol: "max", precedence: 3, apply_fn: max_of },
];

/// Returns the definition for `symbol`, or `None` if it is not an operator.
pub fn lookup(symbol: &str) -> Option<&'static OperatorDefinition> {
    OPERATORS.iter().find(|op| op.symbol == symbol)
}

/// Returns true if `text` is an operator symbol, including the
/// word-shaped `max`.
pub fn is_operator(text: &str) -> bool {
    lookup(text).is_some()
}
