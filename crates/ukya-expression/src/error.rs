use thiserror::Error;

/// Errors produced while compiling or evaluating a single expression.
///
/// All of these are terminal for the expression at hand; none of them
/// leaves the constant environment in a modified state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Unresolved identifier: {0}")]
    UnresolvedIdentifier(String),

    #[error("DIVISION_BY_ZERO")]
    DivisionByZero,

    #[error("Unsupported operand: constant '{0}' is not numeric")]
    UnsupportedOperand(String),
}
