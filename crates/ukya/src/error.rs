use thiserror::Error;
use ukya_expression::ExprError;

/// Errors produced while translating a parsed document to UKYA text.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Unsupported value type: {0}")]
    UnsupportedValue(&'static str),

    #[error("Comment value must be a string (key: {0})")]
    BadComment(String),

    #[error("in expression '{expression}': {source}")]
    Expr {
        expression: String,
        source: ExprError,
    },
}
