//! Infix → prefix compilation (shunting-yard).
//!
//! The compiler runs two stacks: pending operators and finished values.
//! A value is either an atomic operand (literal or identifier text) or an
//! already-composed `^{op left right}` sub-expression. Reducing pops one
//! operator and two values and pushes the composed form; the right operand
//! is popped first because the value stack is LIFO over insertion order.

use crate::error::ExprError;
use crate::operators::{self, OperatorDefinition};
use crate::token::Token;

/// An entry on the operator stack: a real operator, or an open
/// parenthesis acting as a reduction fence.
enum OpEntry {
    Paren,
    Op(&'static OperatorDefinition),
}

fn reduce(ops: &mut Vec<OpEntry>, values: &mut Vec<String>) -> Result<(), ExprError> {
    let def = match ops.pop() {
        Some(OpEntry::Op(def)) => def,
        _ => {
            return Err(ExprError::MalformedExpression(
                "unbalanced parentheses".to_string(),
            ))
        }
    };
    let right = values.pop().ok_or_else(|| missing_operand(def))?;
    let left = values.pop().ok_or_else(|| missing_operand(def))?;
    values.push(format!("^{{{} {} {}}}", def.symbol, left, right));
    Ok(())
}

fn missing_operand(def: &OperatorDefinition) -> ExprError {
    ExprError::MalformedExpression(format!("operator '{}' is missing an operand", def.symbol))
}

/// Compiles a token stream into a single prefix expression string.
///
/// Equal-precedence operators reduce left to right (`10 - 3 - 2` groups as
/// `(10 - 3) - 2`), which the `>=` comparison below enforces; `max`
/// associates the same way among chained applications.
pub fn to_prefix(tokens: &[Token]) -> Result<String, ExprError> {
    let mut ops: Vec<OpEntry> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            Token::Literal(text) | Token::Identifier(text) => values.push(text.clone()),
            Token::OpenParen => ops.push(OpEntry::Paren),
            Token::CloseParen => loop {
                match ops.last() {
                    Some(OpEntry::Op(_)) => reduce(&mut ops, &mut values)?,
                    Some(OpEntry::Paren) => {
                        ops.pop();
                        break;
                    }
                    None => {
                        return Err(ExprError::MalformedExpression(
                            "unmatched ')'".to_string(),
                        ))
                    }
                }
            },
            Token::Operator(symbol) => {
                let def = operators::lookup(symbol).ok_or_else(|| {
                    ExprError::MalformedExpression(format!("unknown operator '{}'", symbol))
                })?;
                while let Some(OpEntry::Op(top)) = ops.last() {
                    if top.precedence < def.precedence {
                        break;
                    }
                    reduce(&mut ops, &mut values)?;
                }
                ops.push(OpEntry::Op(def));
            }
        }
    }

    // Drain: a leftover open parenthesis surfaces as an error in reduce.
    while !ops.is_empty() {
        reduce(&mut ops, &mut values)?;
    }

    let result = values
        .pop()
        .ok_or_else(|| ExprError::MalformedExpression("empty expression".to_string()))?;
    if !values.is_empty() {
        return Err(ExprError::MalformedExpression(
            "operands left over after reduction".to_string(),
        ));
    }
    Ok(result)
}
