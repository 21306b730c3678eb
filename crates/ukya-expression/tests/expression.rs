//! Integration tests for the expression engine: infix text in, canonical
//! prefix form and numeric value out.

use serde_json::{json, Value};
use ukya_expression::{compile_and_eval, evaluate_prefix, ConstEnv, ExprError};

fn env_from(pairs: &[(&str, Value)]) -> ConstEnv {
    let mut env = ConstEnv::new();
    for (name, value) in pairs {
        env.define(name, value.clone());
    }
    env
}

fn check(raw: &str, expected_prefix: &str, expected_value: f64) {
    let env = ConstEnv::new();
    let (prefix, value) = compile_and_eval(raw, &env)
        .unwrap_or_else(|e| panic!("compile_and_eval({:?}) failed: {}", raw, e));
    assert_eq!(prefix, expected_prefix, "expression: {}", raw);
    assert_eq!(value, expected_value, "expression: {}", raw);
}

fn check_err(raw: &str, env: &ConstEnv) -> ExprError {
    compile_and_eval(raw, env)
        .err()
        .unwrap_or_else(|| panic!("expected error for {:?}", raw))
}

// ----------------------------------------------------------------- Precedence

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    check("3 + 4 * 2", "^{+ 3 ^{* 4 2}}", 11.0);
    check("4 * 2 + 3", "^{+ ^{* 4 2} 3}", 11.0);
}

#[test]
fn test_division_binds_tighter_than_subtraction() {
    check("9 - 8 / 2", "^{- 9 ^{/ 8 2}}", 5.0);
}

#[test]
fn test_max_binds_tightest() {
    check("2 * 3 max 5", "^{* 2 ^{max 3 5}}", 10.0);
}

// ----------------------------------------------------------- Associativity

#[test]
fn test_left_associativity() {
    check("10 - 3 - 2", "^{- ^{- 10 3} 2}", 5.0);
    check("100 / 10 / 5", "^{/ ^{/ 100 10} 5}", 2.0);
    check("1 max 5 max 3", "^{max ^{max 1 5} 3}", 5.0);
}

// ------------------------------------------------------------- Parentheses

#[test]
fn test_parentheses_override_precedence() {
    check("(3 + 4) * 2", "^{* ^{+ 3 4} 2}", 14.0);
    check("2 * (3 + 4)", "^{* 2 ^{+ 3 4}}", 14.0);
    check("(1 + 2) * (3 + 4)", "^{* ^{+ 1 2} ^{+ 3 4}}", 21.0);
}

#[test]
fn test_nested_parentheses() {
    check("((1 + 2))", "^{+ 1 2}", 3.0);
    check("(10 - (3 - 2))", "^{- 10 ^{- 3 2}}", 9.0);
}

// --------------------------------------------------------------------- max

#[test]
fn test_max_call_syntax() {
    // The comma is not a token, so `max(3,4)` reads as `max ( 3 4 )`.
    check("max(3,4)", "^{max 3 4}", 4.0);
    check("3 max 4", "^{max 3 4}", 4.0);
}

#[test]
fn test_max_mixed_with_arithmetic() {
    check("max(3,4) + 1", "^{+ ^{max 3 4} 1}", 5.0);
}

// --------------------------------------------------------------- Division

#[test]
fn test_division_is_floating_point() {
    check("5 / 2", "^{/ 5 2}", 2.5);
    check("1 / 4", "^{/ 1 4}", 0.25);
}

#[test]
fn test_division_by_zero() {
    let err = check_err("5 / 0", &ConstEnv::new());
    assert_eq!(err, ExprError::DivisionByZero);
    assert_eq!(
        evaluate_prefix("^{/ 5 0}", &ConstEnv::new()),
        Err(ExprError::DivisionByZero)
    );
}

// ------------------------------------------------------------- Identifiers

#[test]
fn test_identifier_resolution() {
    let env = env_from(&[("x", json!(5))]);
    let (prefix, value) = compile_and_eval("x + 2", &env).unwrap();
    assert_eq!(prefix, "^{+ x 2}");
    assert_eq!(value, 7.0);
}

#[test]
fn test_identifiers_in_both_operand_positions() {
    let env = env_from(&[("width", json!(12)), ("height", json!(8))]);
    let (prefix, value) = compile_and_eval("width max height", &env).unwrap();
    assert_eq!(prefix, "^{max width height}");
    assert_eq!(value, 12.0);
}

#[test]
fn test_unresolved_identifier() {
    let err = check_err("x + 2", &ConstEnv::new());
    assert_eq!(err, ExprError::UnresolvedIdentifier("x".to_string()));
}

#[test]
fn test_string_constant_used_arithmetically() {
    let env = env_from(&[("name", json!("example"))]);
    let err = check_err("name + 2", &env);
    assert_eq!(err, ExprError::UnsupportedOperand("name".to_string()));
}

// ---------------------------------------------------------------- Malformed

#[test]
fn test_empty_expression() {
    let err = check_err("", &ConstEnv::new());
    assert!(matches!(err, ExprError::MalformedExpression(_)));
}

#[test]
fn test_lone_operator() {
    let err = check_err("+", &ConstEnv::new());
    assert!(matches!(err, ExprError::MalformedExpression(_)));
}

#[test]
fn test_unbalanced_parentheses() {
    for raw in ["(3 + 4", "3 + 4)", "((1 + 2)"] {
        let err = check_err(raw, &ConstEnv::new());
        assert!(matches!(err, ExprError::MalformedExpression(_)), "{}", raw);
    }
}

// -------------------------------------------------------------- Determinism

#[test]
fn test_repeated_evaluation_is_deterministic() {
    let env = env_from(&[("x", json!(9))]);
    let first = compile_and_eval("x * (2 + 1) max 2", &env).unwrap();
    for _ in 0..10 {
        assert_eq!(compile_and_eval("x * (2 + 1) max 2", &env).unwrap(), first);
    }
}

// ---------------------------------------------------------------- Roundtrip

#[test]
fn test_compiled_form_reevaluates_to_the_same_value() {
    let env = env_from(&[("base", json!(7))]);
    for raw in ["3 + 4 * 2", "base - 1", "max(base, 10) / 4", "(1 + 2) * 3"] {
        let (prefix, value) = compile_and_eval(raw, &env).unwrap();
        assert_eq!(evaluate_prefix(&prefix, &env), Ok(value), "{}", raw);
    }
}
