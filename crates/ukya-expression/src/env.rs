//! The constant environment.
//!
//! Constants are declared by the surrounding document walk (integers and
//! strings, in document order) and read back here when the evaluator
//! resolves an identifier. Declaration must precede use: a name that has
//! not been defined yet is an unresolved identifier, not a deferred one.

use crate::error::ExprError;
use serde_json::Value;
use std::collections::HashMap;

/// Named constants accumulated during a document walk.
#[derive(Debug, Default)]
pub struct ConstEnv {
    consts: HashMap<String, Value>,
}

impl ConstEnv {
    pub fn new() -> Self {
        ConstEnv {
            consts: HashMap::new(),
        }
    }

    /// Binds `name` to `value`. A later declaration with the same name
    /// shadows the earlier one.
    pub fn define(&mut self, name: &str, value: Value) {
        self.consts.insert(name.to_string(), value);
    }

    /// Returns the bound value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.consts.get(name)
    }

    /// Returns true if `name` has been declared.
    pub fn has(&self, name: &str) -> bool {
        self.consts.contains_key(name)
    }

    /// Resolves `name` to a numeric operand.
    ///
    /// Undeclared names are `UnresolvedIdentifier`; declared names bound to
    /// a non-numeric value (a string constant used in arithmetic) are
    /// `UnsupportedOperand`.
    pub fn numeric(&self, name: &str) -> Result<f64, ExprError> {
        let value = self
            .consts
            .get(name)
            .ok_or_else(|| ExprError::UnresolvedIdentifier(name.to_string()))?;
        value
            .as_f64()
            .ok_or_else(|| ExprError::UnsupportedOperand(name.to_string()))
    }
}
