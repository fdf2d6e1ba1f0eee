//! Expression trees in the map renderer's JSON style language.
//!
//! Expressions are nested JSON arrays whose first element names the operator,
//! e.g. `["get", "type"]`. This crate only builds them; evaluation is the
//! renderer's job.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression(Value);

impl Expression {
    /// `["get", attribute]`: reads a feature property.
    pub fn get(attribute: &str) -> Self {
        Self(Value::Array(vec![
            Value::from("get"),
            Value::from(attribute),
        ]))
    }

    /// Wraps an already-built JSON tree.
    pub fn from_json(value: Value) -> Self {
        Self(value)
    }

    pub(crate) fn operation(operator: &str, operands: Vec<Value>) -> Self {
        let mut items = Vec::with_capacity(operands.len() + 1);
        items.push(Value::from(operator));
        items.extend(operands);
        Self(Value::Array(items))
    }

    /// The operator name, if this is an operation rather than a literal.
    pub fn operator(&self) -> Option<&str> {
        self.0.as_array()?.first()?.as_str()
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }

    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Expression> for Value {
    fn from(expression: Expression) -> Self {
        expression.0
    }
}
