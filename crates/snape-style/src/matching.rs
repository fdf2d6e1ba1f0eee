//! Categorical lookups: `["match", input, label, output, ..., fallback]`.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::StyleError;
use crate::expression::Expression;

/// Builds a match expression that maps each label to its output and every
/// other input to `fallback`.
///
/// Clauses appear in `mapping` order. Labels are compared for exact equality,
/// so the order does not change what the expression evaluates to. Empty
/// mappings and repeated labels are rejected, as the renderer does.
pub fn build_match<I, K, V>(
    input: &Expression,
    mapping: I,
    fallback: impl Into<Value>,
) -> Result<Expression, StyleError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let mut operands = vec![input.as_json().clone()];
    let mut seen = BTreeSet::new();
    for (label, output) in mapping {
        let label = label.into();
        if !seen.insert(label.clone()) {
            return Err(StyleError::DuplicateLabel(label));
        }
        operands.push(Value::String(label));
        operands.push(output.into());
    }
    if seen.is_empty() {
        return Err(StyleError::EmptyMapping);
    }
    operands.push(fallback.into());
    Ok(Expression::operation("match", operands))
}
