//! Numeric colour ramps: `["step", input, c0, t1, c1, ..., tn, c(n-1)]`.
//!
//! `thresholds` are the bucket boundaries `t0 < t1 < ... < tn` and `colors`
//! has one entry per bucket. A step expression's upper bounds are exclusive,
//! so the last colour is repeated after `tn`: a value exactly at the nominal
//! maximum (100 for a percentage) still gets the top colour. `t0` only
//! matters to legends; anything below `t1` gets `c0`.

use serde::Serialize;
use serde_json::Value;

use crate::error::StyleError;
use crate::expression::Expression;

pub fn build_step<V>(
    input: &Expression,
    thresholds: &[f64],
    colors: &[V],
) -> Result<Expression, StyleError>
where
    V: Clone + Into<Value>,
{
    check_ramp(thresholds, colors.len())?;
    let mut operands = vec![input.as_json().clone()];
    for (bucket, color) in colors.iter().enumerate() {
        operands.push(color.clone().into());
        operands.push(Value::from(thresholds[bucket + 1]));
    }
    if let Some(last) = colors.last() {
        operands.push(last.clone().into());
    }
    Ok(Expression::operation("step", operands))
}

/// One bucket of a ramp, for drawing a legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry<V> {
    pub from: f64,
    pub to: f64,
    pub color: V,
}

/// The buckets a [`build_step`] ramp colours, lowest first.
pub fn ramp_legend<V: Clone>(
    thresholds: &[f64],
    colors: &[V],
) -> Result<Vec<LegendEntry<V>>, StyleError> {
    check_ramp(thresholds, colors.len())?;
    Ok(colors
        .iter()
        .enumerate()
        .map(|(bucket, color)| LegendEntry {
            from: thresholds[bucket],
            to: thresholds[bucket + 1],
            color: color.clone(),
        })
        .collect())
}

fn check_ramp(thresholds: &[f64], colors: usize) -> Result<(), StyleError> {
    if colors == 0 {
        return Err(StyleError::EmptyColorScale);
    }
    if thresholds.len() != colors + 1 {
        return Err(StyleError::LengthMismatch {
            thresholds: thresholds.len(),
            colors,
        });
    }
    for (index, value) in thresholds.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(StyleError::NonFiniteThreshold { index });
        }
        if index > 0 && value <= thresholds[index - 1] {
            return Err(StyleError::NotAscending {
                index,
                previous: thresholds[index - 1],
                value,
            });
        }
    }
    Ok(())
}
