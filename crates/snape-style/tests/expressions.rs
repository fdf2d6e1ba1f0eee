#![allow(missing_docs)]

use proptest::prelude::*;
use serde_json::{Value, json};

use snape_style::palette::{SCORE_COLOR_SCALE, SCORE_LIMITS, category_color_expression};
use snape_style::{Expression, build_match, build_step};

/// Evaluates the subset of the style language these builders emit against a
/// single property value.
fn evaluate(expression: &Value, property: &Value) -> Value {
    let Some(items) = expression.as_array() else {
        return expression.clone();
    };
    match items[0].as_str() {
        Some("get") => property.clone(),
        Some("match") => {
            let input = evaluate(&items[1], property);
            let clauses = &items[2..items.len() - 1];
            for pair in clauses.chunks(2) {
                if pair[0] == input {
                    return pair[1].clone();
                }
            }
            items[items.len() - 1].clone()
        }
        Some("step") => {
            let input = evaluate(&items[1], property).as_f64().unwrap();
            let mut output = items[2].clone();
            for pair in items[3..].chunks(2) {
                if input >= pair[0].as_f64().unwrap() {
                    output = pair[1].clone();
                } else {
                    break;
                }
            }
            output
        }
        other => panic!("unsupported operator {other:?}"),
    }
}

fn six_band_ramp() -> Expression {
    let colors = ["c0", "c1", "c2", "c3", "c4", "c5"];
    build_step(
        &Expression::get("score"),
        &[0.0, 3.0, 5.0, 8.0, 10.0, 20.0, 100.0],
        &colors,
    )
    .unwrap()
}

#[test]
fn test_ramp_boundaries() {
    let ramp = six_band_ramp();
    let color = |value: f64| evaluate(ramp.as_json(), &json!(value));

    assert_eq!(color(-1.0), json!("c0"));
    assert_eq!(color(0.0), json!("c0"));
    assert_eq!(color(3.0), json!("c1"));
    assert_eq!(color(4.9), json!("c1"));
    assert_eq!(color(19.99), json!("c4"));
    assert_eq!(color(20.0), json!("c5"));
    assert_eq!(color(100.0), json!("c5"));
    assert_eq!(color(1000.0), json!("c5"));
}

#[test]
fn test_ramp_has_one_output_per_threshold() {
    let ramp = six_band_ramp();
    let items = ramp.as_json().as_array().unwrap();
    // operator, input, c0, then a (threshold, color) pair for t1..=t6
    assert_eq!(items.len(), 3 + 2 * 6);
    assert_eq!(items.last(), Some(&json!("c5")));
}

#[test]
fn test_score_ramp_uses_palette() {
    let ramp = build_step(&Expression::get("score"), &SCORE_LIMITS, &SCORE_COLOR_SCALE).unwrap();
    assert_eq!(evaluate(ramp.as_json(), &json!(0.5)), json!("#CDE594"));
    assert_eq!(evaluate(ramp.as_json(), &json!(15.0)), json!("#080C54"));
}

#[test]
fn test_category_expression_snapshot() {
    let expression = category_color_expression().unwrap();
    insta::assert_json_snapshot!(expression, @r#"
    [
      "match",
      [
        "get",
        "type"
      ],
      "crossing",
      "green",
      "indoors footway",
      "grey",
      "footway not on the ground",
      "black",
      "footway",
      "black",
      "sidewalk",
      "black",
      "black"
    ]
    "#);
}

#[test]
fn test_category_expression_falls_back() {
    let expression = category_color_expression().unwrap();
    assert_eq!(evaluate(expression.as_json(), &json!("crossing")), json!("green"));
    assert_eq!(evaluate(expression.as_json(), &json!("motorway")), json!("black"));
    assert_eq!(evaluate(expression.as_json(), &Value::Null), json!("black"));
}

fn mapping() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-z]{1,6}", "#[0-9a-f]{6}", 1..8)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn match_order_does_not_change_results(
        pairs in mapping(),
        seed in any::<u64>(),
        candidate in "[a-z]{1,6}",
    ) {
        let mut shuffled = pairs.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        if seed % 2 == 0 {
            shuffled.reverse();
        }

        let input = Expression::get("type");
        let forward = build_match(&input, pairs.clone(), "fallback").unwrap();
        let permuted = build_match(&input, shuffled, "fallback").unwrap();

        let mut candidates: Vec<Value> = pairs.iter().map(|(label, _)| json!(label)).collect();
        candidates.push(json!(candidate));
        candidates.push(json!("UNKNOWN"));
        for candidate in candidates {
            prop_assert_eq!(
                evaluate(forward.as_json(), &candidate),
                evaluate(permuted.as_json(), &candidate)
            );
        }
    }
}
