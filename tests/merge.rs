use customizer_value_helpers as vh;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn test_disjoint_keys_union() {
    let out = vh::merge(&json!({"a": 1}), &[json!({"b": 2})]);
    assert_eq!(out, json!({"a": 1, "b": 2}));
}

#[test]
fn test_three_level_recursion() {
    let base = json!({
        "typography": {
            "body": {"font-family": "Roboto", "font-size": "14px"},
            "headers": {"variant": "700"}
        },
        "colors": {"link": "#0073aa"}
    });
    let overlay = json!({
        "typography": {
            "body": {"font-size": "16px", "line-height": "1.5"}
        }
    });
    let out = vh::merge(&base, &[overlay]);
    assert_eq!(
        out,
        json!({
            "typography": {
                "body": {"font-family": "Roboto", "font-size": "16px", "line-height": "1.5"},
                "headers": {"variant": "700"}
            },
            "colors": {"link": "#0073aa"}
        })
    );
}

#[test]
fn test_scalar_replaces_object_and_object_replaces_scalar() {
    let out = vh::merge(
        &json!({"a": {"deep": true}, "b": "flat"}),
        &[json!({"a": false, "b": {"now": "object"}})],
    );
    assert_eq!(out, json!({"a": false, "b": {"now": "object"}}));
}

#[test]
fn test_overlays_apply_left_to_right() {
    let out = vh::merge(
        &json!({"a": 1, "n": {"x": 1}}),
        &[
            json!({"a": 2, "n": {"y": 2}}),
            json!("ignored"),
            json!({"a": 3, "n": {"x": 9}}),
        ],
    );
    assert_eq!(out, json!({"a": 3, "n": {"x": 9, "y": 2}}));
}

#[test]
fn test_no_overlays_is_identity() {
    let base = json!({"a": [1, 2], "b": {"c": null}});
    assert_eq!(vh::merge(&base, &[]), base);
}

#[test]
fn test_merge_into_in_place() {
    let mut target = json!({"a": {"b": 1}}).as_object().cloned().unwrap_or_default();
    let overlay = json!({"a": {"c": 2}});
    vh::merge_into(&mut target, overlay.as_object().unwrap());
    assert_eq!(Value::Object(target), json!({"a": {"b": 1, "c": 2}}));
}

fn nested() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,4}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-d]", inner, 0..4)
            .prop_map(|m| Value::Object(m.into_iter().collect()))
    })
}

proptest! {
    #[test]
    fn merging_with_itself_is_idempotent(v in nested()) {
        prop_assert_eq!(vh::merge(&v, &[v.clone()]), v);
    }

    #[test]
    fn overlay_keys_always_win(base in nested(), overlay in nested()) {
        let out = vh::merge(&base, &[overlay.clone()]);
        if let (Value::Object(o), Value::Object(ov)) = (&out, &overlay) {
            for (k, v) in ov {
                if !v.is_object() {
                    prop_assert_eq!(o.get(k), Some(v));
                }
            }
        } else {
            prop_assert_eq!(&out, &base);
        }
    }
}
