use crate::comparison::{loose_cmp, loose_eq, strict_eq, to_text};
use crate::operator::Operator;
use serde_json::Value;
use std::cmp::Ordering;

/// Compare `value1` and `value2` with the operator spelled by `operator`.
///
/// Ordering operators test `value2 <op> value1`: `compare(5, 10, ">")` is true.
/// Unrecognized operators fall back to loose equality.
pub fn compare(value1: &Value, value2: &Value, operator: &str) -> bool {
    let op = Operator::parse(operator);
    if op == Operator::LooseEq && operator != "==" {
        tracing::trace!(operator, "unrecognized operator, using loose equality");
    }
    compare_with(value1, value2, op)
}

/// [`compare`] with an already parsed operator.
pub fn compare_with(value1: &Value, value2: &Value, op: Operator) -> bool {
    match op {
        Operator::StrictEq => strict_eq(value1, value2),
        Operator::StrictNe => !strict_eq(value1, value2),
        Operator::LooseNe => !loose_eq(value1, value2),
        Operator::Gte => ordered(value2, value1, |o| o != Ordering::Less),
        Operator::Lte => ordered(value2, value1, |o| o != Ordering::Greater),
        Operator::Gt => ordered(value2, value1, |o| o == Ordering::Greater),
        Operator::Lt => ordered(value2, value1, |o| o == Ordering::Less),
        Operator::Contains => contains(value1, value2),
        Operator::LooseEq => loose_eq(value1, value2),
    }
}

/// Uncomparable pairs satisfy no ordering predicate.
fn ordered<F>(a: &Value, b: &Value, pred_on_ord: F) -> bool
where
    F: Fn(Ordering) -> bool,
{
    loose_cmp(a, b).map(pred_on_ord).unwrap_or(false)
}

/// Set membership when either side is a collection, symmetric substring otherwise.
pub fn contains(value1: &Value, value2: &Value) -> bool {
    match (elements(value1), elements(value2)) {
        (Some(haystack), Some(needles)) => needles
            .iter()
            .any(|n| haystack.iter().any(|h| loose_eq(n, h))),
        (Some(haystack), None) => haystack.iter().any(|h| loose_eq(value2, h)),
        (None, Some(haystack)) => haystack.iter().any(|h| loose_eq(value1, h)),
        (None, None) => {
            let t1 = to_text(value1);
            let t2 = to_text(value2);
            t1.contains(t2.as_ref()) || t2.contains(t1.as_ref())
        }
    }
}

/// Members of an array, or the values of an object.
fn elements(v: &Value) -> Option<Vec<&Value>> {
    match v {
        Value::Array(a) => Some(a.iter().collect()),
        Value::Object(m) => Some(m.values().collect()),
        _ => None,
    }
}
