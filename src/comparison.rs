//! Loose and strict value comparison.
//!
//! Loose comparison coerces operands the way a dynamically typed host does
//! before comparing them:
//!
//! | left                  | right                 | rule                                              |
//! |-----------------------|-----------------------|---------------------------------------------------|
//! | null                  | string                | `""` against the string, text rules               |
//! | bool or null          | anything              | both converted with [`truthy`], `false < true`    |
//! | number                | number                | numeric                                           |
//! | number                | numeric string        | numeric                                           |
//! | number                | other string          | the number's [`to_text`] against the string       |
//! | string                | string                | numeric when both are numeric, else bytewise      |
//! | array/object          | array/object          | entry count first, then entry by entry per key    |
//! | array/object          | any scalar            | the array/object is greater                       |
//!
//! A pair of collections whose keys do not line up is uncomparable (`None`).
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Whitespace accepted around a numeric string.
const NUMERIC_PADDING: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Loose ordering of two values; `None` when they cannot be ordered.
pub fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, Value::String(sb)) => Some(cmp_text("", sb)),
        (Value::String(sa), Value::Null) => Some(cmp_text(sa, "")),
        (Value::Null | Value::Bool(_), _) | (_, Value::Null | Value::Bool(_)) => {
            Some(truthy(a).cmp(&truthy(b)))
        }
        (Value::Number(na), Value::Number(nb)) => cmp_numbers(na, nb),
        (Value::Number(na), Value::String(sb)) => cmp_number_text(na, sb),
        (Value::String(sa), Value::Number(nb)) => cmp_number_text(nb, sa).map(Ordering::reverse),
        (Value::String(sa), Value::String(sb)) => Some(cmp_text(sa, sb)),
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => {
            cmp_collections(a, b)
        }
        (Value::Array(_) | Value::Object(_), _) => Some(Ordering::Greater),
        (_, Value::Array(_) | Value::Object(_)) => Some(Ordering::Less),
    }
}

/// Loose equality: the two values order as equal after coercion.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    loose_cmp(a, b) == Some(Ordering::Equal)
}

/// Strict equality: same JSON type and same value, no coercion.
///
/// Integers and floats count as different types, so `5` and `5.0` differ.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    a == b
}

/// Truthiness of a value.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => number_as_f64(n) != 0.0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Text form of a value, as used for substring tests.
pub fn to_text(v: &Value) -> Cow<'_, str> {
    match v {
        Value::Null | Value::Bool(false) => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Number(n) => Cow::Owned(number_text(n)),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Array(_) | Value::Object(_) => Cow::Borrowed("Array"),
    }
}

/// Parse a numeric string (`"12"`, `" 1e3"`, `"-.5"`); `None` for anything else.
pub fn numeric_str(s: &str) -> Option<f64> {
    let t = s.trim_matches(NUMERIC_PADDING);
    // f64::from_str also accepts "inf" and "NaN"; those are not numeric here.
    let well_formed = t.bytes().any(|c| c.is_ascii_digit())
        && t
            .bytes()
            .all(|c| c.is_ascii_digit() || matches!(c, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return None;
    }
    t.parse::<f64>().ok()
}

fn cmp_numbers(na: &Number, nb: &Number) -> Option<Ordering> {
    if let (Some(ia), Some(ib)) = (na.as_i64(), nb.as_i64()) {
        return Some(ia.cmp(&ib));
    }
    if let (Some(ua), Some(ub)) = (na.as_u64(), nb.as_u64()) {
        return Some(ua.cmp(&ub));
    }
    number_as_f64(na).partial_cmp(&number_as_f64(nb))
}

fn cmp_number_text(n: &Number, s: &str) -> Option<Ordering> {
    match numeric_str(s) {
        Some(f) => number_as_f64(n).partial_cmp(&f),
        None => Some(number_text(n).as_str().cmp(s)),
    }
}

fn cmp_text(sa: &str, sb: &str) -> Ordering {
    match (numeric_str(sa), numeric_str(sb)) {
        // Overflowed to the same infinity: the digits still tell them apart.
        (Some(da), Some(db)) if da.is_infinite() && da == db => sa.cmp(sb),
        (Some(da), Some(db)) => da.partial_cmp(&db).unwrap_or(Ordering::Equal),
        _ => sa.cmp(sb),
    }
}

fn cmp_collections(a: &Value, b: &Value) -> Option<Ordering> {
    let left = entries(a);
    let right = entries(b);
    if left.len() != right.len() {
        return Some(left.len().cmp(&right.len()));
    }
    for (key, va) in &left {
        let (_, vb) = right.iter().find(|(k, _)| k == key)?;
        match loose_cmp(va, vb)? {
            Ordering::Equal => continue,
            ord => return Some(ord),
        }
    }
    Some(Ordering::Equal)
}

/// Key/value pairs of an array (index keys) or object.
fn entries(v: &Value) -> Vec<(Cow<'_, str>, &Value)> {
    match v {
        Value::Array(a) => a
            .iter()
            .enumerate()
            .map(|(i, x)| (Cow::Owned(i.to_string()), x))
            .collect(),
        Value::Object(m) => m.iter().map(|(k, x)| (Cow::Borrowed(k.as_str()), x)).collect(),
        _ => Vec::new(),
    }
}

fn number_as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let f = number_as_f64(n);
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
