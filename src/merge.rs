use serde_json::{Map, Value};

/// Deep-merge `overlays` into `base`, left to right, returning a new value.
///
/// Only objects merge. A non-object overlay value replaces whatever the result
/// held at that key; an object overlay value turns a non-object slot into an
/// empty object first. A non-object `base` comes back unchanged and non-object
/// overlays are skipped.
pub fn merge(base: &Value, overlays: &[Value]) -> Value {
    let Value::Object(base_map) = base else {
        tracing::debug!("merge base is not an object, returning it unchanged");
        return base.clone();
    };
    let mut out = base_map.clone();
    for (i, overlay) in overlays.iter().enumerate() {
        match overlay {
            Value::Object(m) => merge_into(&mut out, m),
            _ => tracing::debug!(index = i, "skipping non-object overlay"),
        }
    }
    Value::Object(out)
}

/// Merge one overlay object into `target` in place.
pub fn merge_into(target: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match value {
            Value::Object(inner) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(slot_map) = slot {
                    merge_into(slot_map, inner);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}
