use crate::errors::{HelperError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for helpers callable by name with JSON arguments.
pub trait Function: Send + Sync {
    fn name(&self) -> &'static str;
    fn arity(&self) -> std::ops::RangeInclusive<usize>;
    fn call(&self, args: &[Value]) -> Result<Value>;
}

/// Thread-safe function registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Function>>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn with_builtins() -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Function>> = HashMap::new();
        map.insert("merge", Arc::new(builtins::Merge));
        map.insert("compare", Arc::new(builtins::Compare));
        map.insert("icons", Arc::new(builtins::Icons));
        map.insert("colors", Arc::new(builtins::Colors));
        Self { inner: Arc::new(map) }
    }

    pub fn register<F: Function + 'static>(&mut self, f: F) {
        let mut_map = Arc::make_mut(&mut self.inner);
        mut_map.insert(f.name(), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.inner.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Look up `name`, check the argument count, and call it.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let f = self
            .get(name)
            .ok_or_else(|| HelperError::UnknownFunction(name.to_string()))?;
        let arity = f.arity();
        if !arity.contains(&args.len()) {
            return Err(HelperError::Arity {
                name: f.name(),
                min: *arity.start(),
                max: *arity.end(),
                got: args.len(),
            });
        }
        tracing::debug!(function = f.name(), args = args.len(), "calling helper");
        f.call(args)
    }
}

pub mod builtins {
    use super::*;
    use crate::{colors, icons};
    use serde_json::{json, Map};

    pub struct Merge;
    impl Function for Merge {
        fn name(&self) -> &'static str { "merge" }
        fn arity(&self) -> std::ops::RangeInclusive<usize> { 1..=usize::MAX }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let (base, overlays) = args
                .split_first()
                .ok_or_else(|| HelperError::InvalidArgument("merge needs a base value".into()))?;
            Ok(crate::merge::merge(base, overlays))
        }
    }

    pub struct Compare;
    impl Function for Compare {
        fn name(&self) -> &'static str { "compare" }
        fn arity(&self) -> std::ops::RangeInclusive<usize> { 3..=3 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let (a, b) = (args.first().unwrap_or(&Value::Null), args.get(1).unwrap_or(&Value::Null));
            let op = match args.get(2) {
                Some(Value::String(s)) => s.as_str(),
                None => "",
                Some(other) => {
                    return Err(HelperError::InvalidArgument(format!(
                        "operator must be a string, got {other}"
                    )))
                }
            };
            Ok(Value::Bool(crate::compare::compare(a, b, op)))
        }
    }

    /// With no argument: the whole catalog. With a category: its icons, or null.
    pub struct Icons;
    impl Function for Icons {
        fn name(&self) -> &'static str { "icons" }
        fn arity(&self) -> std::ops::RangeInclusive<usize> { 0..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            match args.first() {
                None => {
                    let catalog: Map<String, Value> = icons::icon_catalog()
                        .iter()
                        .map(|(name, list)| (name.to_string(), json!(list)))
                        .collect();
                    Ok(Value::Object(catalog))
                }
                Some(Value::String(category)) => {
                    Ok(icons::icons(category).map_or(Value::Null, |list| json!(list)))
                }
                Some(other) => Err(HelperError::InvalidArgument(format!(
                    "icon category must be a string, got {other}"
                ))),
            }
        }
    }

    pub struct Colors;
    impl Function for Colors {
        fn name(&self) -> &'static str { "colors" }
        fn arity(&self) -> std::ops::RangeInclusive<usize> { 0..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let context = match args.first() {
                None => "primary",
                Some(Value::String(s)) => s.as_str(),
                Some(other) => {
                    return Err(HelperError::InvalidArgument(format!(
                        "palette context must be a string, got {other}"
                    )))
                }
            };
            Ok(json!(colors::material_colors(context)))
        }
    }
}
