pub mod errors;
pub mod comparison;
pub mod operator;
pub mod compare;
pub mod merge;
pub mod icons;
pub mod colors;
pub mod filesystem;
pub mod content;
pub mod functions;  // name-addressable helpers for the CLI

/// Re-export the most-used helpers for users who call functions directly.
pub use compare::{compare, compare_with};
pub use comparison::{loose_eq, strict_eq};
pub use errors::{HelperError, Result};
pub use functions::Registry;
pub use merge::{merge, merge_into};
pub use operator::Operator;

/// Call a built-in helper by name.
pub fn call(name: &str, args: &[serde_json::Value]) -> Result<serde_json::Value> {
    Registry::with_builtins().call(name, args)
}
