//! Read-only name→value lookup for one expansion scope.

mod env;
mod error;
mod vendor;

pub use error::NamespaceError;
pub use vendor::{VendorVars, VendorVarsBuilder};

use std::collections::{BTreeMap, HashMap};

use toml::Value;

/// A scoped, read-only set of name→value bindings queried during expansion.
///
/// The expander only ever reads through this trait and holds the namespace
/// for the duration of one call; implementations decide where the values come
/// from. `is_set` and `get` must agree: `is_set(name)` implies `get(name)`
/// returns a value.
pub trait Namespace {
    /// Returns true if `name` is bound in this namespace.
    fn is_set(&self, name: &str) -> bool;

    /// Returns the value bound to `name`, if any.
    fn get(&self, name: &str) -> Option<String>;
}

impl Namespace for BTreeMap<String, String> {
    fn is_set(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl Namespace for HashMap<String, String> {
    fn is_set(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Scalar values are coerced to their string form; tables and arrays are not
/// visible through the trait.
impl Namespace for toml::Table {
    fn is_set(&self, name: &str) -> bool {
        Namespace::get(self, name).is_some()
    }

    fn get(&self, name: &str) -> Option<String> {
        toml::Table::get(self, name).and_then(scalar_to_string)
    }
}

/// Converts a scalar TOML value to its string representation.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
