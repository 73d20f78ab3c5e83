use std::collections::HashMap;

use serde_json::{Map, Value};

/// A record with named string-or-null attributes.
pub trait Model {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: Option<String>);

    /// Prefix under which the model's inputs are submitted (`Form[attr]`).
    /// Empty means inputs are submitted under their bare attribute names.
    fn form_name(&self) -> &str {
        ""
    }

    /// Attribute value, with the empty string treated as unset.
    fn non_empty_attribute(&self, name: &str) -> Option<String> {
        self.attribute(name).filter(|value| !value.is_empty())
    }
}

impl Model for HashMap<String, Option<String>> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned().flatten()
    }

    fn set_attribute(&mut self, name: &str, value: Option<String>) {
        self.insert(name.to_string(), value);
    }
}

impl Model for Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Option<String>) {
        self.insert(
            name.to_string(),
            value.map(Value::String).unwrap_or(Value::Null),
        );
    }
}
