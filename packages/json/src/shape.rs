use serde_json::Value;

/// Plain structural value produced by [`parse`](crate::parse).
///
/// Field accessors are unchecked: a missing or mismatched field does not
/// fail here. `number` hands back `f64::NAN` and the other accessors hand
/// back `None`, so the gap surfaces when the bound value's methods run.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape(Value);

impl Shape {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw field access on an object shape.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Numeric field; `f64::NAN` when absent or non-numeric.
    pub fn number(&self, name: &str) -> f64 {
        self.get(name).and_then(Value::as_f64).unwrap_or(f64::NAN)
    }

    /// String field, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Boolean field, if present.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// The underlying structural value.
    pub fn value(&self) -> &Value {
        &self.0
    }
}
