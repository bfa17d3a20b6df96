//! The resolved-variable value type.

use std::fmt;

/// A resolved template-variable value.
///
/// Values of different variants are never equal: equality is structural and
/// type-aware, with no coercion between booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null/absent sentinel.
    Null,

    /// A boolean value.
    Bool(bool),

    /// An integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A string value.
    String(String),

    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Check if this value is the null sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is of string type (any content).
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Check if this value is a list with no elements.
    ///
    /// Hydration drivers consult the formatter's empty-list strategy before
    /// emitting a line bound to such a value.
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::List(items) if items.is_empty())
    }

    /// Get the string content if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the list items if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Render this value as text for hydrated output.
    ///
    /// - String: returned as-is
    /// - Bool: "true" or "" (empty for false)
    /// - Int/Float: decimal representation
    /// - List: concatenation of rendered elements
    /// - Null: ""
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => String::new(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::List(items) => items.iter().map(|v| v.render()).collect(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Total conversion from JSON, for configuration subsystems that load their
/// tables from serialized formats.
///
/// Resolved template variables are never maps in this system, so JSON
/// objects convert to [`Value::Null`]. Numbers outside the `i64` range fall
/// back to floating point.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(_) => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_equality() {
        // No coercion across variants
        assert_ne!(Value::Int(0), Value::Bool(false));
        assert_ne!(Value::Int(0), Value::Null);
        assert_ne!(Value::Int(0), Value::String("0".to_string()));
        assert_ne!(Value::Bool(false), Value::Null);
        assert_ne!(Value::Bool(true), Value::String("true".to_string()));
        assert_ne!(Value::Null, Value::String(String::new()));

        assert_eq!(Value::Int(0), Value::Int(0));
        assert_eq!(Value::from("true"), Value::String("true".to_string()));
    }

    #[test]
    fn test_empty_list_detection() {
        assert!(Value::List(vec![]).is_empty_list());
        assert!(!Value::List(vec![Value::Null]).is_empty_list());
        assert!(!Value::String(String::new()).is_empty_list());
        assert!(!Value::Null.is_empty_list());
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::Bool(true).render(), "true");
        assert_eq!(Value::Bool(false).render(), "");
        assert_eq!(Value::Int(-42).render(), "-42");
        assert_eq!(Value::from("plain").render(), "plain");

        let list = Value::List(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(list.render(), "ab");
        assert_eq!(format!("{}", list), "ab");
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value =
            serde_json::from_str(r#"[null, true, 3, 2.5, "s", {"k": 1}]"#).unwrap();

        assert_eq!(
            Value::from(json),
            Value::List(vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(3),
                Value::Float(2.5),
                Value::String("s".to_string()),
                Value::Null, // objects are not representable
            ])
        );
    }
}
