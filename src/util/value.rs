use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Handle;

/// A value handed to the console by a caller.
///
/// Its `Display` form is the canonical text of a script value: numbers at or above `1e21`
/// and below `1e-6` use the exponential notation of JavaScript.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of any value.
    Undefined,
    /// An explicitly empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Number(f64),
    /// A string.
    Str(String),
    /// A bag of dynamically assigned properties.
    Object(Properties),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Number(value) if value.is_nan() => f.write_str("NaN"),
            Value::Number(value) if value.is_infinite() => match value.is_sign_positive() {
                true => f.write_str("Infinity"),
                false => f.write_str("-Infinity"),
            },
            Value::Number(value) if *value == 0.0 => f.write_str("0"),
            Value::Number(value) if value.abs() >= 1e21 || value.abs() < 1e-6 => {
                write_exponential(f, *value)
            }
            Value::Number(value) if value.fract() == 0.0 => write!(f, "{:.0}", value),
            Value::Number(value) => write!(f, "{}", value),
            Value::Str(value) => f.write_str(value),
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

// `1e21` is written as `1e+21`, `1.5e-7` stays as it is.
fn write_exponential(f: &mut Formatter<'_>, value: f64) -> FmtResult {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&text),
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Handle> for Value {
    fn from(handle: Handle) -> Self {
        Value::Int(handle.raw().into())
    }
}

impl From<Properties> for Value {
    fn from(properties: Properties) -> Self {
        Value::Object(properties)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

/// Properties assigned to an object at runtime, ordered by their key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(BTreeMap<String, Value>);

impl Properties {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a property, returning the value it replaced.
    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Reads a property. Missing keys are `Undefined`.
    pub fn get<K: AsRef<str>>(&self, key: K) -> Value {
        self.0.get(key.as_ref()).cloned().unwrap_or(Value::Undefined)
    }

    /// Removes a property.
    pub fn remove<K: AsRef<str>>(&mut self, key: K) -> Option<Value> {
        self.0.remove(key.as_ref())
    }

    /// Checks whether the property was ever assigned.
    pub fn contains<K: AsRef<str>>(&self, key: K) -> bool {
        self.0.contains_key(key.as_ref())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether no property is assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Handle, Properties, Value};

    #[test_case(Value::Undefined, "undefined"; "undefined")]
    #[test_case(Value::Null, "null"; "null")]
    #[test_case(Value::from(true), "true"; "boolean")]
    #[test_case(Value::from(14), "14"; "integer")]
    #[test_case(Value::from(-3i64), "-3"; "negative integer")]
    #[test_case(Value::from(2.0), "2"; "integral number")]
    #[test_case(Value::from(0.5), "0.5"; "fraction")]
    #[test_case(Value::from(-0.0), "0"; "negative zero")]
    #[test_case(Value::from(1e21), "1e+21"; "large number")]
    #[test_case(Value::from(-2.5e30), "-2.5e+30"; "large negative number")]
    #[test_case(Value::from(1e20), "100000000000000000000"; "below exponential threshold")]
    #[test_case(Value::from(1.5e-7), "1.5e-7"; "small fraction")]
    #[test_case(Value::from(0.000001), "0.000001"; "smallest positional fraction")]
    #[test_case(Value::from(f64::NAN), "NaN"; "not a number")]
    #[test_case(Value::from(f64::NEG_INFINITY), "-Infinity"; "negative infinity")]
    #[test_case(Value::from("Hello World"), "Hello World"; "string")]
    #[test_case(Value::from(Handle(3)), "3"; "handle")]
    #[test_case(Value::from(None::<i32>), "undefined"; "missing")]
    #[test_case(Value::from(Properties::new()), "[object Object]"; "object")]
    fn test_display(value: Value, expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_properties() {
        let mut object = Properties::new();
        assert!(object.is_empty());
        assert_eq!(object.get("test"), Value::Undefined);

        assert_eq!(object.set("test", "Hello World"), None);
        assert_eq!(object.get("test"), Value::from("Hello World"));

        assert_eq!(object.set("test", 123), Some(Value::from("Hello World")));
        assert_eq!(object.get("test").to_string(), "123");

        object.set("alpha", Value::Null);
        let keys: Vec<_> = object.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["alpha", "test"]);

        assert_eq!(object.remove("alpha"), Some(Value::Null));
        assert!(!object.contains("alpha"));
        assert_eq!(object.len(), 1);
    }
}
