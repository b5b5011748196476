use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a cell value in a sheet
///
/// Doubles as the coerced output value: coercion maps a raw cell into
/// another `CellValue` whose shape matches the declared column type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// True for the two shapes row scanning treats as "no data": a missing
    /// cell and an empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Get the value as a string
    #[must_use]
    pub fn as_str(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(CellValue::Null.is_blank());
        assert!(CellValue::String(String::new()).is_blank());
        assert!(!CellValue::String("x".to_string()).is_blank());
        assert!(!CellValue::Int(0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(CellValue::Null.as_str(), "");
        assert_eq!(CellValue::Int(7).as_str(), "7");
        assert_eq!(CellValue::Float(7.0).as_str(), "7");
        assert_eq!(CellValue::Bool(true).as_str(), "true");
        assert_eq!(CellValue::String("abc".to_string()).as_str(), "abc");
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::to_string(&CellValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&CellValue::Int(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&CellValue::String("a".to_string())).unwrap(),
            "\"a\""
        );
        assert_eq!(serde_json::to_string(&CellValue::Bool(false)).unwrap(), "false");
    }
}
