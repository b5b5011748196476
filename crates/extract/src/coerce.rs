//! Cell value coercion against the declared column types.

use crate::cell::CellValue;
use crate::error::{ExtractError, Result};
use regex::Regex;
use std::fmt;

/// Closed set of types a sheet may declare on its `data_type` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    IntString,
    Int,
    Float,
    Bool,
    DateTime,
}

impl TypeTag {
    /// Parse a `data_type` cell into a tag. Unknown tags return `None`;
    /// schema resolution turns that into an `UnsupportedType` error carrying
    /// the column name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(TypeTag::String),
            "intstring" => Some(TypeTag::IntString),
            "int" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            "bool" => Some(TypeTag::Bool),
            "datetime" => Some(TypeTag::DateTime),
            _ => None,
        }
    }

    /// The tag exactly as sheets spell it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::IntString => "intstring",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::DateTime => "datetime",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Accepted datetime shape: "20YY-MM-DD hh:mm:ss", validated textually.
fn datetime_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^20\d{2}-[01]\d-[0-3]\d [0-2]\d:[0-5]\d:[0-5]\d$").expect("valid regex")
    })
}

/// Coerce a raw cell into the shape `tag` declares.
///
/// A null cell coerces to the empty string under `string` and to null under
/// every other tag. Any other shape mismatch is an `InvalidValue` error
/// carrying the offending value and tag.
///
/// Two checks are narrower than they look: `float` rejects integer-shaped
/// cells, and `bool` rejects native boolean cells (only numeric cells
/// qualify). Both reproduce the behavior of the spreadsheets this tool was
/// built against.
///
/// # Errors
///
/// Returns `InvalidValue` if the cell's runtime shape doesn't match `tag`.
pub fn coerce(value: &CellValue, tag: TypeTag) -> Result<CellValue> {
    if value.is_null() {
        return Ok(match tag {
            TypeTag::String => CellValue::String(String::new()),
            _ => CellValue::Null,
        });
    }

    match (tag, value) {
        (TypeTag::IntString, CellValue::Int(i)) => Ok(CellValue::String(i.to_string())),
        (TypeTag::IntString, CellValue::Float(f)) => {
            Ok(CellValue::String((f.trunc() as i64).to_string()))
        }
        (TypeTag::IntString, CellValue::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) => Ok(CellValue::String((f.trunc() as i64).to_string())),
            Err(_) => Err(invalid(value, tag)),
        },
        (TypeTag::String, CellValue::String(s)) => Ok(CellValue::String(s.clone())),
        (TypeTag::Int, CellValue::Int(i)) => Ok(CellValue::Int(*i)),
        (TypeTag::Int, CellValue::Float(f)) => Ok(CellValue::Int(f.trunc() as i64)),
        (TypeTag::Float, CellValue::Float(f)) => Ok(CellValue::Float(*f)),
        (TypeTag::Bool, CellValue::Int(i)) => Ok(CellValue::Bool(*i != 0)),
        (TypeTag::Bool, CellValue::Float(f)) => Ok(CellValue::Bool(*f != 0.0)),
        (TypeTag::DateTime, CellValue::String(s)) if datetime_regex().is_match(s) => {
            Ok(CellValue::String(s.clone()))
        }
        _ => Err(invalid(value, tag)),
    }
}

fn invalid(value: &CellValue, tag: TypeTag) -> ExtractError {
    ExtractError::InvalidValue {
        value: value.clone(),
        tag,
    }
}
