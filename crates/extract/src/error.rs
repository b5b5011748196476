use crate::cell::CellValue;
use crate::coerce::TypeTag;
use thiserror::Error;

/// Errors that can occur while resolving a sheet schema or extracting rows
///
/// Every variant is fatal to the sheet it occurred in, never to the whole
/// run; callers aggregate per-sheet results and keep going.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("tag {tag} is not found in first {rows} rows")]
    TagNotFound { tag: &'static str, rows: u32 },

    #[error("column {column}: data type is not specified")]
    MissingTypeForColumn { column: String },

    #[error("column {column}: unsupported type: {tag}")]
    UnsupportedType { column: String, tag: String },

    #[error("invalid value {value} for {tag}")]
    InvalidValue { value: CellValue, tag: TypeTag },

    #[error("row {row}: ID can't be nil")]
    MissingId { row: u32 },

    #[error("row {row}: duplicate id: {id}")]
    DuplicateId { id: String, row: u32 },

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
