//! Schema-tagged worksheet extraction for sheetson
//!
//! Master-data workbooks describe their own schema inline: a `column_name`
//! row names the columns, a `data_type` row types them, and a `data_start`
//! row marks where data begins (all tagged in column 1). This crate locates
//! those tags, coerces each data row against the declared types, and keys
//! the result by the required `id` column.
//!
//! # Examples
//!
//! ## Extracting an in-memory sheet
//!
//! ```
//! use sheetson_extract::Sheet;
//!
//! let sheet = Sheet::from_rows("items", vec![
//!     vec!["column_name", "id", "name"],
//!     vec!["data_type", "intstring", "string"],
//!     vec!["data_start", "1", "sword"],
//!     vec!["", "2", "shield"],
//! ]);
//!
//! let records = sheet.extract().unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records["2"]["name"], "shield".into());
//! ```
//!
//! ## Walking a workbook file
//!
//! ```no_run
//! use sheetson_extract::{write_artifact, Workbook};
//!
//! let mut workbook = Workbook::open("master_data.xlsx").unwrap();
//! for name in workbook.data_sheet_names() {
//!     let sheet = workbook.load_sheet(&name).unwrap();
//!     match sheet.extract() {
//!         Ok(records) => {
//!             let digest = write_artifact(format!("{name}.json"), &records).unwrap();
//!             println!("{name} hash:{digest}");
//!         }
//!         Err(e) => eprintln!("{name}: {e}"),
//!     }
//! }
//! ```
//!
//! Failures are values, not panics: each sheet extracts to its own
//! `Result`, so one malformed sheet never takes down the rest of a run.

mod cell;
mod coerce;
mod error;
mod extract;
mod filter;
mod json;
mod schema;
mod sheet;
mod workbook;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export coercion entry point and the type vocabulary.
pub use coerce::{coerce, TypeTag};
/// Re-export error types.
pub use error::{ExtractError, Result};
/// Re-export extraction output types.
pub use extract::{Record, SheetRecords, ID_COLUMN};
/// Re-export the sheet-name allow-list.
pub use filter::FilterList;
/// Re-export artifact writing.
pub use json::{to_json_vec, write_artifact};
/// Re-export schema resolution types.
pub use schema::{ColumnSpec, ScanLimits, SheetSchema};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export workbook access.
pub use workbook::Workbook;
