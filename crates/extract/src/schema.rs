//! Header-region scanning: tag rows, declared columns, and scan bounds.

use crate::cell::CellValue;
use crate::coerce::TypeTag;
use crate::error::{ExtractError, Result};
use crate::sheet::Sheet;

/// Column-1 marker of the row holding column names.
pub const COLUMN_NAME_TAG: &str = "column_name";
/// Column-1 marker of the row holding type tags.
pub const DATA_TYPE_TAG: &str = "data_type";
/// Column-1 marker of the first data row.
pub const DATA_START_TAG: &str = "data_start";

/// Bounds for the header and data scans
///
/// These are the termination guarantees for sheets whose true extent is
/// unknown; tests shrink them so small fixtures don't wait out the
/// production ceilings.
#[derive(Debug, Clone)]
pub struct ScanLimits {
    /// Rows searched for the three tag markers.
    pub tag_search_rows: u32,
    /// Rightmost column considered by the header scan.
    pub max_columns: u32,
    /// Consecutive undeclared columns that end the header scan.
    pub column_blank_run: u32,
    /// Absolute data-row ceiling.
    pub max_rows: u32,
    /// Consecutive absent rows that end the data scan.
    pub row_blank_run: u32,
}

impl Default for ScanLimits {
    fn default() -> Self {
        ScanLimits {
            tag_search_rows: 100,
            max_columns: 100,
            column_blank_run: 10,
            max_rows: 100_000,
            row_blank_run: 50,
        }
    }
}

/// One declared column: 1-indexed position, header name, and type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub column: u32,
    pub name: String,
    pub tag: TypeTag,
}

/// Per-sheet schema context, resolved once and passed by reference into row
/// scanning.
#[derive(Debug, Clone)]
pub struct SheetSchema {
    /// Declared columns in on-sheet order.
    pub columns: Vec<ColumnSpec>,
    /// First data row. The `data_start` marker sits in column 1 of this row;
    /// its data columns already belong to the data region.
    pub data_start_row: u32,
}

impl SheetSchema {
    /// Locate the three tag rows and derive the column map.
    ///
    /// # Errors
    ///
    /// `TagNotFound` if a marker is absent from the search window,
    /// `MissingTypeForColumn` if a named column has an empty type cell, and
    /// `UnsupportedType` if a type cell holds an unrecognized tag.
    pub fn resolve(sheet: &Sheet, limits: &ScanLimits) -> Result<Self> {
        let column_name_row = tag_row(sheet, COLUMN_NAME_TAG, limits)?;
        let data_type_row = tag_row(sheet, DATA_TYPE_TAG, limits)?;
        let data_start_row = tag_row(sheet, DATA_START_TAG, limits)?;

        let columns = declared_columns(sheet, column_name_row, data_type_row, limits)?;
        Ok(SheetSchema {
            columns,
            data_start_row,
        })
    }
}

fn tag_row(sheet: &Sheet, tag: &'static str, limits: &ScanLimits) -> Result<u32> {
    for row in 1..=limits.tag_search_rows {
        if let CellValue::String(s) = sheet.cell(row, 1) {
            if s == tag {
                return Ok(row);
            }
        }
    }
    Err(ExtractError::TagNotFound {
        tag,
        rows: limits.tag_search_rows,
    })
}

fn declared_columns(
    sheet: &Sheet,
    name_row: u32,
    type_row: u32,
    limits: &ScanLimits,
) -> Result<Vec<ColumnSpec>> {
    let mut columns = Vec::new();
    let mut empty_run = 0;

    // Column 1 belongs to the tag markers; declarations start at column 2.
    for col in 2..=limits.max_columns {
        match column_spec(sheet, name_row, type_row, col)? {
            Some(spec) => {
                columns.push(spec);
                empty_run = 0;
            }
            None => {
                empty_run += 1;
                if empty_run >= limits.column_blank_run {
                    break;
                }
            }
        }
    }
    Ok(columns)
}

fn column_spec(
    sheet: &Sheet,
    name_row: u32,
    type_row: u32,
    col: u32,
) -> Result<Option<ColumnSpec>> {
    let name = match sheet.cell(name_row, col) {
        CellValue::String(s) if !s.is_empty() => s.clone(),
        _ => return Ok(None),
    };

    match sheet.cell(type_row, col) {
        CellValue::String(s) if !s.is_empty() => {
            let tag = TypeTag::from_tag(s).ok_or_else(|| ExtractError::UnsupportedType {
                column: name.clone(),
                tag: s.clone(),
            })?;
            Ok(Some(ColumnSpec { column: col, name, tag }))
        }
        _ => Err(ExtractError::MissingTypeForColumn { column: name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> CellValue {
        CellValue::String(v.to_string())
    }

    // Tags at rows 5/6/8, headers id(int) / name(string) in columns 2-3.
    fn tagged_sheet() -> Sheet {
        let empty: Vec<CellValue> = Vec::new();
        Sheet::from_grid(
            "items",
            vec![
                empty.clone(),
                empty.clone(),
                empty.clone(),
                empty.clone(),
                vec![s("column_name"), s("id"), s("name")],
                vec![s("data_type"), s("int"), s("string")],
                empty,
                vec![s("data_start"), CellValue::Int(1), s("sword")],
            ],
        )
    }

    #[test]
    fn test_resolves_tag_rows_and_columns() {
        let schema = SheetSchema::resolve(&tagged_sheet(), &ScanLimits::default()).unwrap();
        assert_eq!(schema.data_start_row, 8);
        assert_eq!(
            schema.columns,
            vec![
                ColumnSpec {
                    column: 2,
                    name: "id".to_string(),
                    tag: TypeTag::Int
                },
                ColumnSpec {
                    column: 3,
                    name: "name".to_string(),
                    tag: TypeTag::String
                },
            ]
        );
    }

    #[test]
    fn test_missing_tag() {
        let sheet = Sheet::from_rows(
            "t",
            vec![vec!["column_name", "id"], vec!["data_type", "int"]],
        );
        let err = SheetSchema::resolve(&sheet, &ScanLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::TagNotFound {
                tag: "data_start",
                rows: 100
            }
        ));
    }

    #[test]
    fn test_tag_outside_search_window() {
        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); 4];
        rows.push(vec![s("column_name"), s("id")]);
        rows.push(vec![s("data_type"), s("int")]);
        rows.push(vec![s("data_start"), CellValue::Int(1)]);
        let sheet = Sheet::from_grid("t", rows);

        // A 4-row window cannot see tags at rows 5..7.
        let limits = ScanLimits {
            tag_search_rows: 4,
            ..ScanLimits::default()
        };
        assert!(matches!(
            SheetSchema::resolve(&sheet, &limits),
            Err(ExtractError::TagNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_type_for_named_column() {
        let sheet = Sheet::from_rows(
            "t",
            vec![
                vec!["column_name", "id", "level"],
                vec!["data_type", "int"],
                vec!["data_start"],
            ],
        );
        let err = SheetSchema::resolve(&sheet, &ScanLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingTypeForColumn { column } if column == "level"
        ));
    }

    #[test]
    fn test_unsupported_type_tag() {
        let sheet = Sheet::from_rows(
            "t",
            vec![
                vec!["column_name", "id"],
                vec!["data_type", "decimal"],
                vec!["data_start"],
            ],
        );
        let err = SheetSchema::resolve(&sheet, &ScanLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::UnsupportedType { column, tag } if column == "id" && tag == "decimal"
        ));
    }

    #[test]
    fn test_column_gap_shorter_than_run_is_spanned() {
        // Declarations in columns 2 and 5; the 2-column gap is below the
        // cutoff, so the scan carries on and finds both.
        let sheet = Sheet::from_grid(
            "t",
            vec![
                vec![s("column_name"), s("id"), s(""), s(""), s("name")],
                vec![s("data_type"), s("int"), s(""), s(""), s("string")],
                vec![s("data_start")],
            ],
        );
        let limits = ScanLimits {
            column_blank_run: 3,
            ..ScanLimits::default()
        };
        let schema = SheetSchema::resolve(&sheet, &limits).unwrap();
        assert_eq!(schema.columns.len(), 2);
        assert_eq!(schema.columns[1].column, 5);
    }

    #[test]
    fn test_column_scan_stops_after_blank_run() {
        // A declaration past a full blank run is never reached.
        let mut name_row = vec![s("column_name"), s("id")];
        let mut type_row = vec![s("data_type"), s("int")];
        name_row.extend(std::iter::repeat(s("")).take(3));
        type_row.extend(std::iter::repeat(s("")).take(3));
        name_row.push(s("orphan"));
        type_row.push(s("string"));

        let sheet = Sheet::from_grid("t", vec![name_row, type_row, vec![s("data_start")]]);
        let limits = ScanLimits {
            column_blank_run: 3,
            ..ScanLimits::default()
        };
        let schema = SheetSchema::resolve(&sheet, &limits).unwrap();
        assert_eq!(schema.columns.len(), 1);
        assert_eq!(schema.columns[0].name, "id");
    }

    #[test]
    fn test_numeric_header_cell_is_not_a_column() {
        let sheet = Sheet::from_grid(
            "t",
            vec![
                vec![s("column_name"), CellValue::Int(5), s("id")],
                vec![s("data_type"), s("int"), s("int")],
                vec![s("data_start")],
            ],
        );
        let schema = SheetSchema::resolve(&sheet, &ScanLimits::default()).unwrap();
        assert_eq!(schema.columns.len(), 1);
        assert_eq!(schema.columns[0].name, "id");
        assert_eq!(schema.columns[0].column, 3);
    }
}
