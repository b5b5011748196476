//! Workbook access: the only module touching the spreadsheet reader.

use crate::cell::CellValue;
use crate::error::{ExtractError, Result};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Reader, Xlsx};
use regex::Regex;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// Data sheets are plain identifiers; anything else (notes, separators) is
// not part of the export set.
fn data_sheet_name_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex"))
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as day serials since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

/// An open `.xlsx` workbook
///
/// One pass over an immutable file: list the data sheets, then materialize
/// each into a [`Sheet`] grid on demand.
pub struct Workbook {
    reader: Xlsx<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook file read-only.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or is not a valid
    /// workbook.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path: &Path = path.as_ref();
        let reader: Xlsx<BufReader<File>> = open_workbook::<Xlsx<BufReader<File>>, _>(path)
            .map_err(|e| ExtractError::Workbook(e.to_string()))?;
        Ok(Workbook { reader })
    }

    /// Names of the sheets that hold extractable data, in workbook order.
    ///
    /// Sheets whose names fall outside `[A-Za-z0-9_]+` are silently
    /// skipped, not erroneous.
    #[must_use]
    pub fn data_sheet_names(&self) -> Vec<String> {
        self.reader
            .sheet_names()
            .iter()
            .filter(|name| data_sheet_name_regex().is_match(name.as_str()))
            .map(ToString::to_string)
            .collect()
    }

    /// Materialize one sheet into a grid at absolute coordinates.
    ///
    /// The reader's range starts at the first used cell; the offset is
    /// folded back in so tag rows keep their on-sheet row numbers.
    ///
    /// # Errors
    ///
    /// Returns error if the sheet is missing or cannot be read.
    pub fn load_sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self
            .reader
            .worksheet_range(name)
            .map_err(|e| ExtractError::Workbook(e.to_string()))?;

        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let mut data: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];

        for row in range.rows() {
            let mut cells = vec![CellValue::Null; start_col as usize];
            cells.extend(row.iter().map(data_to_cell_value));
            data.push(cells);
        }

        Ok(Sheet::from_grid(name, data))
    }
}
