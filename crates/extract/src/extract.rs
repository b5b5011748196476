//! Data-row scanning: coercion, identity invariants, and the blank-run
//! end-of-data heuristic.

use crate::cell::CellValue;
use crate::coerce::coerce;
use crate::error::{ExtractError, Result};
use crate::schema::{ScanLimits, SheetSchema};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// Name of the required primary-key column.
pub const ID_COLUMN: &str = "id";

/// One extracted data row, keyed by declared column name in schema order.
pub type Record = IndexMap<String, CellValue>;

/// All of a sheet's records, keyed by the rendered `id` value in row order.
pub type SheetRecords = IndexMap<String, Record>;

impl Sheet {
    /// Extract every data row, keyed by the `id` column.
    ///
    /// # Errors
    ///
    /// Any schema, coercion, or identity error aborts the sheet; no partial
    /// mapping is returned.
    pub fn extract(&self) -> Result<SheetRecords> {
        self.extract_with_limits(&ScanLimits::default())
    }

    /// Extract with explicit scan bounds.
    ///
    /// # Errors
    ///
    /// As [`Sheet::extract`].
    pub fn extract_with_limits(&self, limits: &ScanLimits) -> Result<SheetRecords> {
        let schema = SheetSchema::resolve(self, limits)?;
        self.extract_with_schema(&schema, limits)
    }

    /// Extract using an already-resolved schema context.
    ///
    /// Scans from `data_start_row` up to the row ceiling, stopping early
    /// once `row_blank_run` consecutive rows contribute no data.
    ///
    /// # Errors
    ///
    /// As [`Sheet::extract`].
    pub fn extract_with_schema(
        &self,
        schema: &SheetSchema,
        limits: &ScanLimits,
    ) -> Result<SheetRecords> {
        let mut records = SheetRecords::new();
        let mut empty_run = 0;

        for row in schema.data_start_row..=limits.max_rows {
            match self.scan_row(schema, row)? {
                Some(record) => {
                    let key = match record.get(ID_COLUMN) {
                        Some(id) if !id.is_null() => id.as_str(),
                        _ => return Err(ExtractError::MissingId { row }),
                    };
                    if records.contains_key(&key) {
                        return Err(ExtractError::DuplicateId { id: key, row });
                    }
                    records.insert(key, record);
                    empty_run = 0;
                }
                None => {
                    empty_run += 1;
                    if empty_run >= limits.row_blank_run {
                        break;
                    }
                }
            }
        }

        Ok(records)
    }

    // A row is absent (None) when every declared column coerces to null or
    // the empty string; absent rows feed the blank-run counter upstream.
    fn scan_row(&self, schema: &SheetSchema, row: u32) -> Result<Option<Record>> {
        let mut record = Record::with_capacity(schema.columns.len());
        for spec in &schema.columns {
            let value = coerce(self.cell(row, spec.column), spec.tag)?;
            record.insert(spec.name.clone(), value);
        }

        if record.values().all(CellValue::is_blank) {
            return Ok(None);
        }
        Ok(Some(record))
    }
}
