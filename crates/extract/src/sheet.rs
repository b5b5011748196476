use crate::cell::CellValue;

static NULL: CellValue = CellValue::Null;

/// A worksheet as a named, row-major grid of cells
///
/// Cells are addressed 1-indexed by (row, column), the way the tagged header
/// convention refers to them. The grid is sparse at the edges: reads outside
/// the stored data return [`CellValue::Null`].
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a sheet from a grid of cells already at absolute coordinates
    #[must_use]
    pub fn from_grid(name: &str, data: Vec<Vec<CellValue>>) -> Self {
        Sheet {
            name: name.to_string(),
            data,
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_rows<T: Into<CellValue> + Clone>(name: &str, rows: Vec<Vec<T>>) -> Self {
        let data = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Sheet::from_grid(name, data)
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of stored rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Read the cell at 1-indexed (row, column); missing cells are null
    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> &CellValue {
        if row == 0 || col == 0 {
            return &NULL;
        }
        self.data
            .get(row as usize - 1)
            .and_then(|r| r.get(col as usize - 1))
            .unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_access_is_one_indexed() {
        let sheet = Sheet::from_rows("t", vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(sheet.cell(1, 1), &CellValue::String("a".to_string()));
        assert_eq!(sheet.cell(2, 2), &CellValue::String("d".to_string()));
    }

    #[test]
    fn test_out_of_bounds_reads_null() {
        let sheet = Sheet::from_rows("t", vec![vec!["a"]]);
        assert_eq!(sheet.cell(0, 0), &CellValue::Null);
        assert_eq!(sheet.cell(1, 2), &CellValue::Null);
        assert_eq!(sheet.cell(99, 1), &CellValue::Null);
    }

    #[test]
    fn test_ragged_rows() {
        let sheet = Sheet::from_grid(
            "t",
            vec![
                vec![CellValue::Int(1)],
                vec![CellValue::Int(2), CellValue::Int(3)],
            ],
        );
        assert_eq!(sheet.cell(1, 2), &CellValue::Null);
        assert_eq!(sheet.cell(2, 2), &CellValue::Int(3));
    }
}
