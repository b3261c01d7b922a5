/// Cell access for HYDROGRAPHS worksheets
///
/// calamine trims a worksheet range to its used area, so `Range::get` is
/// relative to the first used cell. Workbook row/column numbers are absolute,
/// and the surface row search depends on them, so every lookup here goes
/// through absolute coordinates.
use calamine::{Data, Range};

use super::extractor::InflowError;

pub struct HydrographSheet<'a> {
    range: &'a Range<Data>,
}

impl<'a> HydrographSheet<'a> {
    pub fn new(range: &'a Range<Data>) -> Self {
        Self { range }
    }

    /// Cell at an absolute (row, col), `None` outside the used area
    pub fn cell(&self, row: usize, col: usize) -> Option<&'a Data> {
        let (start_row, start_col) = self.range.start()?;
        let rel_row = row.checked_sub(start_row as usize)?;
        let rel_col = col.checked_sub(start_col as usize)?;
        self.range.get((rel_row, rel_col))
    }

    /// Number of columns counted from column A
    pub fn column_count(&self) -> usize {
        self.range
            .end()
            .map(|(_, col)| col as usize + 1)
            .unwrap_or(0)
    }

    /// Number of rows counted from row 1
    pub fn row_count(&self) -> usize {
        self.range
            .end()
            .map(|(row, _)| row as usize + 1)
            .unwrap_or(0)
    }

    /// Empty cells, cells outside the used area and empty strings are blank.
    /// Whitespace-only strings are not.
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        match self.cell(row, col) {
            None | Some(Data::Empty) => true,
            Some(Data::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    /// Surface row marker: columns 0 and 1 both numeric zero (FALSE and a
    /// zero date serial count), or both the string "0"
    pub fn is_zero_marker_row(&self, row: usize) -> bool {
        let first = self.cell(row, 0);
        let second = self.cell(row, 1);
        (is_numeric_zero(first) && is_numeric_zero(second))
            || (is_string_zero(first) && is_string_zero(second))
    }

    /// Numeric value of a cell that is about to be written out
    pub fn number(&self, row: usize, col: usize) -> Result<f64, InflowError> {
        let invalid = |msg: String| InflowError::InvalidData { row, col, msg };

        match self.cell(row, col) {
            Some(Data::Float(f)) => Ok(*f),
            Some(Data::Int(i)) => Ok(*i as f64),
            Some(Data::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
            Some(Data::DateTime(dt)) => Ok(dt.as_f64()),
            Some(Data::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid(format!("Cannot parse number from: {s:?}"))),
            Some(Data::Empty) | None => Err(invalid("Expected number, cell is empty".to_string())),
            Some(other) => Err(invalid(format!("Expected number, got: {other:?}"))),
        }
    }
}

fn is_numeric_zero(cell: Option<&Data>) -> bool {
    match cell {
        Some(Data::Float(f)) => *f == 0.0,
        Some(Data::Int(i)) => *i == 0,
        Some(Data::Bool(b)) => !*b,
        Some(Data::DateTime(dt)) => dt.as_f64() == 0.0,
        _ => false,
    }
}

fn is_string_zero(cell: Option<&Data>) -> bool {
    matches!(cell, Some(Data::String(s)) if s == "0")
}
