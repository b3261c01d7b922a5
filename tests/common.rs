use calamine::{Data, Range};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// In-memory HYDROGRAPHS sheet, addressed by absolute (row, col)
pub struct SheetBuilder {
    range: Range<Data>,
}

impl SheetBuilder {
    /// Blank sheet spanning A1 through (rows - 1, cols - 1)
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            range: Range::new((0, 0), (rows - 1, cols - 1)),
        }
    }

    /// Put the 0 | 0 surface marker in columns A and B of `row`
    pub fn surface(mut self, row: u32) -> Self {
        self.range.set_value((row, 0), Data::Float(0.0));
        self.range.set_value((row, 1), Data::Float(0.0));
        self
    }

    pub fn number(mut self, row: u32, col: u32, value: f64) -> Self {
        self.range.set_value((row, col), Data::Float(value));
        self
    }

    pub fn text(mut self, row: u32, col: u32, value: &str) -> Self {
        self.range.set_value((row, col), Data::String(value.to_string()));
        self
    }

    pub fn build(self) -> Range<Data> {
        self.range
    }
}

/// Workbook layout used across the tests: surface row at index 2, one
/// hydrograph in column E (index 4) with a 12.345 base flow, three data rows
/// of which the last has a blank column B.
pub fn reach_sheet() -> Range<Data> {
    SheetBuilder::new(60, 6)
        .text(0, 0, "Reach 12 inflow hydrographs")
        .number(1, 4, 12.345)
        .surface(2)
        .number(2, 2, 0.0)
        .number(2, 4, 12.345)
        .number(3, 1, 1.0)
        .number(3, 2, 1.0)
        .number(3, 4, 15.0)
        .number(4, 2, 2.0)
        .build()
}

/// Numeric cells of `reach_sheet()` minus its title, so row 0 is empty and
/// calamine trims the used range to start at row 1
pub const REACH_CELLS: [(u32, u16, f64); 9] = [
    (1, 4, 12.345),
    (2, 0, 0.0),
    (2, 1, 0.0),
    (2, 2, 0.0),
    (2, 4, 12.345),
    (3, 1, 1.0),
    (3, 2, 1.0),
    (3, 4, 15.0),
    (4, 2, 2.0),
];

/// Save an .xlsx with one sheet holding the given numeric cells
pub fn write_workbook(path: &Path, sheet_name: &str, cells: &[(u32, u16, f64)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .expect("Failed to name worksheet");
    for &(row, col, value) in cells {
        worksheet
            .write_number(row, col, value)
            .expect("Failed to write cell");
    }
    workbook.save(path).expect("Failed to save workbook");
}
