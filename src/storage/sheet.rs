//! Sheet backend abstraction.
//!
//! A spreadsheet is a set of named sheets, each a list of text rows with a
//! header in row 1. [`SheetBackend`] is the seam a remote spreadsheet client
//! plugs into; [`InMemorySheets`] keeps everything in process.

use std::collections::HashMap;

use tracing::debug;

use super::codec::{COWORKER_HEADERS, COWORKERS_SHEET, SHIFT_HEADERS, SHIFTS_SHEET};
use crate::error::{TrackerError, TrackerResult};

/// Row-level access to a spreadsheet.
///
/// Row numbers are 1-based sheet rows; row 1 is the header.
pub trait SheetBackend: Send {
    /// Returns every row of the sheet, header included.
    fn read_rows(&self, sheet: &str) -> TrackerResult<Vec<Vec<String>>>;

    /// Appends a row after the last row.
    fn append_row(&mut self, sheet: &str, row: Vec<String>) -> TrackerResult<()>;

    /// Replaces the row at `row_number`.
    fn update_row(&mut self, sheet: &str, row_number: usize, row: Vec<String>)
    -> TrackerResult<()>;

    /// Deletes the row at `row_number`; later rows move up.
    fn delete_row(&mut self, sheet: &str, row_number: usize) -> TrackerResult<()>;
}

/// Finds the sheet row whose first cell equals `id`, skipping the header.
pub fn find_row_number(rows: &[Vec<String>], id: &str) -> Option<usize> {
    rows.iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| row.first().is_some_and(|cell| cell.trim() == id))
        .map(|(index, _)| index + 1)
}

/// An in-process spreadsheet with the shifts and coworkers sheets.
#[derive(Debug, Clone, Default)]
pub struct InMemorySheets {
    sheets: HashMap<String, Vec<Vec<String>>>,
}

impl InMemorySheets {
    /// Creates a spreadsheet with header rows for the shifts and coworkers
    /// sheets.
    pub fn new() -> Self {
        let mut sheets = HashMap::new();
        sheets.insert(SHIFTS_SHEET.to_string(), vec![header(&SHIFT_HEADERS)]);
        sheets.insert(COWORKERS_SHEET.to_string(), vec![header(&COWORKER_HEADERS)]);
        Self { sheets }
    }

    fn sheet_mut(&mut self, sheet: &str) -> TrackerResult<&mut Vec<Vec<String>>> {
        self.sheets
            .get_mut(sheet)
            .ok_or_else(|| TrackerError::BackendError {
                message: format!("Unknown sheet '{sheet}'"),
            })
    }

    fn data_index(rows: &[Vec<String>], sheet: &str, row_number: usize) -> TrackerResult<usize> {
        if row_number < 2 || row_number > rows.len() {
            return Err(TrackerError::BackendError {
                message: format!("Row {row_number} is out of range for sheet '{sheet}'"),
            });
        }
        Ok(row_number - 1)
    }
}

fn header(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

impl SheetBackend for InMemorySheets {
    fn read_rows(&self, sheet: &str) -> TrackerResult<Vec<Vec<String>>> {
        self.sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| TrackerError::BackendError {
                message: format!("Unknown sheet '{sheet}'"),
            })
    }

    fn append_row(&mut self, sheet: &str, row: Vec<String>) -> TrackerResult<()> {
        let rows = self.sheet_mut(sheet)?;
        rows.push(row);
        debug!(sheet, row_number = rows.len(), "Row appended");
        Ok(())
    }

    fn update_row(
        &mut self,
        sheet: &str,
        row_number: usize,
        row: Vec<String>,
    ) -> TrackerResult<()> {
        let rows = self.sheet_mut(sheet)?;
        let index = Self::data_index(rows, sheet, row_number)?;
        rows[index] = row;
        debug!(sheet, row_number, "Row updated");
        Ok(())
    }

    fn delete_row(&mut self, sheet: &str, row_number: usize) -> TrackerResult<()> {
        let rows = self.sheet_mut(sheet)?;
        let index = Self::data_index(rows, sheet, row_number)?;
        rows.remove(index);
        debug!(sheet, row_number, "Row deleted");
        Ok(())
    }
}
