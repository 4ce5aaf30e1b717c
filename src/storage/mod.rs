//! Persistence for the shift tracker.
//!
//! Records are stored in a spreadsheet: one sheet of shift rows and one of
//! coworker rows. The [`codec`] maps records to rows, [`SheetBackend`] is
//! the row-level seam a spreadsheet client implements, and [`SheetStore`]
//! provides the record-level operations.

pub mod codec;
mod repository;
mod sheet;

pub use codec::{
    COWORKER_HEADERS, COWORKERS_SHEET, SHIFT_HEADERS, SHIFTS_SHEET, coworker_from_row,
    coworker_to_row, shift_from_row, shift_to_row,
};
pub use repository::SheetStore;
pub use sheet::{InMemorySheets, SheetBackend, find_row_number};
