//! Shift and coworker repositories over a sheet backend.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::codec::{
    COWORKERS_SHEET, SHIFTS_SHEET, coworker_from_row, coworker_to_row, shift_from_row,
    shift_to_row,
};
use super::sheet::{InMemorySheets, SheetBackend, find_row_number};
use crate::calculation::{commit_shift, sort_roster, user_flag_handover, validate_coworker};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Coworker, ShiftRecord};

/// Reads and writes shift and coworker records.
///
/// Shifts are keyed by date and coworkers by id; both are located by the
/// id in the first column of their sheet. Saving a shift commits it first,
/// so stored derived fields are always current.
pub struct SheetStore {
    backend: Box<dyn SheetBackend>,
}

impl std::fmt::Debug for SheetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetStore").finish_non_exhaustive()
    }
}

impl Default for SheetStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SheetStore {
    /// Creates a store over the given backend.
    pub fn new(backend: impl SheetBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Creates a store over a fresh in-memory spreadsheet.
    pub fn in_memory() -> Self {
        Self::new(InMemorySheets::new())
    }

    // ------------------------------------------------------------------
    // Shifts
    // ------------------------------------------------------------------

    /// Lists every shift, newest date first. Rows without an id are skipped.
    pub fn list_shifts(&self) -> TrackerResult<Vec<ShiftRecord>> {
        let rows = self.backend.read_rows(SHIFTS_SHEET)?;
        let mut shifts = rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| row.first().is_some_and(|id| !id.trim().is_empty()))
            .map(|(index, row)| shift_from_row(row, index + 1))
            .collect::<TrackerResult<Vec<_>>>()?;

        shifts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(shifts)
    }

    /// Returns the shift on `date`.
    pub fn get_shift(&self, date: NaiveDate) -> TrackerResult<ShiftRecord> {
        let rows = self.backend.read_rows(SHIFTS_SHEET)?;
        let row_number =
            find_row_number(&rows, &date_id(date)).ok_or(TrackerError::ShiftNotFound { date })?;
        shift_from_row(&rows[row_number - 1], row_number)
    }

    /// Commits and stores a new shift.
    ///
    /// # Errors
    ///
    /// `InvalidShift` if the shift fails validation, `DuplicateShift` if a
    /// shift already exists on its date.
    pub fn add_shift(&mut self, shift: ShiftRecord) -> TrackerResult<ShiftRecord> {
        let shift = commit_shift(shift)?;
        let rows = self.backend.read_rows(SHIFTS_SHEET)?;
        if find_row_number(&rows, &shift.id()).is_some() {
            warn!(date = %shift.date, "Shift already exists");
            return Err(TrackerError::DuplicateShift { date: shift.date });
        }

        self.backend.append_row(SHIFTS_SHEET, shift_to_row(&shift)?)?;
        info!(date = %shift.date, "Shift added");
        Ok(shift)
    }

    /// Commits `shift` and stores it in place of the shift on `date`.
    ///
    /// The shift may move to a new date as long as that date is free.
    pub fn update_shift(&mut self, date: NaiveDate, shift: ShiftRecord) -> TrackerResult<ShiftRecord> {
        let shift = commit_shift(shift)?;
        let rows = self.backend.read_rows(SHIFTS_SHEET)?;
        let row_number =
            find_row_number(&rows, &date_id(date)).ok_or(TrackerError::ShiftNotFound { date })?;

        if shift.date != date && find_row_number(&rows, &shift.id()).is_some() {
            warn!(from = %date, to = %shift.date, "Shift date already taken");
            return Err(TrackerError::DuplicateShift { date: shift.date });
        }

        self.backend
            .update_row(SHIFTS_SHEET, row_number, shift_to_row(&shift)?)?;
        info!(date = %shift.date, row_number, "Shift updated");
        Ok(shift)
    }

    /// Deletes the shift on `date`.
    pub fn delete_shift(&mut self, date: NaiveDate) -> TrackerResult<()> {
        let rows = self.backend.read_rows(SHIFTS_SHEET)?;
        let row_number =
            find_row_number(&rows, &date_id(date)).ok_or(TrackerError::ShiftNotFound { date })?;
        self.backend.delete_row(SHIFTS_SHEET, row_number)?;
        info!(date = %date, "Shift deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Coworkers
    // ------------------------------------------------------------------

    /// Lists the roster sorted by first name.
    pub fn list_coworkers(&self) -> TrackerResult<Vec<Coworker>> {
        let rows = self.backend.read_rows(COWORKERS_SHEET)?;
        let mut roster = rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| row.first().is_some_and(|id| !id.trim().is_empty()))
            .map(|(index, row)| coworker_from_row(row, index + 1))
            .collect::<TrackerResult<Vec<_>>>()?;

        sort_roster(&mut roster);
        Ok(roster)
    }

    /// Returns the coworker with `id`.
    pub fn get_coworker(&self, id: &str) -> TrackerResult<Coworker> {
        let rows = self.backend.read_rows(COWORKERS_SHEET)?;
        let row_number = find_row_number(&rows, id).ok_or_else(|| TrackerError::CoworkerNotFound {
            id: id.to_string(),
        })?;
        coworker_from_row(&rows[row_number - 1], row_number)
    }

    /// Validates and stores a new coworker.
    pub fn add_coworker(&mut self, coworker: Coworker) -> TrackerResult<Coworker> {
        validate_coworker(&coworker)?;
        let rows = self.backend.read_rows(COWORKERS_SHEET)?;
        if find_row_number(&rows, &coworker.id).is_some() {
            return Err(TrackerError::DuplicateCoworker { id: coworker.id });
        }

        self.backend
            .append_row(COWORKERS_SHEET, coworker_to_row(&coworker))?;
        info!(id = %coworker.id, "Coworker added");
        Ok(coworker)
    }

    /// Validates `coworker` and stores it in place of the coworker with `id`.
    pub fn update_coworker(&mut self, id: &str, coworker: Coworker) -> TrackerResult<Coworker> {
        validate_coworker(&coworker)?;
        let rows = self.backend.read_rows(COWORKERS_SHEET)?;
        let row_number = find_row_number(&rows, id).ok_or_else(|| TrackerError::CoworkerNotFound {
            id: id.to_string(),
        })?;

        if coworker.id != id && find_row_number(&rows, &coworker.id).is_some() {
            return Err(TrackerError::DuplicateCoworker { id: coworker.id });
        }

        self.backend
            .update_row(COWORKERS_SHEET, row_number, coworker_to_row(&coworker))?;
        info!(id = %coworker.id, row_number, "Coworker updated");
        Ok(coworker)
    }

    /// Deletes the coworker with `id`.
    pub fn delete_coworker(&mut self, id: &str) -> TrackerResult<()> {
        let rows = self.backend.read_rows(COWORKERS_SHEET)?;
        let row_number = find_row_number(&rows, id).ok_or_else(|| TrackerError::CoworkerNotFound {
            id: id.to_string(),
        })?;
        self.backend.delete_row(COWORKERS_SHEET, row_number)?;
        info!(id = %id, "Coworker deleted");
        Ok(())
    }

    /// Saves a coworker, adding or updating by id.
    ///
    /// If the coworker is flagged as the user, every other coworker carrying
    /// the flag is unflagged first, in a separate update.
    pub fn save_coworker(&mut self, coworker: Coworker) -> TrackerResult<Coworker> {
        validate_coworker(&coworker)?;
        let roster = self.list_coworkers()?;

        for previous in user_flag_handover(&roster, &coworker) {
            info!(from = %previous.id, to = %coworker.id, "Moving user flag");
            let id = previous.id.clone();
            self.update_coworker(&id, previous)?;
        }

        if roster.iter().any(|c| c.id == coworker.id) {
            let id = coworker.id.clone();
            self.update_coworker(&id, coworker)
        } else {
            self.add_coworker(coworker)
        }
    }
}

fn date_id(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
