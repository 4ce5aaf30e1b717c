//! Row codec for the spreadsheet layout.
//!
//! Shift rows have 20 columns and coworker rows 8. Nested structures are
//! stored as JSON text; empty ones use fixed sentinels so a blank record
//! always encodes to the same row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ClockTime, Coworker, ShiftRecord};

/// Name of the shifts sheet.
pub const SHIFTS_SHEET: &str = "Shifts";

/// Name of the coworkers sheet.
pub const COWORKERS_SHEET: &str = "Coworkers";

/// Column headers of the shifts sheet, in order.
pub const SHIFT_HEADERS: [&str; 20] = [
    "date",
    "startTime",
    "endTime",
    "tips",
    "duration",
    "tipsPerHour",
    "notes",
    "tipOut",
    "cashTips",
    "creditTips",
    "teamOnShift",
    "parties",
    "hourlyRate",
    "wage",
    "differential",
    "chump",
    "chumpGame",
    "wageStartTime",
    "wageEndTime",
    "differentials",
];

/// Column headers of the coworkers sheet, in order.
pub const COWORKER_HEADERS: [&str; 8] = [
    "id",
    "name",
    "firstName",
    "lastName",
    "positions",
    "manager",
    "isUser",
    "avatarUrl",
];

const EMPTY_OBJECT: &str = "{}";
const EMPTY_ARRAY: &str = "[]";

/// Encodes a shift as a 20-cell row.
pub fn shift_to_row(shift: &ShiftRecord) -> TrackerResult<Vec<String>> {
    let team = if shift.team_on_shift.is_empty() {
        EMPTY_OBJECT.to_string()
    } else {
        to_json(&shift.team_on_shift)?
    };
    let parties = if shift.parties.is_empty() {
        EMPTY_ARRAY.to_string()
    } else {
        to_json(&shift.parties)?
    };
    let chump_game = match &shift.chump_game {
        Some(game) => to_json(game)?,
        None => EMPTY_ARRAY.to_string(),
    };
    let differentials = match &shift.differentials {
        Some(diffs) => to_json(diffs)?,
        None => EMPTY_OBJECT.to_string(),
    };

    Ok(vec![
        shift.id(),
        shift.start_time.to_string(),
        shift.end_time.to_string(),
        money_cell(shift.tips),
        shift.duration.to_string(),
        money_cell(shift.tips_per_hour),
        shift.notes.clone(),
        money_cell(shift.tip_out),
        money_cell(shift.cash_tips),
        money_cell(shift.credit_tips),
        team,
        parties,
        money_cell(shift.hourly_rate),
        shift.wage.to_string(),
        shift.differential.to_string(),
        shift.chump.to_string(),
        chump_game,
        time_cell(shift.wage_start_time),
        time_cell(shift.wage_end_time),
        differentials,
    ])
}

/// Decodes a shift row. `row_number` is the 1-based sheet row, used in errors.
///
/// Missing trailing cells read as empty.
pub fn shift_from_row(row: &[String], row_number: usize) -> TrackerResult<ShiftRecord> {
    let cells = Cells {
        row,
        row_number,
        sheet: SHIFTS_SHEET,
    };

    let date = NaiveDate::parse_from_str(cells.trimmed(0), "%Y-%m-%d")
        .map_err(|e| cells.error(format!("invalid date '{}': {}", cells.get(0), e)))?;
    let start_time = cells.time(1, "startTime")?;
    let end_time = cells.time(2, "endTime")?;

    let mut shift = ShiftRecord::new(date, start_time, end_time);
    shift.tips = cells.money(3);
    shift.duration = cells.money(4).unwrap_or(Decimal::ZERO);
    shift.tips_per_hour = cells.money(5);
    shift.notes = cells.get(6).to_string();
    shift.tip_out = cells.money(7);
    shift.cash_tips = cells.money(8);
    shift.credit_tips = cells.money(9);
    shift.team_on_shift = cells.json_or(10, &[EMPTY_OBJECT], "teamOnShift")?.unwrap_or_default();
    shift.parties = cells.json_or(11, &[EMPTY_ARRAY], "parties")?.unwrap_or_default();
    shift.hourly_rate = cells.money(12);
    shift.wage = cells.money(13).unwrap_or(Decimal::ZERO);
    shift.differential = cells.money(14).unwrap_or(Decimal::ZERO);
    shift.chump = cells.money(15).unwrap_or(Decimal::ZERO);
    shift.chump_game = cells.json_or(16, &[EMPTY_ARRAY, EMPTY_OBJECT], "chumpGame")?;
    shift.wage_start_time = cells.optional_time(17, "wageStartTime")?;
    shift.wage_end_time = cells.optional_time(18, "wageEndTime")?;
    shift.differentials = cells.json_or(19, &[EMPTY_OBJECT], "differentials")?;

    Ok(shift)
}

/// Encodes a coworker as an 8-cell row.
pub fn coworker_to_row(coworker: &Coworker) -> Vec<String> {
    vec![
        coworker.id.clone(),
        coworker.name.clone(),
        coworker.first_name.clone(),
        coworker.last_name.clone(),
        coworker.positions.join(","),
        bool_cell(coworker.manager),
        bool_cell(coworker.is_user),
        coworker.avatar_url.clone().unwrap_or_default(),
    ]
}

/// Decodes a coworker row. `row_number` is the 1-based sheet row.
pub fn coworker_from_row(row: &[String], row_number: usize) -> TrackerResult<Coworker> {
    let cells = Cells {
        row,
        row_number,
        sheet: COWORKERS_SHEET,
    };

    let id = cells.trimmed(0);
    if id.is_empty() {
        return Err(cells.error("missing id".to_string()));
    }

    let positions = cells
        .get(4)
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    let avatar = cells.get(7);

    Ok(Coworker {
        id: id.to_string(),
        name: cells.get(1).to_string(),
        first_name: cells.get(2).to_string(),
        last_name: cells.get(3).to_string(),
        positions,
        manager: cells.flag(5),
        is_user: cells.flag(6),
        avatar_url: (!avatar.is_empty()).then(|| avatar.to_string()),
    })
}

fn to_json<T: Serialize>(value: &T) -> TrackerResult<String> {
    serde_json::to_string(value).map_err(|e| TrackerError::RowEncodeError {
        sheet: SHIFTS_SHEET.to_string(),
        message: e.to_string(),
    })
}

fn money_cell(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn time_cell(value: Option<ClockTime>) -> String {
    value.map(|t| t.to_string()).unwrap_or_default()
}

fn bool_cell(value: bool) -> String {
    let text = if value { "TRUE" } else { "FALSE" };
    text.to_string()
}

/// Read access to the cells of one row.
struct Cells<'a> {
    row: &'a [String],
    row_number: usize,
    sheet: &'static str,
}

impl Cells<'_> {
    fn get(&self, index: usize) -> &str {
        self.row.get(index).map(String::as_str).unwrap_or("")
    }

    fn trimmed(&self, index: usize) -> &str {
        self.get(index).trim()
    }

    fn error(&self, message: String) -> TrackerError {
        TrackerError::RowDecodeError {
            sheet: self.sheet.to_string(),
            row: self.row_number,
            message,
        }
    }

    fn time(&self, index: usize, column: &str) -> TrackerResult<ClockTime> {
        self.optional_time(index, column)?
            .ok_or_else(|| self.error(format!("missing {column}")))
    }

    fn optional_time(&self, index: usize, column: &str) -> TrackerResult<Option<ClockTime>> {
        match self.trimmed(index) {
            "" => Ok(None),
            text => text
                .parse()
                .map(Some)
                .map_err(|e| self.error(format!("{column}: {e}"))),
        }
    }

    /// Unparsable numbers read as absent.
    fn money(&self, index: usize) -> Option<Decimal> {
        let text = self.trimmed(index);
        if text.is_empty() {
            return None;
        }
        match text.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!(
                    sheet = self.sheet,
                    row = self.row_number,
                    column = index,
                    value = text,
                    "Ignoring non-numeric cell"
                );
                None
            }
        }
    }

    fn flag(&self, index: usize) -> bool {
        self.trimmed(index).eq_ignore_ascii_case("true")
    }

    /// Parses a JSON cell; blank cells and the listed sentinels read as `None`.
    fn json_or<T: DeserializeOwned>(
        &self,
        index: usize,
        empty: &[&str],
        column: &str,
    ) -> TrackerResult<Option<T>> {
        let text = self.trimmed(index);
        if text.is_empty() || empty.contains(&text) {
            return Ok(None);
        }
        serde_json::from_str(text)
            .map(Some)
            .map_err(|e| self.error(format!("{column}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ChumpGame, ChumpPlayer, ConsiderationEvent, DifferentialEntry, Differentials,
        PartyLocation, PartyTime, PartyType, PrivateParty, RoleDifferential, WorkerAssignment,
    };
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn empty_shift() -> ShiftRecord {
        ShiftRecord::new(
            NaiveDate::from_ymd_opt(2024, 7, 22).unwrap(),
            ClockTime::new(17, 0).unwrap(),
            ClockTime::new(1, 0).unwrap(),
        )
    }

    fn populated_shift() -> ShiftRecord {
        let mut shift = empty_shift();
        shift.tips = Some(dec("310.50"));
        shift.cash_tips = Some(dec("100"));
        shift.credit_tips = Some(dec("210.50"));
        shift.tip_out = Some(dec("31.05"));
        shift.notes = " Busy patio, \"great\" night ".to_string();
        shift.hourly_rate = Some(dec("5.00"));
        shift.wage_start_time = ClockTime::new(18, 0);
        shift.duration = dec("8.00");
        shift.tips_per_hour = Some(dec("38.81"));
        shift.wage = dec("35.00");
        shift.differential = dec("50");
        shift.chump = dec("5.50");
        shift.team_on_shift.insert(
            "Bartender".to_string(),
            vec![WorkerAssignment {
                row_id: "r1".to_string(),
                coworker_id: Some("1444".to_string()),
                name: "Ian".to_string(),
                start_time: ClockTime::new(17, 0),
                end_time: None,
                location: "main".to_string(),
            }],
        );
        shift.parties.push(PrivateParty {
            id: "party-1".to_string(),
            name: "Smith wedding".to_string(),
            party_type: PartyType::Wedding,
            cut_type: Default::default(),
            location: PartyLocation::FullVenue,
            time: PartyTime {
                start: ClockTime::new(18, 0),
                end: ClockTime::new(23, 0),
                duration: dec("5"),
            },
            size: 80,
            packages: Default::default(),
        });
        shift.differentials = Some(Differentials {
            consideration: DifferentialEntry::Events(vec![ConsiderationEvent {
                id: "c1".to_string(),
                amount: dec("-10"),
                person: "Jess".to_string(),
                reason: "covered close".to_string(),
                note: None,
            }]),
            tip: DifferentialEntry::Total(dec("20")),
            role: RoleDifferential {
                hourly_bonus: Decimal::ZERO,
                flat_bonus: dec("15"),
            },
            overtime: dec("25"),
        });
        shift.chump_game = Some(ChumpGame {
            players: vec![ChumpPlayer {
                name: "Ian".to_string(),
                is_user: true,
            }],
            pot: Decimal::ZERO,
            coins: Some(dec("1.50")),
            cash: Some(dec("4.00")),
            winner_name: Some("Ian".to_string()),
        });
        shift
    }

    fn row_of(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_empty_shift_uses_sentinels() {
        let row = shift_to_row(&empty_shift()).unwrap();
        assert_eq!(row.len(), SHIFT_HEADERS.len());
        assert_eq!(row[0], "2024-07-22");
        assert_eq!(row[3], "");
        assert_eq!(row[10], "{}");
        assert_eq!(row[11], "[]");
        assert_eq!(row[16], "[]");
        assert_eq!(row[19], "{}");
    }

    #[test]
    fn test_empty_shift_round_trip() {
        let shift = empty_shift();
        let row = shift_to_row(&shift).unwrap();
        let decoded = shift_from_row(&row, 2).unwrap();
        assert_eq!(decoded, shift);
        assert_eq!(shift_to_row(&decoded).unwrap(), row);
    }

    #[test]
    fn test_populated_shift_round_trip() {
        let shift = populated_shift();
        let row = shift_to_row(&shift).unwrap();
        let decoded = shift_from_row(&row, 2).unwrap();
        assert_eq!(decoded, shift);
        assert_eq!(shift_to_row(&decoded).unwrap(), row);
    }

    #[test]
    fn test_short_row_decodes() {
        let row = row_of(&["2024-07-22", "17:00", "01:00", "120"]);
        let shift = shift_from_row(&row, 5).unwrap();
        assert_eq!(shift.tips, Some(dec("120")));
        assert_eq!(shift.differentials, None);
        assert_eq!(shift.chump_game, None);
        assert!(shift.parties.is_empty());
    }

    #[test]
    fn test_legacy_differentials_cell() {
        let mut row = shift_to_row(&empty_shift()).unwrap();
        row[19] = r#"{"consideration":{"total":-10,"events":[]},"tip":{"total":5,"events":[{"id":"t1","amount":20}]},"role":{"hourlyBonus":0,"flatBonus":15},"overtime":25}"#.to_string();
        let shift = shift_from_row(&row, 2).unwrap();
        let diffs = shift.differentials.unwrap();
        assert_eq!(diffs.consideration, DifferentialEntry::Total(dec("-10")));
        assert_eq!(diffs.tip.total(), dec("20"));
    }

    #[test]
    fn test_chump_game_accepts_object_sentinel() {
        let mut row = shift_to_row(&empty_shift()).unwrap();
        row[16] = "{}".to_string();
        assert_eq!(shift_from_row(&row, 2).unwrap().chump_game, None);
    }

    #[test]
    fn test_non_numeric_money_reads_as_absent() {
        let row = row_of(&["2024-07-22", "17:00", "01:00", "lots"]);
        assert_eq!(shift_from_row(&row, 2).unwrap().tips, None);
    }

    #[test]
    fn test_bad_date_reports_row() {
        let row = row_of(&["22/07/2024", "17:00", "01:00"]);
        match shift_from_row(&row, 7) {
            Err(TrackerError::RowDecodeError { sheet, row, .. }) => {
                assert_eq!(sheet, SHIFTS_SHEET);
                assert_eq!(row, 7);
            }
            other => panic!("Expected RowDecodeError, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_json_reports_column() {
        let mut row = shift_to_row(&empty_shift()).unwrap();
        row[10] = "{not json".to_string();
        match shift_from_row(&row, 3) {
            Err(TrackerError::RowDecodeError { message, .. }) => {
                assert!(message.starts_with("teamOnShift"));
            }
            other => panic!("Expected RowDecodeError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_start_time_is_an_error() {
        let row = row_of(&["2024-07-22", "", "01:00"]);
        assert!(matches!(
            shift_from_row(&row, 2),
            Err(TrackerError::RowDecodeError { .. })
        ));
    }

    #[test]
    fn test_coworker_round_trip() {
        let coworker = Coworker {
            id: "1444".to_string(),
            name: "Ian".to_string(),
            first_name: "Ian".to_string(),
            last_name: "B".to_string(),
            positions: vec!["Bartender".to_string(), "Server".to_string()],
            manager: false,
            is_user: true,
            avatar_url: None,
        };
        let row = coworker_to_row(&coworker);
        assert_eq!(row[4], "Bartender,Server");
        assert_eq!(row[5], "FALSE");
        assert_eq!(row[6], "TRUE");
        assert_eq!(row[7], "");
        assert_eq!(coworker_from_row(&row, 2).unwrap(), coworker);
    }

    #[test]
    fn test_coworker_positions_are_trimmed() {
        let row = row_of(&["7", "Jess", "Jess", "M", " Server , Door,", "true"]);
        let coworker = coworker_from_row(&row, 3).unwrap();
        assert_eq!(coworker.positions, vec!["Server", "Door"]);
        assert!(coworker.manager);
        assert!(!coworker.is_user);
    }

    #[test]
    fn test_coworker_without_id_is_an_error() {
        let row = row_of(&["", "Jess"]);
        assert!(coworker_from_row(&row, 4).is_err());
    }
}
