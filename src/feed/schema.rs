//! Roster sheet layout and CSV decoding.
//!
//! A record that cannot be decoded is skipped with a warning; the rest of
//! the sheet is kept.

use crate::errors::{AppError, AppResult};
use crate::models::{RosterRow, STATION_COUNT, StationFlags, StationId};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use std::io::Read;
use tracing::warn;

/// How a single column is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    /// Trimmed text, must not be empty.
    Key,
    /// Trimmed text, may be empty.
    Text,
    /// Trimmed text, uppercased.
    UpperText,
    /// `"1"` is true, anything else (or a missing column) is false.
    Flag(ShiftSlot, StationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftSlot {
    Morning,
    Evening,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub decoder: Decoder,
}

const fn flag(name: &'static str, slot: ShiftSlot, station: StationId) -> Field {
    Field {
        name,
        decoder: Decoder::Flag(slot, station),
    }
}

/// Column layout of the roster sheet, in feed order.
pub const ROSTER_SCHEMA: [Field; 3 + 2 * STATION_COUNT] = {
    use crate::feed::schema::ShiftSlot::{Evening, Morning};
    use crate::models::StationId::{
        AeonBinhDuong, ChoHangBong, DienBienPhu, NgaTuBinhPhuoc, NgaTuThuDuc, VincomDiAn,
    };
    [
        Field { name: "index", decoder: Decoder::Key },
        Field { name: "id", decoder: Decoder::Text },
        Field { name: "name", decoder: Decoder::UpperText },
        flag("morning.station1", Morning, DienBienPhu),
        flag("morning.station2", Morning, NgaTuBinhPhuoc),
        flag("morning.station3", Morning, AeonBinhDuong),
        flag("morning.station4", Morning, ChoHangBong),
        flag("morning.station5", Morning, NgaTuThuDuc),
        flag("morning.station6", Morning, VincomDiAn),
        flag("evening.station1", Evening, DienBienPhu),
        flag("evening.station2", Evening, NgaTuBinhPhuoc),
        flag("evening.station3", Evening, AeonBinhDuong),
        flag("evening.station4", Evening, ChoHangBong),
        flag("evening.station5", Evening, NgaTuThuDuc),
        flag("evening.station6", Evening, VincomDiAn),
    ]
};

fn decode_flag(raw: Option<&str>) -> bool {
    raw.map(str::trim) == Some("1")
}

/// Decode one record. `line` is only used for error reporting.
///
/// Trailing cells past the last schema field are ignored while they are
/// blank; a non-blank one is an error.
pub fn decode_record(record: &StringRecord, line: u64) -> AppResult<RosterRow> {
    let overflow = record.iter().skip(ROSTER_SCHEMA.len());
    if let Some(pos) = overflow
        .enumerate()
        .find_map(|(n, f)| (!f.trim().is_empty()).then_some(ROSTER_SCHEMA.len() + n))
    {
        return Err(AppError::FeedSchema {
            line,
            reason: format!(
                "expected at most {} fields, found a value in field {}",
                ROSTER_SCHEMA.len(),
                pos + 1
            ),
        });
    }

    let mut row_index = String::new();
    let mut person_id = String::new();
    let mut name = String::new();
    let mut morning = StationFlags::default();
    let mut evening = StationFlags::default();

    for (pos, field) in ROSTER_SCHEMA.iter().enumerate() {
        let raw = record.get(pos);
        match field.decoder {
            Decoder::Key => {
                row_index = raw.map(str::trim).unwrap_or_default().to_string();
                if row_index.is_empty() {
                    return Err(AppError::FeedSchema {
                        line,
                        reason: format!("missing value for '{}'", field.name),
                    });
                }
            }
            Decoder::Text => person_id = raw.map(str::trim).unwrap_or_default().to_string(),
            Decoder::UpperText => name = raw.map(str::trim).unwrap_or_default().to_uppercase(),
            Decoder::Flag(ShiftSlot::Morning, station) => morning.set(station, decode_flag(raw)),
            Decoder::Flag(ShiftSlot::Evening, station) => evening.set(station, decode_flag(raw)),
        }
    }

    Ok(RosterRow::new(row_index, person_id, &name, morning, evening))
}

/// Parse a whole CSV document. The header line and blank records are
/// skipped, as are malformed records and repeated row indexes (first one
/// wins); each skipped record is logged with its line number.
pub fn parse_roster<R: Read>(input: R) -> AppResult<Vec<RosterRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let row = match decode_record(&record, line) {
            Ok(row) => row,
            Err(e) => {
                warn!("skipping row: {e}");
                continue;
            }
        };
        if !seen.insert(row.row_index.clone()) {
            let e = AppError::FeedSchema {
                line,
                reason: format!("duplicate index '{}'", row.row_index),
            };
            warn!("skipping row: {e}");
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}

pub fn parse_roster_str(text: &str) -> AppResult<Vec<RosterRow>> {
    parse_roster(text.as_bytes())
}
