use super::station::{StationFlags, StationId};
use serde::Serialize;

/// One rider of the daily roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRow {
    pub row_index: String, // unique per import, key for selection
    pub person_id: String, // informative only, may repeat across imports
    pub name: String,      // uppercased at ingestion
    pub morning: StationFlags,
    pub evening: StationFlags,
}

impl RosterRow {
    pub fn new(
        row_index: impl Into<String>,
        person_id: impl Into<String>,
        name: &str,
        morning: StationFlags,
        evening: StationFlags,
    ) -> Self {
        Self {
            row_index: row_index.into(),
            person_id: person_id.into(),
            name: name.trim().to_uppercase(),
            morning,
            evening,
        }
    }

    pub fn flags(&self, shift: Shift) -> Option<&StationFlags> {
        match shift {
            Shift::All => None,
            Shift::Morning => Some(&self.morning),
            Shift::Evening => Some(&self.evening),
        }
    }

    /// True if the row uses `station` in either shift.
    pub fn touches(&self, station: StationId) -> bool {
        self.morning.get(station) || self.evening.get(station)
    }
}

/// Shift filter: both halves of the day, or only one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum Shift {
    #[default]
    All,
    Morning,
    Evening,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::All => "all",
            Shift::Morning => "morning",
            Shift::Evening => "evening",
        }
    }

    /// Helper: convert user input (any case) into a shift.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "all" => Some(Shift::All),
            "morning" | "am" => Some(Shift::Morning),
            "evening" | "pm" => Some(Shift::Evening),
            _ => None,
        }
    }
}
