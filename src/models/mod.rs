pub mod roster;
pub mod station;

pub use roster::{RosterRow, Shift};
pub use station::{STATION_COUNT, StationFlags, StationId};
