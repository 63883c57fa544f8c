//! Row visibility: shift, station set and name query, combined with AND.

use crate::core::normalize::normalize;
use crate::models::{RosterRow, Shift, StationId};
use std::collections::BTreeSet;

/// Station filter: the `All` sentinel or a non-empty set of stations.
///
/// `StationSet` can only be built through `only` and `toggle`, both of
/// which fall back to `All` rather than produce an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StationFilter {
    #[default]
    All,
    Only(StationSet),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSet(BTreeSet<StationId>);

impl StationSet {
    pub fn iter(&self) -> impl Iterator<Item = StationId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.0.contains(&station)
    }
}

/// A click on one of the station buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationChoice {
    All,
    Station(StationId),
}

impl StationChoice {
    /// Accepts `all`, a station key (`station2`) or its catalog number.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.trim().eq_ignore_ascii_case("all") {
            return Some(StationChoice::All);
        }
        StationId::from_code(code).map(StationChoice::Station)
    }
}

impl StationFilter {
    pub fn only(stations: impl IntoIterator<Item = StationId>) -> Self {
        let set: BTreeSet<StationId> = stations.into_iter().collect();
        if set.is_empty() {
            StationFilter::All
        } else {
            StationFilter::Only(StationSet(set))
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StationFilter::All)
    }

    pub fn is_active(&self, station: StationId) -> bool {
        match self {
            StationFilter::All => false,
            StationFilter::Only(set) => set.contains(station),
        }
    }

    /// Apply one button press and return the resulting filter.
    pub fn toggle(self, choice: StationChoice) -> Self {
        let station = match choice {
            StationChoice::All => return StationFilter::All,
            StationChoice::Station(s) => s,
        };

        match self {
            StationFilter::All => StationFilter::Only(StationSet(BTreeSet::from([station]))),
            StationFilter::Only(StationSet(mut set)) => {
                if !set.remove(&station) {
                    set.insert(station);
                }
                if set.is_empty() {
                    StationFilter::All
                } else {
                    StationFilter::Only(StationSet(set))
                }
            }
        }
    }

    /// True if the row uses any selected station in either shift.
    ///
    /// The shift filter is not consulted: a morning-only view still shows a
    /// rider whose matching station is used in the evening.
    pub fn matches(&self, row: &RosterRow) -> bool {
        match self {
            StationFilter::All => true,
            StationFilter::Only(set) => set.iter().any(|s| row.touches(s)),
        }
    }
}

/// Current user-driven filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub shift: Shift,
    pub stations: StationFilter,
    pub name_query: String,
}

impl FilterState {
    /// True when no filter narrows the roster.
    pub fn is_identity(&self) -> bool {
        self.shift == Shift::All && self.stations.is_all() && self.name_query.is_empty()
    }

    /// Folded name query, computed once per recomputation.
    pub fn prepared(&self) -> PreparedFilter<'_> {
        PreparedFilter {
            filter: self,
            query: normalize(&self.name_query),
        }
    }
}

/// Filter with its name query already folded.
pub struct PreparedFilter<'a> {
    filter: &'a FilterState,
    query: String,
}

impl PreparedFilter<'_> {
    pub fn is_visible(&self, row: &RosterRow) -> bool {
        shift_matches(row, self.filter.shift)
            && self.filter.stations.matches(row)
            && (self.query.is_empty() || normalize(&row.name).contains(&self.query))
    }
}

pub fn shift_matches(row: &RosterRow, shift: Shift) -> bool {
    row.flags(shift).is_none_or(|flags| flags.any())
}

pub fn is_visible(row: &RosterRow, filter: &FilterState) -> bool {
    filter.prepared().is_visible(row)
}

/// Visible rows, in input order.
pub fn apply<'a>(rows: &'a [RosterRow], filter: &FilterState) -> Vec<&'a RosterRow> {
    let prepared = filter.prepared();
    rows.iter().filter(|r| prepared.is_visible(r)).collect()
}
