//! Terminal rendering of a `RosterView`.

use crate::config::Config;
use crate::core::{FilterState, Mark, RosterView, SortMode, StationFilter};
use crate::models::{StationFlags, StationId};
use crate::utils::colors::{ACTIVE, FLAGGED_ROW, RESET, SELECTED_ROW, colorize_optional};
use crate::utils::table::{Column, Table};

fn station_list(flags: &StationFlags) -> String {
    flags
        .stations()
        .map(StationId::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn row_color(mark: Mark) -> Option<&'static str> {
    match mark {
        Mark::Unselected => None,
        Mark::Selected => Some(SELECTED_ROW),
        Mark::Flagged => Some(FLAGGED_ROW),
    }
}

/// Roster table plus the totals footer.
pub fn render_view(view: &RosterView<'_>, cfg: &Config) -> String {
    let wide = view.show_station_columns && cfg.show_station_columns;

    let mut columns = vec![Column::new("#"), Column::new("Idx"), Column::new("Name")];
    if wide {
        columns.push(Column::new("Morning stations"));
        columns.push(Column::new("Evening stations"));
    }

    let mut table = Table::new(columns, &cfg.separator_char);
    for (pos, (row, mark)) in view.rows.iter().enumerate() {
        let mut cells = vec![(pos + 1).to_string(), row.row_index.clone(), row.name.clone()];
        if wide {
            cells.push(station_list(&row.morning));
            cells.push(station_list(&row.evening));
        }
        table.add_row(cells, row_color(*mark));
    }

    let mut out = table.render();
    if view.rows.is_empty() {
        out.push_str("No results found\n");
    }

    out.push_str(&format!("\nTotal {} people", view.visible_row_count));
    if view.total_selected_count > 0 {
        out.push_str(&format!(" | Selected {} people", view.total_selected_count));
    }
    out.push('\n');
    out
}

/// One line per active filter, shown above the table.
pub fn render_filters(filter: &FilterState, sort: SortMode) -> String {
    let stations = match &filter.stations {
        StationFilter::All => "all".to_string(),
        StationFilter::Only(set) => set
            .iter()
            .map(StationId::display_name)
            .collect::<Vec<_>>()
            .join(", "),
    };

    format!(
        "Shift: {} | Stations: {} | Name: {} | Sort: {}\n",
        filter.shift.as_str(),
        stations,
        colorize_optional(&filter.name_query, "-"),
        sort.as_str()
    )
}

fn button(label: &str, active: bool) -> String {
    let padded = format!("{label:<10}");
    if active {
        format!("{ACTIVE}{padded}{RESET}")
    } else {
        padded
    }
}

/// Station catalog, active entries highlighted.
pub fn render_stations(filter: &StationFilter) -> String {
    let mut out = format!("  {} All stations\n", button("all", filter.is_all()));

    for (n, station) in StationId::ALL.into_iter().enumerate() {
        out.push_str(&format!(
            "{} {} {}\n",
            n + 1,
            button(station.key(), filter.is_active(station)),
            station.display_name()
        ));
    }
    out
}
