//! One handler per subcommand, plus the glue that builds a session from
//! the global options.

pub mod config;
pub mod export;
pub mod init;
pub mod session;
pub mod show;
pub mod stations;

use crate::cli::parser::{Cli, ViewArgs};
use crate::config::Config;
use crate::core::{RosterSession, StationChoice};
use crate::errors::{AppError, AppResult};
use crate::feed::FeedSource;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// Feed source and day selected by the global options.
pub(crate) fn resolve_source(cli: &Cli, cfg: &Config) -> AppResult<(FeedSource, NaiveDate)> {
    let day = date::resolve_day(cli.date.as_deref())?;
    Ok((FeedSource::resolve(cfg, cli.source.as_deref(), day), day))
}

/// Fetch the roster into `session`. Failures leave an empty roster behind
/// and are reported as a warning, never as an error.
pub(crate) fn ingest(session: &mut RosterSession, source: &FeedSource, cfg: &Config) {
    session.ingest(source.fetch(cfg.timeout()));
    if let Some(err) = session.last_error() {
        warning(format!("Could not load the roster ({}): {err}", source.describe()));
    }
}

pub(crate) fn parse_station(code: &str) -> AppResult<StationChoice> {
    StationChoice::from_code(code).ok_or_else(|| AppError::InvalidStation(code.to_string()))
}

/// Replay the one-shot view options as the same transitions an
/// interactive session would perform.
pub(crate) fn apply_view_args(session: &mut RosterSession, args: &ViewArgs) -> AppResult<()> {
    session.set_shift(args.shift);

    for code in &args.stations {
        session.toggle_station(parse_station(code)?);
    }

    if let Some(q) = &args.name {
        session.set_name_query(q.clone());
    }

    for index in &args.marks {
        if session.find(index).is_none() {
            warning(format!("Row index '{index}' is not in the roster"));
        }
        session.toggle_mark(index);
    }

    session.set_sort(args.sort);
    Ok(())
}
