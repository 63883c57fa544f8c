//! Interactive session: one command per stdin line, applied one at a time
//! to a single `RosterSession`. Marks and filters live only as long as the
//! process.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{Mark, RosterSession, SortMode, StationChoice};
use crate::errors::{AppError, AppResult};
use crate::models::Shift;
use crate::ui::messages::{error, info, success};
use crate::ui::roster::{render_filters, render_stations, render_view};
use std::io::{self, BufRead};
use tracing::debug;

use super::{ingest, parse_station, resolve_source};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Shift(Shift),
    Station(StationChoice),
    /// `None` clears the query.
    Name(Option<String>),
    Mark(String),
    Clear,
    Sort,
    Reload,
    Show,
    Stations,
    Help,
    Quit,
}

impl SessionCommand {
    /// Commands after which the roster is printed again.
    pub fn changes_view(&self) -> bool {
        !matches!(
            self,
            SessionCommand::Show
                | SessionCommand::Stations
                | SessionCommand::Help
                | SessionCommand::Quit
        )
    }
}

fn require<'a>(verb: &str, arg: &'a str, what: &str) -> AppResult<&'a str> {
    if arg.is_empty() {
        Err(AppError::InvalidCommand(format!("'{verb}' needs {what}")))
    } else {
        Ok(arg)
    }
}

pub fn parse_command(line: &str) -> AppResult<SessionCommand> {
    let line = line.trim();
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((v, a)) => (v, a.trim()),
        None => (line, ""),
    };

    let cmd = match verb.to_lowercase().as_str() {
        "shift" => {
            let code = require(verb, arg, "a shift (all, morning, evening)")?;
            SessionCommand::Shift(
                Shift::from_code(code).ok_or_else(|| AppError::InvalidShift(code.to_string()))?,
            )
        }
        "station" | "st" => SessionCommand::Station(parse_station(require(verb, arg, "a station")?)?),
        "name" | "find" => SessionCommand::Name((!arg.is_empty()).then(|| arg.to_string())),
        "mark" | "m" => SessionCommand::Mark(require(verb, arg, "a row index")?.to_string()),
        "clear" => SessionCommand::Clear,
        "sort" => SessionCommand::Sort,
        "reload" => SessionCommand::Reload,
        "show" | "ls" => SessionCommand::Show,
        "stations" => SessionCommand::Stations,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(AppError::InvalidCommand(other.to_string())),
    };
    Ok(cmd)
}

const HELP: &str = "\
Commands:
  shift all|morning|evening   filter by shift
  station all|<key>|<n>       toggle a station filter
  name [text]                 search by name (empty clears)
  mark <index>                cycle a row: selected → flagged → none
  clear                       clear every mark
  sort                        toggle ordering by mark
  reload                      fetch the roster again
  show | stations | help | quit";

fn print_view(session: &RosterSession, cfg: &Config) {
    print!("{}", render_filters(session.filter(), session.sort_mode()));
    print!("{}", render_view(&session.view(), cfg));
}

/// Handle the `session` command, reading from stdin.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (source, _day) = resolve_source(cli, cfg)?;

    let mut session = RosterSession::default();
    ingest(&mut session, &source, cfg);
    info(format!(
        "Loaded {} rows from {}. Type 'help' for commands.",
        session.rows().len(),
        source.describe()
    ));
    print_view(&session, cfg);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                error(e);
                continue;
            }
        };

        match &cmd {
            SessionCommand::Shift(shift) => session.set_shift(*shift),
            SessionCommand::Station(choice) => {
                session.toggle_station(*choice);
            }
            SessionCommand::Name(Some(q)) => session.set_name_query(q.clone()),
            SessionCommand::Name(None) => session.clear_name_query(),
            SessionCommand::Mark(index) => {
                if session.find(index).is_none() {
                    error(format!("Row index '{index}' is not in the roster"));
                    continue;
                }
                let mark = session.toggle_mark(index);
                if mark == Mark::Unselected {
                    info(format!("Row {index} unmarked"));
                } else {
                    info(format!("Row {index} {}", mark.as_str()));
                }
            }
            SessionCommand::Clear => {
                if session.can_clear_marks() && session.clear_marks() {
                    success("All marks cleared");
                } else {
                    if !session.selection().is_empty() {
                        debug!(
                            stale = session.selection().len(),
                            "only marks of rows missing from the roster remain, not clearing"
                        );
                    }
                    info("Nothing to clear");
                    continue;
                }
            }
            SessionCommand::Sort => {
                let mode = session.toggle_sort();
                if mode == SortMode::SelectedFirst {
                    info("Marked rows first");
                } else {
                    info("Unmarked rows first");
                }
            }
            SessionCommand::Reload => ingest(&mut session, &source, cfg),
            SessionCommand::Show => print_view(&session, cfg),
            SessionCommand::Stations => print!("{}", render_stations(&session.filter().stations)),
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => break,
        }

        if cmd.changes_view() {
            print_view(&session, cfg);
        }
    }

    Ok(())
}
