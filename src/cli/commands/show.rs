use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::RosterSession;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::roster::{render_filters, render_view};
use crate::utils::date::long_label;

use super::{apply_view_args, ingest, resolve_source};

/// Handle the `show` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { view } = &cli.command {
        let (source, day) = resolve_source(cli, cfg)?;

        let mut session = RosterSession::default();
        ingest(&mut session, &source, cfg);
        apply_view_args(&mut session, view)?;

        header(format!("Roster {} ({})", long_label(day), source.describe()));
        print!("{}", render_filters(session.filter(), session.sort_mode()));
        print!("{}", render_view(&session.view(), cfg));
    }
    Ok(())
}
