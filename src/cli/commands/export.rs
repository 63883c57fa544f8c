use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::RosterSession;
use crate::errors::AppResult;
use crate::export::ExportLogic;

use super::{apply_view_args, ingest, resolve_source};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        view,
    } = &cli.command
    {
        let (source, _day) = resolve_source(cli, cfg)?;

        let mut session = RosterSession::default();
        ingest(&mut session, &source, cfg);
        apply_view_args(&mut session, view)?;

        ExportLogic::export(&session.view(), *format, file, *force)?;
    }
    Ok(())
}
