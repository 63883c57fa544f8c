use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a configuration file with defaults.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.test)?;

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    info("Edit 'feed_url' to point at your roster spreadsheet ({sheet} is replaced by the day).");
    Ok(())
}
