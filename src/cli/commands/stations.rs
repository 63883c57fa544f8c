use crate::config::Config;
use crate::errors::AppResult;
use crate::models::StationId;
use crate::utils::table::{Column, Table};

/// Handle the `stations` command: print the catalog.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(
        vec![Column::new("#"), Column::new("Key"), Column::new("Station")],
        &cfg.separator_char,
    );

    for (n, station) in StationId::ALL.into_iter().enumerate() {
        table.add_row(
            vec![
                (n + 1).to_string(),
                station.key().to_string(),
                station.display_name().to_string(),
            ],
            None,
        );
    }

    print!("{}", table.render());
    Ok(())
}
