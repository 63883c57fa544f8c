//! Where the day's sheet comes from: a templated URL or a local file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::feed::schema::parse_roster;
use crate::models::RosterRow;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Sheet tab name for a given day, e.g. `16-10-2026` for `%d-%m-%Y`.
pub fn sheet_name(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

/// Substitute `{sheet}` in the configured URL template.
pub fn feed_url(template: &str, sheet: &str) -> String {
    template.replace("{sheet}", sheet)
}

/// Where a roster comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Http { url: String, sheet: String },
    File(PathBuf),
}

impl FeedSource {
    /// Resolve the source for `date`: an explicit `--source` wins, otherwise
    /// the configured URL template is used.
    pub fn resolve(cfg: &Config, source: Option<&str>, date: NaiveDate) -> Self {
        let sheet = sheet_name(date, &cfg.sheet_date_format);
        match source {
            Some(s) if is_url(s) => FeedSource::Http {
                url: feed_url(s, &sheet),
                sheet,
            },
            Some(s) => FeedSource::File(expand_tilde(s)),
            None => FeedSource::Http {
                url: feed_url(&cfg.feed_url, &sheet),
                sheet,
            },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            FeedSource::Http { sheet, .. } => format!("sheet {sheet}"),
            FeedSource::File(path) => path.display().to_string(),
        }
    }

    /// Fetch and parse the roster.
    pub fn fetch(&self, timeout: Duration) -> AppResult<Vec<RosterRow>> {
        let rows = match self {
            FeedSource::File(path) => {
                debug!(path = %path.display(), "reading roster file");
                parse_roster(File::open(path)?)?
            }
            FeedSource::Http { url, sheet } => {
                debug!(url = %url, "fetching roster");
                let body = fetch_text(url, sheet, timeout)?;
                parse_roster(body.as_bytes())?
            }
        };
        info!(rows = rows.len(), source = %self.describe(), "roster ingested");
        Ok(rows)
    }
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn fetch_text(url: &str, sheet: &str, timeout: Duration) -> AppResult<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        debug!(status = %response.status(), "feed answered with an error status");
        return Err(AppError::SheetNotFound(sheet.to_string()));
    }

    let body = response.text()?;

    // A missing tab is answered with an HTML error page, not a CSV.
    if body.trim_start().starts_with('<') {
        return Err(AppError::SheetNotFound(sheet.to_string()));
    }

    Ok(body)
}
