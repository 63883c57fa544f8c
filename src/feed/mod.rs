//! Ingestion adapter: turns the day's roster sheet into `RosterRow`s.
//! Everything that can go wrong while reading the feed is reported here;
//! the session only ever sees validated rows or an error.

pub mod schema;
pub mod source;

pub use schema::{ROSTER_SCHEMA, parse_roster, parse_roster_str};
pub use source::{FeedSource, feed_url, sheet_name};
