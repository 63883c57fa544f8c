mod common;
use chrono::NaiveDate;
use common::ROSTER_CSV;
use csv::StringRecord;
use rshuttle::config::Config;
use rshuttle::core::RosterSession;
use rshuttle::errors::AppError;
use rshuttle::feed::schema::decode_record;
use rshuttle::feed::{FeedSource, ROSTER_SCHEMA, feed_url, parse_roster_str, sheet_name};
use rshuttle::models::{RosterRow, StationId};

const HEADER: &str = "index,id,name,m1,m2,m3,m4,m5,m6,e1,e2,e3,e4,e5,e6\n";

fn row_indexes(rows: &[RosterRow]) -> Vec<&str> {
    rows.iter().map(|r| r.row_index.as_str()).collect()
}

#[test]
fn test_schema_has_fifteen_named_fields() {
    assert_eq!(ROSTER_SCHEMA.len(), 15);
    assert_eq!(ROSTER_SCHEMA[0].name, "index");
    assert_eq!(ROSTER_SCHEMA[2].name, "name");
    assert_eq!(ROSTER_SCHEMA[3].name, "morning.station1");
    assert_eq!(ROSTER_SCHEMA[14].name, "evening.station6");
}

#[test]
fn test_parse_quoted_sheet_export() {
    let rows = parse_roster_str(ROSTER_CSV).expect("parse fixture");
    assert_eq!(rows.len(), 5);

    let first = &rows[0];
    assert_eq!(first.row_index, "1");
    assert_eq!(first.person_id, "NV001");
    assert_eq!(first.name, "NGUYỄN VĂN ANH");
    assert!(first.morning.get(StationId::DienBienPhu));
    assert!(!first.morning.get(StationId::VincomDiAn));
    assert!(first.evening.get(StationId::VincomDiAn));
    assert_eq!(first.evening.stations().count(), 1);

    assert!(!rows[4].morning.any());
    assert!(!rows[4].evening.any());
}

#[test]
fn test_quoted_name_with_comma_does_not_shift_columns() {
    let csv = format!("{HEADER}\"9\",\"X9\",\"Nguyen, Van B\",\"0\",\"1\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"1\"\n");
    let rows = parse_roster_str(&csv).expect("parse");
    assert_eq!(rows[0].name, "NGUYEN, VAN B");
    assert!(rows[0].morning.get(StationId::NgaTuBinhPhuoc));
    assert!(rows[0].evening.get(StationId::VincomDiAn));
}

#[test]
fn test_only_exact_one_is_true() {
    let csv = format!("{HEADER}1,a,x, 1 ,true,yes,2,,0,1,1,1,1,1,1\n");
    let rows = parse_roster_str(&csv).expect("parse");
    let r = &rows[0];
    assert!(r.morning.get(StationId::DienBienPhu));
    assert_eq!(r.morning.stations().count(), 1);
    assert_eq!(r.evening.stations().count(), 6);
}

#[test]
fn test_short_rows_default_missing_flags_to_false() {
    let csv = format!("{HEADER}1,a,anh,1\n2,b,binh\n");
    let rows = parse_roster_str(&csv).expect("parse");
    assert_eq!(rows.len(), 2);
    assert!(rows[0].morning.get(StationId::DienBienPhu));
    assert_eq!(rows[0].morning.stations().count(), 1);
    assert!(!rows[0].evening.any());
    assert!(!rows[1].morning.any());
    assert_eq!(rows[1].name, "BINH");
}

#[test]
fn test_blank_records_are_skipped() {
    let csv = format!("{HEADER}1,a,anh\n,,,,,,,,,,,,,,\n\n2,b,binh\n");
    let rows = parse_roster_str(&csv).expect("parse");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].row_index, "2");
}

#[test]
fn test_blank_trailing_cells_are_ignored() {
    let csv = format!(
        "{HEADER}1,a,anh,1,0,0,0,0,0,0,0,0,0,0,0\n2,b,binh,0,0,0,0,0,0,0,0,0,0,0,1\n3,c,chau,0,0,1,0,0,0,0,0,0,0,0,0,\n"
    );
    let rows = parse_roster_str(&csv).expect("parse");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].row_index, "3");
    assert!(rows[2].morning.get(StationId::AeonBinhDuong));

    let mut session = RosterSession::default();
    session.ingest(parse_roster_str(&csv));
    assert_eq!(session.rows().len(), 3);
    assert!(session.last_error().is_none());
}

#[test]
fn test_row_with_extra_values_is_skipped() {
    let csv = format!("{HEADER}1,a,anh,0,0,0,0,0,0,0,0,0,0,0,0,extra\n2,b,binh,1\n");
    let rows = parse_roster_str(&csv).expect("parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row_index, "2");
}

#[test]
fn test_extra_values_are_a_schema_error_for_the_record() {
    let record = StringRecord::from(vec![
        "1", "a", "anh", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "", "x",
    ]);
    match decode_record(&record, 7) {
        Err(AppError::FeedSchema { line, reason }) => {
            assert_eq!(line, 7);
            assert!(reason.contains("field 17"), "{reason}");
        }
        other => panic!("expected a schema error, got {other:?}"),
    }
}

#[test]
fn test_row_without_index_is_skipped() {
    let csv = format!("{HEADER}1,a,anh\n ,b,binh,1\n3,c,chau\n");
    let rows = parse_roster_str(&csv).expect("parse");
    assert_eq!(row_indexes(&rows), ["1", "3"]);
}

#[test]
fn test_duplicate_index_keeps_first_row() {
    let csv = format!("{HEADER}1,a,anh\n1,b,binh\n2,c,chau\n");
    let rows = parse_roster_str(&csv).expect("parse");
    assert_eq!(row_indexes(&rows), ["1", "2"]);
    assert_eq!(rows[0].name, "ANH");
}

#[test]
fn test_header_only_feed_is_empty() {
    assert!(parse_roster_str(HEADER).expect("parse").is_empty());
    assert!(parse_roster_str("").expect("parse").is_empty());
}

#[test]
fn test_sheet_name_and_url() {
    let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let sheet = sheet_name(day, "%d-%m-%Y");
    assert_eq!(sheet, "16-10-2026");
    assert_eq!(
        feed_url("https://example.org/tq?sheet={sheet}", &sheet),
        "https://example.org/tq?sheet=16-10-2026"
    );
}

#[test]
fn test_source_resolution() {
    let cfg = Config::default();
    let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    match FeedSource::resolve(&cfg, None, day) {
        FeedSource::Http { url, sheet } => {
            assert_eq!(sheet, "05-01-2026");
            assert!(url.ends_with("sheet=05-01-2026"), "{url}");
        }
        other => panic!("expected the configured URL, got {other:?}"),
    }

    assert_eq!(
        FeedSource::resolve(&cfg, Some("/tmp/roster.csv"), day),
        FeedSource::File("/tmp/roster.csv".into())
    );

    match FeedSource::resolve(&cfg, Some("http://localhost/{sheet}.csv"), day) {
        FeedSource::Http { url, .. } => assert_eq!(url, "http://localhost/05-01-2026.csv"),
        other => panic!("expected an URL source, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let source = FeedSource::File("/definitely/not/here/roster.csv".into());
    let err = source
        .fetch(std::time::Duration::from_secs(1))
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
