mod common;
use common::row;
use rshuttle::core::{Mark, RosterSession, SortMode, StationChoice, StationFilter};
use rshuttle::errors::AppError;
use rshuttle::models::StationId::{DienBienPhu, NgaTuBinhPhuoc, VincomDiAn};
use rshuttle::models::{RosterRow, Shift};

fn roster() -> Vec<RosterRow> {
    vec![
        row("1", "Nguyễn Văn Anh", &[DienBienPhu], &[VincomDiAn]),
        row("2", "Trần Thị Bích", &[NgaTuBinhPhuoc], &[]),
        row("3", "Lê Đức Dũng", &[], &[DienBienPhu]),
        row("4", "Anh Nguyen", &[], &[]),
    ]
}

fn view_indexes(session: &RosterSession) -> Vec<String> {
    session
        .view()
        .rows
        .iter()
        .map(|(r, _)| r.row_index.clone())
        .collect()
}

#[test]
fn test_fresh_session_shows_everything_in_feed_order() {
    let session = RosterSession::new(roster());
    let view = session.view();

    assert_eq!(view.visible_row_count, 4);
    assert_eq!(view.total_selected_count, 0);
    assert!(view.show_station_columns);
    assert!(view.rows.iter().all(|(_, m)| *m == Mark::Unselected));
    assert_eq!(view_indexes(&session), ["1", "2", "3", "4"]);
}

#[test]
fn test_station_columns_hidden_while_filtering_shift_or_station() {
    let mut session = RosterSession::new(roster());

    session.set_shift(Shift::Morning);
    assert!(!session.view().show_station_columns);
    session.set_shift(Shift::All);

    session.toggle_station(StationChoice::Station(DienBienPhu));
    assert!(!session.view().show_station_columns);

    // A name query alone keeps the full table.
    session.toggle_station(StationChoice::All);
    session.set_name_query("anh");
    assert!(session.view().show_station_columns);
}

#[test]
fn test_name_query_matches_stored_uppercase_names() {
    let mut session = RosterSession::new(roster());
    session.set_name_query("ANH");
    assert_eq!(view_indexes(&session), ["1", "4"]);

    session.set_name_query("nguyễn");
    assert_eq!(view_indexes(&session), ["1", "4"]);

    session.clear_name_query();
    assert_eq!(session.visible_row_count(), 4);
}

#[test]
fn test_visible_count_is_taken_before_ordering() {
    let mut session = RosterSession::new(roster());
    session.toggle_station(StationChoice::Station(DienBienPhu));
    session.toggle_mark("3");
    session.set_sort(SortMode::SelectedFirst);

    let view = session.view();
    assert_eq!(view.visible_row_count, 2);
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].0.row_index, "3");
    assert_eq!(view.rows[0].1, Mark::Selected);
}

#[test]
fn test_selected_count_includes_hidden_rows() {
    let mut session = RosterSession::new(roster());
    session.toggle_mark("2");
    session.toggle_mark("4");
    session.toggle_mark("4");
    session.set_name_query("dung");

    let view = session.view();
    assert_eq!(view.visible_row_count, 1);
    assert_eq!(view.total_selected_count, 2);
}

#[test]
fn test_bulk_clear_resets_every_row() {
    let mut session = RosterSession::new(roster());
    assert!(!session.can_clear_marks());

    session.toggle_mark("1");
    session.toggle_mark("3");
    session.toggle_mark("3");
    assert!(session.can_clear_marks());

    assert!(session.clear_marks());
    let view = session.view();
    assert_eq!(view.total_selected_count, 0);
    assert!(view.rows.iter().all(|(_, m)| *m == Mark::Unselected));
    assert!(!session.can_clear_marks());
}

#[test]
fn test_reingestion_keeps_filters_and_marks() {
    let mut session = RosterSession::new(roster());
    session.set_shift(Shift::Evening);
    session.toggle_mark("1");
    session.toggle_mark("2");
    session.toggle_sort();

    // Row 2 disappears from the new import, row 5 is new.
    session.ingest(Ok(vec![
        row("1", "Nguyễn Văn Anh", &[DienBienPhu], &[VincomDiAn]),
        row("3", "Lê Đức Dũng", &[], &[DienBienPhu]),
        row("5", "Đỗ Hoàng Nam", &[], &[NgaTuBinhPhuoc]),
    ]));

    assert_eq!(session.filter().shift, Shift::Evening);
    assert_eq!(session.sort_mode(), SortMode::SelectedLast);
    assert_eq!(session.mark_of("1"), Mark::Selected);

    // The stale mark on row 2 is kept but inert.
    assert_eq!(session.mark_of("2"), Mark::Selected);
    assert_eq!(session.total_selected_count(), 1);
    assert_eq!(view_indexes(&session), ["3", "5", "1"]);

    // ...and counts again once the row comes back.
    session.ingest(Ok(roster()));
    assert_eq!(session.total_selected_count(), 2);
}

#[test]
fn test_failed_ingestion_presents_an_empty_roster() {
    let mut session = RosterSession::new(roster());
    session.toggle_station(StationChoice::Station(VincomDiAn));
    session.toggle_mark("1");

    session.ingest(Err(AppError::SheetNotFound("16-10-2026".into())));

    assert!(session.rows().is_empty());
    assert!(session.view().rows.is_empty());
    assert_eq!(session.visible_row_count(), 0);
    assert_eq!(session.total_selected_count(), 0);
    assert!(session.last_error().unwrap().contains("16-10-2026"));
    assert_eq!(session.filter().stations, StationFilter::only([VincomDiAn]));

    session.ingest(Ok(roster()));
    assert!(session.last_error().is_none());
    assert_eq!(session.total_selected_count(), 1);
    assert_eq!(view_indexes(&session), ["1"]);
}

#[test]
fn test_station_toggles_through_the_session() {
    let mut session = RosterSession::new(roster());
    let st1 = StationChoice::Station(DienBienPhu);
    let st2 = StationChoice::Station(NgaTuBinhPhuoc);

    assert_eq!(session.toggle_station(st1), &StationFilter::only([DienBienPhu]));
    assert_eq!(
        session.toggle_station(st2),
        &StationFilter::only([DienBienPhu, NgaTuBinhPhuoc])
    );
    assert_eq!(view_indexes(&session), ["1", "2", "3"]);

    assert_eq!(session.toggle_station(st1), &StationFilter::only([NgaTuBinhPhuoc]));
    assert_eq!(session.toggle_station(st2), &StationFilter::All);
}

#[test]
fn test_marks_of_missing_rows_do_not_enable_clear() {
    let mut session = RosterSession::new(roster());
    session.toggle_mark("2");

    session.ingest(Ok(vec![row("1", "Nguyễn Văn Anh", &[DienBienPhu], &[])]));

    assert!(!session.can_clear_marks());
    assert_eq!(session.selection().len(), 1);
    assert_eq!(session.mark_of("2"), Mark::Selected);
}
