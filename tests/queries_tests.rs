use chrono::NaiveDate;

use roster::model::*;
use roster::ops::intern_ops::{self, InternChange};
use roster::ops::placement_ops;
use roster::queries::summary_queries::{placement_summary, tracker_summary};
use roster::queries::view_queries::{
    filtered_interns, intern_view, placement_view, InternViewState, PageSize, PlacementViewState,
};
use roster::store::RosterStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A store with three hand-set interns: Ada (Green/Good), Bob (Red/Weak),
/// Cleo (Black/Weak, terminated).
fn tracker_fixture() -> RosterStore {
    let mut store = RosterStore::new();

    let ada = intern_ops::add_intern(&mut store, "Ada Lovelace", "ada@example.com").unwrap();
    intern_ops::update_intern(&mut store, &ada.id, InternChange::SpeakersCount(120)).unwrap();
    intern_ops::update_intern(&mut store, &ada.id, InternChange::ExcelSubmitted(YesNo::Yes))
        .unwrap();

    let bob = intern_ops::add_intern(&mut store, "Bob Tables", "bob@example.com").unwrap();
    intern_ops::update_intern(
        &mut store,
        &bob.id,
        InternChange::Performance(Performance::Weak),
    )
    .unwrap();

    let cleo = intern_ops::add_intern(&mut store, "Cleo Vance", "cleo@example.com").unwrap();
    intern_ops::update_intern(
        &mut store,
        &cleo.id,
        InternChange::Segregation(Some(Segregation::Terminated)),
    )
    .unwrap();
    intern_ops::update_intern(
        &mut store,
        &cleo.id,
        InternChange::Performance(Performance::Weak),
    )
    .unwrap();

    store
}

// ==========================================================================
// FILTER & SEARCH TESTS
// ==========================================================================

#[test]
fn unfiltered_view_returns_everyone_newest_first() {
    let store = tracker_fixture();
    let rows = filtered_interns(store.interns(), &InternViewState::default());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Cleo Vance");
    assert_eq!(rows[2].name, "Ada Lovelace");
    // Newest-first ordering follows the id sequence.
    assert!(rows[0].id.sequence() > rows[1].id.sequence());
}

#[test]
fn filtered_rows_are_a_subset_satisfying_every_predicate() {
    let store = tracker_fixture();
    let view = InternViewState {
        sheet_status: Some(SheetStatus::Red),
        performance: Some(Performance::Weak),
        ..InternViewState::default()
    };
    let rows = filtered_interns(store.interns(), &view);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bob Tables");
    for row in &rows {
        assert_eq!(row.sheet_status, SheetStatus::Red);
        assert_eq!(row.performance, Performance::Weak);
    }
}

#[test]
fn search_matches_name_case_insensitively() {
    let store = tracker_fixture();
    let view = InternViewState {
        query: "ADA".into(),
        ..InternViewState::default()
    };
    let rows = filtered_interns(store.interns(), &view);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ada Lovelace");
}

#[test]
fn search_matches_email_substring() {
    let store = tracker_fixture();
    let view = InternViewState {
        query: "bob@".into(),
        ..InternViewState::default()
    };
    let rows = filtered_interns(store.interns(), &view);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bob Tables");
}

#[test]
fn search_matches_segregation_label() {
    let store = tracker_fixture();
    let view = InternViewState {
        query: "terminated".into(),
        ..InternViewState::default()
    };
    let rows = filtered_interns(store.interns(), &view);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Cleo Vance");
}

#[test]
fn search_with_no_hits_is_empty_not_an_error() {
    let store = tracker_fixture();
    let view = InternViewState {
        query: "zebra".into(),
        ..InternViewState::default()
    };
    let list = intern_view(store.interns(), &view);
    assert!(list.rows.is_empty());
    assert_eq!(list.total_matching, 0);
    assert_eq!(list.total_pages, 1);
}

// ==========================================================================
// PAGINATION TESTS
// ==========================================================================

fn big_store(count: usize) -> RosterStore {
    let mut store = RosterStore::new();
    for i in 0..count {
        intern_ops::add_intern(&mut store, &format!("Intern {}", i), "").unwrap();
    }
    store
}

#[test]
fn pages_partition_the_filtered_sequence() {
    let store = big_store(60);
    let mut view = InternViewState::default();
    let full = filtered_interns(store.interns(), &view);

    let mut collected = Vec::new();
    for page in 1..=3 {
        view.page = page;
        let list = intern_view(store.interns(), &view);
        if page < 3 {
            assert_eq!(list.rows.len(), 25);
        } else {
            assert_eq!(list.rows.len(), 10);
        }
        assert_eq!(list.total_pages, 3);
        collected.extend(list.rows.into_iter().map(|i| i.id));
    }

    let expected: Vec<_> = full.into_iter().map(|i| i.id).collect();
    assert_eq!(collected, expected);
}

#[test]
fn out_of_range_page_is_empty() {
    let store = big_store(10);
    let view = InternViewState {
        page: 5,
        ..InternViewState::default()
    };
    let list = intern_view(store.interns(), &view);
    assert!(list.rows.is_empty());
    assert_eq!(list.total_matching, 10);
}

#[test]
fn empty_roster_still_has_one_page() {
    let store = RosterStore::new();
    let list = intern_view(store.interns(), &InternViewState::default());
    assert_eq!(list.total_pages, 1);
    assert!(list.rows.is_empty());
}

#[test]
fn page_navigation_saturates_at_bounds() {
    let mut view = InternViewState::default();
    view.prev_page();
    assert_eq!(view.page, 1);
    view.next_page(3);
    view.next_page(3);
    view.next_page(3);
    assert_eq!(view.page, 3);
}

#[test]
fn changing_page_size_resets_to_first_page() {
    let mut view = InternViewState {
        page: 3,
        page_size: PageSize::Fifty,
        ..InternViewState::default()
    };
    view.set_page_size(PageSize::TwentyFive);
    assert_eq!(view.page, 1);
    assert_eq!(view.page_size.rows(), 25);
}

// ==========================================================================
// SUMMARY TESTS
// ==========================================================================

#[test]
fn tracker_summary_counts_every_axis() {
    let store = tracker_fixture();
    let summary = tracker_summary(store.interns());

    assert_eq!(summary.total, 3);
    assert_eq!(summary.green, 1);
    assert_eq!(summary.red, 1);
    assert_eq!(summary.black, 1);
    assert_eq!(summary.active, 3);
    assert_eq!(summary.inactive, 0);
    assert_eq!(summary.excel_yes, 1);
    assert_eq!(summary.excel_no, 2);
    assert_eq!(summary.good, 1);
    assert_eq!(summary.weak, 2);
}

#[test]
fn leave_counts_as_inactive_in_the_summary() {
    let mut store = RosterStore::new();
    let intern = intern_ops::add_intern(&mut store, "Ada", "").unwrap();
    intern_ops::update_intern(
        &mut store,
        &intern.id,
        InternChange::Activity(ActivityStatus::Leave),
    )
    .unwrap();

    let summary = tracker_summary(store.interns());
    assert_eq!(summary.active, 0);
    assert_eq!(summary.inactive, 1);
}

#[test]
fn tasks_completed_needs_both_flags_and_the_target() {
    let mut store = RosterStore::new();
    let intern = intern_ops::add_intern(&mut store, "Ada", "").unwrap();
    intern_ops::update_intern(&mut store, &intern.id, InternChange::AiChatAdded(true)).unwrap();
    intern_ops::update_intern(&mut store, &intern.id, InternChange::DataMiningGc(true)).unwrap();
    assert_eq!(tracker_summary(store.interns()).tasks_completed, 0);

    intern_ops::update_intern(&mut store, &intern.id, InternChange::SpeakersCount(100)).unwrap();
    assert_eq!(tracker_summary(store.interns()).tasks_completed, 1);
}

#[test]
fn placement_summary_averages_and_counts() {
    let mut store = RosterStore::new();
    placement_ops::add_placement(
        &mut store,
        "Omar",
        "",
        Department::Data,
        "",
        date(2026, 5, 1),
        PlacementStatus::Active,
        50,
    )
    .unwrap();
    placement_ops::add_placement(
        &mut store,
        "Lena",
        "",
        Department::Design,
        "",
        date(2026, 5, 2),
        PlacementStatus::Completed,
        51,
    )
    .unwrap();

    let summary = placement_summary(store.placements());
    assert_eq!(summary.total, 2);
    assert_eq!(summary.active, 1);
    assert_eq!(summary.completed, 1);
    // 50.5 rounds up.
    assert_eq!(summary.avg_score, 51);
}

#[test]
fn empty_placement_summary_has_zero_average() {
    let summary = placement_summary(&[]);
    assert_eq!(summary.avg_score, 0);
    assert_eq!(summary.total, 0);
}

// ==========================================================================
// PLACEMENT VIEW TESTS
// ==========================================================================

fn directory_fixture() -> RosterStore {
    let mut store = RosterStore::new();
    placement_ops::add_placement(
        &mut store,
        "Omar",
        "omar@example.com",
        Department::Data,
        "Priya",
        date(2026, 3, 10),
        PlacementStatus::Active,
        70,
    )
    .unwrap();
    placement_ops::add_placement(
        &mut store,
        "Lena",
        "lena@example.com",
        Department::Design,
        "Sam",
        date(2026, 7, 2),
        PlacementStatus::Offer,
        85,
    )
    .unwrap();
    placement_ops::add_placement(
        &mut store,
        "Kai",
        "kai@example.com",
        Department::Data,
        "Priya",
        date(2026, 1, 20),
        PlacementStatus::Completed,
        90,
    )
    .unwrap();
    store
}

#[test]
fn placements_sort_by_start_date_descending() {
    let store = directory_fixture();
    let list = placement_view(store.placements(), &PlacementViewState::default());
    let names: Vec<_> = list.rows.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Lena", "Omar", "Kai"]);
}

#[test]
fn department_filter_narrows_the_directory() {
    let store = directory_fixture();
    let view = PlacementViewState {
        department: Some(Department::Data),
        ..PlacementViewState::default()
    };
    let list = placement_view(store.placements(), &view);
    assert_eq!(list.rows.len(), 2);
    for placement in &list.rows {
        assert_eq!(placement.department, Department::Data);
    }
}

#[test]
fn placement_search_matches_mentor_and_department() {
    let store = directory_fixture();
    let by_mentor = PlacementViewState {
        query: "priya".into(),
        ..PlacementViewState::default()
    };
    assert_eq!(placement_view(store.placements(), &by_mentor).rows.len(), 2);

    let by_department = PlacementViewState {
        query: "design".into(),
        ..PlacementViewState::default()
    };
    let list = placement_view(store.placements(), &by_department);
    assert_eq!(list.rows.len(), 1);
    assert_eq!(list.rows[0].name, "Lena");
}
