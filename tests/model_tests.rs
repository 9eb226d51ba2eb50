use roster::model::*;

// ==========================================================================
// ID TESTS
// ==========================================================================

#[test]
fn id_sequence_reads_trailing_digits() {
    let id: Id<Intern> = Id::new("INT-1042");
    assert_eq!(id.sequence(), 1042);
}

#[test]
fn id_sequence_is_zero_without_digits() {
    let id: Id<Intern> = Id::new("draft");
    assert_eq!(id.sequence(), 0);
}

#[test]
fn id_displays_raw_value() {
    let id: Id<Intern> = Id::new("INT-1001");
    assert_eq!(id.to_string(), "INT-1001");
}

// ==========================================================================
// INTERN TESTS
// ==========================================================================

#[test]
fn create_intern_defaults() {
    let intern = Intern::create(Id::new("INT-1001"), "Maya".into(), "maya@example.com".into());
    assert_eq!(intern.activity, ActivityStatus::Active);
    assert_eq!(intern.excel_submitted, YesNo::No);
    assert!(!intern.ai_chat_added);
    assert!(!intern.data_mining_gc);
    assert_eq!(intern.speakers_count, 0);
    assert_eq!(intern.speakers_target, SPEAKERS_TARGET);
    assert_eq!(intern.segregation, None);
    assert_eq!(intern.sheet_status, SheetStatus::Red);
}

#[test]
fn speakers_progress_caps_at_hundred() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.set_speakers_count(250);
    assert_eq!(intern.speakers_progress(), 100);
}

#[test]
fn speakers_progress_is_proportional() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.speakers_count = 42;
    assert_eq!(intern.speakers_progress(), 42);
}

#[test]
fn set_speakers_clamps_low_and_high() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.set_speakers_count(-5);
    assert_eq!(intern.speakers_count, 0);
    intern.set_speakers_count(5000);
    assert_eq!(intern.speakers_count, SPEAKERS_MAX);
}

#[test]
fn reaching_target_promotes_sheet_to_green() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    assert_eq!(intern.sheet_status, SheetStatus::Red);
    intern.set_speakers_count(SPEAKERS_TARGET);
    assert_eq!(intern.sheet_status, SheetStatus::Green);
}

#[test]
fn dropping_below_target_keeps_green() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.set_speakers_count(120);
    assert_eq!(intern.sheet_status, SheetStatus::Green);
    intern.set_speakers_count(40);
    assert_eq!(intern.speakers_count, 40);
    assert_eq!(intern.sheet_status, SheetStatus::Green);
}

#[test]
fn disqualifying_segregation_blocks_green() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.set_segregation(Some(Segregation::Terminated));
    intern.set_speakers_count(200);
    assert_eq!(intern.sheet_status, SheetStatus::Black);
}

#[test]
fn terminated_forces_black_over_green() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.set_speakers_count(150);
    assert_eq!(intern.sheet_status, SheetStatus::Green);
    intern.set_segregation(Some(Segregation::Terminated));
    assert_eq!(intern.sheet_status, SheetStatus::Black);
}

#[test]
fn clearing_segregation_leaves_sheet_black() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.set_segregation(Some(Segregation::Relocated));
    assert_eq!(intern.sheet_status, SheetStatus::Black);
    intern.set_segregation(None);
    assert_eq!(intern.segregation, None);
    assert_eq!(intern.sheet_status, SheetStatus::Black);
}

#[test]
fn soft_segregation_does_not_touch_sheet() {
    let mut intern = Intern::create(Id::new("INT-1001"), "Maya".into(), String::new());
    intern.set_speakers_count(100);
    intern.set_segregation(Some(Segregation::Warning));
    assert_eq!(intern.sheet_status, SheetStatus::Green);
}

// ==========================================================================
// ENUM TESTS
// ==========================================================================

#[test]
fn activity_status_parses_case_insensitively() {
    assert_eq!(ActivityStatus::parse("LEAVE"), Some(ActivityStatus::Leave));
    assert_eq!(ActivityStatus::parse("  active "), Some(ActivityStatus::Active));
    assert_eq!(ActivityStatus::parse("gone"), None);
}

#[test]
fn yes_no_round_trips() {
    assert_eq!(YesNo::parse("yes"), Some(YesNo::Yes));
    assert_eq!(YesNo::parse("N"), Some(YesNo::No));
    assert_eq!(YesNo::from_bool(true).display_name(), "Yes");
}

#[test]
fn segregation_parses_all_variants() {
    for segregation in Segregation::ALL {
        let parsed = Segregation::parse(segregation.display_name());
        assert_eq!(parsed, Some(*segregation));
    }
}

// ==========================================================================
// PLACEMENT TESTS
// ==========================================================================

#[test]
fn create_placement_defaults() {
    let start = chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let placement = Placement::create(Id::new("PLC-1001"), "Omar".into(), start);
    assert_eq!(placement.status, PlacementStatus::Active);
    assert_eq!(placement.department, Department::Engineering);
    assert_eq!(placement.score, 0);
    assert_eq!(placement.start_date, start);
}

#[test]
fn set_score_clamps_to_bounds() {
    let start = chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let mut placement = Placement::create(Id::new("PLC-1001"), "Omar".into(), start);
    placement.set_score(150);
    assert_eq!(placement.score, SCORE_MAX);
    placement.set_score(-10);
    assert_eq!(placement.score, 0);
}
