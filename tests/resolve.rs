// tests/resolve.rs
use bin_lookup::{Controller, Hit, LookupError, Table, resolve};
use bin_lookup::config::options::AppOptions;
use bin_lookup::resolver::describe;

fn sample() -> Table {
    Table::from_pairs([("ABC123", "Bin 4"), ("XYZ999", "")])
}

#[test]
fn blank_queries_are_empty_query() {
    let t = sample();
    assert_eq!(resolve(&t, ""), Err(LookupError::EmptyQuery));
    assert_eq!(resolve(&t, "   "), Err(LookupError::EmptyQuery));
    // Empty wins over "not loaded"
    assert_eq!(resolve(&Table::default(), " "), Err(LookupError::EmptyQuery));
}

#[test]
fn case_insensitive_hit() {
    let hit = resolve(&sample(), "abc123").unwrap();
    assert_eq!(hit, Hit { id: "abc123".into(), value: "Bin 4".into() });
    assert_eq!(hit.to_string(), "abc123 → Bin 4");
}

#[test]
fn scanned_code_with_prefix_hits() {
    assert_eq!(resolve(&sample(), "]Q1abc123\r\n").unwrap().value, "Bin 4");
}

#[test]
fn empty_value_and_missing_id_are_not_found() {
    let t = sample();
    assert_eq!(resolve(&t, "xyz999"), Err(LookupError::NotFound { id: "xyz999".into() }));
    assert_eq!(resolve(&t, "NOPE"), Err(LookupError::NotFound { id: "NOPE".into() }));
}

#[test]
fn empty_table_is_not_ready() {
    assert_eq!(resolve(&Table::default(), "ABC123"), Err(LookupError::DataNotReady));
}

#[test]
fn first_duplicate_wins() {
    let t = Table::from_pairs([("A1", "first"), ("A1", "second")]);
    assert_eq!(resolve(&t, "a1").unwrap().value, "first");
}

#[test]
fn blank_id_rows_never_match() {
    let t = Table::from_pairs([("", "orphan"), ("B2", "x")]);
    assert_eq!(resolve(&t, "  "), Err(LookupError::EmptyQuery));
    assert_eq!(resolve(&t, "b2").unwrap().value, "x");
}

#[test]
fn user_visible_messages() {
    assert_eq!(describe(&Err(LookupError::EmptyQuery)), "Please enter or scan an ID.");
    assert_eq!(describe(&Err(LookupError::DataNotReady)), "Data not loaded yet. Please wait or refresh.");
    assert_eq!(describe(&Err(LookupError::NotFound { id: "X".into() })), "ID not found in data.");
}

#[test]
fn controller_before_load_is_not_ready() {
    let c = Controller::new(AppOptions::default());
    assert!(!c.is_ready());
    assert_eq!(c.submit("ABC123"), Err(LookupError::DataNotReady));
    assert_eq!(c.submit(""), Err(LookupError::EmptyQuery));
}
