//! Tests for the FileStore
//!
//! These tests verify:
//! - First-run load yields an empty state
//! - Full-document round trips are deep-equal
//! - Saves atomically replace the previous document
//! - Corrupt documents surface as persistence errors

use std::fs;

use bookclub::state::ClubState;
use bookclub::store::FileStore;
use bookclub::ClubError;
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, d, 10, 30, 0).unwrap()
}

/// A state exercising every field of the document
fn populated_state() -> ClubState {
    let mut state = ClubState::new();

    state.ensure_member("1", "Ana", day(1));
    state.ensure_member("2", "Luis", day(2));

    state.propose("1", "Ana", "Book A", day(3)).unwrap();
    state.propose("2", "Luis", "Book B", day(3)).unwrap();
    state.cast_vote(0).unwrap();

    state.select_current(day(4)).unwrap();
    state.finish_book(day(10)).unwrap();

    state.propose("2", "Luis", "Book C", day(11)).unwrap();

    state.schedule_meeting(day(20));
    state.confirm_attendance("Ana").unwrap();

    state.add_question("1", "Ana", "Thoughts on part two?", day(12)).unwrap();
    state.add_question("2", "Luis", "Favorite character?", day(13)).unwrap();
    state.resolve_question(0).unwrap();

    state.add_quote("1", "Ana", "So it goes.", day(14)).unwrap();
    state.add_quote("2", "Luis", "Stay gold.", day(15)).unwrap();

    state
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_without_document_returns_empty_state() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();

    let state = store.load().unwrap();
    assert_eq!(state, ClubState::new());
}

#[test]
fn test_open_creates_data_directory() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("club");

    let store = FileStore::open(&data_dir).unwrap();

    assert!(data_dir.exists());
    assert_eq!(store.data_dir(), data_dir);
}

#[test]
fn test_load_corrupt_document_is_a_persistence_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();
    fs::write(store.document_path(), "{not valid json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, ClubError::Persistence(_)));
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_empty_state() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();

    let state = ClubState::new();
    store.save(&state).unwrap();

    assert_eq!(store.load().unwrap(), state);
}

#[test]
fn test_round_trip_populated_state() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();

    let state = populated_state();
    store.save(&state).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn test_save_overwrites_previous_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();

    store.save(&populated_state()).unwrap();

    let mut second = ClubState::new();
    second.ensure_member("9", "Nuria", day(1));
    store.save(&second).unwrap();

    // Last write wins: nothing from the first document survives
    let loaded = store.load().unwrap();
    assert_eq!(loaded, second);
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();

    store.save(&populated_state()).unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
