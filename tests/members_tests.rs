//! Tests for the Membership & Stats Registry
//!
//! These tests verify:
//! - Registration on first sight with a fixed display name
//! - Derived member statistics
//! - Ranking order, tie-breaking and truncation

use bookclub::state::ClubState;
use bookclub::ClubError;
use chrono::{DateTime, TimeZone, Utc};

// =============================================================================
// Helper Functions
// =============================================================================

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, d, 9, 0, 0).unwrap()
}

// =============================================================================
// Registration Tests
// =============================================================================

#[test]
fn test_ensure_member_creates_on_first_sight() {
    let mut state = ClubState::new();

    let member = state.ensure_member("1", "Ana", day(1));

    assert_eq!(member.id, "1");
    assert_eq!(member.name, "Ana");
    assert_eq!(member.books_read, 0);
    assert_eq!(member.participations, 0);
    assert_eq!(member.joined_at, day(1));
    assert_eq!(state.members.len(), 1);
}

#[test]
fn test_ensure_member_returns_existing_unchanged() {
    let mut state = ClubState::new();
    state.ensure_member("1", "Ana", day(1));

    // A later sighting with a new display name does not rename the record
    let member = state.ensure_member("1", "Ana María", day(5));

    assert_eq!(member.name, "Ana");
    assert_eq!(member.joined_at, day(1));
    assert_eq!(state.members.len(), 1);
}

// =============================================================================
// Stats Tests
// =============================================================================

#[test]
fn test_stats_for_unregistered_member() {
    let state = ClubState::new();

    let err = state.stats_for("1", day(1)).unwrap_err();
    assert!(matches!(err, ClubError::NotFound(_)));
}

#[test]
fn test_stats_for_derives_days_as_member() {
    let mut state = ClubState::new();
    state.ensure_member("1", "Ana", day(1));

    let stats = state.stats_for("1", day(11)).unwrap();
    assert_eq!(stats.days_member, 10);
    assert_eq!(stats.member.name, "Ana");
}

// =============================================================================
// Ranking Tests
// =============================================================================

fn state_with_read_counts(counts: &[(&str, &str, u64)]) -> ClubState {
    let mut state = ClubState::new();
    for (id, name, books) in counts {
        state.ensure_member(id, name, day(1));
        state.member_mut(id).unwrap().books_read = *books;
    }
    state
}

#[test]
fn test_ranking_sorts_by_books_read_descending() {
    let state = state_with_read_counts(&[("1", "Ana", 2), ("2", "Luis", 5), ("3", "Marta", 3)]);

    let ranked = state.ranking(10);
    let names: Vec<&str> = ranked.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Luis", "Marta", "Ana"]);
}

#[test]
fn test_ranking_ties_keep_registration_order() {
    let state = state_with_read_counts(&[("1", "Ana", 3), ("2", "Luis", 3), ("3", "Marta", 3)]);

    let ranked = state.ranking(10);
    let names: Vec<&str> = ranked.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Luis", "Marta"]);
}

#[test]
fn test_ranking_truncates_to_limit() {
    let mut state = ClubState::new();
    for i in 0..15 {
        state.ensure_member(&i.to_string(), &format!("Member {}", i), day(1));
    }

    assert_eq!(state.ranking(10).len(), 10);
    assert_eq!(state.ranking(3).len(), 3);
}

#[test]
fn test_ranking_on_empty_club() {
    let state = ClubState::new();
    assert!(state.ranking(10).is_empty());
}
