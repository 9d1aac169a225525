//! Tests for the Discussion Ledger
//!
//! These tests verify:
//! - Append-only questions and quotes with validation
//! - Pending-question filtering and resolution
//! - Recent-quote windowing (most recent first)
//! - Participation counting for registered members

use bookclub::state::ClubState;
use bookclub::ClubError;
use chrono::{DateTime, TimeZone, Utc};

// =============================================================================
// Helper Functions
// =============================================================================

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, d, 21, 0, 0).unwrap()
}

// =============================================================================
// Question Tests
// =============================================================================

#[test]
fn test_add_question_defaults_to_unresolved() {
    let mut state = ClubState::new();

    let question = state
        .add_question("1", "Ana", "What about the ending?", day(1))
        .unwrap();

    assert_eq!(question.text, "What about the ending?");
    assert_eq!(question.author, "Ana");
    assert!(!question.resolved);
    assert_eq!(state.questions.len(), 1);
}

#[test]
fn test_add_question_rejects_blank_text() {
    let mut state = ClubState::new();

    let err = state.add_question("1", "Ana", "  ", day(1)).unwrap_err();
    assert!(matches!(err, ClubError::Validation(_)));
    assert!(state.questions.is_empty());
}

#[test]
fn test_pending_questions_filters_resolved_in_order() {
    let mut state = ClubState::new();
    state.add_question("1", "Ana", "First?", day(1)).unwrap();
    state.add_question("2", "Luis", "Second?", day(2)).unwrap();
    state.add_question("1", "Ana", "Third?", day(3)).unwrap();

    state.resolve_question(1).unwrap();

    let pending = state.pending_questions();
    let texts: Vec<&str> = pending.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["First?", "Third?"]);
}

#[test]
fn test_resolve_question_out_of_bounds() {
    let mut state = ClubState::new();

    let err = state.resolve_question(0).unwrap_err();
    assert!(matches!(err, ClubError::NotFound(_)));
}

#[test]
fn test_resolve_question_flips_flag() {
    let mut state = ClubState::new();
    state.add_question("1", "Ana", "Why?", day(1)).unwrap();

    let resolved = state.resolve_question(0).unwrap();
    assert!(resolved.resolved);
    assert!(state.questions[0].resolved);
}

// =============================================================================
// Quote Tests
// =============================================================================

#[test]
fn test_add_quote_trims_and_stores() {
    let mut state = ClubState::new();

    let quote = state
        .add_quote("1", "Ana", "  So it goes.  ", day(1))
        .unwrap();

    assert_eq!(quote.text, "So it goes.");
    assert_eq!(quote.shared_by, "Ana");
    assert_eq!(state.quotes.len(), 1);
}

#[test]
fn test_add_quote_rejects_blank_text() {
    let mut state = ClubState::new();

    let err = state.add_quote("1", "Ana", "", day(1)).unwrap_err();
    assert!(matches!(err, ClubError::Validation(_)));
}

#[test]
fn test_recent_quotes_most_recent_first() {
    let mut state = ClubState::new();
    for i in 1..=7 {
        state
            .add_quote("1", "Ana", &format!("Quote {}", i), day(i))
            .unwrap();
    }

    let recent = state.recent_quotes(5);
    let texts: Vec<&str> = recent.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Quote 7", "Quote 6", "Quote 5", "Quote 4", "Quote 3"]
    );
}

#[test]
fn test_recent_quotes_returns_all_when_fewer_than_limit() {
    let mut state = ClubState::new();
    state.add_quote("1", "Ana", "Only one", day(1)).unwrap();

    let recent = state.recent_quotes(5);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].text, "Only one");
}

// =============================================================================
// Participation Tests
// =============================================================================

#[test]
fn test_questions_and_quotes_count_as_participations() {
    let mut state = ClubState::new();
    state.ensure_member("1", "Ana", day(1));

    state.add_question("1", "Ana", "Why?", day(2)).unwrap();
    state.add_quote("1", "Ana", "Because.", day(3)).unwrap();

    assert_eq!(state.member("1").unwrap().participations, 2);
}

#[test]
fn test_unregistered_author_does_not_panic() {
    let mut state = ClubState::new();

    // The ledger still records the entry; only the counter is skipped
    state.add_question("9", "Drifter", "Hello?", day(1)).unwrap();
    assert_eq!(state.questions.len(), 1);
    assert!(state.member("9").is_none());
}
