//! Data model for the club document
//!
//! Plain serde types with chrono timestamps. All collections default to
//! empty and both singleton slots (current book, meeting) default to None,
//! so a freshly-initialized state is valid without any persisted document.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered club member
///
/// Created on first interaction, never deleted. The display name is fixed
/// at registration time; only the counters change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Stable external user id (immutable once registered)
    pub id: String,

    /// Display name captured at registration
    pub name: String,

    /// Books finished while a member (club-wide completion credit)
    pub books_read: u64,

    /// Questions asked plus quotes shared
    pub participations: u64,

    /// Registration timestamp
    pub joined_at: DateTime<Utc>,
}

/// A proposed book awaiting votes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Free-text "Title - Author" string as proposed
    pub title_author: String,

    /// Display name of the proposer
    pub suggested_by: String,

    /// External id of the proposer
    pub suggested_by_id: String,

    /// When the suggestion was made
    pub suggested_at: DateTime<Utc>,

    /// Accumulated votes (no per-member ledger; repeat voting is allowed)
    pub votes: u64,
}

/// The single book the club is actively reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentBook {
    pub title_author: String,
    pub suggested_by: String,
    pub suggested_by_id: String,

    /// Votes the winning suggestion had when selected
    pub votes: u64,

    /// When the club started reading
    pub started_at: DateTime<Utc>,

    /// Per-member reading progress, keyed by member id (reserved; the core
    /// only guarantees the map exists)
    #[serde(default)]
    pub progress: BTreeMap<String, u32>,
}

impl CurrentBook {
    /// Build a current book from the winning suggestion
    pub fn from_suggestion(suggestion: &Suggestion, started_at: DateTime<Utc>) -> Self {
        Self {
            title_author: suggestion.title_author.clone(),
            suggested_by: suggestion.suggested_by.clone(),
            suggested_by_id: suggestion.suggested_by_id.clone(),
            votes: suggestion.votes,
            started_at,
            progress: BTreeMap::new(),
        }
    }

    /// Snapshot this book into a history entry
    pub fn into_finished(self, finished_at: DateTime<Utc>) -> FinishedBook {
        FinishedBook {
            book: self,
            finished_at,
        }
    }
}

/// A completed book in the reading history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedBook {
    /// Snapshot of the book as it was while being read
    #[serde(flatten)]
    pub book: CurrentBook,

    /// When the club finished it
    pub finished_at: DateTime<Utc>,
}

/// The single scheduled meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Meeting date and time (past dates are not rejected)
    pub scheduled_for: DateTime<Utc>,

    /// Display names of members who confirmed attendance, in confirmation
    /// order, no duplicates
    #[serde(default)]
    pub confirmations: Vec<String>,
}

impl Meeting {
    pub fn new(scheduled_for: DateTime<Utc>) -> Self {
        Self {
            scheduled_for,
            confirmations: Vec::new(),
        }
    }
}

/// A discussion question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,

    /// Display name of the asker
    pub author: String,

    pub asked_at: DateTime<Utc>,

    /// False until marked resolved
    #[serde(default)]
    pub resolved: bool,
}

/// A shared quote from the book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,

    /// Display name of the sharer
    pub shared_by: String,

    pub shared_at: DateTime<Utc>,
}

/// The complete club dataset
///
/// One instance per club, persisted as a single JSON document. Members are
/// kept in registration order so ranking ties resolve by seniority; the
/// other sequences are in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubState {
    /// Pending suggestions, in proposal order
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,

    /// The book currently being read, if any
    #[serde(default)]
    pub current_book: Option<CurrentBook>,

    /// Completed books, append-only
    #[serde(default)]
    pub history: Vec<FinishedBook>,

    /// The scheduled meeting, if any
    #[serde(default)]
    pub meeting: Option<Meeting>,

    /// Registered members, in registration order
    #[serde(default)]
    pub members: Vec<Member>,

    /// Discussion questions, append-only
    #[serde(default)]
    pub questions: Vec<Question>,

    /// Shared quotes, append-only
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

impl ClubState {
    /// Create an empty state (no books, no meeting, no members)
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a member by external id
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Look up a member by external id, mutably
    pub fn member_mut(&mut self, id: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }
}
