//! Command definitions
//!
//! Represents club commands issued through the dispatcher.

use chrono::{DateTime, Utc};

/// The member a command is acting on behalf of
///
/// The id is the stable external identity; the name is whatever display
/// name the chat surface reported for this interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A parsed club command
///
/// Admin gating (who may select books, finish them or schedule meetings)
/// is the dispatcher's call; every variant here executes unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register the acting member (first interaction)
    Start,

    /// Propose a book: free-text "Title - Author"
    Propose { text: String },

    /// Vote for the suggestion at a 0-based position
    CastVote { index: usize },

    /// Current vote ranking
    Tally,

    /// The leading suggestion
    Winner,

    /// Make the voting winner the current book
    SelectCurrent,

    /// Finish the current book
    FinishBook,

    /// Describe the current book
    CurrentBook,

    /// The reading history
    History,

    /// Schedule (or replace) the club meeting
    ScheduleMeeting { when: DateTime<Utc> },

    /// Confirm attendance for the scheduled meeting
    Confirm,

    /// Describe the scheduled meeting
    NextMeeting,

    /// Add a discussion question
    AddQuestion { text: String },

    /// Mark the question at a 0-based position as resolved
    ResolveQuestion { index: usize },

    /// Unresolved questions
    PendingQuestions,

    /// Share a quote from the book
    AddQuote { text: String },

    /// The latest quotes, most recent first (None = configured default)
    RecentQuotes { limit: Option<usize> },

    /// The acting member's statistics
    Stats,

    /// Club ranking by books read (None = configured default)
    Ranking { limit: Option<usize> },
}
