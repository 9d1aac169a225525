//! Reply definitions
//!
//! Typed success payloads the dispatcher renders into user-facing text.

use serde::Serialize;

use crate::ops::{Confirmation, CurrentBookView, MeetingView, MemberStats};
use crate::state::{CurrentBook, FinishedBook, Meeting, Member, Question, Quote, Suggestion};

/// A successful command result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Reply {
    /// The acting member, freshly registered or already known
    Registered(Member),

    /// A stored suggestion plus the new list size
    Suggested {
        suggestion: Suggestion,
        total: usize,
    },

    /// The suggestion after its vote count was bumped
    VoteCast(Suggestion),

    /// Suggestions ranked by votes, descending
    Tally(Vec<Suggestion>),

    /// The leading suggestion
    Winner(Suggestion),

    /// The newly selected current book
    BookSelected(CurrentBook),

    /// The finished book plus the new history size
    BookFinished {
        book: FinishedBook,
        total_read: usize,
    },

    /// The current book with derived reading duration
    CurrentBook(CurrentBookView),

    /// The reading history, oldest first
    History(Vec<FinishedBook>),

    /// The newly scheduled meeting
    MeetingScheduled(Meeting),

    /// Outcome of an attendance confirmation
    Confirmed(Confirmation),

    /// The scheduled meeting with derived countdown
    NextMeeting(MeetingView),

    /// The stored question
    QuestionAdded(Question),

    /// The question after being marked resolved
    QuestionResolved(Question),

    /// Unresolved questions, in asking order
    PendingQuestions(Vec<Question>),

    /// The stored quote
    QuoteAdded(Quote),

    /// Latest quotes (most recent first) plus the all-time total
    RecentQuotes { quotes: Vec<Quote>, total: usize },

    /// The acting member's statistics
    Stats(MemberStats),

    /// Members ranked by books read, descending
    Ranking(Vec<Member>),
}
