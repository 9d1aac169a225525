//! Book Lifecycle Manager
//!
//! Tracks the single current book through its cycle:
//! no current book → active → back to no current book (finished).
//!
//! Selecting a book consumes the whole suggestion list; finishing a book
//! appends it to the reading history and credits every registered member
//! with one completed book.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ClubError, Result};
use crate::state::{ClubState, CurrentBook, FinishedBook};

/// Current book together with derived reading duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentBookView {
    pub book: CurrentBook,

    /// Whole days since the club started reading
    pub days_reading: i64,
}

impl ClubState {
    /// Select the voting winner as the club's current book
    ///
    /// Builds the current book from [`winner`](ClubState::winner) and
    /// clears every pending suggestion (no partial carry-over). If a book
    /// is already active it is silently replaced; no guard exists for
    /// that transition.
    pub fn select_current(&mut self, now: DateTime<Utc>) -> Result<CurrentBook> {
        let winner = self.winner()?;
        let book = CurrentBook::from_suggestion(&winner, now);

        if let Some(previous) = &self.current_book {
            tracing::warn!(
                replaced = %previous.title_author,
                selected = %book.title_author,
                "replacing an active book"
            );
        }

        self.current_book = Some(book.clone());
        self.suggestions.clear();

        tracing::info!(title = %book.title_author, "current book selected");
        Ok(book)
    }

    /// Finish the current book
    ///
    /// Stamps the end timestamp, appends the snapshot to the reading
    /// history, empties the current-book slot and increments every
    /// registered member's books-read count by 1 (club-wide credit, not
    /// just confirmed participants).
    pub fn finish_book(&mut self, now: DateTime<Utc>) -> Result<FinishedBook> {
        let book = self.current_book.take().ok_or(ClubError::NoActiveBook)?;
        let finished = book.into_finished(now);

        self.history.push(finished.clone());
        for member in &mut self.members {
            member.books_read += 1;
        }

        tracing::info!(
            title = %finished.book.title_author,
            total_read = self.history.len(),
            "book finished"
        );
        Ok(finished)
    }

    /// Describe the current book with its derived reading duration
    pub fn current_book_view(&self, now: DateTime<Utc>) -> Result<CurrentBookView> {
        let book = self.current_book.clone().ok_or(ClubError::NoActiveBook)?;
        let days_reading = now.signed_duration_since(book.started_at).num_days();

        Ok(CurrentBookView { book, days_reading })
    }

    /// The reading history, oldest first
    pub fn finished_books(&self) -> &[FinishedBook] {
        &self.history
    }
}
