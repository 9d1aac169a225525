//! Suggestion & Voting Engine
//!
//! Manages the lifecycle of book suggestions from proposal through tally
//! to selection of a winner.
//!
//! There is deliberately no per-member vote ledger: a member may vote any
//! number of times, including repeatedly for the same suggestion. The
//! winner is the first suggestion (in proposal order) holding the maximum
//! vote count.

use chrono::{DateTime, Utc};

use crate::error::{ClubError, Result};
use crate::state::{ClubState, Suggestion};

impl ClubState {
    /// Propose a book for the club
    ///
    /// Appends a suggestion with zero votes. Duplicate titles are
    /// permitted; only blank text is rejected.
    pub fn propose(
        &mut self,
        proposer_id: &str,
        proposer_name: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Suggestion> {
        let title_author = text.trim();
        if title_author.is_empty() {
            return Err(ClubError::Validation(
                "a suggestion needs a title".to_string(),
            ));
        }

        let suggestion = Suggestion {
            title_author: title_author.to_string(),
            suggested_by: proposer_name.to_string(),
            suggested_by_id: proposer_id.to_string(),
            suggested_at: now,
            votes: 0,
        };

        self.suggestions.push(suggestion.clone());
        tracing::debug!(title = %suggestion.title_author, total = self.suggestions.len(), "book suggested");
        Ok(suggestion)
    }

    /// Cast one vote for the suggestion at the given position
    ///
    /// Increments the count by exactly 1 and returns the updated
    /// suggestion. The position is 0-based over the current proposal order.
    pub fn cast_vote(&mut self, index: usize) -> Result<Suggestion> {
        let suggestion = self.suggestions.get_mut(index).ok_or_else(|| {
            ClubError::NotFound(format!("no suggestion at position {}", index))
        })?;

        suggestion.votes += 1;
        tracing::debug!(title = %suggestion.title_author, votes = suggestion.votes, "vote cast");
        Ok(suggestion.clone())
    }

    /// Rank suggestions by vote count, descending
    ///
    /// The sort is stable: ties keep their proposal order.
    pub fn tally(&self) -> Vec<Suggestion> {
        let mut ranked = self.suggestions.clone();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked
    }

    /// The single suggestion with the most votes
    ///
    /// Ties resolve to the earliest proposal: the scan keeps the first
    /// suggestion and only replaces it on a strictly greater count.
    pub fn winner(&self) -> Result<Suggestion> {
        let mut best: Option<&Suggestion> = None;

        for suggestion in &self.suggestions {
            match best {
                Some(current) if suggestion.votes > current.votes => best = Some(suggestion),
                None => best = Some(suggestion),
                _ => {}
            }
        }

        best.cloned().ok_or_else(|| {
            ClubError::EmptyState("no suggestions to pick a winner from".to_string())
        })
    }
}
