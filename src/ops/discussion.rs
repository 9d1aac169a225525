//! Discussion Ledger
//!
//! Append-only question and quote lists. Questions carry a resolved flag
//! that starts false; quotes are immutable once shared. Posting either one
//! counts as a participation for the acting member.

use chrono::{DateTime, Utc};

use crate::error::{ClubError, Result};
use crate::state::{ClubState, Question, Quote};

impl ClubState {
    /// Add a discussion question
    pub fn add_question(
        &mut self,
        author_id: &str,
        author_name: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Question> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClubError::Validation("a question needs text".to_string()));
        }

        let question = Question {
            text: text.to_string(),
            author: author_name.to_string(),
            asked_at: now,
            resolved: false,
        };

        self.questions.push(question.clone());
        self.record_participation(author_id);

        tracing::debug!(author = author_name, "question added");
        Ok(question)
    }

    /// Share a quote from the book
    pub fn add_quote(
        &mut self,
        sharer_id: &str,
        sharer_name: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Quote> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClubError::Validation("a quote needs text".to_string()));
        }

        let quote = Quote {
            text: text.to_string(),
            shared_by: sharer_name.to_string(),
            shared_at: now,
        };

        self.quotes.push(quote.clone());
        self.record_participation(sharer_id);

        tracing::debug!(sharer = sharer_name, "quote shared");
        Ok(quote)
    }

    /// Mark the question at the given position as resolved
    ///
    /// The position is 0-based over the full question list (resolved
    /// questions included).
    pub fn resolve_question(&mut self, index: usize) -> Result<Question> {
        let question = self.questions.get_mut(index).ok_or_else(|| {
            ClubError::NotFound(format!("no question at position {}", index))
        })?;

        question.resolved = true;
        Ok(question.clone())
    }

    /// Unresolved questions, in the order they were asked
    pub fn pending_questions(&self) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| !q.resolved)
            .cloned()
            .collect()
    }

    /// The last `limit` quotes, most recent first
    ///
    /// Returns everything if fewer than `limit` quotes exist.
    pub fn recent_quotes(&self, limit: usize) -> Vec<Quote> {
        self.quotes.iter().rev().take(limit).cloned().collect()
    }

    /// Bump the participation counter for a registered member
    ///
    /// Unregistered ids skip the bump: only the start command registers
    /// members, so entries can arrive from ids the club has never seen.
    fn record_participation(&mut self, member_id: &str) {
        if let Some(member) = self.member_mut(member_id) {
            member.participations += 1;
        }
    }
}
