//! Engine Module
//!
//! The core club engine that coordinates state, operations and persistence.
//!
//! ## Responsibilities
//! - Load the club state at startup, hold it for the process lifetime
//! - Route dispatcher commands to the state-transition ops
//! - Persist the full document before reporting success
//! - Roll back in-memory changes when the save fails
//!
//! ## Concurrency Model: Single Logical Writer
//!
//! One mutex guards the whole club state plus its persistence write. The
//! lock is taken at command entry and released after the save completes or
//! fails, so no two commands interleave their read-modify-write sequence.
//! Reads go through the same lock; commands are small and bounded, and the
//! only external I/O is the synchronous document save.

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::ops::Confirmation;
use crate::protocol::{Actor, Command, Reply};
use crate::state::ClubState;
use crate::store::FileStore;

/// The club engine
pub struct ClubEngine {
    /// Engine configuration
    config: Config,

    /// File-backed store for the club document
    store: FileStore,

    /// The club dataset, guarded for the duration of each command
    state: Mutex<ClubState>,
}

impl ClubEngine {
    /// Open or create an engine with the given config
    ///
    /// On startup:
    /// 1. Open/create the data directory
    /// 2. Load the last-saved document (or start empty)
    /// 3. Ready to serve commands
    pub fn open(config: Config) -> Result<Self> {
        let store = FileStore::open(&config.data_dir)?;
        let state = store.load()?;

        tracing::info!(
            members = state.members.len(),
            suggestions = state.suggestions.len(),
            finished = state.history.len(),
            "club state loaded"
        );

        Ok(Self {
            config,
            store,
            state: Mutex::new(state),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Execute a command on behalf of an actor
    ///
    /// Holds the state lock for the whole read-modify-write-save sequence.
    /// A mutating command only reports success once the document is on
    /// disk; if the save fails, the in-memory state is restored to the
    /// pre-command snapshot so memory and disk never diverge.
    pub fn execute(&self, actor: &Actor, command: Command) -> Result<Reply> {
        let now = Utc::now();
        let mut state = self.state.lock();
        let snapshot = state.clone();

        match self.apply(&mut state, actor, command, now) {
            Ok((reply, persist)) => {
                if persist {
                    if let Err(err) = self.store.save(&state) {
                        *state = snapshot;
                        tracing::error!(error = %err, "save failed, command rolled back");
                        return Err(err);
                    }
                }
                Ok(reply)
            }
            Err(err) => {
                // Failed ops must leave no partial mutation behind
                *state = snapshot;
                Err(err)
            }
        }
    }

    /// Final save at shutdown
    pub fn close(self) -> Result<()> {
        let state = self.state.lock();
        self.store.save(&state)
    }

    /// Route a command to its operation
    ///
    /// Returns the reply plus whether the command mutated state and needs
    /// a save before it can be reported as committed.
    fn apply(
        &self,
        state: &mut ClubState,
        actor: &Actor,
        command: Command,
        now: DateTime<Utc>,
    ) -> Result<(Reply, bool)> {
        match command {
            // -----------------------------------------------------------------
            // Membership
            // -----------------------------------------------------------------
            Command::Start => {
                let known = state.member(&actor.id).is_some();
                let member = state.ensure_member(&actor.id, &actor.name, now);
                Ok((Reply::Registered(member), !known))
            }
            Command::Stats => {
                let stats = state.stats_for(&actor.id, now)?;
                Ok((Reply::Stats(stats), false))
            }
            Command::Ranking { limit } => {
                let limit = limit.unwrap_or(self.config.ranking_limit);
                Ok((Reply::Ranking(state.ranking(limit)), false))
            }

            // -----------------------------------------------------------------
            // Suggestions & Voting
            // -----------------------------------------------------------------
            Command::Propose { text } => {
                let suggestion = state.propose(&actor.id, &actor.name, &text, now)?;
                let total = state.suggestions.len();
                Ok((Reply::Suggested { suggestion, total }, true))
            }
            Command::CastVote { index } => {
                let suggestion = state.cast_vote(index)?;
                Ok((Reply::VoteCast(suggestion), true))
            }
            Command::Tally => Ok((Reply::Tally(state.tally()), false)),
            Command::Winner => Ok((Reply::Winner(state.winner()?), false)),

            // -----------------------------------------------------------------
            // Book Lifecycle
            // -----------------------------------------------------------------
            Command::SelectCurrent => {
                let book = state.select_current(now)?;
                Ok((Reply::BookSelected(book), true))
            }
            Command::FinishBook => {
                let book = state.finish_book(now)?;
                let total_read = state.history.len();
                Ok((Reply::BookFinished { book, total_read }, true))
            }
            Command::CurrentBook => {
                let view = state.current_book_view(now)?;
                Ok((Reply::CurrentBook(view), false))
            }
            Command::History => Ok((Reply::History(state.finished_books().to_vec()), false)),

            // -----------------------------------------------------------------
            // Meetings
            // -----------------------------------------------------------------
            Command::ScheduleMeeting { when } => {
                let meeting = state.schedule_meeting(when);
                Ok((Reply::MeetingScheduled(meeting), true))
            }
            Command::Confirm => {
                let outcome = state.confirm_attendance(&actor.name)?;
                // Re-confirming changes nothing, so nothing to save
                let persist = matches!(outcome, Confirmation::New { .. });
                Ok((Reply::Confirmed(outcome), persist))
            }
            Command::NextMeeting => {
                let view = state.meeting_view(now)?;
                Ok((Reply::NextMeeting(view), false))
            }

            // -----------------------------------------------------------------
            // Discussion
            // -----------------------------------------------------------------
            Command::AddQuestion { text } => {
                let question = state.add_question(&actor.id, &actor.name, &text, now)?;
                Ok((Reply::QuestionAdded(question), true))
            }
            Command::ResolveQuestion { index } => {
                let question = state.resolve_question(index)?;
                Ok((Reply::QuestionResolved(question), true))
            }
            Command::PendingQuestions => {
                Ok((Reply::PendingQuestions(state.pending_questions()), false))
            }
            Command::AddQuote { text } => {
                let quote = state.add_quote(&actor.id, &actor.name, &text, now)?;
                Ok((Reply::QuoteAdded(quote), true))
            }
            Command::RecentQuotes { limit } => {
                let limit = limit.unwrap_or(self.config.recent_quotes_limit);
                let quotes = state.recent_quotes(limit);
                let total = state.quotes.len();
                Ok((Reply::RecentQuotes { quotes, total }, false))
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        self.store.data_dir()
    }

    /// Get the document path
    pub fn document_path(&self) -> &Path {
        self.store.document_path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clone the current in-memory state
    pub fn snapshot(&self) -> ClubState {
        self.state.lock().clone()
    }
}
