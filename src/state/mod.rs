//! Club State Module
//!
//! In-memory representation of the entire club dataset.
//!
//! ## Responsibilities
//! - Hold every club entity: suggestions, current book, history,
//!   meeting, members, questions, quotes
//! - Serialize to/from the single persisted JSON document
//! - Provide a fully-specified schema: every field has an explicit
//!   default, no optional-key branching
//!
//! ## Invariants
//! - At most one current book, at most one scheduled meeting
//! - Selecting a current book always empties the suggestion list
//! - Member ids are immutable once registered; members are never deleted
//! - History, questions and quotes are append-only

mod model;

pub use model::{
    ClubState, CurrentBook, FinishedBook, Meeting, Member, Question, Quote, Suggestion,
};
