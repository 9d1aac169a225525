//! Ops Module
//!
//! State-transition rules for the club dataset, one file per component.
//!
//! ## Responsibilities
//! - Suggestion & voting lifecycle (propose, vote, tally, winner)
//! - Book lifecycle (select, finish, describe, history)
//! - Meeting scheduling and attendance confirmation
//! - Discussion ledger (questions and quotes, append-only)
//! - Membership registry and derived statistics
//!
//! Every operation mutates (or reads) a [`ClubState`](crate::state::ClubState)
//! in memory only; persisting the result is the engine's job. Operations
//! never swallow errors and never decrement a counter.

mod books;
mod discussion;
mod meetings;
mod members;
mod voting;

pub use books::CurrentBookView;
pub use meetings::{Confirmation, MeetingView};
pub use members::MemberStats;
