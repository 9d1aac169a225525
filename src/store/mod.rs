//! Store Module
//!
//! Persistent storage for the club document.
//!
//! ## Responsibilities
//! - Load the last-saved club state, or a fresh empty state on first run
//! - Rewrite the full document atomically on every save
//! - Propagate every persistence failure to the caller (never swallowed)
//!
//! ## Document Format
//! One pretty-printed JSON file (`club.json`) holding the entire
//! [`ClubState`](crate::state::ClubState). There are no partial or
//! incremental writes: last write wins on a single file.

mod file;

pub use file::FileStore;
