//! # bookclub
//!
//! Command-driven state store for a reading club:
//! - Book suggestions and open voting
//! - Single current book with reading history
//! - One scheduled meeting with attendance confirmations
//! - Append-only discussion questions and quotes
//! - Member profiles with derived statistics
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Command Dispatcher                          │
//! │        (chat transport / CLI — out of core scope)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Reply
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Club Engine                              │
//! │        (one mutex: read → mutate → save → reply)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Club State │          │  File Store │
//!   │   (ops)     │          │ (club.json) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod state;
pub mod store;
pub mod ops;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use engine::ClubEngine;
pub use error::{ClubError, Result};
pub use protocol::{Actor, Command, Reply};
pub use state::ClubState;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
