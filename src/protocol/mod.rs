//! Protocol Module
//!
//! The operation interface between the external command dispatcher and the
//! club engine.
//!
//! ## Shape
//! One [`Command`] variant per club command, one typed [`Reply`] payload
//! per success case. The dispatcher owns everything around this seam:
//! parsing raw user input (including date strings), deciding who may run
//! admin commands, and rendering replies into user-facing text. The core
//! enforces no authorization.

mod command;
mod reply;

pub use command::{Actor, Command};
pub use reply::Reply;
