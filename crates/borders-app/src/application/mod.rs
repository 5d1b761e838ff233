//! Application layer use cases.
//!
//! Use cases here orchestrate `borders_core` domain objects to fulfil a
//! player goal.  They contain no file-system, terminal or network access.
//!
//! - **`session`**   – The single entry point every state change goes
//!   through: start/reset a round, guess, hints, search and zoom.
//! - **`map_scene`** – Turns the current round into a framed set of
//!   projected country shapes ready for rendering.

pub mod map_scene;
pub mod session;
